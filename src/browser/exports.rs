use super::Microtasks;
use super::Page;
use super::WebAnimator;
use crate::animation::*;
use crate::cards::Card;
use crate::protocol::Row;
use js_sys::Promise;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

/// Effect triggers for page scripts.
///
/// Every trigger takes a `queued` flag: `false` plays at once alongside
/// anything else on screen, `true` waits for every effect queued before
/// it. The returned promise resolves when the effect has finished.
#[wasm_bindgen]
pub struct WasmAnimations(Rc<Stage<WebAnimator, Microtasks>>);

#[wasm_bindgen]
impl WasmAnimations {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<WasmAnimations, JsValue> {
        let page = Page::current().map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self(Rc::new(Stage::new(WebAnimator::new(page), Microtasks))))
    }

    #[wasm_bindgen]
    pub fn score(&self, row: &str, points: i32, win: bool, queued: bool) -> Result<Promise, JsValue> {
        let row = Row::try_from(row).map_err(|e| JsValue::from_str(&e))?;
        Ok(self.start(Effect::Score { row, points, win }, queued))
    }

    #[wasm_bindgen]
    pub fn fantasy(&self, queued: bool) -> Promise {
        self.start(Effect::Fantasy, queued)
    }

    #[wasm_bindgen]
    pub fn combination(&self, row: &str, label: &str, queued: bool) -> Result<Promise, JsValue> {
        let row = Row::try_from(row).map_err(|e| JsValue::from_str(&e))?;
        let label = label.to_string();
        Ok(self.start(Effect::Combination { row, label }, queued))
    }

    /// Flies a card (e.g. "10♥") between two viewport points.
    #[wasm_bindgen]
    pub fn deal(
        &self,
        card: &str,
        from_x: f64,
        from_y: f64,
        to_x: f64,
        to_y: f64,
        queued: bool,
    ) -> Result<Promise, JsValue> {
        let card = Card::try_from(card).map_err(|e| JsValue::from_str(&e))?;
        let from = Point::from((from_x, from_y));
        let to = Point::from((to_x, to_y));
        Ok(self.start(Effect::Deal { card, from, to }, queued))
    }

    /// Whether queued effects are still playing.
    #[wasm_bindgen]
    pub fn busy(&self) -> bool {
        self.0.is_busy()
    }
}

impl WasmAnimations {
    fn start(&self, effect: Effect, queued: bool) -> Promise {
        if queued {
            let receipt = self.0.queue(effect);
            return future_to_promise(async move {
                receipt.await;
                Ok(JsValue::UNDEFINED)
            });
        }
        let stage = self.0.clone();
        future_to_promise(async move {
            stage
                .play(effect)
                .await
                .map(|()| JsValue::UNDEFINED)
                .map_err(|e| JsValue::from_str(&format!("{:#}", e)))
        })
    }
}
