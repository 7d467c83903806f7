use super::Page;
use super::Throws;
use crate::animation::*;
use js_sys::Function;
use js_sys::JSON;
use js_sys::Promise;
use js_sys::Reflect;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::Element;
use web_sys::HtmlElement;

/// [`Animator`] on the Web Animations API.
pub struct WebAnimator {
    page: Page,
}

impl WebAnimator {
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    /// Builds the transient element for an effect, attached to its anchor.
    fn mount(&self, effect: &Effect) -> anyhow::Result<HtmlElement> {
        let element = self
            .page
            .create("div", effect.class_name(), effect.text().as_deref())?
            .dyn_into::<HtmlElement>()
            .map_err(|_| anyhow::anyhow!("{} is not an html element", effect))?;
        if let Some((class, text)) = effect.caption() {
            let caption = self.page.create("div", class, Some(&text))?;
            element.append_child(&caption).throws("append caption")?;
        }
        if let Effect::Deal { card, .. } = effect {
            element
                .set_attribute("data-suit", card.suit().symbol())
                .throws("deal suit")?;
        }
        if let Some(origin) = effect.origin() {
            let style = element.style();
            style.set_property("position", "fixed").throws("pin")?;
            style
                .set_property("left", &format!("{}px", origin.x))
                .throws("pin left")?;
            style
                .set_property("top", &format!("{}px", origin.y))
                .throws("pin top")?;
        }
        let anchor: Element = match effect.anchor() {
            Anchor::Body => self.page.body()?.into(),
            Anchor::Row(row) => self.page.element(&row.element())?,
        };
        anchor.append_child(&element).throws("attach effect")?;
        Ok(element)
    }

    async fn run(element: &HtmlElement, effect: &Effect) -> anyhow::Result<()> {
        let keyframes = JSON::parse(&serde_json::to_string(&effect.keyframes())?)
            .throws("encode keyframes")?;
        let timing =
            JSON::parse(&serde_json::to_string(&effect.timing())?).throws("encode timing")?;
        let animation = Reflect::get(element, &JsValue::from_str("animate"))
            .throws("lookup animate")?
            .dyn_into::<Function>()
            .map_err(|_| anyhow::anyhow!("Element.animate unsupported"))?
            .call2(element, &keyframes, &timing)
            .throws("animate")?;
        let finished = Reflect::get(&animation, &JsValue::from_str("finished"))
            .throws("lookup finished")?
            .dyn_into::<Promise>()
            .map_err(|_| anyhow::anyhow!("Animation.finished unsupported"))?;
        JsFuture::from(finished)
            .await
            .map(|_| ())
            .throws("animation")
    }
}

#[async_trait::async_trait(?Send)]
impl Animator for WebAnimator {
    async fn play(&self, effect: &Effect) -> anyhow::Result<()> {
        let element = self.mount(effect)?;
        let result = Self::run(&element, effect).await;
        element.remove();
        result
    }
}
