use super::Page;
use super::Table;
use super::Throws;
use crate::view::decode_drag;
use crate::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::DragEvent;
use web_sys::Element;
use web_sys::Event;
use web_sys::EventTarget;
use web_sys::HtmlInputElement;

/// Slots the local player may drop onto; opponent slots carry no position.
const DROP_TARGET: &str = ".card-slot[data-position]";

/// Page input wired to the controller.
///
/// Card gestures are delegated from the document, since the hand and the
/// rows are rebuilt on every snapshot and per-element handlers would be
/// lost with them.
pub struct Listeners {
    page: Page,
    table: Table,
}

impl Listeners {
    pub fn new(page: Page, table: Table) -> Self {
        Self { page, table }
    }

    pub fn attach(self) -> anyhow::Result<()> {
        let document: &EventTarget = self.page.document();
        self.on(document, "dragstart", Self::dragstart)?;
        self.on(document, "dragend", Self::dragend)?;
        self.on(document, "dragover", Self::dragover)?;
        self.on(document, "dragleave", Self::dragleave)?;
        self.on(document, "drop", Self::drop)?;
        self.on(document, "dblclick", Self::dblclick)?;
        self.on(&self.page.element(READY_ID)?, "click", Self::ready)?;
        self.on(&self.page.element(CHAT_FORM_ID)?, "submit", Self::chat)?;
        Ok(())
    }

    fn on(
        &self,
        target: &EventTarget,
        name: &'static str,
        handler: fn(&Page, &Table, Event) -> anyhow::Result<()>,
    ) -> anyhow::Result<()> {
        let page = self.page.clone();
        let table = self.table.clone();
        let closure = Closure::wrap(Box::new(move |event: Event| {
            if let Err(e) = handler(&page, &table, event) {
                log::warn!("{} failed: {:#}", name, e);
                table.borrow_mut().surface().toast(&format!("{:#}", e));
            }
        }) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
            .throws(name)?;
        closure.forget();
        Ok(())
    }

    fn dragstart(_: &Page, table: &Table, event: Event) -> anyhow::Result<()> {
        let Some(card) = target(&event).and_then(|t| closest(&t, ".card[draggable]")) else {
            return Ok(());
        };
        let event = event
            .dyn_into::<DragEvent>()
            .map_err(|_| anyhow::anyhow!("dragstart is not a drag event"))?;
        let face = card
            .get_attribute("data-card")
            .ok_or_else(|| anyhow::anyhow!("card without data-card"))?;
        match table.borrow().drag(decode_drag(&face)?) {
            Some(payload) => {
                if let Some(transfer) = event.data_transfer() {
                    transfer.set_data(DRAG_FORMAT, &payload).throws("set drag data")?;
                }
                card.class_list().add_1("dragging").throws("mark dragging")
            }
            None => {
                event.prevent_default();
                Ok(())
            }
        }
    }

    fn dragend(_: &Page, _: &Table, event: Event) -> anyhow::Result<()> {
        match target(&event).and_then(|t| closest(&t, ".card")) {
            Some(card) => card.class_list().remove_1("dragging").throws("unmark dragging"),
            None => Ok(()),
        }
    }

    fn dragover(_: &Page, table: &Table, event: Event) -> anyhow::Result<()> {
        let Some(slot) = target(&event).and_then(|t| closest(&t, DROP_TARGET)) else {
            return Ok(());
        };
        if table.borrow().can_move() {
            event.prevent_default();
            slot.class_list().add_1("drag-over").throws("mark slot")?;
        }
        Ok(())
    }

    fn dragleave(_: &Page, _: &Table, event: Event) -> anyhow::Result<()> {
        match target(&event).and_then(|t| closest(&t, DROP_TARGET)) {
            Some(slot) => slot.class_list().remove_1("drag-over").throws("unmark slot"),
            None => Ok(()),
        }
    }

    fn drop(_: &Page, table: &Table, event: Event) -> anyhow::Result<()> {
        let Some(slot) = target(&event).and_then(|t| closest(&t, DROP_TARGET)) else {
            return Ok(());
        };
        event.prevent_default();
        slot.class_list().remove_1("drag-over").throws("unmark slot")?;
        let event = event
            .dyn_into::<DragEvent>()
            .map_err(|_| anyhow::anyhow!("drop is not a drag event"))?;
        let payload = event
            .data_transfer()
            .ok_or_else(|| anyhow::anyhow!("drop without data"))?
            .get_data(DRAG_FORMAT)
            .throws("read drag data")?;
        let (position, index) = coordinates(&slot)?;
        table.borrow().place(&payload, &position, index).map(|_| ())
    }

    fn dblclick(_: &Page, table: &Table, event: Event) -> anyhow::Result<()> {
        let Some(slot) = target(&event)
            .and_then(|t| closest(&t, ".card[data-removable]"))
            .and_then(|card| closest(&card, DROP_TARGET))
        else {
            return Ok(());
        };
        let (position, index) = coordinates(&slot)?;
        table.borrow().remove(&position, index).map(|_| ())
    }

    fn ready(_: &Page, table: &Table, _: Event) -> anyhow::Result<()> {
        table.borrow().ready()
    }

    fn chat(page: &Page, table: &Table, event: Event) -> anyhow::Result<()> {
        event.prevent_default();
        let input = page
            .element(CHAT_INPUT_ID)?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| anyhow::anyhow!("#{} is not an input", CHAT_INPUT_ID))?;
        if table.borrow().chat(&input.value())? {
            input.set_value("");
        }
        Ok(())
    }
}

fn target(event: &Event) -> Option<Element> {
    event.target().and_then(|t| t.dyn_into::<Element>().ok())
}

fn closest(element: &Element, selector: &str) -> Option<Element> {
    element.closest(selector).ok().flatten()
}

/// Row label and index of a slot, the index being its position among its
/// parent's children.
fn coordinates(slot: &Element) -> anyhow::Result<(String, usize)> {
    let position = slot
        .get_attribute("data-position")
        .ok_or_else(|| anyhow::anyhow!("slot without data-position"))?;
    let parent = slot
        .parent_element()
        .ok_or_else(|| anyhow::anyhow!("detached slot"))?;
    let siblings = parent.children();
    (0..siblings.length())
        .find(|i| siblings.item(*i).as_ref() == Some(slot))
        .map(|i| (position, i as usize))
        .ok_or_else(|| anyhow::anyhow!("slot not among its parent's children"))
}
