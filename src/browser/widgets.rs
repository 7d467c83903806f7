use super::Page;
use super::Throws;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use web_sys::Event;
use web_sys::HtmlElement;

/// Gap between a tooltip and the element it describes, in pixels.
const TOOLTIP_GAP: f64 = 10.0;

/// Static page chrome: hover tooltips and modal dialogs.
///
/// Bound once at start to the elements present in the served page.
pub struct Widgets {
    page: Page,
}

impl Widgets {
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    pub fn attach(self) -> anyhow::Result<()> {
        for element in self.all("[data-tooltip]")? {
            self.tooltip(element)?;
        }
        for trigger in self.all("[data-modal]")? {
            self.trigger(trigger)?;
        }
        for modal in self.all(".modal")? {
            self.modal(modal)?;
        }
        Ok(())
    }

    fn all(&self, selector: &str) -> anyhow::Result<Vec<Element>> {
        let nodes = self
            .page
            .document()
            .query_selector_all(selector)
            .throws(selector)?;
        Ok((0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }

    fn tooltip(&self, element: Element) -> anyhow::Result<()> {
        let page = self.page.clone();
        let anchor = element.clone();
        listen(&element, "mouseenter", move |_| {
            let text = anchor.get_attribute("data-tooltip").unwrap_or_default();
            let tip = page
                .create("div", "tooltip", Some(&text))?
                .dyn_into::<HtmlElement>()
                .map_err(|_| anyhow::anyhow!("tooltip is not an html element"))?;
            page.body()?.append_child(&tip).throws("append tooltip")?;
            let rect = anchor.get_bounding_client_rect();
            let left = rect.left() + rect.width() / 2.0 - tip.offset_width() as f64 / 2.0;
            let top = rect.top() - tip.offset_height() as f64 - TOOLTIP_GAP;
            let style = tip.style();
            style
                .set_property("left", &format!("{}px", left))
                .throws("tooltip left")?;
            style
                .set_property("top", &format!("{}px", top))
                .throws("tooltip top")?;
            let leave = Closure::once_into_js(move || tip.remove());
            let options = web_sys::AddEventListenerOptions::new();
            options.set_once(true);
            anchor
                .add_event_listener_with_callback_and_add_event_listener_options(
                    "mouseleave",
                    leave.unchecked_ref(),
                    &options,
                )
                .throws("tooltip leave")
        })
    }

    fn trigger(&self, trigger: Element) -> anyhow::Result<()> {
        let page = self.page.clone();
        let source = trigger.clone();
        listen(&trigger, "click", move |_| {
            let id = source.get_attribute("data-modal").unwrap_or_default();
            match page.document().get_element_by_id(&id) {
                Some(modal) => modal.class_list().add_1("active").throws("open modal"),
                None => {
                    log::debug!("no modal #{}", id);
                    Ok(())
                }
            }
        })
    }

    fn modal(&self, modal: Element) -> anyhow::Result<()> {
        if let Some(close) = modal.query_selector(".modal-close").throws("modal close")? {
            let target = modal.clone();
            listen(&close, "click", move |_| {
                target.class_list().remove_1("active").throws("close modal")
            })?;
        }
        let target = modal.clone();
        listen(&modal, "click", move |event| {
            match event.target().and_then(|t| t.dyn_into::<Element>().ok()) {
                Some(clicked) if clicked == target => {
                    target.class_list().remove_1("active").throws("close modal")
                }
                _ => Ok(()),
            }
        })
    }
}

fn listen<F>(element: &Element, name: &'static str, handler: F) -> anyhow::Result<()>
where
    F: Fn(Event) -> anyhow::Result<()> + 'static,
{
    let closure = Closure::wrap(Box::new(move |event: Event| {
        let _ = handler(event).inspect_err(|e| log::warn!("{} failed: {:#}", name, e));
    }) as Box<dyn FnMut(Event)>);
    element
        .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
        .throws(name)?;
    closure.forget();
    Ok(())
}
