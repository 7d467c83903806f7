use super::Throws;
use crate::Millis;
use crate::client::Config;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Document;
use web_sys::Element;
use web_sys::HtmlElement;
use web_sys::Window;

/// Handle on the current window and document.
#[derive(Debug, Clone)]
pub struct Page {
    window: Window,
    document: Document,
}

impl Page {
    pub fn current() -> anyhow::Result<Self> {
        let window = web_sys::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;
        Ok(Self { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }
    pub fn document(&self) -> &Document {
        &self.document
    }
    pub fn body(&self) -> anyhow::Result<HtmlElement> {
        self.document
            .body()
            .ok_or_else(|| anyhow::anyhow!("document has no body"))
    }

    /// Page configuration from `<body data-…>` attributes.
    pub fn config(&self) -> anyhow::Result<Config> {
        let body = self.body()?;
        Config::parse(
            body.get_attribute("data-player-id"),
            body.get_attribute("data-socket-url"),
            body.get_attribute("data-log-level"),
        )
    }

    /// Element by id; a missing element is a broken page.
    pub fn element(&self, id: &str) -> anyhow::Result<Element> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| anyhow::anyhow!("missing element #{}", id))
    }
    pub fn styled(&self, id: &str) -> anyhow::Result<HtmlElement> {
        self.element(id)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| anyhow::anyhow!("#{} is not an html element", id))
    }

    /// Fresh detached element with a class and optional text.
    pub fn create(&self, tag: &str, class: &str, text: Option<&str>) -> anyhow::Result<Element> {
        let element = self
            .document
            .create_element(tag)
            .throws("create element")?;
        element.set_class_name(class);
        if let Some(text) = text {
            element.set_text_content(Some(text));
        }
        Ok(element)
    }

    /// Runs `f` once after `delay`.
    pub fn after<F>(&self, delay: Millis, f: F) -> anyhow::Result<()>
    where
        F: FnOnce() + 'static,
    {
        let callback = Closure::once_into_js(f);
        self.window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                delay as i32,
            )
            .throws("set timeout")
            .map(|_| ())
    }
}
