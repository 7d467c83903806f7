use super::Table;
use super::Throws;
use crate::client::Transport;
use crate::protocol::Inbound;
use crate::protocol::Outbound;
use js_sys::Function;
use js_sys::JSON;
use js_sys::Reflect;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// The page's socket.io connection.
///
/// Bound through the `io` global the socket.io client script installs, so
/// nothing here knows about the wire format below named events.
pub struct Socket {
    inner: JsValue,
}

impl Socket {
    /// Opens a connection to `url`, or to the page's own origin.
    pub fn connect(url: Option<&str>) -> anyhow::Result<Self> {
        let io = Reflect::get(&js_sys::global(), &JsValue::from_str("io"))
            .throws("lookup io")?
            .dyn_into::<Function>()
            .map_err(|_| anyhow::anyhow!("socket.io client not loaded"))?;
        let inner = match url {
            Some(url) => io.call1(&JsValue::NULL, &JsValue::from_str(url)),
            None => io.call0(&JsValue::NULL),
        }
        .throws("open socket")?;
        Ok(Self { inner })
    }

    /// Routes every inbound event the client understands into the table.
    pub fn subscribe(&self, table: Table) -> anyhow::Result<()> {
        for event in Inbound::events() {
            let table = table.clone();
            let handler = Closure::wrap(Box::new(move |payload: JsValue| {
                let _ = stringify(&payload)
                    .and_then(|json| Inbound::decode(event, &json))
                    .inspect_err(|e| log::warn!("dropping {}: {:#}", event, e))
                    .and_then(|inbound| table.borrow_mut().receive(inbound))
                    .inspect_err(|e| log::warn!("applying {}: {:#}", event, e));
            }) as Box<dyn FnMut(JsValue)>);
            self.method("on")?
                .call2(&self.inner, &JsValue::from_str(event), handler.as_ref())
                .throws("subscribe")?;
            handler.forget();
        }
        Ok(())
    }

    fn method(&self, name: &str) -> anyhow::Result<Function> {
        Reflect::get(&self.inner, &JsValue::from_str(name))
            .throws(name)?
            .dyn_into::<Function>()
            .map_err(|_| anyhow::anyhow!("socket has no {}()", name))
    }
}

impl Transport for Socket {
    fn emit(&self, message: &Outbound) -> anyhow::Result<()> {
        let json = serde_json::to_string(&message.payload()?)?;
        let payload = JSON::parse(&json).throws("encode payload")?;
        self.method("emit")?
            .call2(&self.inner, &JsValue::from_str(message.event()), &payload)
            .throws(message.event())
            .map(|_| ())
    }
}

fn stringify(payload: &JsValue) -> anyhow::Result<String> {
    if payload.is_undefined() {
        return Ok("null".to_string());
    }
    JSON::stringify(payload)
        .throws("decode payload")
        .map(String::from)
}
