//! wasm32 bindings: the DOM, the Web Animations API, the page's socket.io
//! client and the console.
#![cfg(target_arch = "wasm32")]

mod animator;
mod console;
mod exports;
mod js;
mod listeners;
mod page;
mod socket;
mod spawner;
mod surface;
mod widgets;

pub use animator::*;
pub use console::*;
pub use exports::*;
pub use js::*;
pub use listeners::*;
pub use page::*;
pub use socket::*;
pub use spawner::*;
pub use surface::*;
pub use widgets::*;

use crate::client::Controller;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

/// The controller as shared by every event closure on the page.
pub type Table = Rc<RefCell<Controller<Rc<Socket>, DomSurface>>>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    boot().map_err(|e| JsValue::from_str(&format!("{:#}", e)))
}

fn boot() -> anyhow::Result<()> {
    let page = Page::current()?;
    let config = page.config()?;
    Console::install(config.level)?;
    log::info!("seating {}", config.player_id);
    let socket = Rc::new(Socket::connect(config.socket.as_deref())?);
    let surface = DomSurface::new(page.clone());
    let table: Table = Rc::new(RefCell::new(Controller::new(
        config.player_id.clone(),
        socket.clone(),
        surface,
    )));
    socket.subscribe(table.clone())?;
    Listeners::new(page.clone(), table.clone()).attach()?;
    Widgets::new(page).attach()?;
    table.borrow().join()
}

