//! The presentation controller and the two seams it is built on.
//!
//! [`Transport`] carries requests to the server; [`Surface`] puts frames on
//! screen. Both are injected, so the [`Controller`] runs unchanged against
//! the browser adapters in [`crate::browser`] and against fakes in tests.
mod config;
mod controller;
mod surface;
mod transport;

pub use config::*;
pub use controller::*;
pub use surface::*;
pub use transport::*;
