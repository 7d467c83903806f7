//! Pure projection of a [`Snapshot`](crate::protocol::Snapshot) onto what
//! the page shows.
//!
//! Nothing here touches the DOM. A [`Frame`] is recomputed from scratch for
//! every snapshot and handed to a [`Surface`](crate::client::Surface), which
//! is the only place that knows about elements.
mod board;
mod card;
mod chat;
mod drag;
mod frame;
mod scores;
mod status;
mod turn;

pub use board::*;
pub use card::*;
pub use chat::*;
pub use drag::*;
pub use frame::*;
pub use scores::*;
pub use status::*;
pub use turn::*;
