//! Wire types exchanged with the table server.
//!
//! Field names follow the server's JSON exactly. Everything inbound is
//! tolerant: unknown fields are ignored and optional fields default, since
//! the next snapshot supersedes whatever this one got wrong.
mod hand;
mod inbound;
mod outbound;
mod player;
mod row;
mod snapshot;
mod status;

pub use hand::*;
pub use inbound::*;
pub use outbound::*;
pub use player::*;
pub use row::*;
pub use snapshot::*;
pub use status::*;
