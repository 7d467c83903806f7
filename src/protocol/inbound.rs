use super::Snapshot;
use anyhow::Context;

/// Server-provided error text, shown to the player verbatim.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Failure {
    pub message: String,
}

/// A chat line relayed to every seat.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Chat {
    pub player_name: String,
    pub message: String,
}

/// Events the server pushes to this client.
#[derive(Debug, Clone, PartialEq)]
pub enum Inbound {
    Connected,
    State(Snapshot),
    Error(Failure),
    Chat(Chat),
}

impl Inbound {
    pub const CONNECT: &'static str = "connect";
    pub const GAME_STATE: &'static str = "game_state";
    pub const ERROR: &'static str = "error";
    pub const CHAT: &'static str = "chat_message";

    /// Event names a transport should subscribe to.
    pub const fn events() -> [&'static str; 4] {
        [Self::CONNECT, Self::GAME_STATE, Self::ERROR, Self::CHAT]
    }

    /// Decodes a named event and its JSON payload.
    pub fn decode(event: &str, payload: &str) -> anyhow::Result<Self> {
        match event {
            Self::CONNECT => Ok(Self::Connected),
            Self::GAME_STATE => serde_json::from_str(payload)
                .map(Self::State)
                .context("malformed game_state payload"),
            Self::ERROR => serde_json::from_str(payload)
                .map(Self::Error)
                .context("malformed error payload"),
            Self::CHAT => serde_json::from_str(payload)
                .map(Self::Chat)
                .context("malformed chat_message payload"),
            _ => Err(anyhow::anyhow!("unknown event {}", event)),
        }
    }
}
