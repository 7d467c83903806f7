use super::Row;
use crate::PlayerId;
use crate::cards::Card;
use anyhow::Context;

/// Identifies the sender for seat-level requests (join, ready).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Seat {
    pub player_id: PlayerId,
}

/// Request to move an unplaced card into a row slot.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Placement {
    pub player_id: PlayerId,
    pub card: Card,
    pub position: Row,
    pub index: usize,
}

/// Request to take a placed card back into the hand.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Removal {
    pub player_id: PlayerId,
    pub position: Row,
    pub index: usize,
}

/// Chat text typed by the local player.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Say {
    pub player_id: PlayerId,
    pub message: String,
}

/// Requests this client sends to the server.
///
/// Event-oriented transports use [`Outbound::event`] and
/// [`Outbound::payload`]; framed transports can serialize the whole value,
/// which yields `{"event": "...", "data": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum Outbound {
    JoinGame(Seat),
    PlayerReady(Seat),
    PlaceCard(Placement),
    RemoveCard(Removal),
    ChatMessage(Say),
}

impl Outbound {
    pub fn event(&self) -> &'static str {
        match self {
            Self::JoinGame(_) => "join_game",
            Self::PlayerReady(_) => "player_ready",
            Self::PlaceCard(_) => "place_card",
            Self::RemoveCard(_) => "remove_card",
            Self::ChatMessage(_) => "chat_message",
        }
    }
    pub fn payload(&self) -> anyhow::Result<serde_json::Value> {
        let value = match self {
            Self::JoinGame(seat) | Self::PlayerReady(seat) => serde_json::to_value(seat),
            Self::PlaceCard(placement) => serde_json::to_value(placement),
            Self::RemoveCard(removal) => serde_json::to_value(removal),
            Self::ChatMessage(say) => serde_json::to_value(say),
        };
        value.with_context(|| format!("serialize {} payload", self.event()))
    }
    pub fn sender(&self) -> &str {
        match self {
            Self::JoinGame(seat) | Self::PlayerReady(seat) => &seat.player_id,
            Self::PlaceCard(placement) => &placement.player_id,
            Self::RemoveCard(removal) => &removal.player_id,
            Self::ChatMessage(say) => &say.player_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;
    use crate::cards::Suit;

    fn placement() -> Outbound {
        Outbound::PlaceCard(Placement {
            player_id: "p1".into(),
            card: Card::from((Rank::Ten, Suit::H)),
            position: Row::Middle,
            index: 2,
        })
    }

    #[test]
    fn placement_payload_matches_server() {
        let payload = placement().payload().unwrap();
        assert!(
            payload
                == serde_json::json!({
                    "player_id": "p1",
                    "card": { "rank": "10", "suit": "♥" },
                    "position": "middle",
                    "index": 2
                })
        );
    }

    #[test]
    fn framed_form_names_the_event() {
        let framed = serde_json::to_value(placement()).unwrap();
        assert!(framed["event"] == placement().event());
        assert!(framed["data"] == placement().payload().unwrap());
    }

    #[test]
    fn event_names() {
        let seat = Seat { player_id: "p1".into() };
        assert!(Outbound::JoinGame(seat.clone()).event() == "join_game");
        assert!(Outbound::PlayerReady(seat.clone()).event() == "player_ready");
        let removal = Removal {
            player_id: "p1".into(),
            position: Row::Top,
            index: 0,
        };
        assert!(Outbound::RemoveCard(removal).event() == "remove_card");
        let say = Say {
            player_id: "p1".into(),
            message: "hi".into(),
        };
        assert!(Outbound::ChatMessage(say).event() == "chat_message");
    }

    #[test]
    fn sender_is_exposed() {
        assert!(placement().sender() == "p1");
    }
}
