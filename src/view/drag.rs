use crate::cards::Card;
use anyhow::Context;

/// Serializes a card into the drag-and-drop payload.
pub fn encode_drag(card: Card) -> anyhow::Result<String> {
    serde_json::to_string(&card).context("serialize drag payload")
}

/// Recovers the card carried by a drop.
pub fn decode_drag(payload: &str) -> anyhow::Result<Card> {
    serde_json::from_str(payload).with_context(|| format!("malformed drag payload {:?}", payload))
}
