use super::Hand;
use crate::PlayerId;
use crate::Points;
use crate::Seconds;

/// One seat as the server projects it to every client.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayerView {
    pub id: PlayerId,
    pub name: String,
    pub hand: Hand,
    pub score: Points,
    pub fantasy_count: u32,
    pub time_bank: Seconds,
    pub is_ready: bool,
    pub is_ai: bool,
}
