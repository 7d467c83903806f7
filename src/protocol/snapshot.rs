use super::PlayerView;
use super::Status;
use crate::PlayerId;
use std::collections::BTreeMap;

/// Complete, authoritative table state pushed by the server.
///
/// Each snapshot replaces the previous one outright. Players are kept in a
/// `BTreeMap` so the scoreboard and the opponent lookup are ordered by id
/// rather than by whatever order the JSON object happened to arrive in.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Snapshot {
    #[serde(rename = "state")]
    pub status: Status,
    #[serde(default)]
    pub current_street: u32,
    #[serde(default)]
    pub current_player: Option<PlayerId>,
    #[serde(default)]
    pub fantasy_players: Vec<PlayerId>,
    #[serde(default)]
    pub players: BTreeMap<PlayerId, PlayerView>,
    /// Present when the server wants the opponent's rows shown. Only its
    /// presence matters; the rows themselves come from `players`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opponent_table: Option<serde_json::Value>,
}

impl Snapshot {
    pub fn player(&self, id: &str) -> Option<&PlayerView> {
        self.players.get(id)
    }
    /// First seated player that is not `me`.
    pub fn opponent(&self, me: &str) -> Option<&PlayerView> {
        self.players
            .iter()
            .find(|(id, _)| id.as_str() != me)
            .map(|(_, player)| player)
    }
    pub fn shows_opponent(&self) -> bool {
        self.opponent_table.is_some()
    }
    /// True iff `me` is the player to act and the phase accepts placements.
    pub fn is_turn_of(&self, me: &str) -> bool {
        self.status.is_placement() && self.current_player.as_deref() == Some(me)
    }
    pub fn in_fantasy(&self, id: &str) -> bool {
        self.fantasy_players.iter().any(|p| p == id)
    }
}
