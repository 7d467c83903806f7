use crate::Points;
use crate::protocol::Snapshot;

/// One scoreboard entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreLine {
    pub name: String,
    pub score: Points,
    pub local: bool,
    pub acting: bool,
}

impl ScoreLine {
    /// Entries for every seated player, in player-id order.
    pub fn table(snapshot: &Snapshot, me: &str) -> Vec<Self> {
        snapshot
            .players
            .iter()
            .map(|(id, player)| Self {
                name: player.name.clone(),
                score: player.score,
                local: id == me,
                acting: snapshot.current_player.as_deref() == Some(id.as_str()),
            })
            .collect()
    }
    pub fn class_name(&self) -> &'static str {
        match (self.local, self.acting) {
            (true, true) => "player-score local acting",
            (true, false) => "player-score local",
            (false, true) => "player-score acting",
            (false, false) => "player-score",
        }
    }
}
