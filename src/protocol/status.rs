/// Server-side phase of the table.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Waiting,
    Dealing,
    Playing,
    Fantasy,
    Scoring,
    Finished,
}

impl Status {
    pub const fn all() -> [Status; 6] {
        [
            Status::Waiting,
            Status::Dealing,
            Status::Playing,
            Status::Fantasy,
            Status::Scoring,
            Status::Finished,
        ]
    }
    /// Phases in which the player to act may place cards.
    pub fn is_placement(&self) -> bool {
        matches!(self, Status::Playing | Status::Fantasy)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Status::Waiting => write!(f, "waiting"),
            Status::Dealing => write!(f, "dealing"),
            Status::Playing => write!(f, "playing"),
            Status::Fantasy => write!(f, "fantasy"),
            Status::Scoring => write!(f, "scoring"),
            Status::Finished => write!(f, "finished"),
        }
    }
}
