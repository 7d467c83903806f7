use crate::protocol::Snapshot;
use crate::protocol::Status;

/// Status text plus whether the ready button is offered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub ready: bool,
}

impl From<&Snapshot> for StatusLine {
    fn from(snapshot: &Snapshot) -> Self {
        let text = match snapshot.status {
            Status::Waiting => "Waiting for players...".to_string(),
            Status::Dealing => "Dealing cards...".to_string(),
            Status::Playing => format!("Street {}", snapshot.current_street),
            Status::Fantasy => "Fantasy!".to_string(),
            Status::Scoring => "Counting scores...".to_string(),
            Status::Finished => "Game over".to_string(),
        };
        Self {
            text,
            ready: snapshot.status == Status::Waiting,
        }
    }
}
