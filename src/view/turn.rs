use crate::protocol::Snapshot;

/// Whether the local player may place or remove cards right now.
///
/// False until the first snapshot arrives.
pub fn can_move(snapshot: Option<&Snapshot>, me: &str) -> bool {
    snapshot.is_some_and(|s| s.is_turn_of(me))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::Status;

    fn snapshot(status: Status, current: Option<&str>) -> Snapshot {
        serde_json::from_value(serde_json::json!({
            "state": status,
            "current_player": current,
        }))
        .unwrap()
    }

    #[test]
    fn no_snapshot_no_move() {
        assert!(!can_move(None, "me"));
    }

    #[test]
    fn exhaustive_phase_and_seat() {
        for status in Status::all() {
            for current in [Some("me"), Some("you"), None] {
                let expected = status.is_placement() && current == Some("me");
                let snapshot = snapshot(status, current);
                assert!(can_move(Some(&snapshot), "me") == expected);
            }
        }
    }
}
