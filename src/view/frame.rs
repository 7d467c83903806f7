use super::BoardView;
use super::CardView;
use super::ScoreLine;
use super::StatusLine;
use super::can_move;
use crate::protocol::Snapshot;

/// Everything the page shows for one snapshot.
///
/// `None` regions are left as they are on screen: the local player not
/// being seated yet leaves the hand and board alone, and a snapshot without
/// an opponent table leaves the opponent rows alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub hand: Option<Vec<CardView>>,
    pub board: Option<BoardView>,
    pub opponent: Option<BoardView>,
    pub scores: Vec<ScoreLine>,
    pub status: StatusLine,
    pub timer: Option<String>,
}

impl From<(&Snapshot, &str)> for Frame {
    fn from((snapshot, me): (&Snapshot, &str)) -> Self {
        let player = snapshot.player(me);
        let moving = can_move(Some(snapshot), me);
        Self {
            hand: player.map(|p| p.hand.unplaced().iter().copied().map(CardView::loose).collect()),
            board: player.map(|p| BoardView::own(&p.hand)),
            opponent: snapshot
                .shows_opponent()
                .then(|| snapshot.opponent(me))
                .flatten()
                .map(|p| BoardView::opponent(&p.hand)),
            scores: ScoreLine::table(snapshot, me),
            status: StatusLine::from(snapshot),
            timer: player
                .filter(|_| moving)
                .map(|p| format!("Time: {}s", p.time_bank)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::Row;

    fn snapshot(json: serde_json::Value) -> Snapshot {
        serde_json::from_value(json).unwrap()
    }

    fn table(opponent: bool) -> Snapshot {
        let mut json = serde_json::json!({
            "state": "playing",
            "current_street": 1,
            "current_player": "me",
            "players": {
                "me": {
                    "name": "Me", "score": 1, "time_bank": 42,
                    "hand": {
                        "top": [{ "rank": "K", "suit": "♠" }],
                        "current": [{ "rank": "2", "suit": "♦" }, { "rank": "7", "suit": "♣" }]
                    }
                },
                "you": {
                    "name": "You", "score": -1, "time_bank": 60,
                    "hand": { "bottom": [{ "rank": "9", "suit": "♥" }] }
                }
            }
        });
        if opponent {
            json["opponent_table"] = serde_json::json!({});
        }
        snapshot(json)
    }

    #[test]
    fn hand_holds_unplaced_cards() {
        let frame = Frame::from((&table(false), "me"));
        let hand = frame.hand.unwrap();
        assert!(hand.iter().map(CardView::label).collect::<Vec<_>>() == vec!["2♦", "7♣"]);
        assert!(hand.iter().all(CardView::draggable));
    }

    #[test]
    fn opponent_rows_need_the_marker() {
        let without = Frame::from((&table(false), "me"));
        assert!(without.opponent.is_none());
        let with = Frame::from((&table(true), "me"));
        let opponent = with.opponent.unwrap();
        assert!(opponent.row(Row::Bottom).filled() == 1);
        assert!(opponent.row(Row::Top).filled() == 0);
    }

    #[test]
    fn opponent_marker_without_opponent() {
        let snapshot = snapshot(serde_json::json!({
            "state": "playing",
            "opponent_table": {},
            "players": { "me": { "name": "Me" } }
        }));
        assert!(Frame::from((&snapshot, "me")).opponent.is_none());
    }

    #[test]
    fn timer_only_on_my_turn() {
        let mine = Frame::from((&table(false), "me"));
        assert!(mine.timer.as_deref() == Some("Time: 42s"));
        let theirs = Frame::from((&table(false), "you"));
        assert!(theirs.timer.is_none());
    }

    #[test]
    fn spectator_leaves_own_regions_alone() {
        let frame = Frame::from((&table(true), "stranger"));
        assert!(frame.hand.is_none());
        assert!(frame.board.is_none());
        assert!(frame.timer.is_none());
        assert!(frame.scores.len() == 2);
        assert!(frame.opponent.is_some());
    }

    #[test]
    fn waiting_frame() {
        let frame = Frame::from((&snapshot(serde_json::json!({ "state": "waiting" })), "me"));
        assert!(frame.status.ready);
        assert!(frame.status.text == "Waiting for players...");
        assert!(frame.scores.is_empty());
    }
}
