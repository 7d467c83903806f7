use super::Surface;
use super::Transport;
use crate::PlayerId;
use crate::cards::Card;
use crate::protocol::*;
use crate::view::ChatLine;
use crate::view::Frame;
use crate::view::can_move;
use crate::view::decode_drag;
use crate::view::encode_drag;

/// Drives one player's table view.
///
/// Holds the latest snapshot and nothing else: every push is rendered from
/// scratch, and every user action is checked against that snapshot before
/// it becomes a request. The server stays the only judge of legality.
pub struct Controller<T, S>
where
    T: Transport,
    S: Surface,
{
    me: PlayerId,
    transport: T,
    surface: S,
    snapshot: Option<Snapshot>,
}

impl<T, S> Controller<T, S>
where
    T: Transport,
    S: Surface,
{
    pub fn new(me: PlayerId, transport: T, surface: S) -> Self {
        Self {
            me,
            transport,
            surface,
            snapshot: None,
        }
    }

    pub fn me(&self) -> &str {
        &self.me
    }
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }
    pub fn surface(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn join(&self) -> anyhow::Result<()> {
        self.emit(Outbound::JoinGame(self.seat()))
    }
    pub fn ready(&self) -> anyhow::Result<()> {
        self.emit(Outbound::PlayerReady(self.seat()))
    }

    /// Applies one server push.
    pub fn receive(&mut self, inbound: Inbound) -> anyhow::Result<()> {
        match inbound {
            Inbound::Connected => {
                log::info!("connected as {}", self.me);
                self.surface.connected();
                Ok(())
            }
            Inbound::State(snapshot) => {
                log::debug!("{} on street {}", snapshot.status, snapshot.current_street);
                let frame = Frame::from((&snapshot, self.me.as_str()));
                self.snapshot = Some(snapshot);
                self.surface.paint(&frame)
            }
            Inbound::Error(failure) => {
                log::warn!("server error: {}", failure.message);
                self.surface.alert(&failure.message);
                Ok(())
            }
            Inbound::Chat(chat) => self.surface.chat(&ChatLine::from(&chat)),
        }
    }

    pub fn can_move(&self) -> bool {
        can_move(self.snapshot.as_ref(), &self.me)
    }

    /// Drag payload for a card the player picked up, or `None` when it is
    /// not their turn and the drag should be refused.
    pub fn drag(&self, card: Card) -> Option<String> {
        if !self.can_move() {
            log::debug!("drag of {} refused out of turn", card);
            return None;
        }
        encode_drag(card)
            .inspect_err(|e| log::warn!("drag of {} failed: {:#}", card, e))
            .ok()
    }

    /// Requests a placement for a dropped card. `Ok(false)` when out of turn.
    pub fn place(&self, payload: &str, position: &str, index: usize) -> anyhow::Result<bool> {
        if !self.can_move() {
            log::debug!("drop on {} {} refused out of turn", position, index);
            return Ok(false);
        }
        let card = decode_drag(payload)?;
        let position = Row::try_from(position).map_err(anyhow::Error::msg)?;
        self.emit(Outbound::PlaceCard(Placement {
            player_id: self.me.clone(),
            card,
            position,
            index,
        }))
        .map(|_| true)
    }

    /// Requests a placed card back into the hand. `Ok(false)` when out of turn.
    pub fn remove(&self, position: &str, index: usize) -> anyhow::Result<bool> {
        if !self.can_move() {
            log::debug!("removal from {} {} refused out of turn", position, index);
            return Ok(false);
        }
        let position = Row::try_from(position).map_err(anyhow::Error::msg)?;
        self.emit(Outbound::RemoveCard(Removal {
            player_id: self.me.clone(),
            position,
            index,
        }))
        .map(|_| true)
    }

    /// Sends chat text. `Ok(true)` means it went out and the input can be
    /// cleared; blank text is ignored.
    pub fn chat(&self, text: &str) -> anyhow::Result<bool> {
        let message = text.trim();
        if message.is_empty() {
            return Ok(false);
        }
        self.emit(Outbound::ChatMessage(Say {
            player_id: self.me.clone(),
            message: message.to_string(),
        }))
        .map(|_| true)
    }

    fn seat(&self) -> Seat {
        Seat {
            player_id: self.me.clone(),
        }
    }
    fn emit(&self, message: Outbound) -> anyhow::Result<()> {
        log::debug!("emit {}", message.event());
        self.transport.emit(&message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;
    use crate::cards::Suit;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Wire {
        sent: RefCell<Vec<Outbound>>,
        down: bool,
    }
    impl Transport for Wire {
        fn emit(&self, message: &Outbound) -> anyhow::Result<()> {
            if self.down {
                anyhow::bail!("socket closed");
            }
            self.sent.borrow_mut().push(message.clone());
            Ok(())
        }
    }

    #[derive(Default)]
    struct Screen {
        frames: Vec<Frame>,
        chats: Vec<ChatLine>,
        alerts: Vec<String>,
        connects: usize,
    }
    impl Surface for Screen {
        fn paint(&mut self, frame: &Frame) -> anyhow::Result<()> {
            self.frames.push(frame.clone());
            Ok(())
        }
        fn chat(&mut self, line: &ChatLine) -> anyhow::Result<()> {
            self.chats.push(line.clone());
            Ok(())
        }
        fn alert(&mut self, message: &str) {
            self.alerts.push(message.to_string());
        }
        fn toast(&mut self, _: &str) {}
        fn connected(&mut self) {
            self.connects += 1;
        }
    }

    fn controller() -> (Rc<Wire>, Controller<Rc<Wire>, Screen>) {
        let wire = Rc::new(Wire::default());
        let controller = Controller::new("me".into(), wire.clone(), Screen::default());
        (wire, controller)
    }

    fn state(status: &str, current: &str) -> Inbound {
        Inbound::State(
            serde_json::from_value(serde_json::json!({
                "state": status,
                "current_street": 2,
                "current_player": current,
                "players": { "me": { "name": "Me", "time_bank": 30 } },
            }))
            .unwrap(),
        )
    }

    fn payload() -> String {
        encode_drag(Card::from((Rank::Ace, Suit::S))).unwrap()
    }

    #[test]
    fn join_and_ready_identify_the_seat() {
        let (wire, controller) = controller();
        controller.join().unwrap();
        controller.ready().unwrap();
        let sent = wire.sent.borrow();
        assert!(sent.len() == 2);
        assert!(sent[0].event() == "join_game");
        assert!(sent[1].event() == "player_ready");
        assert!(sent.iter().all(|m| m.sender() == "me"));
    }

    #[test]
    fn snapshot_is_stored_and_painted() {
        let (_, mut controller) = controller();
        controller.receive(state("playing", "me")).unwrap();
        assert!(controller.snapshot().is_some());
        let frame = &controller.surface().frames[0];
        assert!(frame.status.text == "Street 2");
        assert!(frame.timer.as_deref() == Some("Time: 30s"));
    }

    #[test]
    fn every_snapshot_repaints() {
        let (_, mut controller) = controller();
        controller.receive(state("waiting", "")).unwrap();
        controller.receive(state("finished", "")).unwrap();
        let frames = &controller.surface().frames;
        assert!(frames.len() == 2);
        assert!(frames[0].status.ready);
        assert!(!frames[1].status.ready);
    }

    #[test]
    fn errors_alert_and_chat_appends() {
        let (_, mut controller) = controller();
        controller
            .receive(Inbound::Error(Failure {
                message: "Invalid move".into(),
            }))
            .unwrap();
        controller
            .receive(Inbound::Chat(Chat {
                player_name: "Ann".into(),
                message: "gl".into(),
            }))
            .unwrap();
        controller.receive(Inbound::Connected).unwrap();
        let screen = controller.surface();
        assert!(screen.alerts == vec!["Invalid move".to_string()]);
        assert!(screen.chats[0].author == "Ann:");
        assert!(screen.chats[0].text == "gl");
        assert!(screen.connects == 1);
    }

    #[test]
    fn out_of_turn_actions_are_refused() {
        let (wire, mut controller) = controller();
        assert!(!controller.can_move());
        assert!(controller.drag(Card::from((Rank::Ace, Suit::S))).is_none());
        assert!(!controller.place(&payload(), "top", 0).unwrap());
        controller.receive(state("playing", "you")).unwrap();
        assert!(!controller.remove("top", 0).unwrap());
        controller.receive(state("scoring", "me")).unwrap();
        assert!(!controller.place(&payload(), "top", 0).unwrap());
        assert!(wire.sent.borrow().is_empty());
    }

    #[test]
    fn placement_on_turn() {
        let (wire, mut controller) = controller();
        controller.receive(state("fantasy", "me")).unwrap();
        let drag = controller.drag(Card::from((Rank::Ace, Suit::S))).unwrap();
        assert!(controller.place(&drag, "bottom", 4).unwrap());
        let sent = wire.sent.borrow();
        assert!(
            sent[0]
                == Outbound::PlaceCard(Placement {
                    player_id: "me".into(),
                    card: Card::from((Rank::Ace, Suit::S)),
                    position: Row::Bottom,
                    index: 4,
                })
        );
    }

    #[test]
    fn removal_on_turn() {
        let (wire, mut controller) = controller();
        controller.receive(state("playing", "me")).unwrap();
        assert!(controller.remove("middle", 1).unwrap());
        assert!(wire.sent.borrow()[0].event() == "remove_card");
    }

    #[test]
    fn bad_drops_are_errors() {
        let (wire, mut controller) = controller();
        controller.receive(state("playing", "me")).unwrap();
        assert!(controller.place("not json", "top", 0).is_err());
        assert!(controller.place(&payload(), "side", 0).is_err());
        assert!(wire.sent.borrow().is_empty());
    }

    #[test]
    fn chat_is_trimmed_and_blank_is_ignored() {
        let (wire, controller) = controller();
        assert!(!controller.chat("   ").unwrap());
        assert!(controller.chat("  hello  ").unwrap());
        let sent = wire.sent.borrow();
        assert!(sent.len() == 1);
        assert!(
            sent[0]
                == Outbound::ChatMessage(Say {
                    player_id: "me".into(),
                    message: "hello".into(),
                })
        );
    }

    #[test]
    fn transport_failures_propagate() {
        let wire = Rc::new(Wire {
            down: true,
            ..Wire::default()
        });
        let controller = Controller::new("me".into(), wire, Screen::default());
        assert!(controller.join().is_err());
        assert!(controller.chat("hi").is_err());
    }
}
