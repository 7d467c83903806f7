use crate::cards::Card;

/// A card as drawn on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    card: Card,
    draggable: bool,
    removable: bool,
}

impl CardView {
    /// Unplaced card in the local hand; can be dragged onto a slot.
    pub fn loose(card: Card) -> Self {
        Self {
            card,
            draggable: true,
            removable: false,
        }
    }
    /// Card the local player already placed; can be taken back.
    pub fn placed(card: Card) -> Self {
        Self {
            card,
            draggable: false,
            removable: true,
        }
    }
    /// Card on someone else's board.
    pub fn foreign(card: Card) -> Self {
        Self {
            card,
            draggable: false,
            removable: false,
        }
    }
    pub fn card(&self) -> Card {
        self.card
    }
    pub fn draggable(&self) -> bool {
        self.draggable
    }
    pub fn removable(&self) -> bool {
        self.removable
    }
    /// Text drawn on the face, e.g. "10♥".
    pub fn label(&self) -> String {
        self.card.to_string()
    }
    pub fn rank(&self) -> &'static str {
        self.card.rank().label()
    }
    pub fn suit(&self) -> &'static str {
        self.card.suit().symbol()
    }
    pub fn class_name(&self) -> &'static str {
        if self.card.suit().is_red() {
            "card red"
        } else {
            "card"
        }
    }
}
