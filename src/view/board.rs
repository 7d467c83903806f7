use super::CardView;
use crate::cards::Card;
use crate::protocol::Hand;
use crate::protocol::Row;

/// One slot of a row, empty or holding a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotView {
    pub row: Row,
    pub index: usize,
    pub card: Option<CardView>,
    /// Accepts dropped cards; only the local player's slots do.
    pub droppable: bool,
}

/// A row padded out to its full capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub row: Row,
    pub slots: Vec<SlotView>,
}

impl RowView {
    fn build(row: Row, cards: &[Card], face: fn(Card) -> CardView, droppable: bool) -> Self {
        let slots = (0..row.capacity())
            .map(|index| SlotView {
                row,
                index,
                card: cards.get(index).copied().map(face),
                droppable,
            })
            .collect();
        Self { row, slots }
    }
    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|s| s.card.is_some()).count()
    }
}

/// Three rows of one player, top to bottom.
///
/// Cards past a row's capacity are not drawn; the server never sends them
/// and a slot that does not exist cannot be dropped on anyway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    pub rows: [RowView; 3],
}

impl BoardView {
    /// The local player's board.
    pub fn own(hand: &Hand) -> Self {
        Self::build(hand, CardView::placed, true)
    }
    /// An opponent's board; nothing on it is interactive.
    pub fn opponent(hand: &Hand) -> Self {
        Self::build(hand, CardView::foreign, false)
    }
    fn build(hand: &Hand, face: fn(Card) -> CardView, droppable: bool) -> Self {
        Self {
            rows: Row::all().map(|row| RowView::build(row, hand.row(row), face, droppable)),
        }
    }
    pub fn row(&self, row: Row) -> &RowView {
        &self.rows[row as usize]
    }
}
