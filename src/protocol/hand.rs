use super::Row;
use crate::cards::Card;

/// Everything one player holds: the three built rows plus the cards dealt
/// this street that have not been placed yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Hand {
    pub top: Vec<Card>,
    pub middle: Vec<Card>,
    pub bottom: Vec<Card>,
    pub current: Vec<Card>,
}

impl Hand {
    pub fn row(&self, row: Row) -> &[Card] {
        match row {
            Row::Top => &self.top,
            Row::Middle => &self.middle,
            Row::Bottom => &self.bottom,
        }
    }
    /// Cards dealt but not yet placed.
    pub fn unplaced(&self) -> &[Card] {
        &self.current
    }
    /// Cards already placed across all rows.
    pub fn placed(&self) -> usize {
        Row::all().iter().map(|r| self.row(*r).len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_rows_default_to_empty() {
        let hand = serde_json::from_str::<Hand>(r#"{"top":[{"rank":"A","suit":"♠"}]}"#).unwrap();
        assert!(hand.row(Row::Top).len() == 1);
        assert!(hand.row(Row::Middle).is_empty());
        assert!(hand.unplaced().is_empty());
        assert!(hand.placed() == 1);
    }
}
