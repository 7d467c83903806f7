use crate::TOP_CAPACITY;
use crate::WIDE_CAPACITY;

/// One of the three fixed-capacity rows a player builds.
///
/// The lowercase name doubles as the wire `position` and as the stem of
/// the row's element id (`top-row`, `opponent-top-row`).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Row {
    Top,
    Middle,
    Bottom,
}

impl Row {
    /// Rows in the order they are laid out on screen.
    pub const fn all() -> [Row; 3] {
        [Row::Top, Row::Middle, Row::Bottom]
    }
    pub fn capacity(&self) -> usize {
        match self {
            Row::Top => TOP_CAPACITY,
            Row::Middle | Row::Bottom => WIDE_CAPACITY,
        }
    }
    pub fn label(&self) -> &'static str {
        match self {
            Row::Top => "top",
            Row::Middle => "middle",
            Row::Bottom => "bottom",
        }
    }
    /// Element id of the local player's row container.
    pub fn element(&self) -> String {
        format!("{}-row", self.label())
    }
    /// Element id of the opponent's row container.
    pub fn opponent_element(&self) -> String {
        format!("opponent-{}-row", self.label())
    }
}

/// str isomorphism
impl TryFrom<&str> for Row {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim() {
            "top" => Ok(Row::Top),
            "middle" => Ok(Row::Middle),
            "bottom" => Ok(Row::Bottom),
            _ => Err(format!("invalid row str: {}", s)),
        }
    }
}

impl std::fmt::Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
