use super::Easing;
use super::Keyframe;
use super::Point;
use super::Timing;
use crate::COMBINATION_DURATION;
use crate::DEAL_DURATION;
use crate::FANTASY_DURATION;
use crate::Points;
use crate::SCORE_DURATION;
use crate::cards::Card;
use crate::protocol::Row;

/// Where an effect's element is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// The local player's row container.
    Row(Row),
    /// The document body, for overlays and free-flying cards.
    Body,
}

/// A transient visual effect.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Points won or lost on a row, floating up and fading.
    Score { row: Row, points: Points, win: bool },
    /// Full-screen banner announcing a fantasy round.
    Fantasy,
    /// A card flying between two viewport positions.
    Deal { card: Card, from: Point, to: Point },
    /// Name of a made hand pulsing over a row.
    Combination { row: Row, label: String },
}

impl Effect {
    pub fn anchor(&self) -> Anchor {
        match self {
            Self::Score { row, .. } | Self::Combination { row, .. } => Anchor::Row(*row),
            Self::Fantasy | Self::Deal { .. } => Anchor::Body,
        }
    }

    /// Class of the animated element.
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Score { win: true, .. } => "score-animation win",
            Self::Score { win: false, .. } => "score-animation lose",
            Self::Fantasy => "fantasy-overlay",
            Self::Deal { .. } => "card animated",
            Self::Combination { .. } => "combination-highlight",
        }
    }

    /// Text set directly on the animated element.
    pub fn text(&self) -> Option<String> {
        match self {
            Self::Score { points, win, .. } => Some(format!(
                "{}{}",
                if *win { '+' } else { '-' },
                points.unsigned_abs()
            )),
            Self::Deal { card, .. } => Some(card.to_string()),
            Self::Fantasy | Self::Combination { .. } => None,
        }
    }

    /// Child element (class, text) for effects that wrap a caption.
    pub fn caption(&self) -> Option<(&'static str, String)> {
        match self {
            Self::Fantasy => Some(("fantasy-text", "FANTASY!".to_string())),
            Self::Combination { label, .. } => Some(("combination-text", label.clone())),
            Self::Score { .. } | Self::Deal { .. } => None,
        }
    }

    /// Starting position for elements pinned to the viewport.
    pub fn origin(&self) -> Option<Point> {
        match self {
            Self::Deal { from, .. } => Some(*from),
            _ => None,
        }
    }

    pub fn keyframes(&self) -> Vec<Keyframe> {
        let frame = Keyframe::default;
        match self {
            Self::Score { .. } => vec![
                frame().opacity(0.0).transform("translateY(0) scale(0.8)"),
                frame().opacity(1.0).transform("translateY(-20px) scale(1.2)"),
                frame().opacity(0.0).transform("translateY(-40px) scale(0.8)"),
            ],
            Self::Fantasy => vec![
                frame().opacity(0.0),
                frame().opacity(0.7),
                frame().opacity(0.0),
            ],
            Self::Deal { from, to, .. } => vec![
                frame().transform("scale(1) rotate(0deg)").at(*from),
                frame().transform("scale(1.1) rotate(180deg)").at(from.midpoint(to)),
                frame().transform("scale(1) rotate(360deg)").at(*to),
            ],
            Self::Combination { .. } => vec![
                frame().opacity(0.0).transform("scale(0.8)"),
                frame().opacity(1.0).transform("scale(1)"),
                frame().opacity(1.0).transform("scale(1)"),
                frame().opacity(0.0).transform("scale(0.8)"),
            ],
        }
    }

    pub fn timing(&self) -> Timing {
        match self {
            Self::Score { .. } => Timing {
                duration: SCORE_DURATION,
                easing: Easing::EaseOut,
            },
            Self::Fantasy => Timing {
                duration: FANTASY_DURATION,
                easing: Easing::EaseInOut,
            },
            Self::Deal { .. } => Timing {
                duration: DEAL_DURATION,
                easing: Easing::EaseInOut,
            },
            Self::Combination { .. } => Timing {
                duration: COMBINATION_DURATION,
                easing: Easing::EaseInOut,
            },
        }
    }
}

impl std::fmt::Display for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Score { row, points, win } => write!(f, "score {} {} {}", row, points, win),
            Self::Fantasy => write!(f, "fantasy"),
            Self::Deal { card, .. } => write!(f, "deal {}", card),
            Self::Combination { row, label } => write!(f, "combination {} {}", row, label),
        }
    }
}
