//! Browser client for an Open Face Chinese Poker table.
//!
//! The server owns the game. This crate mirrors its snapshots onto the page,
//! turns drag-and-drop gestures into placement requests, relays chat, and
//! serializes visual effects through a single-consumer animation queue.
//!
//! Everything outside [`browser`] is target-independent and unit-tested on
//! the host; [`browser`] binds it to the DOM, the Web Animations API and the
//! page's socket.io client.
pub mod animation;
pub mod browser;
pub mod cards;
pub mod client;
pub mod protocol;
pub mod view;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Opaque player identifier issued by the server (a session UUID).
pub type PlayerId = String;
/// Running match score; negative after losing royalties.
pub type Points = i32;
/// Time-bank remaining, in whole seconds.
pub type Seconds = u32;
/// Animation durations, in milliseconds.
pub type Millis = u32;

// ============================================================================
// TABLE GEOMETRY
// ============================================================================
/// Slots in the top row.
pub const TOP_CAPACITY: usize = 3;
/// Slots in the middle and bottom rows.
pub const WIDE_CAPACITY: usize = 5;

// ============================================================================
// ANIMATION TIMINGS
// ============================================================================
/// Score popup over a row.
pub const SCORE_DURATION: Millis = 1500;
/// Full-screen fantasy banner.
pub const FANTASY_DURATION: Millis = 2000;
/// Card flying from one slot to another.
pub const DEAL_DURATION: Millis = 600;
/// Combination label over a row.
pub const COMBINATION_DURATION: Millis = 2000;
/// Lifetime of a transient error toast.
pub const TOAST_DURATION: Millis = 3000;

// ============================================================================
// PAGE ELEMENTS
// ============================================================================
/// Container of the local player's unplaced cards.
pub const HAND_ID: &str = "hand";
/// Player names and scores.
pub const SCOREBOARD_ID: &str = "score-board";
/// One-line status text.
pub const STATUS_ID: &str = "game-status";
/// Ready button, shown only while waiting for players.
pub const READY_ID: &str = "ready-btn";
/// Time-bank display.
pub const TIMER_ID: &str = "timer";
/// Chat transcript.
pub const CHAT_BOX_ID: &str = "chat-box";
/// Chat form and its text input.
pub const CHAT_FORM_ID: &str = "chat-form";
pub const CHAT_INPUT_ID: &str = "chat-input";
/// MIME type of the drag-and-drop card payload.
pub const DRAG_FORMAT: &str = "text/plain";
