//! Visual effects and the queue that keeps them from overlapping.
//!
//! An [`Effect`] is a pure description (element class, text, keyframes,
//! timing). An [`Animator`] plays one and resolves when it has finished.
//! A [`Queue`] runs deferred tasks one at a time in FIFO order, and a
//! [`Stage`] ties the two together for callers that want effects
//! serialized.
mod animator;
mod effect;
mod keyframe;
mod queue;
mod stage;

pub use animator::*;
pub use effect::*;
pub use keyframe::*;
pub use queue::*;
pub use stage::*;
