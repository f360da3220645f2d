//! Movement intents and their bookkeeping.
//!
//! Callers express one [`MoveDelta`] per player per turn. Intents wait in the
//! [`ActionQueue`] until the engine drains it, and every resolved intent leaves
//! an [`ActionRecord`] behind.
mod history;
mod movement;
mod queue;

pub use history::ActionRecord;
pub use movement::{CardinalDirection, MoveDelta};
pub use queue::ActionQueue;
