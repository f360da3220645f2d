//! Movement and combat resolution.
//!
//! Resolution is a pure rule over the `pending` layer of the board: it decides
//! where a player ends up for a requested delta, applies the wolf/villager
//! defeat table, and reports what happened as a [`Resolution`] for the caller
//! to log. It never fails; every problem becomes a non-fatal outcome.
//!
//! # Core Functions
//!
//! - `resolve_move`: Complete resolution (validation, bounds, combat, redirect, commit)
//! - `corrected_target`: Bounds correction with axis-only fallback
//! - `redirect_target`: First enterable orthogonal neighbour

pub mod resolver;
pub mod result;

pub use resolver::{corrected_target, redirect_target, resolve_move};
pub use result::{MoveOutcome, MoveRejection, Resolution};
