//! Resolution result types.

use crate::action::MoveDelta;
use crate::state::{PlayerId, Position};

/// Why a requested move left the player where it was.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum MoveRejection {
    /// An axis of the delta is outside `-1..=1`.
    InvalidDelta,
    /// Neither the move nor its axis-only fallbacks stay on the board.
    OutOfBounds,
    /// The target and every redirect candidate are held by a stronger faction.
    Blocked,
    /// The player was defeated before its intent was resolved.
    Defeated,
    /// The player was never placed.
    Unplaced,
}

/// Outcome of one resolved intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveOutcome {
    /// The player entered its (possibly bounds-corrected) target.
    Moved,
    /// The target was blocked; the player stepped to a neighbour instead.
    Redirected { blocked: Position },
    Rejected(MoveRejection),
}

impl MoveOutcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, MoveOutcome::Rejected(_))
    }
}

/// Structured record of a single resolution, meant for logging and reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resolution {
    pub player: PlayerId,
    pub requested: MoveDelta,
    /// Position before resolution (`None` only for unplaced players).
    pub from: Option<Position>,
    /// Position after resolution.
    pub to: Option<Position>,
    pub outcome: MoveOutcome,
    /// Villager defeated by this move, if any.
    pub defeated: Option<PlayerId>,
}

impl Resolution {
    pub(crate) fn stayed(
        player: PlayerId,
        requested: MoveDelta,
        at: Option<Position>,
        outcome: MoveOutcome,
    ) -> Self {
        Self {
            player,
            requested,
            from: at,
            to: at,
            outcome,
            defeated: None,
        }
    }

    /// True when the player's position changed.
    pub fn moved(&self) -> bool {
        self.from != self.to
    }
}
