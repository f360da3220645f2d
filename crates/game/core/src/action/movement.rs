use crate::state::Position;

/// Requested displacement for one turn.
///
/// Values are unchecked on construction; each axis must lie in `-1..=1` for
/// the move to be accepted during resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveDelta {
    pub dx: i32,
    pub dy: i32,
}

impl MoveDelta {
    /// The `(0, 0)` delta. It is resolved like any other move.
    pub const ZERO: Self = Self { dx: 0, dy: 0 };

    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// Both axes within `-1..=1`.
    pub const fn is_valid(self) -> bool {
        self.dx >= -1 && self.dx <= 1 && self.dy >= -1 && self.dy <= 1
    }

    pub const fn reversed(self) -> Self {
        Self {
            dx: -self.dx,
            dy: -self.dy,
        }
    }

    /// Horizontal component only.
    pub const fn horizontal(self) -> Self {
        Self { dx: self.dx, dy: 0 }
    }

    /// Vertical component only.
    pub const fn vertical(self) -> Self {
        Self { dx: 0, dy: self.dy }
    }

    pub const fn apply(self, origin: Position) -> Position {
        origin.offset(self.dx, self.dy)
    }
}

impl From<(i32, i32)> for MoveDelta {
    fn from((dx, dy): (i32, i32)) -> Self {
        Self { dx, dy }
    }
}

impl From<CardinalDirection> for MoveDelta {
    fn from(direction: CardinalDirection) -> Self {
        let (dx, dy) = direction.delta();
        Self { dx, dy }
    }
}

/// Axis-aligned unit moves, listed in redirect trial order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardinalDirection {
    East,
    West,
    South,
    North,
}

impl CardinalDirection {
    /// `(+x, 0), (-x, 0), (0, +y), (0, -y)`.
    pub const ALL: [CardinalDirection; 4] = [
        CardinalDirection::East,
        CardinalDirection::West,
        CardinalDirection::South,
        CardinalDirection::North,
    ];

    /// Board rows grow downwards, so `South` is `+y`.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            CardinalDirection::East => (1, 0),
            CardinalDirection::West => (-1, 0),
            CardinalDirection::South => (0, 1),
            CardinalDirection::North => (0, -1),
        }
    }
}
