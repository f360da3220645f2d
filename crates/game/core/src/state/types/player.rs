use super::{Faction, PlayerId, Position};

/// Whether a player still takes part in the skirmish.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerStatus {
    #[default]
    Active,
    /// Entered by a wolf during the given turn. A defeated player keeps its last
    /// position for the record but no longer occupies a cell.
    Defeated { turn: u32 },
}

/// A participant on the board.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerEntity {
    pub id: PlayerId,
    pub pseudo: char,
    pub faction: Faction,
    /// Stored for future rules; movement and combat do not read it.
    pub sight_distance: u32,
    pub position: Option<Position>,
    pub status: PlayerStatus,
}

impl PlayerEntity {
    pub fn new(id: PlayerId, pseudo: char, faction: Faction, sight_distance: u32) -> Self {
        Self {
            id,
            pseudo,
            faction,
            sight_distance,
            position: None,
            status: PlayerStatus::Active,
        }
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn is_placed(&self) -> bool {
        self.position.is_some()
    }

    pub fn is_active(&self) -> bool {
        matches!(self.status, PlayerStatus::Active)
    }

    /// Cell this player occupies, if it is placed and still in play.
    pub fn occupied_cell(&self) -> Option<Position> {
        if self.is_active() { self.position } else { None }
    }

    /// Board glyph derived from the faction.
    pub fn glyph(&self) -> char {
        self.faction.glyph()
    }
}

/// Parses a display pseudo: exactly one visible character.
pub fn parse_pseudo(pseudo: &str) -> Option<char> {
    let mut chars = pseudo.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_control() && !c.is_whitespace() => Some(c),
        _ => None,
    }
}
