/// Team affiliation of a player, doubling as the content of a board cell.
///
/// `Empty` marks an unoccupied cell and is never assigned to a real player.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Faction {
    Wolf,
    Villager,
    #[default]
    Empty,
}

impl Faction {
    pub const WOLF_GLYPH: char = 'W';
    pub const VILLAGER_GLYPH: char = 'O';
    pub const EMPTY_GLYPH: char = '.';

    /// Display symbol used by text projections of the board.
    pub const fn glyph(self) -> char {
        match self {
            Faction::Wolf => Self::WOLF_GLYPH,
            Faction::Villager => Self::VILLAGER_GLYPH,
            Faction::Empty => Self::EMPTY_GLYPH,
        }
    }

    pub const fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            Self::WOLF_GLYPH => Some(Faction::Wolf),
            Self::VILLAGER_GLYPH => Some(Faction::Villager),
            Self::EMPTY_GLYPH => Some(Faction::Empty),
            _ => None,
        }
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Faction::Empty)
    }

    /// Whether a player of this faction may enter a cell currently holding `defender`.
    ///
    /// Wolves enter empty cells and villager cells; villagers only enter empty cells.
    pub const fn can_defeat(self, defender: Faction) -> bool {
        match (self, defender) {
            (Faction::Wolf, Faction::Empty | Faction::Villager) => true,
            (Faction::Villager, Faction::Empty) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_round_trip() {
        for faction in [Faction::Wolf, Faction::Villager, Faction::Empty] {
            assert_eq!(Faction::from_glyph(faction.glyph()), Some(faction));
        }
        assert_eq!(Faction::from_glyph('x'), None);
    }

    #[test]
    fn combat_table() {
        assert!(Faction::Wolf.can_defeat(Faction::Empty));
        assert!(Faction::Wolf.can_defeat(Faction::Villager));
        assert!(!Faction::Wolf.can_defeat(Faction::Wolf));

        assert!(Faction::Villager.can_defeat(Faction::Empty));
        assert!(!Faction::Villager.can_defeat(Faction::Wolf));
        assert!(!Faction::Villager.can_defeat(Faction::Villager));
    }

    #[test]
    fn parses_snake_case_names() {
        assert_eq!("wolf".parse::<Faction>(), Ok(Faction::Wolf));
        assert_eq!("Villager".parse::<Faction>(), Ok(Faction::Villager));
        assert_eq!(Faction::Wolf.to_string(), "wolf");
    }
}
