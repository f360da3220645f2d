pub mod board;
pub mod common;
pub mod faction;
pub mod player;

pub use board::{BoardState, Layer, NoSpaceError};
pub use common::{PlayerId, Position};
pub use faction::Faction;
pub use player::{PlayerEntity, PlayerStatus, parse_pseudo};
