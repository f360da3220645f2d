use crate::env::RngOracle;

use super::{Faction, PlayerEntity, Position};

/// Raised when a placement finds no empty cell in the `current` layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("no empty cell left on the board")]
pub struct NoSpaceError;

/// Selects one of the two buffers of a [`BoardState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Layer {
    /// Committed state of the last finished turn.
    Current,
    /// Working buffer mutated while a turn is resolved.
    Pending,
}

/// Double-buffered rectangular grid of faction glyphs.
///
/// Cells are stored row-major (`y * width + x`) and every coordinate exists in
/// both layers. The grid holds no combat logic; it is a projection of player
/// positions that the engine keeps in sync.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardState {
    width: u32,
    height: u32,
    current: Vec<Faction>,
    pending: Vec<Faction>,
}

impl BoardState {
    /// Creates an empty board. Dimensions are expected to be validated by the caller.
    pub fn new(width: u32, height: u32) -> Self {
        let cells = width as usize * height as usize;
        Self {
            width,
            height,
            current: vec![Faction::Empty; cells],
            pending: vec![Faction::Empty; cells],
        }
    }

    /// Rebuilds a board from a committed layer; the pending layer starts as a copy.
    ///
    /// Returns `None` when the layer does not have `width * height` cells.
    pub fn from_current(width: u32, height: u32, current: Vec<Faction>) -> Option<Self> {
        if current.len() != width as usize * height as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            pending: current.clone(),
            current,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as u32) < self.width
            && (position.y as u32) < self.height
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.y as usize * self.width as usize + position.x as usize)
    }

    fn cells(&self, layer: Layer) -> &[Faction] {
        match layer {
            Layer::Current => &self.current,
            Layer::Pending => &self.pending,
        }
    }

    fn cells_mut(&mut self, layer: Layer) -> &mut [Faction] {
        match layer {
            Layer::Current => &mut self.current,
            Layer::Pending => &mut self.pending,
        }
    }

    /// Returns the cell content, or `None` for a coordinate outside the grid.
    pub fn get(&self, position: Position, layer: Layer) -> Option<Faction> {
        let index = self.index(position)?;
        self.cells(layer).get(index).copied()
    }

    /// Writes a cell. Returns false (and writes nothing) outside the grid.
    pub fn set(&mut self, position: Position, layer: Layer, faction: Faction) -> bool {
        match self.index(position) {
            Some(index) => {
                self.cells_mut(layer)[index] = faction;
                true
            }
            None => false,
        }
    }

    /// Read-only view of a whole layer in row-major order.
    pub fn layer(&self, layer: Layer) -> &[Faction] {
        self.cells(layer)
    }

    /// Empty cells of the `current` layer in row-major order.
    ///
    /// Computed on every call so it never goes stale.
    pub fn available_positions(&self) -> impl Iterator<Item = Position> + '_ {
        let width = self.width as usize;
        self.current
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(move |(index, _)| Position::new((index % width) as i32, (index / width) as i32))
    }

    /// Places a player on a uniformly drawn empty cell.
    ///
    /// The faction glyph is written to both layers so the placement is visible
    /// immediately and survives the next commit. Nothing is mutated on failure.
    pub fn place(
        &mut self,
        player: &mut PlayerEntity,
        rng: &dyn RngOracle,
        seed: u64,
    ) -> Result<Position, NoSpaceError> {
        let available: Vec<Position> = self.available_positions().collect();
        let index = rng.pick_index(seed, available.len()).ok_or(NoSpaceError)?;
        let position = available[index];

        self.set(position, Layer::Current, player.faction);
        self.set(position, Layer::Pending, player.faction);
        player.position = Some(position);

        Ok(position)
    }

    /// Re-derives the pending layer from the cells occupied by `players`.
    pub fn project_pending(&mut self, players: &[PlayerEntity]) {
        self.pending.fill(Faction::Empty);
        for player in players {
            if let Some(position) = player.occupied_cell() {
                self.set(position, Layer::Pending, player.faction);
            }
        }
    }

    /// Buffer swap: the pending layer becomes current, then pending is
    /// re-projected from `players` for the next turn.
    pub fn commit(&mut self, players: &[PlayerEntity]) {
        self.current.clone_from(&self.pending);
        self.project_pending(players);
    }
}
