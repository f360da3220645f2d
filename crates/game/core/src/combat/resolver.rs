//! Per-player movement resolution against the pending layer.

use crate::action::{CardinalDirection, MoveDelta};
use crate::state::{BoardState, Faction, Layer, PlayerEntity, PlayerId, PlayerStatus, Position};

use super::result::{MoveOutcome, MoveRejection, Resolution};

/// Applies `delta` to `origin`, falling back to a pure horizontal and then a
/// pure vertical step when the full move leaves the board.
///
/// Returns `None` when no variant stays in bounds.
pub fn corrected_target(
    board: &BoardState,
    origin: Position,
    delta: MoveDelta,
) -> Option<Position> {
    let naive = delta.apply(origin);
    if board.contains(naive) {
        return Some(naive);
    }

    let horizontal = delta.horizontal().apply(origin);
    if delta.dx != 0 && board.contains(horizontal) {
        return Some(horizontal);
    }

    let vertical = delta.vertical().apply(origin);
    if delta.dy != 0 && board.contains(vertical) {
        return Some(vertical);
    }

    None
}

fn can_enter(board: &BoardState, faction: Faction, position: Position) -> bool {
    board
        .get(position, Layer::Pending)
        .is_some_and(|cell| faction.can_defeat(cell))
}

/// First orthogonal neighbour of `origin` that `faction` may enter, in the
/// order `(+x, 0), (-x, 0), (0, +y), (0, -y)`.
///
/// The requested delta and its exact reverse are never tried.
pub fn redirect_target(
    board: &BoardState,
    faction: Faction,
    origin: Position,
    requested: MoveDelta,
) -> Option<Position> {
    CardinalDirection::ALL
        .into_iter()
        .map(MoveDelta::from)
        .filter(|&delta| delta != requested && delta != requested.reversed())
        .map(|delta| delta.apply(origin))
        .filter(|&candidate| board.contains(candidate))
        .find(|&candidate| can_enter(board, faction, candidate))
}

/// Resolves the intent of `players[mover]` and commits it to the pending layer.
///
/// Moves resolved earlier in the same turn are visible here, since they have
/// already been written to the pending layer and to player positions.
///
/// Never fails: rejected moves leave every player and the board untouched and
/// are reported through [`MoveOutcome::Rejected`].
pub fn resolve_move(
    players: &mut [PlayerEntity],
    mover: usize,
    delta: MoveDelta,
    board: &mut BoardState,
    turn: u32,
) -> Resolution {
    let player = &players[mover];
    let id = player.id;
    let faction = player.faction;

    if !player.is_active() {
        return Resolution::stayed(
            id,
            delta,
            player.position,
            MoveOutcome::Rejected(MoveRejection::Defeated),
        );
    }

    let Some(origin) = player.position else {
        return Resolution::stayed(
            id,
            delta,
            None,
            MoveOutcome::Rejected(MoveRejection::Unplaced),
        );
    };

    if !delta.is_valid() {
        return Resolution::stayed(
            id,
            delta,
            Some(origin),
            MoveOutcome::Rejected(MoveRejection::InvalidDelta),
        );
    }

    let Some(target) = corrected_target(board, origin, delta) else {
        return Resolution::stayed(
            id,
            delta,
            Some(origin),
            MoveOutcome::Rejected(MoveRejection::OutOfBounds),
        );
    };

    let (destination, outcome) = if can_enter(board, faction, target) {
        (target, MoveOutcome::Moved)
    } else {
        match redirect_target(board, faction, origin, delta) {
            Some(neighbour) => (neighbour, MoveOutcome::Redirected { blocked: target }),
            None => {
                return Resolution::stayed(
                    id,
                    delta,
                    Some(origin),
                    MoveOutcome::Rejected(MoveRejection::Blocked),
                );
            }
        }
    };

    let defeated = defeat_occupant(players, mover, destination, turn);

    // Keep the origin glyph if someone else still stands there.
    let origin_shared = players
        .iter()
        .enumerate()
        .any(|(index, other)| index != mover && other.occupied_cell() == Some(origin));
    if !origin_shared {
        board.set(origin, Layer::Pending, Faction::Empty);
    }
    board.set(destination, Layer::Pending, faction);
    players[mover].position = Some(destination);

    Resolution {
        player: id,
        requested: delta,
        from: Some(origin),
        to: Some(destination),
        outcome,
        defeated,
    }
}

/// Marks the living player standing on `destination` as defeated, if any.
///
/// Only reachable for a wolf entering a villager cell, since every other
/// occupied cell is rejected by the defeat table.
fn defeat_occupant(
    players: &mut [PlayerEntity],
    mover: usize,
    destination: Position,
    turn: u32,
) -> Option<PlayerId> {
    let victim = players
        .iter_mut()
        .enumerate()
        .find(|(index, other)| *index != mover && other.occupied_cell() == Some(destination))
        .map(|(_, other)| other)?;

    victim.status = PlayerStatus::Defeated { turn };
    Some(victim.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: u32, faction: Faction, x: i32, y: i32) -> PlayerEntity {
        let pseudo = if faction == Faction::Wolf { 'w' } else { 'v' };
        PlayerEntity::new(PlayerId(id), pseudo, faction, 1).with_position(Position::new(x, y))
    }

    fn board_for(width: u32, height: u32, players: &[PlayerEntity]) -> BoardState {
        let mut board = BoardState::new(width, height);
        board.project_pending(players);
        board.commit(players);
        board
    }

    #[test]
    fn moves_into_empty_cell() {
        let mut players = vec![player(0, Faction::Villager, 1, 1)];
        let mut board = board_for(3, 3, &players);

        let resolution = resolve_move(&mut players, 0, MoveDelta::new(1, 0), &mut board, 0);

        assert_eq!(resolution.outcome, MoveOutcome::Moved);
        assert_eq!(players[0].position, Some(Position::new(2, 1)));
        assert_eq!(
            board.get(Position::new(1, 1), Layer::Pending),
            Some(Faction::Empty)
        );
        assert_eq!(
            board.get(Position::new(2, 1), Layer::Pending),
            Some(Faction::Villager)
        );
        // current layer is untouched until commit
        assert_eq!(
            board.get(Position::new(1, 1), Layer::Current),
            Some(Faction::Villager)
        );
    }

    #[test]
    fn invalid_delta_is_rejected_without_mutation() {
        let mut players = vec![player(0, Faction::Wolf, 1, 1)];
        let mut board = board_for(3, 3, &players);
        let before = board.clone();

        let resolution = resolve_move(&mut players, 0, MoveDelta::new(2, 0), &mut board, 0);

        assert_eq!(
            resolution.outcome,
            MoveOutcome::Rejected(MoveRejection::InvalidDelta)
        );
        assert_eq!(players[0].position, Some(Position::new(1, 1)));
        assert_eq!(board, before);
    }

    #[test]
    fn diagonal_off_the_edge_falls_back_to_horizontal() {
        let mut players = vec![player(0, Faction::Wolf, 1, 0)];
        let mut board = board_for(3, 3, &players);

        resolve_move(&mut players, 0, MoveDelta::new(1, -1), &mut board, 0);

        assert_eq!(players[0].position, Some(Position::new(2, 0)));
    }

    #[test]
    fn diagonal_off_the_side_falls_back_to_vertical() {
        let mut players = vec![player(0, Faction::Wolf, 2, 1)];
        let mut board = board_for(3, 3, &players);

        resolve_move(&mut players, 0, MoveDelta::new(1, 1), &mut board, 0);

        assert_eq!(players[0].position, Some(Position::new(2, 2)));
    }

    #[test]
    fn move_off_the_corner_is_out_of_bounds() {
        let mut players = vec![player(0, Faction::Villager, 0, 0)];
        let mut board = board_for(3, 3, &players);

        let resolution = resolve_move(&mut players, 0, MoveDelta::new(-1, -1), &mut board, 0);

        assert_eq!(
            resolution.outcome,
            MoveOutcome::Rejected(MoveRejection::OutOfBounds)
        );
        assert_eq!(players[0].position, Some(Position::ORIGIN));
    }

    #[test]
    fn wolf_defeats_villager() {
        let mut players = vec![
            player(0, Faction::Wolf, 0, 0),
            player(1, Faction::Villager, 1, 0),
        ];
        let mut board = board_for(3, 1, &players);

        let resolution = resolve_move(&mut players, 0, MoveDelta::new(1, 0), &mut board, 4);

        assert_eq!(resolution.outcome, MoveOutcome::Moved);
        assert_eq!(resolution.defeated, Some(PlayerId(1)));
        assert_eq!(players[0].position, Some(Position::new(1, 0)));
        assert_eq!(players[1].status, PlayerStatus::Defeated { turn: 4 });
        assert_eq!(
            board.layer(Layer::Pending),
            &[Faction::Empty, Faction::Wolf, Faction::Empty]
        );
    }

    #[test]
    fn villager_cannot_enter_wolf_and_redirects() {
        // . . .
        // V W .
        // . . .
        let mut players = vec![
            player(0, Faction::Villager, 0, 1),
            player(1, Faction::Wolf, 1, 1),
        ];
        let mut board = board_for(3, 3, &players);

        let resolution = resolve_move(&mut players, 0, MoveDelta::new(1, 0), &mut board, 0);

        // (+x) is the request and (-x) its reverse, so (0, +y) comes first.
        assert_eq!(
            resolution.outcome,
            MoveOutcome::Redirected {
                blocked: Position::new(1, 1)
            }
        );
        assert_eq!(players[0].position, Some(Position::new(0, 2)));
        assert_eq!(players[1].status, PlayerStatus::Active);
    }

    #[test]
    fn blocked_everywhere_stays_in_place() {
        // W W
        // W W, wolf at (0,0) tries to go diagonal into (1,1)
        let mut players = vec![
            player(0, Faction::Wolf, 0, 0),
            player(1, Faction::Wolf, 1, 0),
            player(2, Faction::Wolf, 0, 1),
            player(3, Faction::Wolf, 1, 1),
        ];
        let mut board = board_for(2, 2, &players);
        let before = board.clone();

        let resolution = resolve_move(&mut players, 0, MoveDelta::new(1, 1), &mut board, 0);

        assert_eq!(resolution.outcome, MoveOutcome::Rejected(MoveRejection::Blocked));
        assert!(!resolution.moved());
        assert_eq!(board, before);
    }

    #[test]
    fn redirect_never_tries_reverse_direction() {
        // . W O .  villager moving west is blocked by the wolf; the only
        // free neighbour (3,0) is the reverse of the request.
        let mut players = vec![
            player(0, Faction::Wolf, 1, 0),
            player(1, Faction::Villager, 2, 0),
        ];
        let mut board = board_for(4, 1, &players);

        let resolution = resolve_move(&mut players, 1, MoveDelta::new(-1, 0), &mut board, 0);

        assert_eq!(resolution.outcome, MoveOutcome::Rejected(MoveRejection::Blocked));
        assert_eq!(players[1].position, Some(Position::new(2, 0)));
    }

    #[test]
    fn zero_delta_redirects_off_own_cell() {
        // . W .  the wolf cannot re-enter its own glyph and steps east.
        let mut players = vec![player(0, Faction::Wolf, 1, 0)];
        let mut board = board_for(3, 1, &players);

        let resolution = resolve_move(&mut players, 0, MoveDelta::ZERO, &mut board, 0);

        assert_eq!(
            resolution.outcome,
            MoveOutcome::Redirected {
                blocked: Position::new(1, 0)
            }
        );
        assert_eq!(players[0].position, Some(Position::new(2, 0)));
        assert_eq!(
            board.get(Position::new(1, 0), Layer::Pending),
            Some(Faction::Empty)
        );
        assert_eq!(
            board.get(Position::new(2, 0), Layer::Pending),
            Some(Faction::Wolf)
        );
    }

    #[test]
    fn zero_delta_on_lone_cell_is_blocked() {
        let mut players = vec![player(0, Faction::Villager, 0, 0)];
        let mut board = board_for(1, 1, &players);
        let before = board.clone();

        let resolution = resolve_move(&mut players, 0, MoveDelta::ZERO, &mut board, 0);

        assert_eq!(resolution.outcome, MoveOutcome::Rejected(MoveRejection::Blocked));
        assert_eq!(board, before);
    }

    #[test]
    fn defeated_player_does_not_move() {
        let mut players = vec![player(0, Faction::Villager, 1, 1)];
        players[0].status = PlayerStatus::Defeated { turn: 0 };
        let mut board = board_for(3, 3, &players);

        let resolution = resolve_move(&mut players, 0, MoveDelta::new(1, 0), &mut board, 0);

        assert_eq!(resolution.outcome, MoveOutcome::Rejected(MoveRejection::Defeated));
        assert_eq!(players[0].position, Some(Position::new(1, 1)));
    }

    #[test]
    fn earlier_moves_are_visible_to_later_ones() {
        // V . V  both villagers step into the middle; the second is redirected.
        let mut players = vec![
            player(0, Faction::Villager, 0, 1),
            player(1, Faction::Villager, 2, 1),
        ];
        let mut board = board_for(3, 3, &players);

        resolve_move(&mut players, 0, MoveDelta::new(1, 0), &mut board, 0);
        let second = resolve_move(&mut players, 1, MoveDelta::new(-1, 0), &mut board, 0);

        assert_eq!(players[0].position, Some(Position::new(1, 1)));
        assert_eq!(
            second.outcome,
            MoveOutcome::Redirected {
                blocked: Position::new(1, 1)
            }
        );
        assert_eq!(players[1].position, Some(Position::new(2, 2)));
    }

    #[test]
    fn origin_glyph_survives_when_shared() {
        let mut players = vec![
            player(0, Faction::Wolf, 1, 1),
            player(1, Faction::Wolf, 1, 1),
        ];
        let mut board = board_for(3, 3, &players);

        resolve_move(&mut players, 0, MoveDelta::new(1, 0), &mut board, 0);

        assert_eq!(

            board.get(Position::new(1, 1), Layer::Pending),

            Some(Faction::Wolf)

        );
        assert_eq!(
            board.get(Position::new(2, 1), Layer::Pending),
            Some(Faction::Wolf)
        );
    }
}
