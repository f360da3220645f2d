//! End-to-end turns on the default 10x5 board.

use skirmish_core::{
    Faction, Game, GameConfig, GameStatus, Layer, MoveOutcome, PlaceError, PlayerId, Position,
    TurnError,
};

fn default_game(seed: u64) -> (Game, [PlayerId; 4]) {
    let mut game = Game::with_seed(GameConfig::default(), seed).unwrap();
    let ids = [
        game.place("a", Faction::Wolf, 2).unwrap(),
        game.place("b", Faction::Wolf, 2).unwrap(),
        game.place("A", Faction::Villager, 2).unwrap(),
        game.place("B", Faction::Villager, 2).unwrap(),
    ];
    (game, ids)
}

#[test]
fn one_turn_moves_wolf_and_records_both_intents() {
    for seed in 0..32 {
        let (mut game, [wolf, _, villager, _]) = default_game(seed);
        game.start().unwrap();
        let before = game.player(wolf).unwrap().position.unwrap();

        game.register_action(wolf, (-1, 0)).unwrap();
        game.register_action(villager, (1, 0)).unwrap();
        let report = game.process_actions().unwrap();

        assert_eq!(game.current_turn(), 1);
        assert_eq!(report.resolutions.len(), 2);

        let after = game.player(wolf).unwrap().position.unwrap();
        assert!(
            after.x == before.x - 1 || after.x == before.x,
            "seed {seed}: wolf went from {before} to {after}"
        );

        let records: Vec<_> = game.history().iter().map(|r| r.player_id).collect();
        assert_eq!(records, vec![wolf, villager]);
        assert!(game.history().iter().all(|r| r.turn == 0));
    }
}

#[test]
fn registering_before_start_is_refused() {
    let (mut game, [wolf, ..]) = default_game(1);
    assert_eq!(game.register_action(wolf, (1, 0)), Err(TurnError::NotActive));
    assert!(game.pending_actions().is_empty());
}

#[test]
fn full_single_cell_board_keeps_lone_player() {
    let mut game = Game::new(GameConfig::new(10, 1, 1, 8)).unwrap();
    let lone = game.place("a", Faction::Villager, 1).unwrap();

    assert!(matches!(
        game.place("b", Faction::Wolf, 1),
        Err(PlaceError::NoSpace(_))
    ));
    assert_eq!(game.player(lone).unwrap().position, Some(Position::ORIGIN));
    assert_eq!(game.players().len(), 1);
}

#[test]
fn wolf_hunts_villager_across_turns() {
    // W . O on a 3x1 strip: the villager is trapped against the edge.
    let mut game = Game::with_seed(GameConfig::new(10, 3, 1, 2), 0).unwrap();
    let wolf = game.place("w", Faction::Wolf, 1).unwrap();
    let villager = game.place("v", Faction::Villager, 1).unwrap();

    // Force the layout through a snapshot so the test does not depend on the PRNG.
    let mut snapshot = game.snapshot();
    snapshot.players[0].position = Some(Position::new(0, 0));
    snapshot.players[1].position = Some(Position::new(2, 0));
    snapshot.current = vec![Faction::Wolf, Faction::Empty, Faction::Villager];
    let mut game = Game::from_snapshot(snapshot).unwrap();
    game.start().unwrap();

    game.register_action(wolf, (1, 0)).unwrap();
    game.process_actions().unwrap();
    assert_eq!(game.player(wolf).unwrap().position, Some(Position::new(1, 0)));

    game.register_action(villager, (-1, 0)).unwrap();
    let report = game.process_actions().unwrap();
    assert_eq!(
        report.resolutions[0].outcome,
        MoveOutcome::Rejected(skirmish_core::MoveRejection::Blocked)
    );

    game.register_action(wolf, (1, 0)).unwrap();
    let report = game.process_actions().unwrap();
    assert_eq!(report.resolutions[0].defeated, Some(villager));
    assert_eq!(game.living(Faction::Villager), 0);
    assert_eq!(
        game.board().layer(Layer::Current),
        &[Faction::Empty, Faction::Empty, Faction::Wolf]
    );
}

#[test]
fn game_runs_until_turn_limit() {
    let (mut game, ids) = default_game(3);
    game.start().unwrap();

    for turn in 0..game.turn_limit() {
        for &id in &ids {
            if game.player(id).unwrap().is_active() {
                game.register_action(id, (0, 1)).unwrap();
            }
        }
        let report = game.process_actions().unwrap();
        assert_eq!(report.turn, turn);
        assert_eq!(report.game_over, turn + 1 == game.turn_limit());
    }

    assert_eq!(game.status(), GameStatus::Ended);
    assert_eq!(game.current_turn(), 10);
    assert_eq!(game.register_action(ids[0], (1, 0)), Err(TurnError::NotActive));
}

#[test]
fn zero_delta_steps_wolf_off_its_own_cell() {
    let mut game = Game::with_seed(GameConfig::new(10, 3, 1, 1), 0).unwrap();
    let wolf = game.place("w", Faction::Wolf, 1).unwrap();

    let mut snapshot = game.snapshot();
    snapshot.players[0].position = Some(Position::new(1, 0));
    snapshot.current = vec![Faction::Empty, Faction::Wolf, Faction::Empty];
    let mut game = Game::from_snapshot(snapshot).unwrap();
    game.start().unwrap();

    game.register_action(wolf, (0, 0)).unwrap();
    let report = game.process_actions().unwrap();

    assert_eq!(
        report.resolutions[0].outcome,
        MoveOutcome::Redirected {
            blocked: Position::new(1, 0)
        }
    );
    assert_eq!(game.player(wolf).unwrap().position, Some(Position::new(2, 0)));
    assert_eq!(game.history().len(), 1);
}
