//! Game driver with automatic checkpoints.
//!
//! A [`Session`] owns one [`Game`] plus the repository it checkpoints into.
//! Every operation that changes persistent state saves a snapshot keyed by the
//! current turn; queued intents are not persisted and are lost on resume.
//!
//! A failed checkpoint does not roll the game back. The in-memory game is then
//! ahead of the store until [`Session::checkpoint`] succeeds.

use skirmish_core::{
    Faction, Game, GameConfig, GameSnapshot, MoveDelta, MoveOutcome, PlayerId, Position,
    TurnReport,
};

use crate::error::{Result, RuntimeError};
use crate::repository::{RepositoryError, SnapshotRepository};

pub struct Session<R: SnapshotRepository> {
    game_id: String,
    game: Game,
    repository: R,
}

impl<R: SnapshotRepository> Session<R> {
    /// Creates a fresh game and stores its initial snapshot.
    ///
    /// Without a `seed` a random one is drawn, so placements differ per run.
    pub fn create(
        game_id: impl Into<String>,
        config: GameConfig,
        seed: Option<u64>,
        repository: R,
    ) -> Result<Self> {
        let game_id = game_id.into();
        let seed = seed.unwrap_or_else(rand::random);
        let game = Game::with_seed(config, seed)?;

        let session = Self {
            game_id,
            game,
            repository,
        };
        session.checkpoint()?;

        tracing::info!(
            game_id = %session.game_id,
            seed,
            width = config.width,
            height = config.height,
            turn_limit = config.turn_limit,
            "session created"
        );
        Ok(session)
    }

    /// Rebuilds a session from the latest stored snapshot of `game_id`.
    pub fn resume(game_id: impl Into<String>, repository: R) -> Result<Self> {
        let game_id = game_id.into();
        let snapshot = repository
            .latest(&game_id)?
            .ok_or_else(|| RuntimeError::MissingSnapshot(game_id.clone()))?;
        let game = Game::from_snapshot(snapshot)?;

        tracing::info!(
            game_id = %game_id,
            turn = game.current_turn(),
            status = %game.status(),
            "session resumed"
        );
        Ok(Self {
            game_id,
            game,
            repository,
        })
    }

    pub fn game_id(&self) -> &str {
        &self.game_id
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot()
    }

    pub fn place(
        &mut self,
        pseudo: &str,
        faction: Faction,
        sight_distance: u32,
    ) -> Result<PlayerId> {
        let id = self.game.place(pseudo, faction, sight_distance)?;
        self.checkpoint()?;
        Ok(id)
    }

    pub fn attach(
        &mut self,
        pseudo: &str,
        faction: Faction,
        sight_distance: u32,
    ) -> Result<PlayerId> {
        let id = self.game.attach(pseudo, faction, sight_distance)?;
        self.checkpoint()?;
        Ok(id)
    }

    pub fn place_player(&mut self, id: PlayerId) -> Result<Position> {
        let position = self.game.place_player(id)?;
        self.checkpoint()?;
        Ok(position)
    }

    pub fn start(&mut self) -> Result<()> {
        self.game.start()?;
        self.checkpoint()
    }

    pub fn stop(&mut self) -> Result<()> {
        self.game.stop()?;
        self.checkpoint()
    }

    pub fn register_action(
        &mut self,
        player: PlayerId,
        delta: impl Into<MoveDelta>,
    ) -> Result<()> {
        self.game.register_action(player, delta)?;
        Ok(())
    }

    /// Resolves and commits the turn, logs every resolution and checkpoints.
    ///
    /// When only the checkpoint fails the committed report is handed back
    /// inside [`RuntimeError::CheckpointFailed`].
    pub fn process_actions(&mut self) -> Result<TurnReport> {
        let report = self.game.process_actions()?;

        for resolution in &report.resolutions {
            match resolution.outcome {
                MoveOutcome::Rejected(reason) => tracing::info!(
                    game_id = %self.game_id,
                    turn = report.turn,
                    player = %resolution.player,
                    dx = resolution.requested.dx,
                    dy = resolution.requested.dy,
                    %reason,
                    "move rejected"
                ),
                outcome => tracing::info!(
                    game_id = %self.game_id,
                    turn = report.turn,
                    player = %resolution.player,
                    from = ?resolution.from,
                    to = ?resolution.to,
                    ?outcome,
                    "player moved"
                ),
            }
            if let Some(victim) = resolution.defeated {
                tracing::info!(
                    game_id = %self.game_id,
                    turn = report.turn,
                    wolf = %resolution.player,
                    villager = %victim,
                    "villager defeated"
                );
            }
        }

        if let Err(source) = self.save_snapshot() {
            tracing::warn!(
                game_id = %self.game_id,
                turn = report.turn,
                error = %source,
                "turn committed without checkpoint"
            );
            return Err(RuntimeError::CheckpointFailed {
                report: Box::new(report),
                source,
            });
        }
        if report.game_over {
            tracing::info!(
                game_id = %self.game_id,
                wolves = self.game.living(Faction::Wolf),
                villagers = self.game.living(Faction::Villager),
                "game over"
            );
        }
        Ok(report)
    }

    /// Saves the current game under its current turn.
    ///
    /// Called by every mutating operation; call it directly to retry after a
    /// failed checkpoint.
    pub fn checkpoint(&self) -> Result<()> {
        Ok(self.save_snapshot()?)
    }

    fn save_snapshot(&self) -> std::result::Result<(), RepositoryError> {
        let turn = self.game.current_turn();
        self.repository
            .save(&self.game_id, turn, &self.game.snapshot())?;
        tracing::debug!(game_id = %self.game_id, turn, "checkpoint saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};

    use super::*;
    use crate::repository::{self, InMemorySnapshotRepo};

    /// In-memory store whose saves can be switched off.
    #[derive(Default)]
    struct FlakyRepo {
        inner: InMemorySnapshotRepo,
        refuse_saves: AtomicBool,
    }

    impl SnapshotRepository for FlakyRepo {
        fn save(
            &self,
            game_id: &str,
            turn: u32,
            snapshot: &GameSnapshot,
        ) -> repository::Result<()> {
            if self.refuse_saves.load(Ordering::SeqCst) {
                return Err(RepositoryError::Serialization("disk full".into()));
            }
            self.inner.save(game_id, turn, snapshot)
        }

        fn load(&self, game_id: &str, turn: u32) -> repository::Result<Option<GameSnapshot>> {
            self.inner.load(game_id, turn)
        }

        fn exists(&self, game_id: &str, turn: u32) -> bool {
            self.inner.exists(game_id, turn)
        }

        fn delete(&self, game_id: &str, turn: u32) -> repository::Result<()> {
            self.inner.delete(game_id, turn)
        }

        fn list_turns(&self, game_id: &str) -> repository::Result<Vec<u32>> {
            self.inner.list_turns(game_id)
        }
    }

    fn session() -> Session<InMemorySnapshotRepo> {
        Session::create(
            "test",
            GameConfig::new(3, 6, 4, 4),
            Some(11),
            InMemorySnapshotRepo::new(),
        )
        .unwrap()
    }

    #[test]
    fn create_stores_initial_snapshot() {
        let session = session();
        assert_eq!(session.repository().list_turns("test").unwrap(), vec![0]);
        assert_eq!(session.game().seed(), 11);
    }

    #[test]
    fn engine_errors_are_wrapped() {
        let mut session = session();
        assert!(matches!(
            session.register_action(PlayerId(0), (1, 0)),
            Err(RuntimeError::Turn(_))
        ));
        assert!(matches!(
            session.place("", Faction::Wolf, 1),
            Err(RuntimeError::Place(_))
        ));
    }

    #[test]
    fn every_turn_is_checkpointed() {
        let mut session = session();
        let wolf = session.place("a", Faction::Wolf, 1).unwrap();
        session.place("A", Faction::Villager, 1).unwrap();
        session.start().unwrap();

        for _ in 0..3 {
            session.register_action(wolf, (0, 1)).unwrap();
            session.process_actions().unwrap();
        }

        assert_eq!(
            session.repository().list_turns("test").unwrap(),
            vec![0, 1, 2, 3]
        );
        assert_eq!(
            session.repository().latest("test").unwrap(),
            Some(session.snapshot())
        );
    }

    #[test]
    fn failed_checkpoint_returns_committed_report() {
        let mut session = Session::create(
            "flaky",
            GameConfig::new(3, 6, 4, 4),
            Some(11),
            FlakyRepo::default(),
        )
        .unwrap();
        let wolf = session.place("a", Faction::Wolf, 1).unwrap();
        session.start().unwrap();

        session.repository().refuse_saves.store(true, Ordering::SeqCst);
        session.register_action(wolf, (0, 1)).unwrap();
        let Err(RuntimeError::CheckpointFailed { report, .. }) = session.process_actions() else {
            panic!("expected a checkpoint failure");
        };

        assert_eq!(report.turn, 0);
        assert_eq!(report.resolutions.len(), 1);
        assert_eq!(session.game().current_turn(), 1);
        assert_eq!(session.repository().list_turns("flaky").unwrap(), vec![0]);

        session.repository().refuse_saves.store(false, Ordering::SeqCst);
        session.checkpoint().unwrap();
        assert_eq!(
            session.repository().latest("flaky").unwrap(),
            Some(session.snapshot())
        );
    }
}
