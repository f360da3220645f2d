use crate::action::{ActionRecord, MoveDelta};
use crate::combat::{Resolution, resolve_move};
use crate::state::PlayerId;

use super::{Game, GameStatus, TurnError};

/// Summary of one committed turn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    /// Turn number the intents were resolved in (before the increment).
    pub turn: u32,
    /// One entry per drained intent, in resolution order.
    pub resolutions: Vec<Resolution>,
    /// True when this commit reached the turn limit and ended the game.
    pub game_over: bool,
}

/// Turn state machine methods for Game.
impl Game {
    /// `NotStarted -> Active`, provided every attached player is on the board.
    pub fn start(&mut self) -> Result<(), TurnError> {
        match self.status {
            GameStatus::Active => return Err(TurnError::AlreadyActive),
            GameStatus::Ended => return Err(TurnError::AlreadyEnded),
            GameStatus::NotStarted => {}
        }

        if let Some(player) = self.players.iter().find(|player| !player.is_placed()) {
            tracing::warn!(player = %player.id, "cannot start: player has no position");
            return Err(TurnError::UnplacedPlayer(player.id));
        }

        self.status = GameStatus::Active;
        self.current_turn = 0;
        self.board.project_pending(&self.players);

        tracing::info!(
            players = self.players.len(),
            turn_limit = self.config.turn_limit,
            "game started"
        );
        Ok(())
    }

    /// `Active -> Ended`.
    pub fn stop(&mut self) -> Result<(), TurnError> {
        if self.status != GameStatus::Active {
            return Err(TurnError::NotActive);
        }
        self.status = GameStatus::Ended;
        tracing::info!(turn = self.current_turn, "game stopped");
        Ok(())
    }

    /// Queues the intent of `player` for the current turn, replacing any
    /// earlier intent of the same player. The delta is validated during
    /// resolution, not here.
    pub fn register_action(
        &mut self,
        player: PlayerId,
        delta: impl Into<MoveDelta>,
    ) -> Result<(), TurnError> {
        if self.status != GameStatus::Active {
            return Err(TurnError::NotActive);
        }
        let entity = self.player(player).ok_or(TurnError::UnknownPlayer(player))?;
        if !entity.is_active() {
            return Err(TurnError::PlayerDefeated(player));
        }

        self.queue.register(player, delta.into());
        Ok(())
    }

    /// Resolves every queued intent in registration order and commits the turn.
    ///
    /// Either the whole turn is resolved and committed or, when the game is
    /// not active, nothing changes.
    pub fn process_actions(&mut self) -> Result<TurnReport, TurnError> {
        if self.status != GameStatus::Active {
            return Err(TurnError::NotActive);
        }

        let turn = self.current_turn;
        self.board.project_pending(&self.players);

        let intents = self.queue.drain();
        let mut resolutions = Vec::with_capacity(intents.len());

        for (player, delta) in intents {
            let Some(index) = self.index_of(player) else {
                tracing::error!(%player, "queued intent for unknown player");
                continue;
            };

            let resolution = resolve_move(&mut self.players, index, delta, &mut self.board, turn);
            tracing::debug!(
                %player,
                from = ?resolution.from,
                to = ?resolution.to,
                outcome = ?resolution.outcome,
                defeated = ?resolution.defeated,
                "resolved move"
            );

            self.history.push(ActionRecord::new(player, delta, turn));
            resolutions.push(resolution);
        }

        self.board.commit(&self.players);
        self.current_turn += 1;
        tracing::info!(turn, resolved = resolutions.len(), "turn committed");

        let game_over = self.current_turn >= self.config.turn_limit;
        if game_over {
            self.status = GameStatus::Ended;
            tracing::info!(turns = self.current_turn, "turn limit reached, game over");
        }

        Ok(TurnReport {
            turn,
            resolutions,
            game_over,
        })
    }
}
