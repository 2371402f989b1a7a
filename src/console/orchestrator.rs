//! Game orchestration between the two sides.

use super::players::Opponent;
use crate::games::tictactoe::{Board, Game, Mark, Move, Outcome};
use anyhow::{Context, Result};
use tracing::{debug, info, instrument};

/// Notifications emitted while a round is played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// The round began on an empty board.
    RoundStarted {
        /// Board before the first move.
        board: Board,
    },
    /// A move was applied.
    MoveMade {
        /// The move.
        mv: Move,
        /// Board after the move.
        board: Board,
    },
    /// The round reached a terminal outcome.
    GameOver {
        /// Final outcome.
        outcome: Outcome,
        /// Final board.
        board: Board,
    },
}

/// Receives [`GameEvent`]s as the round progresses.
pub trait GameObserver {
    /// Handles one event.
    fn on_event(&mut self, event: &GameEvent) -> Result<()>;
}

/// Alternates the player and the computer until the round ends.
pub struct Orchestrator<'a> {
    game: Game,
    player: Box<dyn Opponent + 'a>,
    ai: Box<dyn Opponent + 'a>,
}

impl<'a> Orchestrator<'a> {
    /// Creates an orchestrator for a fresh round. `player` moves first.
    pub fn new(player: Box<dyn Opponent + 'a>, ai: Box<dyn Opponent + 'a>) -> Self {
        Self {
            game: Game::new(),
            player,
            ai,
        }
    }

    /// Current round state.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Runs the round to completion and returns its outcome.
    ///
    /// The outcome is re-derived after every move, so a win ends the
    /// round before the other side is asked for a move.
    #[instrument(skip_all)]
    pub fn run(&mut self, observer: &mut dyn GameObserver) -> Result<Outcome> {
        info!("Starting round");
        observer.on_event(&GameEvent::RoundStarted {
            board: self.game.board().clone(),
        })?;

        loop {
            let mark = self.game.to_move();
            let opponent = match mark {
                Mark::Player => &mut self.player,
                Mark::Ai => &mut self.ai,
            };

            debug!(player = %opponent.name(), ?mark, "Waiting for move");
            let position = opponent.choose(self.game.board())?;
            let outcome = self
                .game
                .place(position)
                .with_context(|| format!("{} chose an illegal move", opponent.name()))?;

            observer.on_event(&GameEvent::MoveMade {
                mv: Move::new(mark, position),
                board: self.game.board().clone(),
            })?;

            if outcome.is_terminal() {
                info!(%outcome, moves = self.game.history().len(), "Round over");
                observer.on_event(&GameEvent::GameOver {
                    outcome,
                    board: self.game.board().clone(),
                })?;
                return Ok(outcome);
            }
        }
    }
}
