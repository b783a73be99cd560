//! The round-and-score state machine.

use crate::invariants::{EngineInvariants, InvariantSet};
use crate::outcome::{MoveOutcome, Rejection};
use crate::position::Position;
use crate::rules::{self, WinLine};
use crate::score::ScoreBoard;
use crate::types::{Board, GamePhase, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Tic-tac-toe engine: one board, turn order, phase, and running scores.
///
/// The engine is synchronous and performs no I/O. A presentation layer
/// drives it through [`attempt_move`](Self::attempt_move),
/// [`reset_round`](Self::reset_round) and [`reset_all`](Self::reset_all),
/// and renders [`snapshot`](Self::snapshot).
///
/// A finished round stays finished until one of the reset operations is
/// called; the engine never resets itself.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) phase: GamePhase,
    pub(crate) winning_line: Option<WinLine>,
    pub(crate) scores: ScoreBoard,
}

/// Read-only copy of the engine state for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// The board.
    pub board: Board,
    /// Player to move (the mover of the final mark once the round is over).
    pub current_player: Player,
    /// Round phase.
    pub phase: GamePhase,
    /// Completed line, present only when `phase` is `Won`.
    pub winning_line: Option<WinLine>,
    /// Running tallies.
    pub scores: ScoreBoard,
}

impl Engine {
    /// Creates an engine with an empty board, X to move and zero scores.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempts to place the current player's mark at `index` (0-8).
    ///
    /// Checks run in order: round over, index range, square occupancy. Any
    /// failure returns [`MoveOutcome::Rejected`] and leaves every field
    /// untouched.
    ///
    /// After the mark is placed the board is checked for a completed line
    /// first, then for a full board; only if neither holds does the turn
    /// pass to the opponent.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn attempt_move(&mut self, index: usize) -> MoveOutcome {
        if self.phase.is_terminal() {
            debug!(phase = ?self.phase, "Move rejected, round over");
            return MoveOutcome::Rejected(Rejection::GameOver);
        }

        let Some(pos) = Position::from_index(index) else {
            debug!("Move rejected, index out of range");
            return MoveOutcome::Rejected(Rejection::OutOfRange(index));
        };

        if !self.board.is_empty(pos) {
            debug!(position = %pos, "Move rejected, square occupied");
            return MoveOutcome::Rejected(Rejection::Occupied(pos));
        }

        let player = self.current_player;
        self.board.set(pos, Square::Occupied(player));

        let outcome = if let Some(line) = rules::find_winning_line(&self.board) {
            self.phase = GamePhase::Won(player);
            self.winning_line = Some(line);
            self.scores.record_win(player);
            info!(%player, line = ?line.indices(), "Round won");
            MoveOutcome::Win { player, line }
        } else if rules::is_full(&self.board) {
            self.phase = GamePhase::Draw;
            self.scores.record_draw();
            info!("Round drawn");
            MoveOutcome::Draw
        } else {
            self.current_player = player.opponent();
            MoveOutcome::Continue(self.current_player)
        };

        self.debug_check_invariants();
        debug!(position = %pos, %outcome, "Move applied");
        outcome
    }

    /// Clears the board for a new round. Scores are kept.
    #[instrument(skip(self))]
    pub fn reset_round(&mut self) {
        self.board = Board::new();
        self.current_player = Player::X;
        self.phase = GamePhase::InProgress;
        self.winning_line = None;
        debug!("Round reset");
    }

    /// Clears the board and zeroes every score counter.
    #[instrument(skip(self))]
    pub fn reset_all(&mut self) {
        self.reset_round();
        self.scores.clear();
        info!("Scores cleared");
    }

    /// Returns a copy of the state for rendering.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            current_player: self.current_player,
            phase: self.phase,
            winning_line: self.winning_line,
            scores: self.scores,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the round phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Returns the completed line of a won round.
    pub fn winning_line(&self) -> Option<WinLine> {
        self.winning_line
    }

    /// Returns the running tallies.
    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    /// True once the round is won or drawn.
    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Empty positions that would currently be accepted.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_over() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    fn debug_check_invariants(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = EngineInvariants::check_all(self)
        {
            panic!("Engine invariants violated: {:?}", violations);
        }
    }
}
