//! Results of a move attempt.
//!
//! Invalid moves are expected input from a UI (stray clicks, key mashing
//! after a win), so they come back as a value rather than an error.

use crate::position::Position;
use crate::rules::WinLine;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Why a move attempt left the engine untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// The round already ended in a win or draw.
    #[display("Round is already over")]
    GameOver,
    /// The index does not name a square.
    #[display("Position {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),
    /// The square already holds a mark.
    #[display("{} is already occupied", _0)]
    Occupied(Position),
}

/// Outcome of [`Engine::attempt_move`](crate::Engine::attempt_move).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Nothing changed.
    Rejected(Rejection),
    /// Mark placed; the round continues with this player to move.
    Continue(Player),
    /// Mark placed and it completed a line.
    Win {
        /// The player who moved.
        player: Player,
        /// The completed line.
        line: WinLine,
    },
    /// Mark placed on the last empty square with no line.
    Draw,
}

impl MoveOutcome {
    /// True unless the attempt was rejected.
    pub fn is_accepted(&self) -> bool {
        !matches!(self, MoveOutcome::Rejected(_))
    }

    /// True when the move ended the round.
    pub fn is_terminal(&self) -> bool {
        matches!(self, MoveOutcome::Win { .. } | MoveOutcome::Draw)
    }
}

impl std::fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveOutcome::Rejected(reason) => write!(f, "Rejected: {}", reason),
            MoveOutcome::Continue(next) => write!(f, "Player {}'s turn", next),
            MoveOutcome::Win { player, line } => {
                let [a, b, c] = line.indices();
                write!(f, "Player {} wins on [{}, {}, {}]", player, a, b, c)
            }
            MoveOutcome::Draw => write!(f, "Draw"),
        }
    }
}
