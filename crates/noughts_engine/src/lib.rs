//! Noughts engine - tic-tac-toe rules, turn order and score keeping.
//!
//! The engine is a plain owned value with no I/O. A presentation layer
//! translates input into [`Engine::attempt_move`] calls, reacts to the
//! returned [`MoveOutcome`], and renders [`Engine::snapshot`].
//!
//! # Example
//!
//! ```
//! use noughts_engine::{Engine, GamePhase, MoveOutcome, Player};
//!
//! let mut engine = Engine::new();
//! for index in [0, 3, 1, 4] {
//!     engine.attempt_move(index);
//! }
//! let outcome = engine.attempt_move(2);
//! assert!(matches!(outcome, MoveOutcome::Win { player: Player::X, .. }));
//! assert_eq!(engine.phase(), GamePhase::Won(Player::X));
//! assert_eq!(engine.scores().wins(Player::X), 1);
//!
//! engine.reset_round();
//! assert_eq!(engine.phase(), GamePhase::InProgress);
//! assert_eq!(engine.scores().wins(Player::X), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
pub mod invariants;
mod outcome;
mod position;
pub mod rules;
mod score;
mod types;

pub use engine::{Engine, GameSnapshot};
pub use outcome::{MoveOutcome, Rejection};
pub use position::Position;
pub use rules::{WIN_PATTERNS, WinLine};
pub use score::ScoreBoard;
pub use types::{Board, GamePhase, Player, Square};
