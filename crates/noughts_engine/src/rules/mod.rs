//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! the engine so they can be tested and reused without any round state.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WIN_PATTERNS, WinLine, find_winning_line};
