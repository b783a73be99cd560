//! Mark balance invariant: X never trails O and leads by at most one.

use super::Invariant;
use crate::{Engine, Player};

/// Invariant: `count(X) == count(O)` or `count(X) == count(O) + 1`.
///
/// Holds because X always moves first and turns alternate.
pub struct MarkBalanceInvariant;

impl Invariant<Engine> for MarkBalanceInvariant {
    fn holds(engine: &Engine) -> bool {
        let x = engine.board().count(Player::X);
        let o = engine.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O, or one more"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Square};

    #[test]
    fn test_holds_after_each_move() {
        let mut engine = Engine::new();
        for index in [0, 1, 2, 3] {
            engine.attempt_move(index);
            assert!(MarkBalanceInvariant::holds(&engine));
        }
    }

    #[test]
    fn test_o_ahead_violates() {
        let mut engine = Engine::new();
        engine.board.set(Position::Center, Square::Occupied(Player::O));
        assert!(!MarkBalanceInvariant::holds(&engine));
    }

    #[test]
    fn test_x_two_ahead_violates() {
        let mut engine = Engine::new();
        engine.board.set(Position::TopLeft, Square::Occupied(Player::X));
        engine.board.set(Position::TopRight, Square::Occupied(Player::X));
        assert!(!MarkBalanceInvariant::holds(&engine));
    }
}
