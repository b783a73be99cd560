//! Turn order invariant: the player to move follows from the mark counts.

use super::Invariant;
use crate::{Engine, Player};

/// Invariant: while a round is in progress, X is to move when the mark
/// counts are equal and O is to move otherwise.
///
/// Terminal rounds are exempt; the mover of the final mark stays current.
pub struct TurnOrderInvariant;

impl Invariant<Engine> for TurnOrderInvariant {
    fn holds(engine: &Engine) -> bool {
        if engine.is_over() {
            return true;
        }

        let x = engine.board().count(Player::X);
        let o = engine.board().count(Player::O);
        let expected = if x == o { Player::X } else { Player::O };
        engine.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
