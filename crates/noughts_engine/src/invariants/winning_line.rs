//! Winning line invariant: a line is recorded exactly when a round is won.

use super::Invariant;
use crate::{Engine, GamePhase, Square};

/// Invariant: `winning_line` is `Some` iff the phase is `Won`, and the
/// recorded line belongs to the winner and is actually on the board.
pub struct WinningLineInvariant;

impl Invariant<Engine> for WinningLineInvariant {
    fn holds(engine: &Engine) -> bool {
        match (engine.phase(), engine.winning_line()) {
            (GamePhase::Won(winner), Some(line)) => {
                line.player == winner
                    && line
                        .positions
                        .iter()
                        .all(|pos| engine.board().get(*pos) == Square::Occupied(winner))
            }
            (GamePhase::Won(_), None) => false,
            (_, Some(_)) => false,
            (_, None) => true,
        }
    }

    fn description() -> &'static str {
        "Winning line is present exactly when the round is won"
    }
}
