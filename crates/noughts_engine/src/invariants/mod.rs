//! First-class invariants for the engine.
//!
//! Invariants are logical properties that must hold after every engine
//! operation. The engine checks them in debug builds; each one can also be
//! tested on its own.

pub mod mark_balance;
pub mod turn_order;
pub mod winning_line;

pub use mark_balance::MarkBalanceInvariant;
pub use turn_order::TurnOrderInvariant;
pub use winning_line::WinningLineInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together. Implemented for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Every engine invariant as a composable set.
pub type EngineInvariants = (MarkBalanceInvariant, TurnOrderInvariant, WinningLineInvariant);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Engine, Player, Position, Square};

    #[test]
    fn test_invariant_set_holds_for_new_engine() {
        assert!(EngineInvariants::check_all(&Engine::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_through_a_round() {
        let mut engine = Engine::new();
        for index in [4, 0, 8, 2, 1, 7, 6, 3, 5] {
            engine.attempt_move(index);
            assert!(EngineInvariants::check_all(&engine).is_ok());
        }
        engine.reset_round();
        assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_each_violation() {
        let mut engine = Engine::new();
        engine.board.set(Position::TopLeft, Square::Occupied(Player::O));
        engine.board.set(Position::Center, Square::Occupied(Player::O));

        let violations = EngineInvariants::check_all(&engine).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert_eq!(
            violations[0].description,
            MarkBalanceInvariant::description()
        );
    }
}
