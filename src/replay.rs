//! Headless replay of a move list.

use noughts_engine::{Engine, GameSnapshot, MoveOutcome};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// One replayed move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayStep {
    /// The index that was attempted.
    pub index: usize,
    /// What the engine returned.
    pub outcome: MoveOutcome,
}

/// Result of feeding a move list through a fresh engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayReport {
    /// Every attempt, in order, including rejected ones.
    pub steps: Vec<ReplayStep>,
    /// Engine state after the last attempt.
    pub snapshot: GameSnapshot,
}

impl ReplayReport {
    /// The last outcome, if any moves were given.
    pub fn final_outcome(&self) -> Option<MoveOutcome> {
        self.steps.last().map(|step| step.outcome)
    }

    /// Pretty JSON rendering.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Plays `moves` on a fresh engine.
///
/// Rejected attempts are recorded and skipped, just like stray clicks in
/// the interactive game. With `auto_reset` set, a finished round is cleared
/// before the next attempt, so a long list can span several rounds and
/// accumulate scores.
#[instrument(skip(moves), fields(moves = moves.len()))]
pub fn replay(moves: &[usize], auto_reset: bool) -> ReplayReport {
    let mut engine = Engine::new();
    let mut steps = Vec::with_capacity(moves.len());

    for &index in moves {
        if auto_reset && engine.is_over() {
            engine.reset_round();
        }
        let outcome = engine.attempt_move(index);
        steps.push(ReplayStep { index, outcome });
    }

    let snapshot = engine.snapshot();
    info!(phase = %snapshot.phase, "Replay finished");
    ReplayReport { steps, snapshot }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_engine::{GamePhase, Player, Rejection};

    #[test]
    fn test_replay_records_rejections() {
        let report = replay(&[4, 4, 12], false);
        assert_eq!(report.steps.len(), 3);
        assert_eq!(report.steps[0].outcome, MoveOutcome::Continue(Player::O));
        assert!(matches!(
            report.steps[1].outcome,
            MoveOutcome::Rejected(Rejection::Occupied(_))
        ));
        assert_eq!(
            report.final_outcome(),
            Some(MoveOutcome::Rejected(Rejection::OutOfRange(12)))
        );
        assert_eq!(report.snapshot.current_player, Player::O);
    }

    #[test]
    fn test_replay_empty_list() {
        let report = replay(&[], false);
        assert_eq!(report.final_outcome(), None);
        assert_eq!(report.snapshot.phase, GamePhase::InProgress);
    }
}
