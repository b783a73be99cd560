//! Running tallies across rounds.

use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Win and draw counters. Survives round resets, zeroed by a full reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreBoard {
    x: u32,
    o: u32,
    draws: u32,
}

impl ScoreBoard {
    /// Creates a score board with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wins recorded for `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Draws recorded.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Total rounds finished since the last full reset.
    pub fn rounds(&self) -> u32 {
        self.x.saturating_add(self.o).saturating_add(self.draws)
    }

    pub(crate) fn record_win(&mut self, player: Player) {
        match player {
            Player::X => self.x = self.x.saturating_add(1),
            Player::O => self.o = self.o.saturating_add(1),
        }
    }

    pub(crate) fn record_draw(&mut self) {
        self.draws = self.draws.saturating_add(1);
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}
