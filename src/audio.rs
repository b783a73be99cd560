//! Audio feedback for move outcomes.
//!
//! The engine never sees any of this. The adapter picks a [`Cue`] from each
//! [`MoveOutcome`] and hands it to an [`AudioSink`] when sound is enabled.

use noughts_engine::MoveOutcome;
use std::io::Write;
use std::sync::{Arc, Mutex};
use tracing::{debug, instrument, warn};

/// An audible event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Cue {
    /// A mark was placed and the round continues.
    Move,
    /// A line was completed.
    Win,
    /// The board filled with no line.
    Draw,
}

impl Cue {
    /// Picks the cue for a move outcome. Rejected moves are silent.
    #[instrument]
    pub fn for_outcome(outcome: &MoveOutcome) -> Option<Cue> {
        match outcome {
            MoveOutcome::Rejected(_) => None,
            MoveOutcome::Continue(_) => Some(Cue::Move),
            MoveOutcome::Win { .. } => Some(Cue::Win),
            MoveOutcome::Draw => Some(Cue::Draw),
        }
    }
}

/// Sound and music switches owned by the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioToggles {
    /// Cues are played only when set.
    pub sound: bool,
    /// Background music runs only when set.
    pub music: bool,
}

impl Default for AudioToggles {
    fn default() -> Self {
        Self {
            sound: true,
            music: true,
        }
    }
}

/// Something that can make noise.
///
/// Failures stay inside the sink; playback problems must never reach the
/// game state.
pub trait AudioSink: Send {
    /// Plays a single cue.
    fn play(&mut self, cue: Cue);

    /// Starts or stops background music.
    fn set_music(&mut self, playing: bool);
}

/// Rings the terminal bell for cues.
///
/// A terminal has no music channel, so music state is only tracked and
/// logged.
pub struct TerminalBell<W: Write + Send> {
    out: W,
    music: bool,
}

impl<W: Write + Send> TerminalBell<W> {
    /// Creates a bell that writes to `out`.
    pub fn new(out: W) -> Self {
        Self { out, music: false }
    }

    /// Whether music is currently marked as playing.
    pub fn music(&self) -> bool {
        self.music
    }

    fn ring(&mut self, times: usize) -> std::io::Result<()> {
        for _ in 0..times {
            self.out.write_all(b"\x07")?;
        }
        self.out.flush()
    }
}

impl TerminalBell<std::io::Stdout> {
    /// Creates a bell on standard output.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> AudioSink for TerminalBell<W> {
    #[instrument(skip(self))]
    fn play(&mut self, cue: Cue) {
        let times = match cue {
            Cue::Move => 1,
            Cue::Win => 3,
            Cue::Draw => 2,
        };
        if let Err(e) = self.ring(times) {
            warn!(error = %e, %cue, "Failed to ring terminal bell");
        }
    }

    #[instrument(skip(self))]
    fn set_music(&mut self, playing: bool) {
        self.music = playing;
        debug!(playing, "Music state changed");
    }
}

/// A recorded sink event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkEvent {
    /// A cue was played.
    Played(Cue),
    /// Music was switched on or off.
    Music(bool),
}

/// In-memory sink that remembers everything it was asked to do.
///
/// Clones share one log, so a test can keep a handle while the adapter owns
/// the sink.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<SinkEvent>>>,
}

impl RecordingSink {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every event recorded so far.
    pub fn events(&self) -> Vec<SinkEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Returns only the played cues.
    pub fn cues(&self) -> Vec<Cue> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                SinkEvent::Played(cue) => Some(cue),
                SinkEvent::Music(_) => None,
            })
            .collect()
    }

    fn push(&self, event: SinkEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl AudioSink for RecordingSink {
    fn play(&mut self, cue: Cue) {
        self.push(SinkEvent::Played(cue));
    }

    fn set_music(&mut self, playing: bool) {
        self.push(SinkEvent::Music(playing));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_engine::{Engine, Player, Position, Rejection};

    #[test]
    fn test_cue_mapping() {
        assert_eq!(
            Cue::for_outcome(&MoveOutcome::Rejected(Rejection::Occupied(Position::Center))),
            None
        );
        assert_eq!(
            Cue::for_outcome(&MoveOutcome::Continue(Player::O)),
            Some(Cue::Move)
        );
        assert_eq!(Cue::for_outcome(&MoveOutcome::Draw), Some(Cue::Draw));

        let mut engine = Engine::new();
        let mut last = MoveOutcome::Draw;
        for index in [0, 3, 1, 4, 2] {
            last = engine.attempt_move(index);
        }
        assert_eq!(Cue::for_outcome(&last), Some(Cue::Win));
    }

    #[test]
    fn test_terminal_bell_rings_per_cue() {
        let mut bell = TerminalBell::new(Vec::new());
        bell.play(Cue::Move);
        bell.play(Cue::Win);
        bell.play(Cue::Draw);
        assert_eq!(bell.out, b"\x07".repeat(6));
    }

    #[test]
    fn test_terminal_bell_tracks_music() {
        let mut bell = TerminalBell::new(Vec::new());
        bell.set_music(true);
        assert!(bell.music());
        bell.set_music(false);
        assert!(!bell.music());
        assert!(bell.out.is_empty());
    }

    #[test]
    fn test_recording_sink_shares_log_between_clones() {
        let handle = RecordingSink::new();
        let mut sink = handle.clone();
        sink.play(Cue::Move);
        sink.set_music(false);
        sink.play(Cue::Win);

        assert_eq!(
            handle.events(),
            vec![
                SinkEvent::Played(Cue::Move),
                SinkEvent::Music(false),
                SinkEvent::Played(Cue::Win)
            ]
        );
        assert_eq!(handle.cues(), vec![Cue::Move, Cue::Win]);
    }
}
