//! Presentation adapter between player input and the engine.

use crate::audio::{AudioSink, AudioToggles, Cue};
use crate::config::Settings;
use crate::event::AppEvent;
use crate::input::{self, Command};
use crate::timer::ResetTimer;
use noughts_engine::{Engine, GamePhase, GameSnapshot, MoveOutcome, Position};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Whether the play loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading events.
    Continue,
    /// Leave the loop.
    Quit,
}

/// Owns the engine and every side effect around it: audio, the deferred
/// round reset, the cursor and the status line.
///
/// All engine calls go through here, one event at a time.
pub struct GameAdapter {
    engine: Engine,
    toggles: AudioToggles,
    sink: Box<dyn AudioSink>,
    timer: ResetTimer,
    cursor: Position,
    status: String,
}

impl GameAdapter {
    /// Creates an adapter with a fresh engine.
    ///
    /// `events` receives [`AppEvent::AutoReset`] when a finished round's
    /// delay elapses.
    #[instrument(skip(sink, events))]
    pub fn new(
        settings: &Settings,
        sink: Box<dyn AudioSink>,
        events: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        let toggles = AudioToggles {
            sound: *settings.sound_enabled(),
            music: *settings.music_enabled(),
        };
        let mut adapter = Self {
            engine: Engine::new(),
            toggles,
            sink,
            timer: ResetTimer::new(settings.auto_reset_delay(), events),
            cursor: Position::Center,
            status: String::new(),
        };
        adapter.sink.set_music(toggles.music);
        adapter.status = adapter.turn_message();
        adapter
    }

    /// Routes one player command.
    #[instrument(skip(self))]
    pub fn handle(&mut self, command: Command) -> Flow {
        match command {
            Command::SelectCell(index) => {
                self.select_cell(index);
            }
            Command::SelectCursor => {
                self.select_cursor();
            }
            Command::MoveCursor(direction) => {
                self.cursor = input::move_cursor(self.cursor, direction);
            }
            Command::ResetRound => self.reset_round(),
            Command::ResetAll => self.reset_all(),
            Command::ToggleSound => self.toggle_sound(),
            Command::ToggleMusic => self.toggle_music(),
            Command::Quit => {
                info!("Player quit");
                return Flow::Quit;
            }
        }
        Flow::Continue
    }

    /// Routes one loop event.
    #[instrument(skip(self))]
    pub fn handle_event(&mut self, event: AppEvent) -> Flow {
        match event {
            AppEvent::Command(command) => self.handle(command),
            AppEvent::AutoReset(generation) => {
                self.auto_reset(generation);
                Flow::Continue
            }
            AppEvent::Redraw => Flow::Continue,
            AppEvent::InputClosed => Flow::Quit,
        }
    }

    /// Plays the current player's mark at `index` and reacts to the outcome.
    #[instrument(skip(self))]
    pub fn select_cell(&mut self, index: usize) -> MoveOutcome {
        let outcome = self.engine.attempt_move(index);

        if let Some(pos) = Position::from_index(index)
            && outcome.is_accepted()
        {
            self.cursor = pos;
        }
        if let Some(cue) = Cue::for_outcome(&outcome) {
            self.play(cue);
        }

        self.status = match outcome {
            MoveOutcome::Rejected(reason) => reason.to_string(),
            MoveOutcome::Continue(_) => self.turn_message(),
            MoveOutcome::Win { player, .. } => {
                format!("Player {} wins! New round shortly.", player)
            }
            MoveOutcome::Draw => "It's a draw! New round shortly.".to_string(),
        };

        if outcome.is_terminal() {
            self.timer.schedule();
        }
        debug!(%outcome, "Move handled");
        outcome
    }

    /// Plays the square under the cursor.
    pub fn select_cursor(&mut self) -> MoveOutcome {
        self.select_cell(self.cursor.to_index())
    }

    /// Clears the board on request, dropping any pending auto-reset.
    #[instrument(skip(self))]
    pub fn reset_round(&mut self) {
        self.timer.cancel();
        self.engine.reset_round();
        self.status = self.turn_message();
    }

    /// Clears the board and the scores, dropping any pending auto-reset.
    #[instrument(skip(self))]
    pub fn reset_all(&mut self) {
        self.timer.cancel();
        self.engine.reset_all();
        self.status = format!("Scores cleared. {}", self.turn_message());
    }

    /// Called when the auto-reset delay elapses.
    ///
    /// Only a finished round is cleared, and only by the reset that round
    /// scheduled. Events left over from a cancelled reset are dropped.
    #[instrument(skip(self))]
    pub fn auto_reset(&mut self, generation: u64) {
        if !self.timer.claim(generation) {
            debug!("Stale auto-reset ignored");
            return;
        }
        if !self.engine.is_over() {
            debug!("Round already in play, auto-reset ignored");
            return;
        }
        self.engine.reset_round();
        self.status = self.turn_message();
        debug!("Auto-reset applied");
    }

    /// Flips the sound switch.
    #[instrument(skip(self))]
    pub fn toggle_sound(&mut self) {
        self.toggles.sound = !self.toggles.sound;
        self.status = format!("Sound {}", on_off(self.toggles.sound));
    }

    /// Flips the music switch and tells the sink.
    #[instrument(skip(self))]
    pub fn toggle_music(&mut self) {
        self.toggles.music = !self.toggles.music;
        self.sink.set_music(self.toggles.music);
        self.status = format!("Music {}", on_off(self.toggles.music));
    }

    /// Engine state for rendering.
    pub fn snapshot(&self) -> GameSnapshot {
        self.engine.snapshot()
    }

    /// The engine, read-only.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Current audio switches.
    pub fn toggles(&self) -> AudioToggles {
        self.toggles
    }

    /// Square under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Status line text.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// True while a finished round waits for its automatic reset.
    pub fn reset_pending(&self) -> bool {
        self.timer.is_pending()
    }

    fn play(&mut self, cue: Cue) {
        if self.toggles.sound {
            self.sink.play(cue);
        } else {
            debug!(%cue, "Sound off, cue skipped");
        }
    }

    fn turn_message(&self) -> String {
        match self.engine.phase() {
            GamePhase::InProgress => format!("Player {}'s turn", self.engine.current_player()),
            phase => phase.to_string(),
        }
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}
