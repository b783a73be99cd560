//! Noughts - terminal tic-tac-toe with audio cues and score keeping.
//!
//! The rules live in [`noughts_engine`]; this crate is the presentation
//! layer around it.
//!
//! # Architecture
//!
//! - **Adapter**: [`GameAdapter`] turns [`Command`]s into engine calls, picks
//!   audio [`Cue`]s from the returned outcomes, and schedules the automatic
//!   round reset.
//! - **Timer**: [`ResetTimer`] posts [`AppEvent::AutoReset`] after a delay and
//!   can be cancelled.
//! - **Audio**: [`AudioSink`] implementations (terminal bell, recorder).
//! - **Settings**: [`Settings`] loaded from TOML.
//! - **Replay**: headless [`replay`] of a move list.
//!
//! # Example
//!
//! ```no_run
//! use noughts::{Command, GameAdapter, RecordingSink, Settings};
//!
//! # async fn example() {
//! let (tx, _rx) = tokio::sync::mpsc::unbounded_channel();
//! let mut adapter = GameAdapter::new(&Settings::default(), Box::new(RecordingSink::new()), tx);
//! adapter.handle(Command::SelectCell(4));
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod adapter;
mod audio;
mod config;
mod event;
mod input;
mod replay;
mod timer;

// Crate-level exports - Adapter
pub use adapter::{Flow, GameAdapter};

// Crate-level exports - Audio
pub use audio::{AudioSink, AudioToggles, Cue, RecordingSink, SinkEvent, TerminalBell};

// Crate-level exports - Configuration
pub use config::{ConfigError, Settings};

// Crate-level exports - Events and input
pub use event::AppEvent;
pub use input::{Command, Direction, command_for_key, move_cursor};

// Crate-level exports - Replay
pub use replay::{ReplayReport, ReplayStep, replay};

// Crate-level exports - Timer
pub use timer::ResetTimer;
