//! Events consumed by the play loop.

use crate::input::Command;

/// Everything the play loop reacts to, funnelled through one channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// A player command decoded from a key press.
    Command(Command),
    /// The deferred reset after a finished round came due, tagged with the
    /// timer generation that scheduled it.
    AutoReset(u64),
    /// The terminal needs redrawing (resize).
    Redraw,
    /// The input reader stopped.
    InputClosed,
}
