//! Deferred round reset.

use crate::event::AppEvent;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, instrument, warn};

/// Schedules a single [`AppEvent::AutoReset`] after a delay.
///
/// At most one reset is pending at a time: scheduling again replaces the
/// pending one, and [`cancel`](Self::cancel) drops it. The timer never
/// touches game state; it only posts an event to the loop that owns it.
///
/// Every event carries the generation it was scheduled under. Cancelling
/// bumps the generation, so an event that was already queued when the
/// reset was cancelled no longer [`claim`](Self::claim)s.
#[derive(Debug)]
pub struct ResetTimer {
    delay: Duration,
    events: mpsc::UnboundedSender<AppEvent>,
    pending: Option<JoinHandle<()>>,
    generation: u64,
}

impl ResetTimer {
    /// Creates a timer that posts to `events` after `delay`.
    pub fn new(delay: Duration, events: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            delay,
            events,
            pending: None,
            generation: 0,
        }
    }

    /// The configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Starts the countdown, replacing any pending one.
    ///
    /// Must be called from within a tokio runtime.
    #[instrument(skip(self), fields(delay_ms = self.delay.as_millis() as u64))]
    pub fn schedule(&mut self) {
        self.cancel();

        let generation = self.generation;
        let deadline = tokio::time::Instant::now() + self.delay;
        let events = self.events.clone();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            if events.send(AppEvent::AutoReset(generation)).is_err() {
                warn!("Event loop gone, auto-reset dropped");
            }
        }));
        debug!(generation, "Auto-reset scheduled");
    }

    /// Drops the pending reset, if any, including one already queued.
    #[instrument(skip(self))]
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if let Some(handle) = self.pending.take() {
            handle.abort();
            debug!("Pending auto-reset cancelled");
        }
    }

    /// True while a reset is scheduled and has not yet been delivered.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Accepts a delivered reset from `generation`.
    ///
    /// Returns false for events scheduled before the last cancel. An
    /// accepted event clears the pending state.
    pub fn claim(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            debug!(generation, current = self.generation, "Stale auto-reset");
            return false;
        }
        self.pending = None;
        true
    }
}

impl Drop for ResetTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = ResetTimer::new(Duration::from_millis(2000), tx);
        timer.schedule();
        assert!(timer.is_pending());

        tokio::time::advance(Duration::from_millis(1999)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::advance(Duration::from_millis(1)).await;
        let Some(AppEvent::AutoReset(generation)) = rx.recv().await else {
            panic!("Expected an auto-reset");
        };
        assert!(timer.claim(generation));
        assert!(!timer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_pending_reset() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = ResetTimer::new(Duration::from_millis(500), tx);
        timer.schedule();
        timer.cancel();
        assert!(!timer.is_pending());

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_sends_once() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = ResetTimer::new(Duration::from_millis(500), tx);
        timer.schedule();
        tokio::time::sleep(Duration::from_millis(300)).await;
        timer.schedule();

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert!(matches!(rx.try_recv(), Ok(AppEvent::AutoReset(_))));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_queued_reset_is_stale_after_cancel() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = ResetTimer::new(Duration::from_millis(500), tx);
        timer.schedule();
        tokio::time::sleep(Duration::from_millis(501)).await;

        let Ok(AppEvent::AutoReset(generation)) = rx.try_recv() else {
            panic!("Expected a queued auto-reset");
        };
        timer.cancel();
        assert!(!timer.claim(generation));
    }
}
