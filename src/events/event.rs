//! # Runtime events emitted by the loop actor.
//!
//! The [`EventKind`] enum classifies event types across two categories:
//! - **Pacing events** (debug-level): loop lifecycle and inter-iteration sleep
//!   (`LoopStarted`, `SleepScheduled`, `LoopStopped`)
//! - **Failure events** (error-level): per-iteration faults
//!   (`ActionFailed`, `HookPanicked`)
//!
//! The [`Event`] struct carries metadata such as timestamps, the context id,
//! the iteration number, the sleep delay, and error detail.
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases
//! monotonically. Use `seq` to restore the exact order when events are
//! recorded out of order.
//!
//! ## Example
//! ```rust
//! use loopvisor::{Event, EventKind};
//!
//! let ev = Event::new(EventKind::ActionFailed)
//!     .with_context("poller")
//!     .with_iteration(3)
//!     .with_error("boom");
//!
//! assert_eq!(ev.kind, EventKind::ActionFailed);
//! assert_eq!(ev.context.as_deref(), Some("poller"));
//! assert_eq!(ev.error.as_deref(), Some("boom"));
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::{Duration, SystemTime};

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of runtime events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    // === Pacing events ===
    /// The loop's dedicated thread started.
    ///
    /// Sets:
    /// - `context`: context id (action name)
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    LoopStarted,

    /// The loop is about to sleep before the next iteration.
    ///
    /// Emitted once per iteration, success or failure alike.
    ///
    /// Sets:
    /// - `context`: context id
    /// - `iteration`: iteration number (1-based)
    /// - `delay_ms`: configured retry delay (ms)
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    SleepScheduled,

    /// The loop observed cancellation and exited (terminal).
    ///
    /// Sets:
    /// - `context`: context id
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    LoopStopped,

    // === Failure events ===
    /// The action returned an error or panicked for this iteration.
    ///
    /// Sets:
    /// - `context`: context id
    /// - `iteration`: iteration number
    /// - `error`: failure message
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    ActionFailed,

    /// The failure hook itself panicked while handling an error.
    ///
    /// The loop continues; the hook's panic is confined to this report.
    ///
    /// Sets:
    /// - `context`: context id
    /// - `iteration`: iteration number
    /// - `error`: panic message
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    HookPanicked,
}

/// Runtime event with optional metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
/// - other optional fields are set depending on the [`EventKind`]
#[derive(Clone, Debug)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Event classification.
    pub kind: EventKind,
    /// Context id (the runner's action name), if applicable.
    pub context: Option<Arc<str>>,
    /// Iteration count (starting from 1).
    pub iteration: Option<u64>,
    /// Sleep delay before the next iteration in milliseconds (compact).
    pub delay_ms: Option<u32>,
    /// Human-readable error detail.
    pub error: Option<Arc<str>>,
}

impl Event {
    /// Creates a new event of the given kind with current timestamp and next
    /// sequence number.
    pub fn new(kind: EventKind) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            context: None,
            iteration: None,
            delay_ms: None,
            error: None,
        }
    }

    /// Attaches the context id.
    #[inline]
    pub fn with_context(mut self, context: impl Into<Arc<str>>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Attaches an iteration count.
    #[inline]
    pub fn with_iteration(mut self, n: u64) -> Self {
        self.iteration = Some(n);
        self
    }

    /// Attaches a sleep delay (stored as milliseconds).
    #[inline]
    pub fn with_delay(mut self, d: Duration) -> Self {
        let ms = d.as_millis().min(u128::from(u32::MAX)) as u32;
        self.delay_ms = Some(ms);
        self
    }

    /// Attaches a human-readable error detail.
    #[inline]
    pub fn with_error(mut self, error: impl Into<Arc<str>>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Whether this event belongs to the failure category.
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self.kind, EventKind::ActionFailed | EventKind::HookPanicked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_seq_is_strictly_monotonic() {
        let a = Event::new(EventKind::LoopStarted);
        let b = Event::new(EventKind::SleepScheduled);
        let c = Event::new(EventKind::LoopStopped);
        assert!(a.seq < b.seq);
        assert!(b.seq < c.seq);
    }

    #[test]
    fn test_builders_set_documented_fields() {
        let ev = Event::new(EventKind::SleepScheduled)
            .with_context("worker")
            .with_iteration(7)
            .with_delay(Duration::from_millis(250));
        assert_eq!(ev.context.as_deref(), Some("worker"));
        assert_eq!(ev.iteration, Some(7));
        assert_eq!(ev.delay_ms, Some(250));
        assert!(ev.error.is_none());
        assert!(!ev.is_failure());
    }

    #[test]
    fn test_delay_is_clamped_to_u32_millis() {
        let ev = Event::new(EventKind::SleepScheduled).with_delay(Duration::from_secs(u64::MAX));
        assert_eq!(ev.delay_ms, Some(u32::MAX));
    }

    #[test]
    fn test_failure_category() {
        assert!(Event::new(EventKind::ActionFailed).is_failure());
        assert!(Event::new(EventKind::HookPanicked).is_failure());
        assert!(!Event::new(EventKind::LoopStarted).is_failure());
    }
}
