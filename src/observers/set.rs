//! # ObserverSet: sequential fan-out over multiple observers.
//!
//! [`ObserverSet`] delivers each [`Event`](crate::events::Event) to every
//! observer in turn, on the emitting runner's own thread.
//!
//! ## What it guarantees
//! - Per-runner FIFO: observers see events in emission order.
//! - Panics inside observers are caught and reported (isolation).
//!
//! ## What it does **not** guarantee
//! - No cross-runner ordering: runners emit independently.
//! - No buffering: a slow observer delays its runner's next loop step.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;

use crate::events::Event;

use super::Observe;

/// Composite fan-out delivering events to observers sequentially.
#[derive(Clone)]
pub struct ObserverSet {
    observers: Vec<Arc<dyn Observe>>,
}

impl ObserverSet {
    /// Creates a new set over the given observers.
    #[must_use]
    pub fn new(observers: Vec<Arc<dyn Observe>>) -> Self {
        Self { observers }
    }

    /// Returns true when no observers are wired.
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Delivers one event to all observers (sequential, FIFO).
    ///
    /// A panicking observer is reported to stderr and skipped for this event;
    /// remaining observers still receive it.
    pub async fn emit(&self, event: &Event) {
        for observer in &self.observers {
            let fut = observer.on_event(event);
            if let Err(panic_err) = AssertUnwindSafe(fut).catch_unwind().await {
                eprintln!(
                    "[loopvisor] observer '{}' panicked: {:?}",
                    observer.name(),
                    panic_err
                );
            }
        }
    }
}
