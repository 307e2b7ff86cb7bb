//! # Event observer trait.
//!
//! Provides [`Observe`], an extension point for plugging custom diagnostic
//! handlers into a runner.
//!
//! ## Rules
//! - Events are delivered **sequentially** (FIFO) on the runner's own thread.
//! - Panics inside an observer are caught and reported; they never reach the
//!   loop (isolation).
//! - A slow observer delays only its own runner's loop.

use async_trait::async_trait;

use crate::events::Event;

/// Event observer for runner observability.
///
/// Observers receive every event the loop emits, in order, on the runner's
/// dedicated thread. Panics are caught by the [`ObserverSet`](crate::ObserverSet);
/// a faulty observer cannot terminate the loop.
///
/// ### Implementation requirements
/// - Handle errors internally; do not panic.
/// - Keep processing short: the loop does not run while an observer does.
#[async_trait]
pub trait Observe: Send + Sync + 'static {
    /// Processes a single event.
    ///
    /// Events are delivered in FIFO order, between loop steps.
    async fn on_event(&self, event: &Event);

    /// Returns the observer name used in panic reports.
    ///
    /// Prefer short, descriptive names (e.g., "log", "metrics", "audit").
    /// The default uses `type_name::<Self>()`, which can be verbose - override
    /// it when possible.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
