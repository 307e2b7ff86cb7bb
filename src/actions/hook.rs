//! # Per-failure callback.
//!
//! [`FailureHook`] is the optional collaborator invoked once for every failed
//! iteration, after the failure event is emitted and before the loop sleeps.
//!
//! ## Rules
//! - Invoked on the runner's dedicated thread, never concurrently with itself.
//! - A panicking hook is caught and reported as
//!   [`EventKind::HookPanicked`](crate::EventKind); it never stops the loop.
//! - Plain closures qualify through the blanket impl.

use crate::error::ActionError;

/// Callback receiving the error of a failed iteration.
///
/// Any `Fn(&ActionError) + Send + Sync` closure implements this trait, so the
/// usual wiring is an `Arc::new(|err| ...)`:
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use loopvisor::{ActionError, FailureHook};
///
/// let hook: Arc<dyn FailureHook> = Arc::new(|err: &ActionError| {
///     eprintln!("iteration failed: {err}");
/// });
/// hook.on_failure(&ActionError::from("boom"));
/// ```
pub trait FailureHook: Send + Sync + 'static {
    /// Handles one iteration failure.
    ///
    /// Keep it short and non-blocking; the loop does not proceed to its sleep
    /// until the hook returns.
    fn on_failure(&self, error: &ActionError);
}

impl<F> FailureHook for F
where
    F: Fn(&ActionError) + Send + Sync + 'static,
{
    fn on_failure(&self, error: &ActionError) {
        self(error)
    }
}
