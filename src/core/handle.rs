//! # Handle to a started runner.
//!
//! [`RunnerHandle`] is returned by [`start`](crate::start) and owns the
//! dedicated thread hosting one loop. Exactly one execution context is
//! associated with one handle for its entire lifetime.
//!
//! Dropping the handle detaches the thread (the loop keeps running until its
//! token is cancelled); [`join`](RunnerHandle::join) waits for the loop to
//! observe cancellation and exit.

use std::thread;

/// Owning handle to a runner's dedicated thread.
///
/// The loop itself is only ever terminated by cancellation; the handle exposes
/// termination, not control:
/// - [`is_finished`](RunnerHandle::is_finished) polls whether the loop exited,
/// - [`join`](RunnerHandle::join) blocks until it does.
pub struct RunnerHandle {
    /// Context name (the action name), for diagnostics.
    name: String,
    /// The dedicated thread hosting the loop.
    thread: thread::JoinHandle<()>,
}

impl RunnerHandle {
    pub(crate) fn new(name: String, thread: thread::JoinHandle<()>) -> Self {
        Self { name, thread }
    }

    /// Returns the runner's context name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true once the loop observed cancellation and its thread exited.
    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }

    /// Blocks until the loop exits, consuming the handle.
    ///
    /// With cancellation signalled this returns within one interrupted sleep;
    /// without it, `join` blocks for as long as the loop runs. The `Err` case
    /// carries a panic payload from the thread, which the loop's failure
    /// isolation makes unexpected.
    pub fn join(self) -> thread::Result<()> {
        self.thread.join()
    }
}
