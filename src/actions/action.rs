//! # Action abstraction.
//!
//! This module defines the [`Action`] trait (async, cancelable) and the common
//! handle type [`ActionRef`], an `Arc<dyn Action>` suitable for sharing across
//! runner starts.
//!
//! An action receives a [`CancellationToken`] and should periodically check it
//! to stop cooperatively during shutdown: the loop only observes cancellation
//! between iterations and cannot interrupt a running action.

use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::ActionError;

/// # Shared handle to an action object.
///
/// This is the primary type carried by [`RunnerSpec`](crate::RunnerSpec).
pub type ActionRef = Arc<dyn Action>;

/// # Asynchronous, cancelable unit of work repeated by the loop.
///
/// An `Action` has a stable [`name`](Action::name) - the runner's context id
/// in diagnostics - and an async [`run`](Action::run) method that receives a
/// [`CancellationToken`]. Implementors should regularly check cancellation and
/// exit promptly during shutdown.
///
/// Errors returned from `run` are recovered every iteration and never stop the
/// loop; see [`ActionError`].
///
/// # Example
/// ```
/// use async_trait::async_trait;
/// use tokio_util::sync::CancellationToken;
/// use loopvisor::{Action, ActionError};
///
/// struct Demo;
///
/// #[async_trait]
/// impl Action for Demo {
///     fn name(&self) -> &str { "demo" }
///
///     async fn run(&self, ctx: CancellationToken) -> Result<(), ActionError> {
///         if ctx.is_cancelled() {
///             return Ok(());
///         }
///         // do work...
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Action: Send + Sync + 'static {
    /// Returns a stable, human-readable context name.
    fn name(&self) -> &str;

    /// Executes one iteration of work.
    ///
    /// Implementations should check `ctx.is_cancelled()` and exit quickly to
    /// honor graceful shutdown.
    async fn run(&self, ctx: CancellationToken) -> Result<(), ActionError>;
}
