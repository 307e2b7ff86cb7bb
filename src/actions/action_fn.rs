//! # Function-backed action implementation.
//!
//! [`ActionFn`] wraps a closure `F: FnMut(CancellationToken) -> Fut`.
//! The closure is protected by a [`Mutex`] to allow calling `run(&self, ...)`
//! repeatedly even though the closure is `FnMut`. Use [`ActionFn::arc`] for a
//! one-liner that returns an [`ActionRef`].
//!
//! ### Concurrency semantics
//! The mutex is held ONLY while the future is created (calling the closure),
//! not during its execution. Within one runner, iterations are strictly
//! sequential anyway; the mutex matters when the same `ActionFn` is shared by
//! several independently started runners.
//!
//! ### Note
//! If your closure captures mutable state that's accessed INSIDE the returned
//! future, add your own synchronization (`Arc<Mutex<_>>`, atomics, etc.) - the
//! `ActionFn` mutex protects the future's creation, not its execution.

use std::{borrow::Cow, future::Future, sync::Mutex};

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::ActionError;

use super::action::{Action, ActionRef};

/// Function-backed [`Action`] implementation.
///
/// # Example
/// ```
/// use tokio_util::sync::CancellationToken;
/// use loopvisor::{ActionError, ActionFn, ActionRef};
///
/// let a: ActionRef = ActionFn::arc("worker", |ctx: CancellationToken| async move {
///     if ctx.is_cancelled() {
///         return Ok(());
///     }
///     // do work...
///     Ok::<_, ActionError>(())
/// });
///
/// assert_eq!(a.name(), "worker");
/// ```
#[derive(Debug)]
pub struct ActionFn<F> {
    /// Stable context name.
    name: Cow<'static, str>,
    /// Underlying function (guarded by a mutex to allow `FnMut` with `&self`).
    func: Mutex<F>,
}

impl<F> ActionFn<F> {
    /// Creates a new function-backed action.
    ///
    /// Prefer [`ActionFn::arc`] when you immediately need an [`ActionRef`].
    pub fn new(name: impl Into<Cow<'static, str>>, func: F) -> Self {
        Self {
            name: name.into(),
            func: Mutex::new(func),
        }
    }

    /// Creates the action and returns it as a shared handle (`Arc<dyn Action>`).
    ///
    /// # Example
    /// ```
    /// use tokio_util::sync::CancellationToken;
    /// use loopvisor::{ActionError, ActionFn, ActionRef};
    ///
    /// let a: ActionRef =
    ///     ActionFn::arc("hello", |_ctx: CancellationToken| async { Ok::<_, ActionError>(()) });
    /// assert_eq!(a.name(), "hello");
    /// ```
    pub fn arc<Fut>(name: impl Into<Cow<'static, str>>, func: F) -> ActionRef
    where
        F: FnMut(CancellationToken) -> Fut + Send + 'static,
        Fut: Future<Output = Result<(), ActionError>> + Send + 'static,
    {
        std::sync::Arc::new(Self::new(name, func))
    }
}

#[async_trait]
impl<F, Fut> Action for ActionFn<F>
where
    F: FnMut(CancellationToken) -> Fut + Send + 'static,
    Fut: Future<Output = Result<(), ActionError>> + Send + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&self, ctx: CancellationToken) -> Result<(), ActionError> {
        let fut = {
            let mut f = self.func.lock().map_err(|_| ActionError::Fail {
                error: "action closure mutex poisoned".into(),
            })?;
            (f)(ctx)
        };
        fut.await
    }
}
