//! # LoopActor: single-runner retry loop.
//!
//! Drives one [`Action`](crate::Action) repeatedly with:
//! - per-iteration failure isolation (errors and panics),
//! - a fixed inter-iteration delay,
//! - cooperative cancellation via [`CancellationToken`].
//!
//! ## Event flow
//! ```text
//! LoopStarted
//! loop {
//!   ├─► check cancellation ──────────────► LoopStopped (exit)
//!   ├─► action.run()
//!   │     ├─► Ok(())            → (nothing)
//!   │     ├─► Err(e)            → ActionFailed → hook
//!   │     └─► panic (caught)    → ActionFailed → hook
//!   │            hook panic (caught) → HookPanicked
//!   ├─► SleepScheduled
//!   └─► sleep(retry_delay)  ── cancelled? ─► LoopStopped (exit)
//! }
//! ```
//!
//! ## Rules
//! - Iterations run **sequentially**, never concurrently.
//! - One failing iteration never stops subsequent iterations; only
//!   cancellation ends the loop.
//! - The delay is **constant**: no backoff, and no distinction between
//!   success and failure pacing.
//! - Cancellation is observed at loop-top and during sleep; a running action
//!   must check its token to stop mid-iteration.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use tokio::{select, time};
use tokio_util::sync::CancellationToken;

use crate::actions::{ActionRef, FailureHook, RunnerSpec};
use crate::error::ActionError;
use crate::events::{Event, EventKind};
use crate::observers::ObserverSet;

/// Drives the retry loop of a single runner on its dedicated thread.
pub(crate) struct LoopActor {
    /// Action to repeat.
    action: ActionRef,
    /// Fixed pause between iterations.
    retry_delay: Duration,
    /// Optional per-failure callback.
    hook: Option<Arc<dyn FailureHook>>,
    /// Injected diagnostic collaborators.
    observers: ObserverSet,
}

impl LoopActor {
    /// Builds an actor from a started specification.
    pub(crate) fn new(spec: RunnerSpec) -> Self {
        Self {
            action: spec.action().clone(),
            retry_delay: spec.retry_delay(),
            hook: spec.hook().cloned(),
            observers: ObserverSet::new(spec.observers().to_vec()),
        }
    }

    /// Runs the loop until cancellation is observed.
    ///
    /// ### Exit conditions
    /// - `token` cancelled at loop-top (before the next action invocation)
    /// - `token` cancelled during the inter-iteration sleep
    ///
    /// ### Failure semantics
    /// Errors returned by the action, panics inside the action, and panics
    /// inside the hook are all confined to their iteration. Nothing the
    /// action does terminates the loop.
    pub(crate) async fn run(self, token: CancellationToken) {
        let context: Arc<str> = Arc::from(self.action.name());
        let mut iteration: u64 = 0;

        self.observers
            .emit(&Event::new(EventKind::LoopStarted).with_context(Arc::clone(&context)))
            .await;

        loop {
            if token.is_cancelled() {
                break;
            }
            iteration += 1;

            let outcome = AssertUnwindSafe(self.action.run(token.clone()))
                .catch_unwind()
                .await;
            match outcome {
                Ok(Ok(())) => {}
                Ok(Err(err)) => self.report_failure(&context, iteration, err).await,
                Err(payload) => {
                    self.report_failure(&context, iteration, ActionError::from_panic(payload))
                        .await
                }
            }

            self.observers
                .emit(
                    &Event::new(EventKind::SleepScheduled)
                        .with_context(Arc::clone(&context))
                        .with_iteration(iteration)
                        .with_delay(self.retry_delay),
                )
                .await;

            let sleep = time::sleep(self.retry_delay);
            tokio::pin!(sleep);
            select! {
                _ = &mut sleep => {}
                _ = token.cancelled() => { break; }
            }
        }

        self.observers
            .emit(&Event::new(EventKind::LoopStopped).with_context(Arc::clone(&context)))
            .await;
    }

    /// Reports one failed iteration: emits `ActionFailed`, then invokes the
    /// hook with its own panic isolation.
    async fn report_failure(&self, context: &Arc<str>, iteration: u64, err: ActionError) {
        self.observers
            .emit(
                &Event::new(EventKind::ActionFailed)
                    .with_context(Arc::clone(context))
                    .with_iteration(iteration)
                    .with_error(err.to_string()),
            )
            .await;

        if let Some(hook) = &self.hook {
            if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| hook.on_failure(&err))) {
                let hook_err = ActionError::from_panic(payload);
                self.observers
                    .emit(
                        &Event::new(EventKind::HookPanicked)
                            .with_context(Arc::clone(context))
                            .with_iteration(iteration)
                            .with_error(hook_err.as_message()),
                    )
                    .await;
            }
        }
    }
}
