//! # loopvisor
//!
//! **Loopvisor** is a small primitive for running an action repeatedly on a
//! dedicated background thread until cancellation, with per-iteration failure
//! isolation and a fixed pause between invocations.
//!
//! ## Architecture
//! ```text
//!   ┌──────────────┐      start(spec, token)      ┌─────────────────────────┐
//!   │  RunnerSpec  │ ───────────────────────────► │  dedicated OS thread    │
//!   │ (action,     │          returns             │  (current-thread tokio  │
//!   │  delay,      │       RunnerHandle           │   runtime)              │
//!   │  hook,       │                              │                         │
//!   │  observers)  │                              │  loop:                  │
//!   └──────────────┘                              │    cancelled? ── exit   │
//!                                                 │    action.run(token)    │
//!       CancellationToken ──── cooperative ─────► │    failure? → hook,     │
//!                              cancellation       │              events     │
//!                                                 │    sleep(retry_delay)   │
//!                                                 └─────────────────────────┘
//! ```
//!
//! Iterations are strictly sequential. Errors and panics raised by the action
//! are recovered every iteration, forwarded to the optional
//! [`FailureHook`], and reported as [`Event`]s to injected [`Observe`]rs; only
//! cancellation ends the loop (`Created → Running → Stopped`, with `Stopped`
//! terminal). The delay is constant - there is no backoff and no retry limit.
//!
//! ## Overview
//!
//! | **Concern**       | **What for**                                  | **Key types**                        |
//! |-------------------|-----------------------------------------------|--------------------------------------|
//! | **Actions**       | Define the repeated unit of work.             | [`Action`], [`ActionFn`]             |
//! | **Specification** | Bundle action with loop settings.             | [`RunnerSpec`], [`RunnerSpecBuilder`]|
//! | **Execution**     | Spawn and own the dedicated context.          | [`start`], [`RunnerHandle`]          |
//! | **Failures**      | Isolate and surface per-iteration faults.     | [`ActionError`], [`FailureHook`]     |
//! | **Observability** | Deliver diagnostics to injected collaborators.| [`Event`], [`Observe`]               |
//! | **Configuration** | Centralize defaults.                          | [`Config`]                           |
//!
//! ## Optional features
//! - `logging`: exports [`LogObserver`], forwarding events to the `log` facade.
//!
//! ## Example
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use tokio_util::sync::CancellationToken;
//! use loopvisor::{ActionError, RunnerSpec, start};
//!
//! fn main() -> Result<(), loopvisor::StartupError> {
//!     let token = CancellationToken::new();
//!
//!     let spec = RunnerSpec::builder("poller")
//!         .with_retry_delay(Duration::from_millis(500))
//!         .with_hook(Arc::new(|err: &ActionError| {
//!             eprintln!("poll failed: {err}");
//!         }))
//!         .build(|ctx: CancellationToken| async move {
//!             if ctx.is_cancelled() {
//!                 return Ok(());
//!             }
//!             // poll something...
//!             Ok::<_, ActionError>(())
//!         });
//!
//!     let handle = start(spec, token.clone())?;
//!
//!     std::thread::sleep(Duration::from_secs(2));
//!     token.cancel();
//!     handle.join().expect("loop thread panicked");
//!     Ok(())
//! }
//! ```

mod actions;
mod config;
mod core;
mod error;
mod events;
mod observers;

// ---- Public re-exports ----

pub use actions::{Action, ActionFn, ActionRef, FailureHook, RunnerSpec, RunnerSpecBuilder};
pub use config::Config;
pub use crate::core::{RunnerHandle, start};
pub use error::{ActionError, StartupError};
pub use events::{Event, EventKind};
pub use observers::{Observe, ObserverSet};

// Optional: expose the built-in log-facade observer.
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use observers::LogObserver;
