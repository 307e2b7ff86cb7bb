//! # Built-in observer forwarding events to the `log` facade.
//!
//! [`LogObserver`] maps the two event categories onto log levels:
//! pacing events go to `debug!`, failure events to `error!`.
//!
//! ## Output format
//! ```text
//! [started] context=poller
//! [failed] context=poller iteration=3 err="boom"
//! [sleeping] context=poller iteration=3 delay_ms=100
//! [hook-panicked] context=poller iteration=3 err="hook blew up"
//! [stopped] context=poller
//! ```
//!
//! ## Example
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use tokio_util::sync::CancellationToken;
//! use loopvisor::{ActionError, ActionFn, LogObserver, RunnerSpec};
//!
//! let spec = RunnerSpec::new(
//!     ActionFn::arc("poller", |_ctx: CancellationToken| async {
//!         Ok::<_, ActionError>(())
//!     }),
//!     Duration::from_secs(1),
//! )
//! .with_observer(Arc::new(LogObserver));
//! ```

use async_trait::async_trait;

use crate::events::{Event, EventKind};

use super::Observe;

/// Observer that forwards events to the `log` facade.
///
/// Enabled via the `logging` feature. Pacing events (`LoopStarted`,
/// `SleepScheduled`, `LoopStopped`) are logged at debug level; failure events
/// (`ActionFailed`, `HookPanicked`) at error level. Wire your own [`Observe`]
/// implementation for structured transports or metrics.
pub struct LogObserver;

#[async_trait]
impl Observe for LogObserver {
    async fn on_event(&self, e: &Event) {
        let context = e.context.as_deref().unwrap_or("?");
        match e.kind {
            EventKind::LoopStarted => {
                log::debug!("[started] context={context}");
            }
            EventKind::SleepScheduled => {
                log::debug!(
                    "[sleeping] context={context} iteration={:?} delay_ms={:?}",
                    e.iteration,
                    e.delay_ms
                );
            }
            EventKind::LoopStopped => {
                log::debug!("[stopped] context={context}");
            }
            EventKind::ActionFailed => {
                log::error!(
                    "[failed] context={context} iteration={:?} err={:?}",
                    e.iteration,
                    e.error
                );
            }
            EventKind::HookPanicked => {
                log::error!(
                    "[hook-panicked] context={context} iteration={:?} err={:?}",
                    e.iteration,
                    e.error
                );
            }
        }
    }

    fn name(&self) -> &'static str {
        "log"
    }
}
