//! # Execution-context construction for one runner.
//!
//! [`start`] turns a [`RunnerSpec`] into a running loop: it builds a private
//! current-thread tokio runtime, spawns a dedicated OS thread named after the
//! action, and blocks that thread on the loop actor.
//!
//! ## Why a dedicated thread
//! One thread per runner (not a pooled worker) means a long-running or
//! blocking action cannot starve other runners; the private runtime hosts
//! exactly one loop, so iterations stay strictly sequential.
//!
//! ## Failure surface
//! `start` fails only when the runtime cannot be built or the thread cannot
//! be spawned ([`StartupError`]); both are checked before any context leaks.

use std::thread;

use tokio::runtime;
use tokio_util::sync::CancellationToken;

use crate::actions::RunnerSpec;
use crate::error::StartupError;

use super::actor::LoopActor;
use super::handle::RunnerHandle;

/// Starts a runner: spawns its dedicated thread immediately and returns
/// without blocking.
///
/// The loop runs until `token` is cancelled; cancellation is observed at
/// loop-top and interrupts the inter-iteration sleep, so shutdown latency is
/// near zero. Starting the same specification twice (clone it, or use
/// [`RunnerSpec::start_on`]) creates two fully independent contexts.
///
/// # Example
/// ```no_run
/// use std::time::Duration;
/// use tokio_util::sync::CancellationToken;
/// use loopvisor::{ActionError, RunnerSpec, start};
///
/// # fn main() -> Result<(), loopvisor::StartupError> {
/// let token = CancellationToken::new();
/// let spec = RunnerSpec::builder("poller")
///     .with_retry_delay(Duration::from_millis(500))
///     .build(|_ctx: CancellationToken| async move { Ok::<_, ActionError>(()) });
///
/// let handle = start(spec, token.clone())?;
/// token.cancel();
/// handle.join().expect("loop thread panicked");
/// # Ok(())
/// # }
/// ```
pub fn start(spec: RunnerSpec, token: CancellationToken) -> Result<RunnerHandle, StartupError> {
    let name = spec.name().to_string();

    let rt = runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .map_err(|source| StartupError::Runtime {
            name: name.clone(),
            source,
        })?;

    let mut builder = thread::Builder::new().name(name.clone());
    if let Some(stack_size) = spec.stack_size() {
        builder = builder.stack_size(stack_size);
    }

    let actor = LoopActor::new(spec);
    let thread = builder
        .spawn(move || rt.block_on(actor.run(token)))
        .map_err(|source| StartupError::Thread {
            name: name.clone(),
            source,
        })?;

    Ok(RunnerHandle::new(name, thread))
}
