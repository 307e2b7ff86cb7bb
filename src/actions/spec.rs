//! # Runner specification.
//!
//! Defines [`RunnerSpec`], a configuration bundle that describes how an action
//! is looped: the fixed retry delay, the optional failure hook, the injected
//! observers, and the dedicated thread's stack size.
//!
//! A spec can be created:
//! - **Explicitly** with [`RunnerSpec::new`] (full control)
//! - **From config** with [`RunnerSpec::with_defaults`] (inherit defaults)
//! - **Fluently** with [`RunnerSpec::builder`]
//!
//! ## Rules
//! - The spec is immutable once started; `with_*` methods return updated copies.
//! - One spec may be started any number of times; every start creates a fully
//!   independent execution context.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::core::{RunnerHandle, start};
use crate::error::StartupError;
use crate::observers::Observe;

use super::action::ActionRef;
use super::hook::FailureHook;

/// Specification for running an action in a retry loop.
///
/// Bundles together:
/// - The action itself ([`ActionRef`])
/// - The fixed retry delay
/// - Optional failure hook ([`FailureHook`])
/// - Injected observers ([`Observe`])
///
/// ## Example
/// ```rust
/// use std::time::Duration;
/// use tokio_util::sync::CancellationToken;
/// use loopvisor::{ActionError, ActionFn, ActionRef, Config, RunnerSpec};
///
/// let demo: ActionRef = ActionFn::arc("demo", |_ctx: CancellationToken| async move {
///     Ok::<(), ActionError>(())
/// });
///
/// // Explicit configuration:
/// let spec = RunnerSpec::new(demo.clone(), Duration::from_millis(500));
/// assert_eq!(spec.retry_delay(), Duration::from_millis(500));
///
/// // Inherit from global config (60s delay by default):
/// let cfg = Config::default();
/// let spec2 = RunnerSpec::with_defaults(demo, &cfg);
/// assert_eq!(spec2.retry_delay(), Duration::from_secs(60));
/// ```
#[derive(Clone)]
pub struct RunnerSpec {
    action: ActionRef,
    retry_delay: Duration,
    hook: Option<Arc<dyn FailureHook>>,
    observers: Vec<Arc<dyn Observe>>,
    stack_size: Option<usize>,
}

impl RunnerSpec {
    /// Creates a new specification with explicit parameters and no hook or
    /// observers.
    pub fn new(action: ActionRef, retry_delay: Duration) -> Self {
        Self {
            action,
            retry_delay,
            hook: None,
            observers: Vec::new(),
            stack_size: None,
        }
    }

    /// Creates a specification inheriting delay and stack size from global
    /// config.
    pub fn with_defaults(action: ActionRef, cfg: &Config) -> Self {
        Self {
            action,
            retry_delay: cfg.retry_delay,
            hook: None,
            observers: Vec::new(),
            stack_size: cfg.stack_size,
        }
    }

    /// Returns reference to the action.
    pub fn action(&self) -> &ActionRef {
        &self.action
    }

    /// Convenience: returns the context name.
    pub fn name(&self) -> &str {
        self.action.name()
    }

    /// Returns the fixed retry delay.
    pub fn retry_delay(&self) -> Duration {
        self.retry_delay
    }

    /// Returns the failure hook, if configured.
    pub fn hook(&self) -> Option<&Arc<dyn FailureHook>> {
        self.hook.as_ref()
    }

    /// Returns the injected observers.
    pub fn observers(&self) -> &[Arc<dyn Observe>] {
        &self.observers
    }

    /// Returns the thread stack size, if configured.
    pub fn stack_size(&self) -> Option<usize> {
        self.stack_size
    }

    /// Returns a new spec with updated retry delay.
    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    /// Returns a new spec with the failure hook set.
    pub fn with_hook(mut self, hook: Arc<dyn FailureHook>) -> Self {
        self.hook = Some(hook);
        self
    }

    /// Returns a new spec with one more observer wired.
    pub fn with_observer(mut self, observer: Arc<dyn Observe>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Returns a new spec with updated thread stack size.
    pub fn with_stack_size(mut self, stack_size: usize) -> Self {
        self.stack_size = Some(stack_size);
        self
    }

    /// Starts a runner from this pre-built specification.
    ///
    /// Instance-method variant of [`start`]: clones the spec, so the same
    /// specification can be started again. Every call creates an independent
    /// execution context; two calls yield two concurrently looping threads
    /// observing the same (or different) tokens.
    pub fn start_on(&self, token: CancellationToken) -> Result<RunnerHandle, StartupError> {
        start(self.clone(), token)
    }
}
