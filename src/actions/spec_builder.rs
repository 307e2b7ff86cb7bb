use std::borrow::Cow;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::error::ActionError;
use crate::observers::Observe;

use super::action::ActionRef;
use super::action_fn::ActionFn;
use super::hook::FailureHook;
use super::spec::RunnerSpec;

/// Builder for [`RunnerSpec`] with fluent API.
///
/// # Example
/// ```rust
/// use std::time::Duration;
/// use tokio_util::sync::CancellationToken;
/// use loopvisor::{ActionError, RunnerSpec};
///
/// let spec = RunnerSpec::builder("poller")
///     .with_retry_delay(Duration::from_millis(100))
///     .build(|_ctx: CancellationToken| async move { Ok::<_, ActionError>(()) });
///
/// assert_eq!(spec.name(), "poller");
/// assert_eq!(spec.retry_delay(), Duration::from_millis(100));
/// ```
#[derive(Clone)]
pub struct RunnerSpecBuilder {
    name: Cow<'static, str>,
    retry_delay: Duration,
    hook: Option<Arc<dyn FailureHook>>,
    observers: Vec<Arc<dyn Observe>>,
    stack_size: Option<usize>,
}

impl RunnerSpecBuilder {
    /// Creates a new builder with the given context name and config defaults.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        let defaults = Config::default();
        Self {
            name: name.into(),
            retry_delay: defaults.retry_delay,
            hook: None,
            observers: Vec::new(),
            stack_size: defaults.stack_size,
        }
    }

    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    pub fn with_hook(mut self, hook: Arc<dyn FailureHook>) -> Self {
        self.hook = Some(hook);
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn Observe>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn with_stack_size(mut self, stack_size: usize) -> Self {
        self.stack_size = Some(stack_size);
        self
    }

    /// Build a [`RunnerSpec`] from a closure.
    pub fn build<F, Fut>(self, f: F) -> RunnerSpec
    where
        F: FnMut(CancellationToken) -> Fut + Send + 'static,
        Fut: Future<Output = Result<(), ActionError>> + Send + 'static,
    {
        let Self {
            name,
            retry_delay,
            hook,
            observers,
            stack_size,
        } = self;
        assemble(ActionFn::arc(name, f), retry_delay, hook, observers, stack_size)
    }

    /// Build a [`RunnerSpec`] from an existing [`ActionRef`].
    ///
    /// The action keeps its own name; the builder's name is only used when a
    /// closure is turned into an action via [`build`](Self::build).
    pub fn build_from_action(self, action: ActionRef) -> RunnerSpec {
        let Self {
            retry_delay,
            hook,
            observers,
            stack_size,
            ..
        } = self;
        assemble(action, retry_delay, hook, observers, stack_size)
    }
}

impl RunnerSpec {
    /// Creates a builder for constructing a [`RunnerSpec`] with fluent API.
    pub fn builder(name: impl Into<Cow<'static, str>>) -> RunnerSpecBuilder {
        RunnerSpecBuilder::new(name)
    }
}

fn assemble(
    action: ActionRef,
    retry_delay: Duration,
    hook: Option<Arc<dyn FailureHook>>,
    observers: Vec<Arc<dyn Observe>>,
    stack_size: Option<usize>,
) -> RunnerSpec {
    let mut spec = RunnerSpec::new(action, retry_delay);
    if let Some(hook) = hook {
        spec = spec.with_hook(hook);
    }
    for observer in observers {
        spec = spec.with_observer(observer);
    }
    if let Some(stack_size) = stack_size {
        spec = spec.with_stack_size(stack_size);
    }
    spec
}
