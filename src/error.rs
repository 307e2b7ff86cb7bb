//! Error types used by the loopvisor runtime and actions.
//!
//! This module defines two main error enums:
//!
//! - [`StartupError`] — errors raised while creating the execution context.
//! - [`ActionError`] — errors raised by individual action invocations.
//!
//! Both types provide helper methods (`as_label`, `as_message`) for logging/metrics.
//!
//! ## Propagation rules
//! - [`StartupError`] is fatal to the [`start`](crate::start) call and is returned
//!   to the caller immediately; no thread is left behind.
//! - [`ActionError`] never crosses the background-thread boundary. It is recovered
//!   every iteration, forwarded to the optional [`FailureHook`](crate::FailureHook),
//!   and reported as an [`EventKind::ActionFailed`](crate::EventKind) event.

use std::any::Any;
use std::io;

use thiserror::Error;

/// # Errors raised while creating a runner's execution context.
///
/// These are the only failures [`start`](crate::start) can surface: once the
/// background thread is running, nothing it does terminates the loop except
/// cancellation.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum StartupError {
    /// The per-runner tokio runtime could not be built.
    #[error("failed to build runtime for {name:?}: {source}")]
    Runtime {
        /// Context name of the runner that failed to start.
        name: String,
        /// Underlying I/O error from the runtime builder.
        #[source]
        source: io::Error,
    },

    /// The dedicated OS thread could not be spawned (resource exhaustion).
    #[error("failed to spawn thread for {name:?}: {source}")]
    Thread {
        /// Context name of the runner that failed to start.
        name: String,
        /// Underlying I/O error from the thread builder.
        #[source]
        source: io::Error,
    },
}

impl StartupError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use std::io;
    /// use loopvisor::StartupError;
    ///
    /// let err = StartupError::Thread {
    ///     name: "poller".into(),
    ///     source: io::Error::from(io::ErrorKind::WouldBlock),
    /// };
    /// assert_eq!(err.as_label(), "startup_thread");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            StartupError::Runtime { .. } => "startup_runtime",
            StartupError::Thread { .. } => "startup_thread",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            StartupError::Runtime { name, source } => {
                format!("runtime build failed for {name:?}: {source}")
            }
            StartupError::Thread { name, source } => {
                format!("thread spawn failed for {name:?}: {source}")
            }
        }
    }

    /// Returns the context name of the runner that failed to start.
    pub fn name(&self) -> &str {
        match self {
            StartupError::Runtime { name, .. } => name,
            StartupError::Thread { name, .. } => name,
        }
    }
}

/// # Errors raised by an action invocation.
///
/// Every iteration recovers its own failure: an `ActionError` is reported and
/// the loop proceeds to the next iteration after the retry delay.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ActionError {
    /// The action returned an error for this iteration.
    #[error("action failed: {error}")]
    Fail {
        /// The underlying error message.
        error: String,
    },

    /// The action panicked; the payload was recovered at the loop boundary.
    #[error("action panicked: {error}")]
    Panic {
        /// Panic message, when the payload carried one.
        error: String,
    },
}

impl ActionError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use loopvisor::ActionError;
    ///
    /// let err = ActionError::Fail { error: "boom".into() };
    /// assert_eq!(err.as_label(), "action_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            ActionError::Fail { .. } => "action_failed",
            ActionError::Panic { .. } => "action_panicked",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            ActionError::Fail { error } => format!("error: {error}"),
            ActionError::Panic { error } => format!("panic: {error}"),
        }
    }

    /// Indicates whether the failure was a recovered panic.
    ///
    /// # Example
    /// ```
    /// use loopvisor::ActionError;
    ///
    /// assert!(!ActionError::from("boom").is_panic());
    /// ```
    pub fn is_panic(&self) -> bool {
        matches!(self, ActionError::Panic { .. })
    }

    /// Builds an [`ActionError::Panic`] from a payload caught by `catch_unwind`.
    ///
    /// String payloads (`panic!("...")`) are preserved verbatim; anything else
    /// is reported as opaque.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let error = if let Some(s) = payload.downcast_ref::<&'static str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "non-string panic payload".to_string()
        };
        ActionError::Panic { error }
    }
}

impl From<String> for ActionError {
    fn from(error: String) -> Self {
        ActionError::Fail { error }
    }
}

impl From<&str> for ActionError {
    fn from(error: &str) -> Self {
        ActionError::Fail {
            error: error.to_string(),
        }
    }
}
