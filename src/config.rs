//! # Global runner configuration.
//!
//! [`Config`] holds the defaults a [`RunnerSpec`](crate::RunnerSpec) inherits
//! when built via [`RunnerSpec::with_defaults`](crate::RunnerSpec::with_defaults):
//! the fixed retry delay and the dedicated thread's stack size.
//!
//! # Example
//! ```
//! use std::time::Duration;
//! use loopvisor::Config;
//!
//! let mut cfg = Config::default();
//! cfg.retry_delay = Duration::from_secs(5);
//!
//! assert_eq!(cfg.retry_delay, Duration::from_secs(5));
//! assert!(cfg.stack_size.is_none());
//! ```

use std::time::Duration;

/// Global defaults for runner specifications.
#[derive(Clone, Debug)]
pub struct Config {
    /// Fixed pause between successive action invocations.
    pub retry_delay: Duration,
    /// Stack size for the dedicated thread (`None` = platform default).
    pub stack_size: Option<usize>,
}

impl Default for Config {
    /// Provides a default configuration:
    /// - `retry_delay = 60s`
    /// - `stack_size = None` (platform default)
    fn default() -> Self {
        Self {
            retry_delay: Duration::from_secs(60),
            stack_size: None,
        }
    }
}
