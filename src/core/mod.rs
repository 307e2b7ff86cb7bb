//! Runtime core: the loop and its execution context.
//!
//! This module contains the embedded implementation of the loopvisor runtime.
//! The public API from this module is [`start`], which spawns a runner's
//! dedicated thread, and [`RunnerHandle`], which owns it.
//!
//! Internal modules:
//! - [`actor`]: drives the retry loop with failure isolation and event publishing;
//! - [`handle`]: join handle wrapper for the dedicated thread;
//! - [`spawn`]: runtime + thread construction for one runner.

mod actor;
mod handle;
mod spawn;

pub use handle::RunnerHandle;
pub use spawn::start;
