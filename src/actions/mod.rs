//! # Action abstractions and runner specifications.
//!
//! This module provides the user-facing types a runner is assembled from:
//! - [`Action`] - trait for implementing async cancelable actions
//! - [`ActionFn`] - function-based action implementation
//! - [`ActionRef`] - shared reference to an action (`Arc<dyn Action>`)
//! - [`FailureHook`] - optional per-failure callback
//! - [`RunnerSpec`] - specification bundling an action with loop settings
//! - [`RunnerSpecBuilder`] - fluent construction of a [`RunnerSpec`]

mod action;
mod action_fn;
mod hook;
mod spec;
mod spec_builder;

pub use action::{Action, ActionRef};
pub use action_fn::ActionFn;
pub use hook::FailureHook;
pub use spec::RunnerSpec;
pub use spec_builder::RunnerSpecBuilder;
