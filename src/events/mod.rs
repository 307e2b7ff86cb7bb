//! Runtime events: the diagnostic data model.
//!
//! This module groups the event **data model** emitted by the loop actor and
//! delivered to injected observers.
//!
//! ## Contents
//! - [`EventKind`], [`Event`] event classification and payload metadata
//!
//! ## Quick reference
//! - **Publisher**: the loop actor (one per runner thread).
//! - **Consumers**: [`Observe`](crate::Observe) implementations wired into the
//!   [`RunnerSpec`](crate::RunnerSpec).

mod event;

pub use event::{Event, EventKind};
