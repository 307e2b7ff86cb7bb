//! # Event observers for the loop runtime.
//!
//! This module provides the [`Observe`] trait and the [`ObserverSet`] used to
//! deliver runtime [`Event`](crate::events::Event)s to injected collaborators.
//!
//! ## Architecture
//! ```text
//! Event flow:
//!   LoopActor ── emit(&Event) ──► ObserverSet ──► Observe::on_event(&Event)
//!                                      │               │
//!                                      │          ┌────┴─────┬────────┐
//!                                      │          ▼          ▼        ▼
//!                                      │      LogObserver  Metrics  Custom
//!                                      │
//!                                      └──► panics caught per observer
//! ```
//!
//! Observers are injected explicitly through the
//! [`RunnerSpec`](crate::RunnerSpec) rather than discovered through global
//! state, so a runner stays testable in isolation.
//!
//! ## Implementing custom observers
//! ```rust
//! use async_trait::async_trait;
//! use loopvisor::{Event, EventKind, Observe};
//!
//! struct Metrics;
//!
//! #[async_trait]
//! impl Observe for Metrics {
//!     async fn on_event(&self, event: &Event) {
//!         if matches!(event.kind, EventKind::ActionFailed) {
//!             // increment failure counter
//!         }
//!     }
//!
//!     fn name(&self) -> &'static str { "metrics" }
//! }
//! ```

mod observer;
mod set;

#[cfg(feature = "logging")]
mod log;

pub use observer::Observe;
pub use set::ObserverSet;

#[cfg(feature = "logging")]
pub use self::log::LogObserver;
