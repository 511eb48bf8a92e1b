#![forbid(unsafe_code)]

//! Runtime for the Karibu interaction engine.
//!
//! Single-threaded, cooperative, event-driven: all logic runs inside
//! discrete [`Component::update`] invocations. The only suspension points
//! are scheduler tasks (debounce windows, simulated submission delays,
//! banner auto-dismiss, slider auto-advance), each a deferred message
//! keyed for cancellation. The [`Runtime`] drives a component against a
//! [`Clock`]; production uses [`SystemClock`], tests inject [`FakeClock`]
//! and advance it explicitly, which makes every timer deterministic.

pub mod clock;
pub mod component;
pub mod runtime;
pub mod scheduler;

pub use clock::{Clock, FakeClock, SystemClock};
pub use component::{Cmd, Component, TaskKey};
pub use runtime::Runtime;
pub use scheduler::Scheduler;
