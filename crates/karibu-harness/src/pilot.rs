#![forbid(unsafe_code)]

//! Fake-clock pilot.
//!
//! Drives a component through a [`Runtime`] with a [`RecordingView`] and a
//! [`FakeClock`]. `advance` moves time and fires whatever came due, so a
//! test reads like a session transcript: event, advance, assert.

use std::time::Duration;

use karibu_core::event::Event;
use karibu_runtime::{Component, FakeClock, Runtime};

use crate::recording_view::RecordingView;

/// Deterministic driver for one page component.
pub struct Pilot<C: Component> {
    clock: FakeClock,
    runtime: Runtime<C, RecordingView, FakeClock>,
}

impl<C: Component> Pilot<C> {
    /// Start a pilot at time zero; the component's `init` runs here.
    #[must_use]
    pub fn new(component: C) -> Self {
        let clock = FakeClock::new();
        let runtime = Runtime::new(component, RecordingView::new(), clock.clone());
        Self { clock, runtime }
    }

    /// Feed an interaction event.
    pub fn event(&mut self, event: Event) {
        self.runtime.handle_event(event);
    }

    /// Dispatch a message directly.
    pub fn dispatch(&mut self, msg: C::Message) {
        self.runtime.dispatch(msg);
    }

    /// Advance the clock and fire everything that came due.
    pub fn advance(&mut self, delta: Duration) {
        self.clock.advance(delta);
        self.runtime.tick();
    }

    /// Advance in milliseconds.
    pub fn advance_ms(&mut self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }

    /// The recorded view.
    #[must_use]
    pub fn view(&self) -> &RecordingView {
        self.runtime.view()
    }

    /// The component under test.
    #[must_use]
    pub fn component(&self) -> &C {
        self.runtime.component()
    }

    /// Component and view together, for out-of-band page operations.
    pub fn parts_mut(&mut self) -> (&mut C, &mut RecordingView) {
        self.runtime.parts_mut()
    }
}
