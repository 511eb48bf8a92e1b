#![forbid(unsafe_code)]

//! The runtime driver.
//!
//! Owns a component, a view adapter, a clock, and the scheduler. Events
//! are converted to messages and dispatched; commands returned from
//! `update` are executed iteratively (a queue, not recursion) so chained
//! `Cmd::Msg` values cannot overflow the stack. `tick()` fires every due
//! scheduled task against the current clock reading; the embedding is
//! responsible for calling it (a UI frame callback in production, explicit
//! advancement in tests).

use tracing::debug;

use karibu_core::event::Event;
use karibu_core::view::ViewUpdate;

use crate::clock::Clock;
use crate::component::{Cmd, Component};
use crate::scheduler::Scheduler;

/// Drives one component against a view adapter and a clock.
#[derive(Debug)]
pub struct Runtime<C: Component, V: ViewUpdate, K: Clock> {
    component: C,
    view: V,
    clock: K,
    scheduler: Scheduler<C::Message>,
}

impl<C: Component, V: ViewUpdate, K: Clock> Runtime<C, V, K> {
    /// Create a runtime and run the component's `init`.
    pub fn new(mut component: C, mut view: V, clock: K) -> Self {
        let cmd = component.init(&mut view);
        let mut rt = Self {
            component,
            view,
            clock,
            scheduler: Scheduler::new(),
        };
        rt.exec(cmd);
        rt
    }

    /// Convert an event into a message and dispatch it.
    pub fn handle_event(&mut self, event: Event) {
        self.dispatch(C::Message::from(event));
    }

    /// Dispatch a message through the component.
    pub fn dispatch(&mut self, msg: C::Message) {
        let cmd = self.component.update(msg, &mut self.view);
        self.exec(cmd);
    }

    /// Fire every scheduled task due at the current clock reading.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        let due = self.scheduler.fire_due(now);
        if !due.is_empty() {
            debug!(count = due.len(), ?now, "runtime: firing due tasks");
        }
        for msg in due {
            self.dispatch(msg);
        }
    }

    fn exec(&mut self, cmd: Cmd<C::Message>) {
        let mut queue = vec![cmd];
        while !queue.is_empty() {
            // Drain front-first to preserve batch order.
            let cmd = queue.remove(0);
            match cmd {
                Cmd::None => {}
                Cmd::Msg(msg) => {
                    let next = self.component.update(msg, &mut self.view);
                    queue.push(next);
                }
                Cmd::Batch(cmds) => {
                    for (i, c) in cmds.into_iter().enumerate() {
                        queue.insert(i, c);
                    }
                }
                Cmd::Schedule { key, delay, msg } => {
                    let due = self.clock.now().saturating_add(delay);
                    self.scheduler.schedule(key, due, msg);
                }
                Cmd::Cancel(key) => {
                    self.scheduler.cancel(key);
                }
            }
        }
    }

    /// The component.
    #[must_use]
    pub fn component(&self) -> &C {
        &self.component
    }

    /// The component, mutable.
    pub fn component_mut(&mut self) -> &mut C {
        &mut self.component
    }

    /// The view adapter.
    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// The view adapter, mutable.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Component and view together, for operations outside the message
    /// flow (e.g. a page's `reset`).
    pub fn parts_mut(&mut self) -> (&mut C, &mut V) {
        (&mut self.component, &mut self.view)
    }

    /// The scheduler (inspection only; commands are the mutation path).
    #[must_use]
    pub fn scheduler(&self) -> &Scheduler<C::Message> {
        &self.scheduler
    }
}
