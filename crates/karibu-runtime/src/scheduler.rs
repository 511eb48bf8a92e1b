#![forbid(unsafe_code)]

//! Keyed, cancellable one-shot task scheduler.
//!
//! Every deferred behavior in the engine goes through this scheduler:
//! debounce windows, the simulated submission delay, banner auto-dismiss,
//! and slider auto-advance. Tasks are one-shot; periodic behavior re-arms
//! itself from the fired message.
//!
//! # Invariants
//!
//! - **Latest-wins per key**: scheduling a key with a pending task replaces
//!   that task. This is the debounce contract: only the last call within
//!   the quiet window executes.
//! - **Deterministic firing order**: due tasks fire ordered by due time,
//!   ties broken by scheduling order.
//! - **One-shot**: a fired task is removed before its message is delivered.

use std::time::Duration;

use tracing::debug;

use crate::component::TaskKey;

#[derive(Debug)]
struct Task<M> {
    key: TaskKey,
    due: Duration,
    seq: u64,
    msg: M,
}

/// Pending deferred messages, keyed for replacement and cancellation.
#[derive(Debug)]
pub struct Scheduler<M> {
    tasks: Vec<Task<M>>,
    seq: u64,
}

impl<M> Default for Scheduler<M> {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            seq: 0,
        }
    }
}

impl<M> Scheduler<M> {
    /// Create an empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `msg` to fire at `due`, replacing any pending task with the
    /// same key.
    pub fn schedule(&mut self, key: TaskKey, due: Duration, msg: M) {
        let replaced = self.cancel(key);
        if replaced {
            debug!(key, ?due, "scheduler: replaced pending task");
        }
        self.seq += 1;
        self.tasks.push(Task {
            key,
            due,
            seq: self.seq,
            msg,
        });
    }

    /// Cancel the pending task with this key. Returns whether one existed.
    pub fn cancel(&mut self, key: TaskKey) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.key != key);
        before != self.tasks.len()
    }

    /// Remove and return the messages of every task due at or before `now`,
    /// ordered by due time then scheduling order.
    pub fn fire_due(&mut self, now: Duration) -> Vec<M> {
        let mut due: Vec<Task<M>> = Vec::new();
        let mut rest: Vec<Task<M>> = Vec::new();
        for task in self.tasks.drain(..) {
            if task.due <= now {
                due.push(task);
            } else {
                rest.push(task);
            }
        }
        self.tasks = rest;
        due.sort_by(|a, b| a.due.cmp(&b.due).then(a.seq.cmp(&b.seq)));
        due.into_iter().map(|t| t.msg).collect()
    }

    /// The due time of the pending task with this key, when one exists.
    #[must_use]
    pub fn pending(&self, key: TaskKey) -> Option<Duration> {
        self.tasks.iter().find(|t| t.key == key).map(|t| t.due)
    }

    /// Number of pending tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether no tasks are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
