#![forbid(unsafe_code)]

//! The Component trait and its command values.
//!
//! Components follow the model/update shape: state plus a transition
//! function from messages to commands. View side effects happen through
//! the [`ViewUpdate`] capability passed into `update`; deferred work is
//! expressed as [`Cmd`] values the runtime executes against its scheduler.

use std::time::Duration;

use karibu_core::event::Event;
use karibu_core::view::ViewUpdate;

/// Identifies a scheduled task for replacement and cancellation.
///
/// Keys are static strings by convention, namespaced per page
/// (`"contact.submit"`, `"destinations.search"`).
pub type TaskKey = &'static str;

/// Commands represent deferred effects to be executed by the runtime.
#[derive(Debug, PartialEq, Eq, Default)]
pub enum Cmd<M> {
    /// No operation.
    #[default]
    None,
    /// Deliver a message immediately after this update.
    Msg(M),
    /// Execute multiple commands in order.
    Batch(Vec<Cmd<M>>),
    /// Deliver `msg` after `delay`, replacing any pending task with the
    /// same key (latest-wins).
    Schedule {
        /// Task key for replacement/cancellation.
        key: TaskKey,
        /// Delay from now.
        delay: Duration,
        /// The message to deliver.
        msg: M,
    },
    /// Cancel the pending task with this key, if any.
    Cancel(TaskKey),
}

impl<M> Cmd<M> {
    /// Create a no-op command.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        Self::None
    }

    /// Create a message command.
    #[inline]
    #[must_use]
    pub fn msg(msg: M) -> Self {
        Self::Msg(msg)
    }

    /// Create a scheduled command.
    #[inline]
    #[must_use]
    pub fn schedule(key: TaskKey, delay: Duration, msg: M) -> Self {
        Self::Schedule { key, delay, msg }
    }

    /// Create a cancel command.
    #[inline]
    #[must_use]
    pub fn cancel(key: TaskKey) -> Self {
        Self::Cancel(key)
    }

    /// Create a batch, collapsing the trivial cases.
    #[must_use]
    pub fn batch(cmds: Vec<Self>) -> Self {
        let mut cmds: Vec<Self> = cmds
            .into_iter()
            .filter(|c| !matches!(c, Self::None))
            .collect();
        match cmds.len() {
            0 => Self::None,
            1 => cmds.remove(0),
            _ => Self::Batch(cmds),
        }
    }
}

/// Application state plus its transition function.
///
/// The message type must absorb raw [`Event`]s; components typically wrap
/// them in a `Dom(Event)` variant and route in `update`.
pub trait Component {
    /// The message type driving this component.
    type Message: From<Event> + 'static;

    /// Called once when the runtime starts. Render initial view state and
    /// arm initial tasks here.
    fn init(&mut self, _view: &mut dyn ViewUpdate) -> Cmd<Self::Message> {
        Cmd::none()
    }

    /// The state transition function.
    fn update(&mut self, msg: Self::Message, view: &mut dyn ViewUpdate) -> Cmd<Self::Message>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_of_nothing_is_none() {
        let cmd: Cmd<u8> = Cmd::batch(vec![]);
        assert_eq!(cmd, Cmd::None);
    }

    #[test]
    fn batch_drops_noops_and_collapses_singletons() {
        let cmd = Cmd::batch(vec![Cmd::None, Cmd::msg(7u8), Cmd::None]);
        assert_eq!(cmd, Cmd::Msg(7));
    }

    #[test]
    fn batch_preserves_order() {
        let cmd = Cmd::batch(vec![Cmd::cancel("a"), Cmd::msg(1u8)]);
        assert_eq!(cmd, Cmd::Batch(vec![Cmd::Cancel("a"), Cmd::Msg(1)]));
    }
}
