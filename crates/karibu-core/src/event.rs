#![forbid(unsafe_code)]

//! Canonical user-interaction events.
//!
//! Every behavior in the engine is a mapping from one of these events to
//! view mutations. All events derive `Clone`, `PartialEq`, and `Eq` for
//! use in tests and pattern matching.
//!
//! # Design Notes
//!
//! - `Input` carries the full current value of the control, not a delta.
//! - `Key` carries an optional target: key handling is either scoped to a
//!   control (Enter in the search box, Tab inside a form field) or global
//!   (arrow keys for the slider).
//! - `Modifiers` use bitflags for easy combination.

use bitflags::bitflags;

use crate::dom::ElementId;

/// Canonical interaction event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The value of a control changed.
    Input {
        /// The control that changed.
        target: ElementId,
        /// The control's full value after the change.
        value: String,
    },

    /// A control lost focus.
    Blur {
        /// The control that lost focus.
        target: ElementId,
    },

    /// A control was activated (button, dot, card, filter chip).
    Click {
        /// The activated element.
        target: ElementId,
    },

    /// A form requested submission.
    Submit {
        /// The form element.
        target: ElementId,
    },

    /// A keyboard event.
    Key(KeyEvent),
}

impl Event {
    /// Build an input event.
    #[must_use]
    pub fn input(target: impl Into<ElementId>, value: impl Into<String>) -> Self {
        Self::Input {
            target: target.into(),
            value: value.into(),
        }
    }

    /// Build a blur event.
    #[must_use]
    pub fn blur(target: impl Into<ElementId>) -> Self {
        Self::Blur {
            target: target.into(),
        }
    }

    /// Build a click event.
    #[must_use]
    pub fn click(target: impl Into<ElementId>) -> Self {
        Self::Click {
            target: target.into(),
        }
    }

    /// Build a submit event.
    #[must_use]
    pub fn submit(target: impl Into<ElementId>) -> Self {
        Self::Submit {
            target: target.into(),
        }
    }
}

/// A keyboard event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key that was pressed.
    pub code: KeyCode,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,

    /// The focused control at press time, when one exists.
    pub target: Option<ElementId>,
}

impl KeyEvent {
    /// Create a key event with no modifiers and no target.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
            target: None,
        }
    }

    /// Attach modifiers.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Scope the event to a focused control.
    #[must_use]
    pub fn with_target(mut self, target: impl Into<ElementId>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Check if Shift is held.
    #[must_use]
    pub const fn shift(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }
}

/// A key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Enter / Return.
    Enter,
    /// Tab.
    Tab,
    /// Escape.
    Escape,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// A printable character.
    Char(char),
}

bitflags! {
    /// Modifier keys that can be held during a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
    }
}
