#![forbid(unsafe_code)]

//! View-update capability seam.
//!
//! Components never mutate markup directly; they describe mutations through
//! [`ViewUpdate`]. A real adapter forwards the calls to a DOM; tests use a
//! recording double. The capability set is deliberately small: text,
//! value, visibility, a tri-state validation signal, enabled state, an
//! active flag for exclusive groups, and focus.
//!
//! Targets that do not exist are the adapter's problem: implementations
//! must treat unknown ids as no-ops, never as failures.

use crate::dom::ElementId;

/// Tri-state validation border signal for a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorSignal {
    /// No signal (neutral border).
    #[default]
    Clear,
    /// The control failed validation.
    Invalid,
    /// The control passed validation.
    Valid,
}

/// Mutation capabilities a view adapter provides.
pub trait ViewUpdate {
    /// Replace an element's text content.
    fn set_text(&mut self, target: &ElementId, text: &str);

    /// Replace a control's value.
    fn set_value(&mut self, target: &ElementId, value: &str);

    /// Show or hide an element.
    fn set_visible(&mut self, target: &ElementId, visible: bool);

    /// Set a control's validation border signal.
    fn set_error_signal(&mut self, target: &ElementId, signal: ErrorSignal);

    /// Enable or disable a control.
    fn set_enabled(&mut self, target: &ElementId, enabled: bool);

    /// Mark an element active within an exclusive group (filter buttons,
    /// slides, dots).
    fn set_active(&mut self, target: &ElementId, active: bool);

    /// Move keyboard focus to a control.
    fn focus(&mut self, target: &ElementId);
}

/// A view that drops every mutation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullView;

impl ViewUpdate for NullView {
    fn set_text(&mut self, _target: &ElementId, _text: &str) {}
    fn set_value(&mut self, _target: &ElementId, _value: &str) {}
    fn set_visible(&mut self, _target: &ElementId, _visible: bool) {}
    fn set_error_signal(&mut self, _target: &ElementId, _signal: ErrorSignal) {}
    fn set_enabled(&mut self, _target: &ElementId, _enabled: bool) {}
    fn set_active(&mut self, _target: &ElementId, _active: bool) {}
    fn focus(&mut self, _target: &ElementId) {}
}
