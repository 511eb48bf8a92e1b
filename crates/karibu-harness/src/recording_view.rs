#![forbid(unsafe_code)]

//! Recording view double.
//!
//! Captures every [`ViewUpdate`] call in order and keeps last-write state
//! per element for queries. Defaults mirror a fresh page: elements are
//! visible, enabled, inactive, with empty text and a clear signal.

use std::collections::BTreeMap;

use karibu_core::dom::ElementId;
use karibu_core::view::{ErrorSignal, ViewUpdate};

/// One recorded mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewOp {
    /// `set_text` call.
    Text(ElementId, String),
    /// `set_value` call.
    Value(ElementId, String),
    /// `set_visible` call.
    Visible(ElementId, bool),
    /// `set_error_signal` call.
    Signal(ElementId, ErrorSignal),
    /// `set_enabled` call.
    Enabled(ElementId, bool),
    /// `set_active` call.
    Active(ElementId, bool),
    /// `focus` call.
    Focus(ElementId),
}

/// A view that records everything and forgets nothing.
#[derive(Debug, Default)]
pub struct RecordingView {
    ops: Vec<ViewOp>,
    text: BTreeMap<ElementId, String>,
    value: BTreeMap<ElementId, String>,
    visible: BTreeMap<ElementId, bool>,
    signal: BTreeMap<ElementId, ErrorSignal>,
    enabled: BTreeMap<ElementId, bool>,
    active: BTreeMap<ElementId, bool>,
    focused: Option<ElementId>,
}

impl RecordingView {
    /// Create an empty recording view.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every mutation in call order.
    #[must_use]
    pub fn ops(&self) -> &[ViewOp] {
        &self.ops
    }

    /// Drop the op log, keeping last-write state.
    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    /// Last text written to an element (empty when never written).
    #[must_use]
    pub fn text_of(&self, id: &str) -> &str {
        self.text
            .get(&ElementId::new(id))
            .map_or("", String::as_str)
    }

    /// Last value written to a control (empty when never written).
    #[must_use]
    pub fn value_of(&self, id: &str) -> &str {
        self.value
            .get(&ElementId::new(id))
            .map_or("", String::as_str)
    }

    /// Last visibility written (fresh elements are visible).
    #[must_use]
    pub fn is_visible(&self, id: &str) -> bool {
        self.visible.get(&ElementId::new(id)).copied().unwrap_or(true)
    }

    /// Last signal written (fresh elements are clear).
    #[must_use]
    pub fn signal_of(&self, id: &str) -> ErrorSignal {
        self.signal
            .get(&ElementId::new(id))
            .copied()
            .unwrap_or(ErrorSignal::Clear)
    }

    /// Last enabled state written (fresh controls are enabled).
    #[must_use]
    pub fn is_enabled(&self, id: &str) -> bool {
        self.enabled.get(&ElementId::new(id)).copied().unwrap_or(true)
    }

    /// Last active flag written (fresh elements are inactive).
    #[must_use]
    pub fn is_active(&self, id: &str) -> bool {
        self.active.get(&ElementId::new(id)).copied().unwrap_or(false)
    }

    /// The currently focused control, when any.
    #[must_use]
    pub fn focused(&self) -> Option<&ElementId> {
        self.focused.as_ref()
    }

    /// How many of the given ids are currently visible.
    #[must_use]
    pub fn visible_among<'a>(&self, ids: impl IntoIterator<Item = &'a str>) -> usize {
        ids.into_iter().filter(|id| self.is_visible(id)).count()
    }
}

impl ViewUpdate for RecordingView {
    fn set_text(&mut self, target: &ElementId, text: &str) {
        self.ops.push(ViewOp::Text(target.clone(), text.to_string()));
        self.text.insert(target.clone(), text.to_string());
    }

    fn set_value(&mut self, target: &ElementId, value: &str) {
        self.ops
            .push(ViewOp::Value(target.clone(), value.to_string()));
        self.value.insert(target.clone(), value.to_string());
    }

    fn set_visible(&mut self, target: &ElementId, visible: bool) {
        self.ops.push(ViewOp::Visible(target.clone(), visible));
        self.visible.insert(target.clone(), visible);
    }

    fn set_error_signal(&mut self, target: &ElementId, signal: ErrorSignal) {
        self.ops.push(ViewOp::Signal(target.clone(), signal));
        self.signal.insert(target.clone(), signal);
    }

    fn set_enabled(&mut self, target: &ElementId, enabled: bool) {
        self.ops.push(ViewOp::Enabled(target.clone(), enabled));
        self.enabled.insert(target.clone(), enabled);
    }

    fn set_active(&mut self, target: &ElementId, active: bool) {
        self.ops.push(ViewOp::Active(target.clone(), active));
        self.active.insert(target.clone(), active);
    }

    fn focus(&mut self, target: &ElementId) {
        self.ops.push(ViewOp::Focus(target.clone()));
        self.focused = Some(target.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_elements_have_page_defaults() {
        let view = RecordingView::new();
        assert_eq!(view.text_of("formMessage"), "");
        assert!(view.is_visible("card-1"));
        assert!(view.is_enabled("submitBtn"));
        assert!(!view.is_active("dot-0"));
        assert_eq!(view.signal_of("name"), ErrorSignal::Clear);
        assert!(view.focused().is_none());
    }

    #[test]
    fn last_write_wins() {
        let mut view = RecordingView::new();
        let id = ElementId::new("formMessage");
        view.set_text(&id, "first");
        view.set_text(&id, "second");
        assert_eq!(view.text_of("formMessage"), "second");
        assert_eq!(view.ops().len(), 2);
    }

    #[test]
    fn clear_ops_keeps_state() {
        let mut view = RecordingView::new();
        view.set_visible(&ElementId::new("card-1"), false);
        view.clear_ops();
        assert!(view.ops().is_empty());
        assert!(!view.is_visible("card-1"));
    }

    #[test]
    fn visible_among_counts() {
        let mut view = RecordingView::new();
        view.set_visible(&ElementId::new("a"), false);
        assert_eq!(view.visible_among(["a", "b", "c"]), 2);
    }
}
