#![forbid(unsafe_code)]

//! Single-choice filter button group.
//!
//! Selecting a button deselects its siblings; exactly one button is active
//! at any time. A button whose facet is `all` is the group's neutral
//! position and the reset target.

use karibu_core::dom::{ElementId, FilterButtonNode};
use karibu_core::view::ViewUpdate;

use crate::catalog::Selection;

/// One button in a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterButton {
    /// The button's element id.
    pub id: ElementId,
    /// The selection this button applies.
    pub selection: Selection,
}

/// An exclusive group of filter buttons.
#[derive(Debug, Clone)]
pub struct FilterGroup {
    buttons: Vec<FilterButton>,
    active: usize,
}

impl FilterGroup {
    /// Build from markup nodes. Returns `None` for an empty group. The
    /// initially active button is the `all` button when present, else the
    /// first.
    #[must_use]
    pub fn from_nodes(nodes: &[FilterButtonNode]) -> Option<Self> {
        if nodes.is_empty() {
            return None;
        }
        let buttons: Vec<FilterButton> = nodes
            .iter()
            .map(|node| FilterButton {
                id: node.id.clone(),
                selection: Selection::from_attr(&node.facet),
            })
            .collect();
        let active = buttons
            .iter()
            .position(|b| b.selection == Selection::All)
            .unwrap_or(0);
        Some(Self { buttons, active })
    }

    /// Whether this group contains the element.
    #[must_use]
    pub fn contains(&self, id: &ElementId) -> bool {
        self.buttons.iter().any(|b| &b.id == id)
    }

    /// Activate the button with this id. Returns `true` when the active
    /// selection changed; an unknown id changes nothing.
    pub fn select(&mut self, id: &ElementId) -> bool {
        match self.buttons.iter().position(|b| &b.id == id) {
            Some(index) if index != self.active => {
                self.active = index;
                true
            }
            _ => false,
        }
    }

    /// Return to the `all` position (or the first button).
    pub fn reset(&mut self) {
        self.active = self
            .buttons
            .iter()
            .position(|b| b.selection == Selection::All)
            .unwrap_or(0);
    }

    /// The active selection.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.buttons[self.active].selection
    }

    /// Render active flags: exactly the active button is marked.
    pub fn render(&self, view: &mut dyn ViewUpdate) {
        for (index, button) in self.buttons.iter().enumerate() {
            view.set_active(&button.id, index == self.active);
        }
    }
}
