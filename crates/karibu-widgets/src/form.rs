#![forbid(unsafe_code)]

//! Aggregate form state.
//!
//! An ordered sequence of [`Field`]s belonging to one form. Aggregate
//! validity is the AND of per-field validity; `validate_all` also records
//! per-field errors so the page layer can render them. Editing a field
//! with a non-empty value clears its recorded error without re-validating
//! (the next blur or submit re-validates).

use karibu_core::dom::{ElementId, FieldNode};
use karibu_core::view::{ErrorSignal, ViewUpdate};

use crate::field::Field;

/// Ordered fields of one form.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    fields: Vec<Field>,
}

impl FormState {
    /// Build from markup nodes, in document order.
    #[must_use]
    pub fn from_nodes(nodes: &[FieldNode]) -> Self {
        Self {
            fields: nodes.iter().map(Field::from_node).collect(),
        }
    }

    /// The fields in document order.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Find a field by element id.
    #[must_use]
    pub fn field_by_id(&self, id: &ElementId) -> Option<&Field> {
        self.fields.iter().find(|f| &f.id == id)
    }

    /// Find a field by element id, mutable.
    pub fn field_by_id_mut(&mut self, id: &ElementId) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| &f.id == id)
    }

    /// Find a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Position of a field by element id.
    #[must_use]
    pub fn position(&self, id: &ElementId) -> Option<usize> {
        self.fields.iter().position(|f| &f.id == id)
    }

    /// Record a new value for the field with this id. Returns whether the
    /// field existed.
    pub fn set_value(&mut self, id: &ElementId, value: impl Into<String>) -> bool {
        match self.field_by_id_mut(id) {
            Some(field) => {
                field.value = value.into();
                true
            }
            None => false,
        }
    }

    /// Validate every field, recording per-field errors. Returns aggregate
    /// validity. Idempotent for unchanged values.
    pub fn validate_all(&mut self) -> bool {
        let mut all_valid = true;
        for field in &mut self.fields {
            if !field.validate() {
                all_valid = false;
            }
        }
        all_valid
    }

    /// Render one field's validation outcome: error text into its
    /// `{name}Error` element and the tri-state border signal.
    pub fn render_field(&self, id: &ElementId, view: &mut dyn ViewUpdate) {
        if let Some(field) = self.field_by_id(id) {
            match &field.error {
                Some(err) => {
                    view.set_text(&field.error_id(), &err.to_string());
                    view.set_error_signal(&field.id, ErrorSignal::Invalid);
                }
                None => {
                    view.set_text(&field.error_id(), "");
                    view.set_error_signal(&field.id, ErrorSignal::Valid);
                }
            }
        }
    }

    /// Render every field's validation outcome.
    pub fn render_all(&self, view: &mut dyn ViewUpdate) {
        for field in &self.fields {
            self.render_field(&field.id, view);
        }
    }

    /// Clear all values and errors, and reset the rendered controls:
    /// values emptied, error texts removed, border signals neutral.
    pub fn reset(&mut self, view: &mut dyn ViewUpdate) {
        for field in &mut self.fields {
            field.value.clear();
            field.error = None;
            view.set_value(&field.id, "");
            view.set_text(&field.error_id(), "");
            view.set_error_signal(&field.id, ErrorSignal::Clear);
        }
    }

    /// Fraction of required fields holding a non-blank value, in `0.0..=1.0`.
    /// A form with no required fields reports `1.0`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        let required: Vec<_> = self.fields.iter().filter(|f| f.required).collect();
        if required.is_empty() {
            return 1.0;
        }
        let filled = required.iter().filter(|f| !f.trimmed().is_empty()).count();
        filled as f64 / required.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use karibu_core::dom::ControlKind;

    fn contact_nodes() -> Vec<FieldNode> {
        vec![
            FieldNode::new("name", "name", ControlKind::Text).required(),
            FieldNode::new("email", "email", ControlKind::Email).required(),
            FieldNode::new("subject", "subject", ControlKind::Select),
            FieldNode::new("message", "message", ControlKind::Textarea).required(),
        ]
    }

    fn filled_form() -> FormState {
        let mut form = FormState::from_nodes(&contact_nodes());
        form.set_value(&ElementId::new("name"), "Asha");
        form.set_value(&ElementId::new("email"), "asha@example.com");
        form.set_value(&ElementId::new("message"), "Planning a trip to the coast.");
        form
    }

    #[test]
    fn validate_all_true_iff_every_field_valid() {
        let mut form = filled_form();
        assert!(form.validate_all());

        form.set_value(&ElementId::new("email"), "bad-email");
        assert!(!form.validate_all());
    }

    #[test]
    fn validate_all_is_idempotent() {
        let mut form = FormState::from_nodes(&contact_nodes());
        let first = form.validate_all();
        let second = form.validate_all();
        assert_eq!(first, second);
        assert!(!first);
    }

    #[test]
    fn validate_all_records_every_error() {
        let mut form = FormState::from_nodes(&contact_nodes());
        form.validate_all();
        assert!(form.field("name").unwrap().error.is_some());
        assert!(form.field("email").unwrap().error.is_some());
        assert!(form.field("message").unwrap().error.is_some());
        // Optional select with no value stays valid.
        assert!(form.field("subject").unwrap().error.is_none());
    }

    #[test]
    fn progress_counts_required_fields_only() {
        let mut form = FormState::from_nodes(&contact_nodes());
        assert_eq!(form.progress(), 0.0);

        form.set_value(&ElementId::new("name"), "Asha");
        // Subject is optional; filling it does not move progress.
        form.set_value(&ElementId::new("subject"), "safari");
        let one_of_three = 1.0 / 3.0;
        assert!((form.progress() - one_of_three).abs() < 1e-9);

        form.set_value(&ElementId::new("email"), "a@b.co");
        form.set_value(&ElementId::new("message"), "x");
        assert_eq!(form.progress(), 1.0);
    }

    #[test]
    fn progress_ignores_blank_values() {
        let mut form = FormState::from_nodes(&contact_nodes());
        form.set_value(&ElementId::new("name"), "   ");
        assert_eq!(form.progress(), 0.0);
    }

    #[test]
    fn set_value_unknown_id_is_false() {
        let mut form = FormState::from_nodes(&contact_nodes());
        assert!(!form.set_value(&ElementId::new("missing"), "x"));
    }

    #[test]
    fn position_follows_document_order() {
        let form = FormState::from_nodes(&contact_nodes());
        assert_eq!(form.position(&ElementId::new("name")), Some(0));
        assert_eq!(form.position(&ElementId::new("message")), Some(3));
        assert_eq!(form.position(&ElementId::new("missing")), None);
    }
}
