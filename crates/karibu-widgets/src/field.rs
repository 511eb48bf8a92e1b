#![forbid(unsafe_code)]

//! Form field model and validation rules.
//!
//! One [`Field`] is one form input and its validation state. Rules apply
//! in a fixed precedence, first match wins:
//!
//! 1. required and empty
//! 2. email kind, non-empty, malformed
//! 3. below the field's minimum length
//!
//! Values are trimmed before every check. Lengths are counted in grapheme
//! clusters, so a two-letter accented name satisfies a minimum of 2.
//!
//! # Invariants
//!
//! - `validate` is pure: same value and rules, same result.
//! - An optional field with an empty value is always valid.
//! - `field.error` only changes through `validate` and `clear_error`.

use std::fmt;

use karibu_core::dom::{ControlKind, ElementId, FieldNode};
use unicode_segmentation::UnicodeSegmentation;

use crate::email::is_valid_email;

/// Error-element id convention: `{name}Error` next to each field.
#[must_use]
pub fn error_element_id(field_name: &str) -> ElementId {
    ElementId::new(format!("{field_name}Error"))
}

/// The validation-relevant kind of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text.
    Text,
    /// Email address.
    Email,
    /// Multi-line text.
    Textarea,
    /// Single choice from a list.
    Select,
}

impl From<ControlKind> for FieldKind {
    fn from(control: ControlKind) -> Self {
        match control {
            ControlKind::Text => Self::Text,
            ControlKind::Email => Self::Email,
            ControlKind::Textarea => Self::Textarea,
            ControlKind::Select => Self::Select,
        }
    }
}

/// A minimum-length rule with its user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthRule {
    /// Minimum grapheme-cluster count.
    pub min: usize,
    /// Message shown when the value is shorter.
    pub message: String,
}

impl LengthRule {
    /// Create a rule.
    #[must_use]
    pub fn new(min: usize, message: impl Into<String>) -> Self {
        Self {
            min,
            message: message.into(),
        }
    }
}

/// The standard length rule for a field name, when one applies.
///
/// Mirrors the site's form policy: names need 2 characters, messages 10.
#[must_use]
pub fn standard_length_rule(field_name: &str) -> Option<LengthRule> {
    match field_name {
        "name" => Some(LengthRule::new(
            2,
            "Name must be at least 2 characters long.",
        )),
        "message" => Some(LengthRule::new(
            10,
            "Please tell us a bit more about your travel plans (at least 10 characters).",
        )),
        _ => None,
    }
}

/// A validation failure for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is empty.
    Required,
    /// An email field holds a malformed address.
    Email,
    /// The value is below the field's minimum length.
    TooShort(String),
}

impl ValidationError {
    /// Stable code for programmatic handling.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Email => "email",
            Self::TooShort(_) => "too_short",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => f.write_str("This field is required."),
            Self::Email => f.write_str("Please enter a valid email address."),
            Self::TooShort(message) => f.write_str(message),
        }
    }
}

impl std::error::Error for ValidationError {}

/// One form input and its validation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// The field's element id.
    pub id: ElementId,
    /// The field's `name` attribute.
    pub name: String,
    /// Validation-relevant kind.
    pub kind: FieldKind,
    /// Whether a value is required.
    pub required: bool,
    /// Optional minimum-length rule.
    pub length: Option<LengthRule>,
    /// Current value, verbatim as entered.
    pub value: String,
    /// Last validation failure, if any.
    pub error: Option<ValidationError>,
}

impl Field {
    /// Build a field from its markup node, applying the standard length
    /// rule for its name.
    #[must_use]
    pub fn from_node(node: &FieldNode) -> Self {
        let mut field = Self::new(node.id.clone(), node.name.clone(), node.control.into());
        field.required = node.required;
        field.length = standard_length_rule(&node.name);
        field
    }

    /// Create an optional field with no rules.
    #[must_use]
    pub fn new(id: impl Into<ElementId>, name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            required: false,
            length: None,
            value: String::new(),
            error: None,
        }
    }

    /// Mark the field required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Attach a minimum-length rule.
    #[must_use]
    pub fn with_length(mut self, rule: LengthRule) -> Self {
        self.length = Some(rule);
        self
    }

    /// The error element id for this field (`{name}Error`).
    #[must_use]
    pub fn error_id(&self) -> ElementId {
        error_element_id(&self.name)
    }

    /// The trimmed value used by every rule.
    #[must_use]
    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }

    /// Check the value against this field's rules without mutating state.
    pub fn check(&self) -> Result<(), ValidationError> {
        let value = self.trimmed();
        if self.required && value.is_empty() {
            return Err(ValidationError::Required);
        }
        if !value.is_empty() {
            if self.kind == FieldKind::Email && !is_valid_email(value) {
                return Err(ValidationError::Email);
            }
            if let Some(rule) = &self.length
                && value.graphemes(true).count() < rule.min
            {
                return Err(ValidationError::TooShort(rule.message.clone()));
            }
        }
        Ok(())
    }

    /// Validate and record the outcome on the field. Returns validity.
    pub fn validate(&mut self) -> bool {
        match self.check() {
            Ok(()) => {
                self.error = None;
                true
            }
            Err(err) => {
                self.error = Some(err);
                false
            }
        }
    }

    /// Drop any recorded error without re-validating.
    pub fn clear_error(&mut self) {
        self.error = None;
    }
}
