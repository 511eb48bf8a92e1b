#![forbid(unsafe_code)]

//! Document snapshot and element identity.
//!
//! Pages do not query live markup; they bind against a [`Document`]
//! snapshot probed once at load time. The snapshot records which elements
//! exist, the fields of each form, the catalog cards with their data
//! attributes, the filter button groups, and the slide/dot lists. It is
//! immutable after construction, so every downstream computation is a pure
//! function of the snapshot and component state.
//!
//! # Failure Modes
//!
//! | Scenario | Behavior |
//! |----------|----------|
//! | Element id missing | `has()` false, page binding skips that feature |
//! | Form with no fields | Binds as an empty form, never validates false |
//! | Duplicate registration | Last registration wins |

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// A stable identifier for a page element.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(String);

impl ElementId {
    /// Create an id from its markup value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw id string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ElementId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// The kind of control backing a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// Single-line text input.
    Text,
    /// Email input.
    Email,
    /// Multi-line textarea.
    Textarea,
    /// Dropdown select.
    Select,
}

/// One form field as found in the markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldNode {
    /// The field's element id.
    pub id: ElementId,
    /// The field's `name` attribute.
    pub name: String,
    /// The backing control kind.
    pub control: ControlKind,
    /// Whether the markup marks the field required.
    pub required: bool,
}

impl FieldNode {
    /// Create a field node.
    #[must_use]
    pub fn new(id: impl Into<ElementId>, name: impl Into<String>, control: ControlKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            control,
            required: false,
        }
    }

    /// Mark the field required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// One catalog card as found in the markup.
///
/// `region` and `kind` come from `data-region` / `data-type` attributes and
/// are kept verbatim here; normalization happens in the catalog model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardNode {
    /// The card's element id.
    pub id: ElementId,
    /// The `data-name` attribute.
    pub name: String,
    /// The card's heading text.
    pub title: String,
    /// The card's body text.
    pub description: String,
    /// The `data-region` attribute.
    pub region: String,
    /// The `data-type` attribute.
    pub kind: String,
}

/// One filter button as found in the markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterButtonNode {
    /// The button's element id.
    pub id: ElementId,
    /// The `data-filter` attribute (`"all"` or a facet value).
    pub facet: String,
}

impl FilterButtonNode {
    /// Create a filter button node.
    #[must_use]
    pub fn new(id: impl Into<ElementId>, facet: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            facet: facet.into(),
        }
    }
}

/// Immutable snapshot of the page structure a feature set binds against.
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: BTreeSet<ElementId>,
    forms: BTreeMap<ElementId, Vec<FieldNode>>,
    cards: Vec<CardNode>,
    filter_groups: BTreeMap<ElementId, Vec<FilterButtonNode>>,
    slides: Vec<ElementId>,
    dots: Vec<ElementId>,
}

impl Document {
    /// Start building a snapshot.
    #[must_use]
    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::default()
    }

    /// Whether an element with this id exists.
    #[must_use]
    pub fn has(&self, id: &ElementId) -> bool {
        self.elements.contains(id)
    }

    /// Look up an element id by its string form, when present.
    #[must_use]
    pub fn element(&self, id: &str) -> Option<ElementId> {
        let id = ElementId::new(id);
        self.has(&id).then_some(id)
    }

    /// The fields of a form, when the form exists.
    #[must_use]
    pub fn form_fields(&self, form: &ElementId) -> Option<&[FieldNode]> {
        self.forms.get(form).map(Vec::as_slice)
    }

    /// All catalog cards in document order.
    #[must_use]
    pub fn cards(&self) -> &[CardNode] {
        &self.cards
    }

    /// The buttons of a filter group, when the group exists.
    #[must_use]
    pub fn filter_group(&self, group: &ElementId) -> Option<&[FilterButtonNode]> {
        self.filter_groups.get(group).map(Vec::as_slice)
    }

    /// Slide element ids in document order.
    #[must_use]
    pub fn slides(&self) -> &[ElementId] {
        &self.slides
    }

    /// Slider dot element ids in document order.
    #[must_use]
    pub fn dots(&self) -> &[ElementId] {
        &self.dots
    }
}

/// Builder for [`Document`].
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    doc: Document,
}

impl DocumentBuilder {
    /// Register a bare element.
    #[must_use]
    pub fn element(mut self, id: impl Into<ElementId>) -> Self {
        self.doc.elements.insert(id.into());
        self
    }

    /// Register a form and its fields. Field elements are registered too.
    #[must_use]
    pub fn form(mut self, id: impl Into<ElementId>, fields: Vec<FieldNode>) -> Self {
        let id = id.into();
        self.doc.elements.insert(id.clone());
        for field in &fields {
            self.doc.elements.insert(field.id.clone());
        }
        self.doc.forms.insert(id, fields);
        self
    }

    /// Register a catalog card.
    #[must_use]
    pub fn card(mut self, card: CardNode) -> Self {
        self.doc.elements.insert(card.id.clone());
        self.doc.cards.push(card);
        self
    }

    /// Register a filter button group.
    #[must_use]
    pub fn filter_group(
        mut self,
        id: impl Into<ElementId>,
        buttons: Vec<FilterButtonNode>,
    ) -> Self {
        let id = id.into();
        self.doc.elements.insert(id.clone());
        for button in &buttons {
            self.doc.elements.insert(button.id.clone());
        }
        self.doc.filter_groups.insert(id, buttons);
        self
    }

    /// Register the hero slides in display order.
    #[must_use]
    pub fn slides(mut self, ids: Vec<ElementId>) -> Self {
        for id in &ids {
            self.doc.elements.insert(id.clone());
        }
        self.doc.slides = ids;
        self
    }

    /// Register the slider dots in display order.
    #[must_use]
    pub fn dots(mut self, ids: Vec<ElementId>) -> Self {
        for id in &ids {
            self.doc.elements.insert(id.clone());
        }
        self.doc.dots = ids;
        self
    }

    /// Finish the snapshot.
    #[must_use]
    pub fn build(self) -> Document {
        self.doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: &str) -> CardNode {
        CardNode {
            id: ElementId::new(id),
            name: id.to_string(),
            title: String::new(),
            description: String::new(),
            region: "coast".to_string(),
            kind: "beach".to_string(),
        }
    }

    #[test]
    fn empty_document_has_nothing() {
        let doc = Document::default();
        assert!(!doc.has(&ElementId::new("contactForm")));
        assert!(doc.element("contactForm").is_none());
        assert!(doc.cards().is_empty());
    }

    #[test]
    fn form_registers_field_elements() {
        let doc = Document::builder()
            .form(
                "contactForm",
                vec![FieldNode::new("name", "name", ControlKind::Text).required()],
            )
            .build();
        assert!(doc.has(&ElementId::new("contactForm")));
        assert!(doc.has(&ElementId::new("name")));
        let fields = doc.form_fields(&ElementId::new("contactForm")).unwrap();
        assert_eq!(fields.len(), 1);
        assert!(fields[0].required);
    }

    #[test]
    fn cards_keep_document_order() {
        let doc = Document::builder()
            .card(card("b"))
            .card(card("a"))
            .build();
        let ids: Vec<_> = doc.cards().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn filter_group_registers_buttons() {
        let doc = Document::builder()
            .filter_group(
                "regionFilters",
                vec![
                    FilterButtonNode::new("region-all", "all"),
                    FilterButtonNode::new("region-coast", "coast"),
                ],
            )
            .build();
        assert!(doc.has(&ElementId::new("region-coast")));
        let group = doc.filter_group(&ElementId::new("regionFilters")).unwrap();
        assert_eq!(group[0].facet, "all");
    }

    #[test]
    fn missing_lookups_return_none() {
        let doc = Document::builder().element("noResults").build();
        assert!(doc.form_fields(&ElementId::new("contactForm")).is_none());
        assert!(doc.filter_group(&ElementId::new("typeFilters")).is_none());
    }
}
