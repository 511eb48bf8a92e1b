#![forbid(unsafe_code)]

//! Canonical document fixtures matching the site's markup.

use karibu_core::dom::{CardNode, ControlKind, Document, ElementId, FieldNode, FilterButtonNode};

/// The contact page: form, banner, submit control, progress, char count.
#[must_use]
pub fn contact_document() -> Document {
    Document::builder()
        .form(
            "contactForm",
            vec![
                FieldNode::new("name", "name", ControlKind::Text).required(),
                FieldNode::new("email", "email", ControlKind::Email).required(),
                FieldNode::new("subject", "subject", ControlKind::Select),
                FieldNode::new("message", "message", ControlKind::Textarea).required(),
            ],
        )
        .element("formMessage")
        .element("submitBtn")
        .element("formProgress")
        .element("charCount")
        .build()
}

fn card(id: &str, name: &str, title: &str, desc: &str, region: &str, kind: &str) -> CardNode {
    CardNode {
        id: ElementId::new(id),
        name: name.to_string(),
        title: title.to_string(),
        description: desc.to_string(),
        region: region.to_string(),
        kind: kind.to_string(),
    }
}

/// Ids of the destination cards, in catalog order.
#[must_use]
pub fn destination_card_ids() -> [&'static str; 3] {
    ["card-nairobi", "card-mombasa", "card-naivasha"]
}

/// The destinations page: search, both filter groups, cards, no-results.
#[must_use]
pub fn destinations_document() -> Document {
    Document::builder()
        .element("searchInput")
        .element("searchBtn")
        .element("noResults")
        .filter_group(
            "regionFilters",
            vec![
                FilterButtonNode::new("region-all", "all"),
                FilterButtonNode::new("region-east", "east"),
                FilterButtonNode::new("region-coast", "coast"),
            ],
        )
        .filter_group(
            "typeFilters",
            vec![
                FilterButtonNode::new("type-all", "all"),
                FilterButtonNode::new("type-wildlife", "wildlife"),
                FilterButtonNode::new("type-beach", "beach"),
            ],
        )
        .card(card(
            "card-nairobi",
            "nairobi",
            "Nairobi Safari",
            "City park wildlife a stone's throw from downtown.",
            "east",
            "wildlife",
        ))
        .card(card(
            "card-mombasa",
            "mombasa",
            "Mombasa Beach",
            "White sand and old-town streets on the coast.",
            "coast",
            "beach",
        ))
        .card(card(
            "card-naivasha",
            "naivasha",
            "Lake Naivasha",
            "Boat rides past hippos and fish eagles.",
            "rift-valley",
            "lake",
        ))
        .build()
}

/// The homepage: newsletter hooks, three slides with dots, nav buttons.
#[must_use]
pub fn home_document() -> Document {
    Document::builder()
        .element("newsletter-form")
        .element("newsletter-email")
        .element("newsletter-message")
        .element("prevBtn")
        .element("nextBtn")
        .slides(vec![
            ElementId::new("slide-0"),
            ElementId::new("slide-1"),
            ElementId::new("slide-2"),
        ])
        .dots(vec![
            ElementId::new("dot-0"),
            ElementId::new("dot-1"),
            ElementId::new("dot-2"),
        ])
        .build()
}
