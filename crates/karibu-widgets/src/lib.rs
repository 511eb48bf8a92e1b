#![forbid(unsafe_code)]

//! Interaction widgets for the Karibu engine.
//!
//! Each module owns one piece of page behavior as plain state with a
//! render-to-view method: form fields and their validation rules, the
//! aggregate form, the catalog with its filter state, single-choice filter
//! groups, the newsletter signup, and the hero slider. Widgets hold no
//! timers and dispatch no events; pages wire them to the runtime.

pub mod catalog;
pub mod char_count;
pub mod email;
pub mod field;
pub mod filter_group;
pub mod form;
pub mod newsletter;
pub mod slider;

pub use catalog::{Catalog, CatalogItem, Facet, FilterState, Selection};
pub use char_count::{CountLevel, count, count_level, count_text};
pub use email::is_valid_email;
pub use field::{Field, FieldKind, LengthRule, ValidationError};
pub use filter_group::{FilterButton, FilterGroup};
pub use form::FormState;
pub use newsletter::{Newsletter, SignupOutcome};
pub use slider::HeroSlider;
