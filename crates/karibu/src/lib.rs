#![forbid(unsafe_code)]

//! Karibu public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports common types from internal crates and offers a lightweight
//! prelude for day-to-day usage.
//!
//! ```
//! use karibu::prelude::*;
//! use karibu_harness::Pilot;
//! use karibu_harness::fixtures;
//!
//! let doc = fixtures::destinations_document();
//! let page = DestinationsPage::bind(&doc, DebounceConfig::default()).unwrap();
//! let mut pilot = Pilot::new(page);
//! pilot.event(Event::input("searchInput", "nairobi"));
//! pilot.advance_ms(300);
//! assert_eq!(pilot.component().visible_count(), 1);
//! ```

// --- Core re-exports -------------------------------------------------------

pub use karibu_core::dom::{
    CardNode, ControlKind, Document, DocumentBuilder, ElementId, FieldNode, FilterButtonNode,
};
pub use karibu_core::event::{Event, KeyCode, KeyEvent, Modifiers};
pub use karibu_core::view::{ErrorSignal, NullView, ViewUpdate};

// --- Runtime re-exports ----------------------------------------------------

pub use karibu_runtime::{Clock, Cmd, Component, FakeClock, Runtime, Scheduler, SystemClock};

// --- Widget re-exports -----------------------------------------------------

pub use karibu_widgets::{
    Catalog, CatalogItem, Facet, Field, FieldKind, FilterGroup, FilterState, FormState,
    HeroSlider, LengthRule, Newsletter, Selection, SignupOutcome, ValidationError, is_valid_email,
};

// --- Page re-exports -------------------------------------------------------

pub use karibu_pages::{
    ContactMsg, ContactPage, DebounceConfig, DestinationsMsg, DestinationsPage, HomeConfig,
    HomeMsg, HomePage, SubmitConfig,
};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Cmd, Component, ContactPage, DebounceConfig, DestinationsPage, Document, ElementId,
        ErrorSignal, Event, FakeClock, HomeConfig, HomePage, KeyCode, KeyEvent, Modifiers,
        Runtime, SubmitConfig, ViewUpdate,
    };

    pub use crate::{core, pages, runtime, widgets};
}

pub use karibu_core as core;
pub use karibu_pages as pages;
pub use karibu_runtime as runtime;
pub use karibu_widgets as widgets;
