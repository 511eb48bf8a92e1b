#![forbid(unsafe_code)]

//! Page controllers for the Karibu interaction engine.
//!
//! Each page is a [`Component`](karibu_runtime::Component) bound against a
//! [`Document`](karibu_core::Document) snapshot. Binding degrades per
//! feature: a missing hook disables that feature and nothing else, and a
//! document with none of a page's hooks yields no controller at all.
//! Binding never fails loudly; there is no fatal error class in this
//! engine.

pub mod contact;
pub mod destinations;
pub mod home;

pub use contact::{ContactMsg, ContactPage, SubmitConfig};
pub use destinations::{DebounceConfig, DestinationsMsg, DestinationsPage};
pub use home::{HomeConfig, HomeMsg, HomePage};
