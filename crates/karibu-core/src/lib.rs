#![forbid(unsafe_code)]

//! Core types for the Karibu interaction engine.
//!
//! This crate defines the vocabulary the rest of the workspace speaks:
//! the canonical user-interaction [`Event`](event::Event) model, stable
//! [`ElementId`](dom::ElementId)s, the immutable [`Document`](dom::Document)
//! snapshot probed from page markup at bind time, and the
//! [`ViewUpdate`](view::ViewUpdate) capability seam through which all
//! rendering side effects flow. Nothing in this crate touches a real DOM;
//! adapters and test doubles implement the seam.

pub mod dom;
pub mod event;
pub mod view;

pub use dom::{
    CardNode, ControlKind, Document, DocumentBuilder, ElementId, FieldNode, FilterButtonNode,
};
pub use event::{Event, KeyCode, KeyEvent, Modifiers};
pub use view::{ErrorSignal, NullView, ViewUpdate};
