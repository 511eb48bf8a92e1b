#![forbid(unsafe_code)]

//! Test harness for the Karibu interaction engine.
//!
//! Provides the pieces page tests need to run without a browser: a
//! [`RecordingView`] that captures every view mutation and answers
//! queries about the last-written state, canonical [`fixtures`] documents
//! matching the site's markup, and a [`Pilot`] that drives a component
//! through a runtime with a fake clock.

pub mod fixtures;
pub mod pilot;
pub mod recording_view;

pub use pilot::Pilot;
pub use recording_view::{RecordingView, ViewOp};
