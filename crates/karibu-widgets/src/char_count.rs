#![forbid(unsafe_code)]

//! Live character count for the message field.
//!
//! Levels step up at 500 and 1000 characters. Counting uses grapheme
//! clusters, consistent with the length rules.

use unicode_segmentation::UnicodeSegmentation;

/// Warn threshold (exclusive).
pub const WARN_OVER: usize = 500;

/// Alert threshold (exclusive).
pub const ALERT_OVER: usize = 1000;

/// Severity level of the current count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountLevel {
    /// Within normal range.
    Normal,
    /// Over the warn threshold.
    Warn,
    /// Over the alert threshold.
    Alert,
}

/// Level for a count.
#[must_use]
pub const fn count_level(count: usize) -> CountLevel {
    if count > ALERT_OVER {
        CountLevel::Alert
    } else if count > WARN_OVER {
        CountLevel::Warn
    } else {
        CountLevel::Normal
    }
}

/// Grapheme-cluster count of a value.
#[must_use]
pub fn count(value: &str) -> usize {
    value.graphemes(true).count()
}

/// Display text for a value's count.
#[must_use]
pub fn count_text(value: &str) -> String {
    format!("{} characters", count(value))
}
