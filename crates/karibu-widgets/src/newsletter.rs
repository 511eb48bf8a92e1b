#![forbid(unsafe_code)]

//! Newsletter signup.
//!
//! Holds the email input's current value; `submit` applies the shared
//! email rule to the trimmed value. An accepted signup clears the stored
//! value (the page layer clears the rendered control and schedules the
//! banner dismissal).

use crate::email::is_valid_email;

/// Banner text for an accepted signup.
pub const SIGNUP_SUCCESS: &str = "Thank you for subscribing to our travel updates.";

/// Banner text for a rejected signup.
pub const SIGNUP_ERROR: &str = "Please enter a valid email address.";

/// Result of a signup attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupOutcome {
    /// The address was well-formed; the value was cleared.
    Accepted,
    /// The address was malformed; the value is kept for correction.
    Rejected,
}

impl SignupOutcome {
    /// The banner text for this outcome.
    #[must_use]
    pub const fn banner(self) -> &'static str {
        match self {
            Self::Accepted => SIGNUP_SUCCESS,
            Self::Rejected => SIGNUP_ERROR,
        }
    }
}

/// Newsletter signup state.
#[derive(Debug, Clone, Default)]
pub struct Newsletter {
    value: String,
}

impl Newsletter {
    /// Create with an empty input.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the input's current value.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// The current value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Attempt a signup with the trimmed value.
    pub fn submit(&mut self) -> SignupOutcome {
        if is_valid_email(self.value.trim()) {
            self.value.clear();
            SignupOutcome::Accepted
        } else {
            SignupOutcome::Rejected
        }
    }
}
