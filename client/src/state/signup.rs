//! Sign-up form fields.
//!
//! The browser enforces `required` on both inputs before a submit event
//! fires, so no further validation happens here.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

/// Current contents of the `signup-form` inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    /// Selected activity name; empty while the placeholder is selected.
    pub activity: String,
}

impl SignupForm {
    pub fn new(email: impl Into<String>, activity: impl Into<String>) -> Self {
        Self { email: email.into(), activity: activity.into() }
    }

    /// Equivalent of `form.reset()`: both fields back to empty.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
