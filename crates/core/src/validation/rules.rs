//! Validation status, the rule abstraction, and the built-in rules.

use serde::Serialize;

/// Result of applying one rule (or a whole rule list) to a value.
///
/// A message is present exactly when the status is invalid; the constructors
/// are the only way to build one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Status {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl Status {
    /// A passing status with no message.
    pub fn valid() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    /// A failing status carrying a human-readable message.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// A pure check of a single string value.
///
/// Implemented for every `Fn(&str) -> Status`, so plain functions such as
/// [`required`] and closures returned by [`length`] are rules as-is.
pub trait Rule {
    fn check(&self, value: &str) -> Status;
}

impl<F> Rule for F
where
    F: Fn(&str) -> Status,
{
    fn check(&self, value: &str) -> Status {
        self(value)
    }
}

/// Fails when the value is empty.
pub fn required(value: &str) -> Status {
    if value.is_empty() {
        Status::invalid("This field is required")
    } else {
        Status::valid()
    }
}

/// Fails when the value's character count is outside `[min, max]`.
pub fn length(min: usize, max: usize) -> impl Fn(&str) -> Status + Send + Sync + Copy {
    move |value: &str| {
        let len = value.chars().count();
        if (min..=max).contains(&len) {
            Status::valid()
        } else {
            Status::invalid(format!("This field must be between {min} and {max}"))
        }
    }
}

/// Apply `rules` in order and return the first failing status.
///
/// An empty rule list always passes.
///
/// ```
/// use chronicle_core::validation::{length, required, validate};
///
/// let status = validate("ab", &[&required, &length(3, 5)]);
/// assert_eq!(status.message(), Some("This field must be between 3 and 5"));
/// ```
pub fn validate(value: &str, rules: &[&dyn Rule]) -> Status {
    rules
        .iter()
        .map(|rule| rule.check(value))
        .find(|status| !status.is_valid())
        .unwrap_or_else(Status::valid)
}
