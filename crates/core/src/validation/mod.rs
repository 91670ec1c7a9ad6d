//! Form validation engine.
//!
//! Rules are pure functions from a field value to a [`Status`]; [`validate`]
//! runs an ordered list of them and surfaces the first failure. Failures are
//! data, never errors.

pub mod forms;
pub mod rules;

pub use rules::{length, required, validate, Rule, Status};
