//! Rule sets for the application's forms.
//!
//! The sign-up and sign-in forms share the same username and password
//! constraints; the post writer only requires a title.

use serde::Serialize;

use super::rules::{length, required, validate, Status};
use crate::user::NewUser;

/// Inclusive character bounds for usernames.
pub const USERNAME_LENGTH: (usize, usize) = (5, 10);

/// Inclusive character bounds for passwords.
pub const PASSWORD_LENGTH: (usize, usize) = (10, 40);

/// Per-field statuses for a [`NewUser`] form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormStatus {
    pub username: Status,
    pub password: Status,
}

impl FormStatus {
    pub fn is_valid(&self) -> bool {
        self.username.is_valid() && self.password.is_valid()
    }

    /// The first failing message, username before password.
    pub fn first_error(&self) -> Option<&str> {
        self.username.message().or_else(|| self.password.message())
    }
}

pub fn validate_username(value: &str) -> Status {
    let (min, max) = USERNAME_LENGTH;
    validate(value, &[&required, &length(min, max)])
}

pub fn validate_password(value: &str) -> Status {
    let (min, max) = PASSWORD_LENGTH;
    validate(value, &[&required, &length(min, max)])
}

pub fn validate_title(value: &str) -> Status {
    validate(value, &[&required])
}

/// Validate both fields of a sign-up / sign-in form.
pub fn validate_new_user(user: &NewUser) -> FormStatus {
    FormStatus {
        username: validate_username(&user.username),
        password: validate_password(&user.password),
    }
}
