//! Registration Form state.
//!
//! DESIGN
//! ======
//! `change` is the per-keystroke path and touches exactly one error entry.
//! `submit` re-validates the whole profile so fields the user never focused
//! still report their errors. Server-side field errors (422) are merged over
//! the local map so they render inline the same way.

#[cfg(test)]
#[path = "registration_test.rs"]
mod registration_test;

use wellness::{RegistrationField, RegistrationProfile, ValidationErrors, validate_field, validate_profile};

use crate::net::types::RegisterReply;
use crate::routes;
use crate::state::login::{REDIRECT_DELAY_MS, non_empty_or};
use crate::state::notification::Notification;

pub const REGISTER_FALLBACK_MESSAGE: &str = "Registration failed. Please try again.";
const REGISTER_SUCCESS_FALLBACK: &str = "Registration successful!";
const REGISTER_CONFLICT_FALLBACK: &str = "An account with this email already exists";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub profile: RegistrationProfile,
    pub errors: ValidationErrors,
    pub pending: bool,
}

/// UI effects of a settled registration post.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistrationOutcome {
    pub notification: Option<Notification>,
    pub redirect: Option<(&'static str, u32)>,
}

impl RegistrationForm {
    /// Store `value` for `field` and recompute that field's error only.
    pub fn change(&mut self, field: RegistrationField, value: String) {
        self.errors.record(field, validate_field(field, &value));
        self.profile.set(field, value);
    }

    #[must_use]
    pub fn value(&self, field: RegistrationField) -> &str {
        self.profile.get(field)
    }

    #[must_use]
    pub fn error(&self, field: RegistrationField) -> &str {
        self.errors.get(field)
    }

    /// Validate every field. Returns the profile to post when all pass.
    pub fn submit(&mut self) -> Option<RegistrationProfile> {
        if self.pending {
            return None;
        }
        self.errors = validate_profile(&self.profile);
        if !self.errors.is_clear() {
            return None;
        }
        self.pending = true;
        Some(self.profile.clone())
    }

    /// Apply the server's answer and clear the in-flight flag.
    pub fn finish(&mut self, reply: Result<RegisterReply, String>) -> RegistrationOutcome {
        self.pending = false;
        match reply {
            Ok(RegisterReply::Created { message }) => {
                let message = non_empty_or(message, REGISTER_SUCCESS_FALLBACK);
                *self = Self::default();
                RegistrationOutcome {
                    notification: Some(Notification::success(message)),
                    redirect: Some((routes::LOGIN, REDIRECT_DELAY_MS)),
                }
            }
            Ok(RegisterReply::Invalid(errors)) => {
                self.errors.merge(&errors);
                RegistrationOutcome { notification: None, redirect: None }
            }
            Ok(RegisterReply::Conflict { message }) => RegistrationOutcome {
                notification: Some(Notification::error(non_empty_or(message, REGISTER_CONFLICT_FALLBACK))),
                redirect: None,
            },
            Err(_) => RegistrationOutcome {
                notification: Some(Notification::error(REGISTER_FALLBACK_MESSAGE)),
                redirect: None,
            },
        }
    }
}
