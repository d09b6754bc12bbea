//! Registration profile, per-field validation, and the field error map.
//!
//! DESIGN
//! ======
//! Every rule is a function of a single field value; there are no cross-field
//! invariants. The form recomputes one entry per keystroke, while submit runs
//! `validate_profile` over every field so untouched fields cannot slip through.

#[cfg(test)]
#[path = "registration_test.rs"]
mod registration_test;

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::login::{MIN_PASSWORD_LEN, PASSWORD_TOO_SHORT};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("registration email regex is valid"));

static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("phone regex is valid"));

/// Accepted `gender` values.
pub const GENDERS: [&str; 2] = ["male", "female"];
/// Accepted `role` values.
pub const ROLES: [&str; 2] = ["provider", "patient"];
/// `status` values offered by the form. The server only requires non-empty.
pub const STATUSES: [&str; 2] = ["active", "inactive"];

/// One input of the registration form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RegistrationField {
    FirstName,
    LastName,
    Email,
    Password,
    DateOfBirth,
    Phone,
    Gender,
    Status,
    Role,
    City,
    State,
    ZipCode,
}

impl RegistrationField {
    pub const ALL: [Self; 12] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Password,
        Self::DateOfBirth,
        Self::Phone,
        Self::Gender,
        Self::Status,
        Self::Role,
        Self::City,
        Self::State,
        Self::ZipCode,
    ];

    /// Wire/form name (`firstName`, `zipCode`, ...).
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Password => "password",
            Self::DateOfBirth => "dateOfBirth",
            Self::Phone => "phone",
            Self::Gender => "gender",
            Self::Status => "status",
            Self::Role => "role",
            Self::City => "city",
            Self::State => "state",
            Self::ZipCode => "zipCode",
        }
    }

    /// Human label rendered next to the input.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::DateOfBirth => "Date of Birth",
            Self::Phone => "Phone",
            Self::Gender => "Gender",
            Self::Status => "Status",
            Self::Role => "Role",
            Self::City => "City",
            Self::State => "State",
            Self::ZipCode => "Zip Code",
        }
    }
}

/// Validate one field value. Returns the error message, or `None` when valid.
#[must_use]
pub fn validate_field(field: RegistrationField, value: &str) -> Option<&'static str> {
    use RegistrationField as F;

    let invalid = match field {
        F::FirstName | F::LastName | F::Status | F::City | F::State | F::ZipCode => value.is_empty(),
        F::Email => !EMAIL_RE.is_match(value),
        F::Password => value.chars().count() < MIN_PASSWORD_LEN,
        F::Phone => !value.is_empty() && !PHONE_RE.is_match(value),
        F::Gender => !GENDERS.contains(&value),
        F::Role => !ROLES.contains(&value),
        F::DateOfBirth => false,
    };
    if !invalid {
        return None;
    }

    Some(match field {
        F::FirstName => "First Name is required",
        F::LastName => "Last Name is required",
        F::Email => "Invalid email address",
        F::Password => PASSWORD_TOO_SHORT,
        F::Phone => "Invalid phone number",
        F::Gender => "Please select gender",
        F::Status => "Please select status",
        F::Role => "Please select role",
        F::City => "City is required",
        F::State => "State is required",
        F::ZipCode => "Zip Code is required",
        F::DateOfBirth => return None,
    })
}

/// Complete registration payload, as posted to `POST /api/register`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub date_of_birth: String,
    pub phone: String,
    pub gender: String,
    pub status: String,
    pub role: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl RegistrationProfile {
    #[must_use]
    pub fn get(&self, field: RegistrationField) -> &str {
        self.slot(field)
    }

    pub fn set(&mut self, field: RegistrationField, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    fn slot(&self, field: RegistrationField) -> &String {
        use RegistrationField as F;
        match field {
            F::FirstName => &self.first_name,
            F::LastName => &self.last_name,
            F::Email => &self.email,
            F::Password => &self.password,
            F::DateOfBirth => &self.date_of_birth,
            F::Phone => &self.phone,
            F::Gender => &self.gender,
            F::Status => &self.status,
            F::Role => &self.role,
            F::City => &self.city,
            F::State => &self.state,
            F::ZipCode => &self.zip_code,
        }
    }

    fn slot_mut(&mut self, field: RegistrationField) -> &mut String {
        use RegistrationField as F;
        match field {
            F::FirstName => &mut self.first_name,
            F::LastName => &mut self.last_name,
            F::Email => &mut self.email,
            F::Password => &mut self.password,
            F::DateOfBirth => &mut self.date_of_birth,
            F::Phone => &mut self.phone,
            F::Gender => &mut self.gender,
            F::Status => &mut self.status,
            F::Role => &mut self.role,
            F::City => &mut self.city,
            F::State => &mut self.state,
            F::ZipCode => &mut self.zip_code,
        }
    }
}

/// Field -> error message map. An empty message (or a missing entry) is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    entries: BTreeMap<RegistrationField, String>,
}

impl ValidationErrors {
    /// Record the outcome of validating `field`, replacing any previous entry.
    pub fn record(&mut self, field: RegistrationField, error: Option<&str>) {
        self.entries.insert(field, error.unwrap_or_default().to_owned());
    }

    /// Current message for `field`; empty when valid or never checked.
    #[must_use]
    pub fn get(&self, field: RegistrationField) -> &str {
        self.entries.get(&field).map_or("", String::as_str)
    }

    #[must_use]
    pub fn is_recorded(&self, field: RegistrationField) -> bool {
        self.entries.contains_key(&field)
    }

    /// True when every recorded entry is empty.
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.entries.values().all(String::is_empty)
    }

    /// Fields that currently carry a message, in form order.
    pub fn failing(&self) -> impl Iterator<Item = (RegistrationField, &str)> {
        self.entries
            .iter()
            .filter(|(_, msg)| !msg.is_empty())
            .map(|(field, msg)| (*field, msg.as_str()))
    }

    /// Overlay every entry of `other` onto `self`.
    pub fn merge(&mut self, other: &Self) {
        for (field, msg) in &other.entries {
            self.entries.insert(*field, msg.clone());
        }
    }
}

/// Validate every field of `profile`, touched or not.
#[must_use]
pub fn validate_profile(profile: &RegistrationProfile) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    for field in RegistrationField::ALL {
        errors.record(field, validate_field(field, profile.get(field)));
    }
    errors
}
