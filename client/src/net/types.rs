//! Wire DTOs for the client/server boundary.
//!
//! Login, registration and metrics payloads come from the `wellness` crate so
//! both sides serialize the same shapes. Only client-side views live here.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

pub use wellness::{Credentials, LoginResponse, Metrics, RegistrationProfile, ValidationErrors};

/// Signed-in user as returned by `GET /api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub name: String,
    pub email: String,
}

/// Decoded answer to `GET /api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserLookup {
    Found(CurrentUser),
    /// `401`/`403`: the server no longer honors the token.
    Rejected,
    /// Transport failure, unexpected status or body, or no browser.
    Unavailable,
}

impl UserLookup {
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        match status {
            401 | 403 => Self::Rejected,
            200..=299 => serde_json::from_str(body).map_or(Self::Unavailable, Self::Found),
            _ => Self::Unavailable,
        }
    }
}

/// Decoded answer to `POST /api/register`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegisterReply {
    /// `201`: account created.
    Created { message: String },
    /// `422`: per-field errors from server-side validation.
    Invalid(ValidationErrors),
    /// `409`: email already registered.
    Conflict { message: String },
}

#[derive(Debug, Default, Deserialize)]
struct MessageBody {
    #[serde(default)]
    message: String,
}

impl RegisterReply {
    /// Decode a status code and raw body.
    ///
    /// # Errors
    ///
    /// Returns a message for unexpected statuses or undecodable bodies.
    pub fn from_response(status: u16, body: &str) -> Result<Self, String> {
        match status {
            200 | 201 => Ok(Self::Created { message: message_of(body) }),
            409 => Ok(Self::Conflict { message: message_of(body) }),
            422 => serde_json::from_str(body).map(Self::Invalid).map_err(|e| e.to_string()),
            other => Err(format!("register failed: {other}")),
        }
    }
}

fn message_of(body: &str) -> String {
    serde_json::from_str::<MessageBody>(body).unwrap_or_default().message
}
