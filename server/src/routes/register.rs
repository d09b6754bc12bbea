//! Registration route.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use wellness::{RegistrationProfile, ValidationErrors};

use crate::services::accounts::AccountError;
use crate::state::AppState;

pub(crate) const REGISTERED_MESSAGE: &str = "Registration successful!";
pub(crate) const DUPLICATE_MESSAGE: &str = "An account with this email already exists";

/// `POST /api/register`: validate every field and create the account.
///
/// `422` responses carry the field error map so the form can show each
/// message inline.
pub async fn register(State(state): State<AppState>, Json(profile): Json<RegistrationProfile>) -> Response {
    match state.accounts.register(&profile).await {
        Ok(user) => {
            tracing::info!(email = %user.email, "account registered");
            (StatusCode::CREATED, Json(serde_json::json!({ "message": REGISTERED_MESSAGE }))).into_response()
        }
        Err(e) => {
            match &e {
                AccountError::Invalid(errors) => {
                    tracing::warn!(fields = ?failing_field_names(errors), "registration rejected");
                }
                other => tracing::warn!(error = %other, "registration rejected"),
            }
            let status = register_error_to_status(&e);
            match e {
                AccountError::Invalid(errors) => (status, Json(errors)).into_response(),
                AccountError::Duplicate => {
                    (status, Json(serde_json::json!({ "message": DUPLICATE_MESSAGE }))).into_response()
                }
                AccountError::InvalidCredentials => {
                    (status, Json(serde_json::json!({ "message": AccountError::InvalidCredentials.to_string() }))).into_response()
                }
            }
        }
    }
}

/// Labels of the fields that failed validation, in form order.
pub(crate) fn failing_field_names(errors: &ValidationErrors) -> Vec<&'static str> {
    errors.failing().map(|(field, _)| field.name()).collect()
}

pub(crate) fn register_error_to_status(err: &AccountError) -> StatusCode {
    match err {
        AccountError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        AccountError::Duplicate => StatusCode::CONFLICT,
        AccountError::InvalidCredentials => StatusCode::BAD_REQUEST,
    }
}

#[cfg(test)]
#[path = "register_test.rs"]
mod tests;
