//! Auth routes: credential login, bearer-token sessions, logout.

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::http::header::AUTHORIZATION;
use axum::response::{IntoResponse, Json, Response};
use wellness::{LoginRequest, LoginResponse};

use crate::services::accounts::{AccountError, UserSummary};
use crate::services::session;
use crate::state::AppState;

pub(crate) const LOGIN_SUCCESS_MESSAGE: &str = "Login Successful!";
pub(crate) const LOGIN_REJECTED_MESSAGE: &str = "Invalid email or password";
pub(crate) const LOGIN_MALFORMED_MESSAGE: &str = "Enter a valid email and a password of at least 6 characters";

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the `Authorization: Bearer` header.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: UserSummary,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        let token = session::parse_bearer(header).ok_or(StatusCode::UNAUTHORIZED)?;

        let app_state = AppState::from_ref(state);
        let user = app_state
            .sessions
            .validate(token)
            .await
            .ok_or(StatusCode::UNAUTHORIZED)?;

        Ok(Self { user, token: token.to_owned() })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/auth/login`: check credentials and open a session.
pub async fn login(State(state): State<AppState>, Json(req): Json<LoginRequest>) -> Response {
    if !req.is_valid() {
        return (StatusCode::BAD_REQUEST, Json(LoginResponse::rejected(LOGIN_MALFORMED_MESSAGE))).into_response();
    }

    match state.accounts.verify(&req.email, &req.password).await {
        Ok(user) => {
            tracing::info!(email = %user.email, "login accepted");
            let token = state.sessions.create(user).await;
            Json(LoginResponse::accepted(LOGIN_SUCCESS_MESSAGE, token)).into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "login rejected");
            (login_error_to_status(&e), Json(LoginResponse::rejected(LOGIN_REJECTED_MESSAGE))).into_response()
        }
    }
}

pub(crate) fn login_error_to_status(err: &AccountError) -> StatusCode {
    match err {
        AccountError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        AccountError::Invalid(_) => StatusCode::BAD_REQUEST,
        AccountError::Duplicate => StatusCode::CONFLICT,
    }
}

/// `GET /api/auth/me`: return the signed-in user.
pub async fn me(auth: AuthUser) -> Json<UserSummary> {
    Json(auth.user)
}

/// `POST /api/auth/logout`: end the bearer session.
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> impl IntoResponse {
    state.sessions.delete(&auth.token).await;
    tracing::info!(email = %auth.user.email, "session ended");
    StatusCode::NO_CONTENT
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
