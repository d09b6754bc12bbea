use axum::extract::FromRequestParts;
use axum::http::Request;

use super::*;
use crate::state::test_helpers::{TEST_EMAIL, TEST_PASSWORD, seeded_state, signed_in_state};

async fn body_json<T: serde::de::DeserializeOwned>(resp: Response) -> T {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn parts_with_auth(value: Option<&str>) -> axum::http::request::Parts {
    let mut builder = Request::builder().uri("/api/auth/me");
    if let Some(value) = value {
        builder = builder.header(AUTHORIZATION, value);
    }
    builder.body(()).unwrap().into_parts().0
}

// =============================================================================
// login
// =============================================================================

#[tokio::test]
async fn login_accepts_seeded_credentials() {
    let state = seeded_state().await;
    let req = LoginRequest::new(TEST_EMAIL, TEST_PASSWORD);
    let resp = login(State(state.clone()), Json(req)).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: LoginResponse = body_json(resp).await;
    assert!(body.success);
    assert_eq!(body.message, "Login Successful!");
    let token = body.token.expect("accepted login carries a token");
    assert!(state.sessions.validate(&token).await.is_some());
}

#[tokio::test]
async fn login_rejects_wrong_password_with_message() {
    let state = seeded_state().await;
    let resp = login(State(state), Json(LoginRequest::new(TEST_EMAIL, "wrong-pw"))).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: LoginResponse = body_json(resp).await;
    assert_eq!(body, LoginResponse::rejected(LOGIN_REJECTED_MESSAGE));
}

#[tokio::test]
async fn login_rejects_malformed_credentials_before_lookup() {
    let state = seeded_state().await;
    let resp = login(State(state), Json(LoginRequest::new("not-an-email", TEST_PASSWORD))).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: LoginResponse = body_json(resp).await;
    assert!(!body.success);
    assert!(body.token.is_none());
}

#[test]
fn login_error_to_status_maps_variants() {
    assert_eq!(login_error_to_status(&AccountError::InvalidCredentials), StatusCode::UNAUTHORIZED);
    assert_eq!(login_error_to_status(&AccountError::Duplicate), StatusCode::CONFLICT);
    assert_eq!(
        login_error_to_status(&AccountError::Invalid(wellness::ValidationErrors::default())),
        StatusCode::BAD_REQUEST
    );
}

// =============================================================================
// AuthUser extractor
// =============================================================================

#[tokio::test]
async fn auth_user_resolves_live_bearer_token() {
    let (state, token) = signed_in_state().await;
    let mut parts = parts_with_auth(Some(&format!("Bearer {token}")));
    let auth = AuthUser::from_request_parts(&mut parts, &state).await.ok().unwrap();
    assert_eq!(auth.user.email, TEST_EMAIL);
    assert_eq!(auth.token, token);
}

#[tokio::test]
async fn auth_user_rejects_missing_or_unknown_token() {
    let (state, _) = signed_in_state().await;

    let mut missing = parts_with_auth(None);
    let err = AuthUser::from_request_parts(&mut missing, &state).await.err();
    assert_eq!(err, Some(StatusCode::UNAUTHORIZED));

    let mut unknown = parts_with_auth(Some("Bearer deadbeef"));
    let err = AuthUser::from_request_parts(&mut unknown, &state).await.err();
    assert_eq!(err, Some(StatusCode::UNAUTHORIZED));
}

// =============================================================================
// me + logout
// =============================================================================

#[tokio::test]
async fn me_returns_session_user() {
    let (state, token) = signed_in_state().await;
    let user = state.sessions.validate(&token).await.unwrap();
    let Json(body) = me(AuthUser { user: user.clone(), token }).await;
    assert_eq!(body, user);
}

#[tokio::test]
async fn logout_deletes_session() {
    let (state, token) = signed_in_state().await;
    let user = state.sessions.validate(&token).await.unwrap();
    let resp = logout(State(state.clone()), AuthUser { user, token: token.clone() })
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(state.sessions.validate(&token).await.is_none());
}
