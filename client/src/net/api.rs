//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `Unavailable`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so login, profile
//! and metrics failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use super::types::{Credentials, LoginResponse, Metrics, RegisterReply, RegistrationProfile, UserLookup};
use crate::state::login::Authenticator;

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16) -> String {
    format!("login failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn metrics_failed_message(status: u16) -> String {
    format!("metrics request failed: {status}")
}

/// Decode a login reply. Rejections (`401`, `400`) still carry a
/// `LoginResponse` body and come back as `Ok` with `success == false`.
#[cfg(any(test, feature = "hydrate"))]
fn decode_login(status: u16, body: &str) -> Result<LoginResponse, String> {
    match serde_json::from_str::<LoginResponse>(body) {
        Ok(resp) => Ok(resp),
        Err(_) if (200..300).contains(&status) => Err("login response was not understood".to_owned()),
        Err(_) => Err(login_failed_message(status)),
    }
}

/// Authenticate via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns an error string if the request never produced a login response.
pub async fn login(credentials: &Credentials) -> Result<LoginResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(credentials)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| e.to_string())?;
        decode_login(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err("not available on server".to_owned())
    }
}

/// End the server-side session via `POST /api/auth/logout`. Best effort.
pub async fn logout(bearer: &str) {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .header("Authorization", bearer)
            .send()
            .await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = bearer;
    }
}

/// Fetch the signed-in user from `/api/auth/me`.
/// Always `Unavailable` on the server.
pub async fn fetch_current_user(bearer: &str) -> UserLookup {
    #[cfg(feature = "hydrate")]
    {
        let Ok(resp) = gloo_net::http::Request::get("/api/auth/me")
            .header("Authorization", bearer)
            .send()
            .await
        else {
            return UserLookup::Unavailable;
        };
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        UserLookup::from_response(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = bearer;
        UserLookup::Unavailable
    }
}

/// Fetch today's wellness metrics from `/api/metrics`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a non-OK status.
pub async fn fetch_metrics(bearer: &str) -> Result<Metrics, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/metrics")
            .header("Authorization", bearer)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(metrics_failed_message(resp.status()));
        }
        resp.json::<Metrics>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = bearer;
        Err("not available on server".to_owned())
    }
}

/// Submit a registration profile via `POST /api/register`.
///
/// # Errors
///
/// Returns an error string on transport failure or an unexpected status.
pub async fn register(profile: &RegistrationProfile) -> Result<RegisterReply, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/register")
            .json(profile)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| e.to_string())?;
        RegisterReply::from_response(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = profile;
        Err("not available on server".to_owned())
    }
}

/// `Authenticator` backed by the login endpoint.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpAuthenticator;

impl Authenticator for HttpAuthenticator {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, String> {
        login(credentials).await
    }
}

/// Where the metrics panel gets its data.
pub trait MetricsSource {
    fn fetch_metrics(&self) -> impl Future<Output = Result<Metrics, String>>;
}

/// `MetricsSource` backed by `/api/metrics` for the current session.
#[derive(Clone, Debug)]
pub struct HttpMetricsSource {
    pub bearer: String,
}

impl MetricsSource for HttpMetricsSource {
    async fn fetch_metrics(&self) -> Result<Metrics, String> {
        fetch_metrics(&self.bearer).await
    }
}
