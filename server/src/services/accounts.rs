//! In-memory account registry with salted password hashes.
//!
//! Accounts are keyed by normalized email. Registration reuses the shared
//! `wellness` field rules so the server rejects exactly what the form would.

use std::collections::HashMap;
use std::sync::Arc;

use rand::Rng;
use serde::Serialize;
use sha2::{Digest, Sha256};
use tokio::sync::RwLock;
use wellness::{RegistrationProfile, ValidationErrors, validate_profile};

use super::session::bytes_to_hex;

#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("registration failed validation")]
    Invalid(ValidationErrors),
    #[error("email already registered")]
    Duplicate,
    #[error("invalid email or password")]
    InvalidCredentials,
}

/// Public view of an account, safe to return to the browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummary {
    pub name: String,
    pub email: String,
}

struct Account {
    summary: UserSummary,
    salt: String,
    password_hash: String,
}

#[must_use]
pub fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

#[must_use]
pub(crate) fn generate_salt() -> String {
    let bytes: [u8; 16] = rand::rng().random();
    bytes_to_hex(&bytes)
}

#[must_use]
pub(crate) fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    bytes_to_hex(&hasher.finalize())
}

/// Compare two hex digests without short-circuiting on the first mismatch.
fn digests_match(a: &str, b: &str) -> bool {
    a.len() == b.len() && a.bytes().zip(b.bytes()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

fn display_name(profile: &RegistrationProfile) -> String {
    let name = format!("{} {}", profile.first_name.trim(), profile.last_name.trim());
    let name = name.trim();
    if name.is_empty() { "User".to_owned() } else { name.to_owned() }
}

#[derive(Clone, Default)]
pub struct AccountStore {
    inner: Arc<RwLock<HashMap<String, Account>>>,
}

impl AccountStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate every field of `profile` and create the account.
    ///
    /// # Errors
    ///
    /// [`AccountError::Invalid`] carries the per-field messages when any rule
    /// fails; [`AccountError::Duplicate`] when the email is taken.
    pub async fn register(&self, profile: &RegistrationProfile) -> Result<UserSummary, AccountError> {
        let errors = validate_profile(profile);
        if !errors.is_clear() {
            return Err(AccountError::Invalid(errors));
        }

        let key = normalize_email(&profile.email);
        let mut accounts = self.inner.write().await;
        if accounts.contains_key(&key) {
            return Err(AccountError::Duplicate);
        }

        let salt = generate_salt();
        let summary = UserSummary { name: display_name(profile), email: key.clone() };
        accounts.insert(
            key,
            Account { summary: summary.clone(), password_hash: hash_password(&salt, &profile.password), salt },
        );
        Ok(summary)
    }

    /// Check a login attempt.
    ///
    /// # Errors
    ///
    /// [`AccountError::InvalidCredentials`] for an unknown email or a wrong
    /// password; the two cases are indistinguishable to the caller.
    pub async fn verify(&self, email: &str, password: &str) -> Result<UserSummary, AccountError> {
        let accounts = self.inner.read().await;
        let account = accounts
            .get(&normalize_email(email))
            .ok_or(AccountError::InvalidCredentials)?;
        if !digests_match(&hash_password(&account.salt, password), &account.password_hash) {
            return Err(AccountError::InvalidCredentials);
        }
        Ok(account.summary.clone())
    }

    /// Seed a development account that bypasses profile validation.
    pub async fn seed(&self, name: &str, email: &str, password: &str) {
        let key = normalize_email(email);
        let salt = generate_salt();
        let account = Account {
            summary: UserSummary { name: name.to_owned(), email: key.clone() },
            password_hash: hash_password(&salt, password),
            salt,
        };
        self.inner.write().await.insert(key, account);
    }

    pub async fn count(&self) -> usize {
        self.inner.read().await.len()
    }
}

#[cfg(test)]
#[path = "accounts_test.rs"]
mod tests;
