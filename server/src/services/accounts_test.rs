use super::*;
use wellness::RegistrationField;

fn profile(email: &str) -> RegistrationProfile {
    RegistrationProfile {
        first_name: "Grace".to_owned(),
        last_name: "Hopper".to_owned(),
        email: email.to_owned(),
        password: "cobol59".to_owned(),
        date_of_birth: "1906-12-09".to_owned(),
        phone: String::new(),
        gender: "female".to_owned(),
        status: "active".to_owned(),
        role: "provider".to_owned(),
        city: "Arlington".to_owned(),
        state: "VA".to_owned(),
        zip_code: "22201".to_owned(),
    }
}

// =============================================================================
// helpers
// =============================================================================

#[test]
fn normalize_email_trims_and_lowercases() {
    assert_eq!(normalize_email("  Grace@Example.COM "), "grace@example.com");
}

#[test]
fn hash_password_depends_on_salt_and_password() {
    let a = hash_password("salt", "pw1234");
    assert_eq!(a, hash_password("salt", "pw1234"));
    assert_ne!(a, hash_password("salt2", "pw1234"));
    assert_ne!(a, hash_password("salt", "pw12345"));
    assert_eq!(a.len(), 64);
}

#[test]
fn generate_salt_is_32_hex_chars() {
    let salt = generate_salt();
    assert_eq!(salt.len(), 32);
    assert!(salt.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn digests_match_requires_equal_length_and_bytes() {
    assert!(digests_match("abcd", "abcd"));
    assert!(!digests_match("abcd", "abce"));
    assert!(!digests_match("abcd", "abc"));
}

#[test]
fn display_name_falls_back_to_user() {
    let mut p = profile("g@example.com");
    assert_eq!(display_name(&p), "Grace Hopper");
    p.first_name.clear();
    assert_eq!(display_name(&p), "Hopper");
    p.last_name.clear();
    assert_eq!(display_name(&p), "User");
}

// =============================================================================
// register
// =============================================================================

#[tokio::test]
async fn register_then_verify_succeeds() {
    let store = AccountStore::new();
    let summary = store.register(&profile("grace@example.com")).await.unwrap();
    assert_eq!(summary, UserSummary { name: "Grace Hopper".to_owned(), email: "grace@example.com".to_owned() });

    let verified = store.verify("GRACE@example.com ", "cobol59").await.unwrap();
    assert_eq!(verified, summary);
    assert_eq!(store.count().await, 1);
}

#[tokio::test]
async fn register_rejects_untouched_required_fields() {
    let store = AccountStore::new();
    let err = store
        .register(&RegistrationProfile::default())
        .await
        .unwrap_err();
    let AccountError::Invalid(errors) = err else {
        panic!("expected validation failure, got {err:?}");
    };
    assert_eq!(errors.get(RegistrationField::FirstName), "First Name is required");
    assert_eq!(errors.get(RegistrationField::ZipCode), "Zip Code is required");
    assert_eq!(errors.get(RegistrationField::Phone), "");
    assert_eq!(store.count().await, 0);
}

#[tokio::test]
async fn register_rejects_duplicate_email_case_insensitively() {
    let store = AccountStore::new();
    store.register(&profile("grace@example.com")).await.unwrap();
    let err = store.register(&profile("Grace@Example.com")).await.unwrap_err();
    assert!(matches!(err, AccountError::Duplicate));
}

// =============================================================================
// verify
// =============================================================================

#[tokio::test]
async fn verify_wrong_password_is_invalid_credentials() {
    let store = AccountStore::new();
    store.register(&profile("grace@example.com")).await.unwrap();
    let err = store.verify("grace@example.com", "wrong-pw").await.unwrap_err();
    assert!(matches!(err, AccountError::InvalidCredentials));
}

#[tokio::test]
async fn verify_unknown_email_is_invalid_credentials() {
    let store = AccountStore::new();
    let err = store.verify("nobody@example.com", "whatever").await.unwrap_err();
    assert!(matches!(err, AccountError::InvalidCredentials));
}

#[tokio::test]
async fn seed_creates_loginable_account() {
    let store = AccountStore::new();
    store.seed("Demo User", "user@example.com", "secret1").await;
    let user = store.verify("user@example.com", "secret1").await.unwrap();
    assert_eq!(user.name, "Demo User");
}
