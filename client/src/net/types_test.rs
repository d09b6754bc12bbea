use super::*;
use wellness::RegistrationField;

#[test]
fn current_user_deserializes_from_me_payload() {
    let user: CurrentUser = serde_json::from_str(r#"{"name":"Demo User","email":"user@example.com"}"#).unwrap();
    assert_eq!(user, CurrentUser { name: "Demo User".to_owned(), email: "user@example.com".to_owned() });
}

// =============================================================
// UserLookup
// =============================================================

#[test]
fn lookup_ok_reads_user() {
    let lookup = UserLookup::from_response(200, r#"{"name":"Demo User","email":"user@example.com"}"#);
    assert_eq!(
        lookup,
        UserLookup::Found(CurrentUser { name: "Demo User".to_owned(), email: "user@example.com".to_owned() })
    );
}

#[test]
fn lookup_unauthorized_is_rejected() {
    assert_eq!(UserLookup::from_response(401, r#"{"error":"unauthorized"}"#), UserLookup::Rejected);
    assert_eq!(UserLookup::from_response(403, ""), UserLookup::Rejected);
}

#[test]
fn lookup_server_error_or_garbled_body_is_unavailable() {
    assert_eq!(UserLookup::from_response(502, ""), UserLookup::Unavailable);
    assert_eq!(UserLookup::from_response(200, "<html>"), UserLookup::Unavailable);
}

// =============================================================
// RegisterReply
// =============================================================

#[test]
fn created_reads_message() {
    let reply = RegisterReply::from_response(201, r#"{"message":"Registration successful!"}"#).unwrap();
    assert_eq!(reply, RegisterReply::Created { message: "Registration successful!".to_owned() });
}

#[test]
fn created_tolerates_empty_body() {
    let reply = RegisterReply::from_response(201, "").unwrap();
    assert_eq!(reply, RegisterReply::Created { message: String::new() });
}

#[test]
fn conflict_reads_message() {
    let reply = RegisterReply::from_response(409, r#"{"message":"taken"}"#).unwrap();
    assert_eq!(reply, RegisterReply::Conflict { message: "taken".to_owned() });
}

#[test]
fn unprocessable_decodes_field_errors() {
    let reply = RegisterReply::from_response(422, r#"{"phone":"Invalid phone number","city":""}"#).unwrap();
    let RegisterReply::Invalid(errors) = reply else {
        panic!("expected field errors");
    };
    assert_eq!(errors.get(RegistrationField::Phone), "Invalid phone number");
    assert!(errors.is_recorded(RegistrationField::City));
    assert_eq!(errors.get(RegistrationField::City), "");
}

#[test]
fn unprocessable_with_garbage_body_is_an_error() {
    assert!(RegisterReply::from_response(422, "not json").is_err());
}

#[test]
fn unexpected_status_is_an_error() {
    assert_eq!(RegisterReply::from_response(500, ""), Err("register failed: 500".to_owned()));
}
