use super::*;

fn complete_profile() -> RegistrationProfile {
    RegistrationProfile {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "engine1".to_owned(),
        date_of_birth: "1815-12-10".to_owned(),
        phone: "5551234567".to_owned(),
        gender: "female".to_owned(),
        status: "active".to_owned(),
        role: "patient".to_owned(),
        city: "London".to_owned(),
        state: "LDN".to_owned(),
        zip_code: "W1".to_owned(),
    }
}

// =============================================================
// validate_field: messages
// =============================================================

#[test]
fn required_text_fields_report_their_own_message() {
    use RegistrationField as F;
    assert_eq!(validate_field(F::FirstName, ""), Some("First Name is required"));
    assert_eq!(validate_field(F::LastName, ""), Some("Last Name is required"));
    assert_eq!(validate_field(F::City, ""), Some("City is required"));
    assert_eq!(validate_field(F::State, ""), Some("State is required"));
    assert_eq!(validate_field(F::ZipCode, ""), Some("Zip Code is required"));
}

#[test]
fn required_text_fields_accept_any_non_empty_value() {
    use RegistrationField as F;
    for field in [F::FirstName, F::LastName, F::City, F::State, F::ZipCode] {
        assert_eq!(validate_field(field, "x"), None, "{field:?}");
    }
    // Zip code has no format check.
    assert_eq!(validate_field(F::ZipCode, "not-a-zip"), None);
}

#[test]
fn email_uses_loose_pattern() {
    use RegistrationField as F;
    assert_eq!(validate_field(F::Email, "a@b.c"), None);
    assert_eq!(validate_field(F::Email, "ü@ñ.x"), None);
    assert_eq!(validate_field(F::Email, "a@b"), Some("Invalid email address"));
    assert_eq!(validate_field(F::Email, "a b@c.d"), Some("Invalid email address"));
    assert_eq!(validate_field(F::Email, ""), Some("Invalid email address"));
}

#[test]
fn password_requires_six_chars() {
    use RegistrationField as F;
    assert_eq!(validate_field(F::Password, "12345"), Some("Password must be at least 6 characters"));
    assert_eq!(validate_field(F::Password, "123456"), None);
}

#[test]
fn phone_is_optional_but_exactly_ten_digits_when_set() {
    use RegistrationField as F;
    assert_eq!(validate_field(F::Phone, ""), None);
    assert_eq!(validate_field(F::Phone, "12345"), Some("Invalid phone number"));
    assert_eq!(validate_field(F::Phone, "1234567890"), None);
    assert_eq!(validate_field(F::Phone, "12345678901"), Some("Invalid phone number"));
    assert_eq!(validate_field(F::Phone, "123-456-78"), Some("Invalid phone number"));
}

#[test]
fn phone_rejects_non_ascii_digits() {
    // Arabic-Indic digits are Unicode `\d` but not accepted phone digits.
    assert_eq!(
        validate_field(RegistrationField::Phone, "٠١٢٣٤٥٦٧٨٩"),
        Some("Invalid phone number")
    );
}

#[test]
fn selects_require_a_value_from_their_set() {
    use RegistrationField as F;
    assert_eq!(validate_field(F::Gender, ""), Some("Please select gender"));
    assert_eq!(validate_field(F::Gender, "other"), Some("Please select gender"));
    assert_eq!(validate_field(F::Gender, "male"), None);
    assert_eq!(validate_field(F::Role, ""), Some("Please select role"));
    assert_eq!(validate_field(F::Role, "provider"), None);
    assert_eq!(validate_field(F::Status, ""), Some("Please select status"));
    assert_eq!(validate_field(F::Status, "anything"), None);
}

#[test]
fn date_of_birth_is_never_validated() {
    assert_eq!(validate_field(RegistrationField::DateOfBirth, ""), None);
    assert_eq!(validate_field(RegistrationField::DateOfBirth, "garbage"), None);
}

// =============================================================
// RegistrationField
// =============================================================

#[test]
fn field_serde_name_matches_form_name() {
    for field in RegistrationField::ALL {
        let json = serde_json::to_value(field).unwrap();
        assert_eq!(json, serde_json::Value::String(field.name().to_owned()));
    }
}

// =============================================================
// RegistrationProfile
// =============================================================

#[test]
fn profile_get_set_address_the_right_slot() {
    let mut profile = RegistrationProfile::default();
    profile.set(RegistrationField::ZipCode, "90210");
    profile.set(RegistrationField::State, "CA");
    assert_eq!(profile.zip_code, "90210");
    assert_eq!(profile.state, "CA");
    assert_eq!(profile.get(RegistrationField::ZipCode), "90210");
    assert_eq!(profile.get(RegistrationField::City), "");
}

#[test]
fn profile_serializes_with_camel_case_keys() {
    let json = serde_json::to_value(complete_profile()).unwrap();
    assert_eq!(json["firstName"], "Ada");
    assert_eq!(json["dateOfBirth"], "1815-12-10");
    assert_eq!(json["zipCode"], "W1");
}

#[test]
fn profile_missing_keys_default_to_empty() {
    let profile: RegistrationProfile = serde_json::from_str(r#"{"firstName":"Ada"}"#).unwrap();
    assert_eq!(profile.first_name, "Ada");
    assert_eq!(profile.zip_code, "");
}

// =============================================================
// ValidationErrors
// =============================================================

#[test]
fn errors_default_is_clear_and_unrecorded() {
    let errors = ValidationErrors::default();
    assert!(errors.is_clear());
    assert!(!errors.is_recorded(RegistrationField::Email));
    assert_eq!(errors.get(RegistrationField::Email), "");
}

#[test]
fn record_replaces_only_its_field() {
    let mut errors = ValidationErrors::default();
    errors.record(RegistrationField::Phone, Some("Invalid phone number"));
    errors.record(RegistrationField::City, Some("City is required"));
    errors.record(RegistrationField::Phone, None);

    assert_eq!(errors.get(RegistrationField::Phone), "");
    assert_eq!(errors.get(RegistrationField::City), "City is required");
    assert!(errors.is_recorded(RegistrationField::Phone));
    assert!(!errors.is_clear());
}

#[test]
fn failing_lists_only_non_empty_entries() {
    let mut errors = ValidationErrors::default();
    errors.record(RegistrationField::Email, None);
    errors.record(RegistrationField::Role, Some("Please select role"));
    let failing: Vec<_> = errors.failing().collect();
    assert_eq!(failing, vec![(RegistrationField::Role, "Please select role")]);
}

#[test]
fn errors_serialize_as_field_keyed_object() {
    let mut errors = ValidationErrors::default();
    errors.record(RegistrationField::ZipCode, Some("Zip Code is required"));
    errors.record(RegistrationField::FirstName, None);
    let json = serde_json::to_value(&errors).unwrap();
    assert_eq!(json, serde_json::json!({ "firstName": "", "zipCode": "Zip Code is required" }));

    let back: ValidationErrors = serde_json::from_value(json).unwrap();
    assert_eq!(back, errors);
}

#[test]
fn merge_overlays_entries() {
    let mut local = ValidationErrors::default();
    local.record(RegistrationField::Email, None);
    local.record(RegistrationField::City, Some("City is required"));
    let mut remote = ValidationErrors::default();
    remote.record(RegistrationField::Email, Some("Invalid email address"));

    local.merge(&remote);
    assert_eq!(local.get(RegistrationField::Email), "Invalid email address");
    assert_eq!(local.get(RegistrationField::City), "City is required");
}

// =============================================================
// validate_profile
// =============================================================

#[test]
fn validate_profile_accepts_complete_profile() {
    assert!(validate_profile(&complete_profile()).is_clear());
}

#[test]
fn validate_profile_checks_untouched_fields() {
    let errors = validate_profile(&RegistrationProfile::default());
    let failing: Vec<_> = errors.failing().map(|(field, _)| field).collect();
    use RegistrationField as F;
    assert_eq!(
        failing,
        vec![
            F::FirstName,
            F::LastName,
            F::Email,
            F::Password,
            F::Gender,
            F::Status,
            F::Role,
            F::City,
            F::State,
            F::ZipCode
        ]
    );
    for field in RegistrationField::ALL {
        assert!(errors.is_recorded(field));
    }
}
