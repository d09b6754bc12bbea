use super::*;

#[test]
fn field_id_prefixes_name() {
    assert_eq!(field_id("zipCode"), "field-zipCode");
}

#[test]
fn field_class_marks_errors() {
    assert_eq!(field_class(false), "form-field");
    assert_eq!(field_class(true), "form-field form-field--error");
}

#[test]
fn option_label_capitalizes_first_letter() {
    assert_eq!(option_label("male"), "Male");
    assert_eq!(option_label("provider"), "Provider");
    assert_eq!(option_label(""), "");
}
