use super::*;

#[test]
fn greeting_uses_name() {
    assert_eq!(greeting("Demo User"), "Welcome, Demo User!");
    assert_eq!(greeting("User"), "Welcome, User!");
}

#[test]
fn item_class_highlights_selected() {
    assert_eq!(item_class(true), "sidebar__item sidebar__item--selected");
    assert_eq!(item_class(false), "sidebar__item");
}

#[test]
fn every_section_has_an_icon() {
    for section in Section::ALL {
        assert!(!section_icon(section).is_empty());
    }
}
