#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn token_key_is_token() {
    assert_eq!(TOKEN_KEY, "token");
}

#[test]
fn load_token_is_none_in_non_hydrate_tests() {
    assert_eq!(load_token(), None);
}

#[test]
fn save_and_clear_are_noops_but_callable() {
    save_token("abc");
    assert_eq!(load_token(), None);
    clear_token();
}
