use super::*;

#[test]
fn expired_flag_is_set_by_presence() {
    assert!(flag_enabled(Some("1")));
    assert!(flag_enabled(Some("")));
    assert!(flag_enabled(Some("true")));
}

#[test]
fn expired_flag_respects_explicit_off_values() {
    assert!(!flag_enabled(None));
    assert!(!flag_enabled(Some("0")));
    assert!(!flag_enabled(Some(" false ")));
}
