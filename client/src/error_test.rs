use super::*;

#[test]
fn auth_error_messages_are_user_facing() {
    assert_eq!(AuthError::InvalidCredentials.to_string(), "invalid email or password");
    assert_eq!(
        AuthError::EmailTaken { email: "a@b.com".to_owned() }.to_string(),
        "an account already exists for a@b.com"
    );
}

#[test]
fn storage_error_includes_cause() {
    let err = StorageError::Malformed("expected value at line 1".to_owned());
    assert!(err.to_string().contains("expected value at line 1"));
}

#[test]
fn config_error_names_variable() {
    let err = ConfigError::InvalidPath { var: "AEROCAST_LOGIN_PATH", value: "login".to_owned() };
    assert_eq!(err.to_string(), "AEROCAST_LOGIN_PATH must be an absolute path, got \"login\"");
}
