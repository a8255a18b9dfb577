use super::*;

fn registration(email: &str) -> RegisterRequest {
    RegisterRequest::new("Jean Dupont", email, "longenough", "AB123456")
}

#[test]
fn demo_account_logs_in() {
    let api = MockAuthApi::default();
    let resp = api.login(&LoginRequest::new(DEMO_EMAIL, DEMO_PASSWORD)).unwrap();
    assert_eq!(resp.user.email, DEMO_EMAIL);
    assert_eq!(resp.user.role, UserRole::Admin);
    assert!(resp.token.starts_with("mock-token-"));
}

#[test]
fn login_email_is_case_insensitive() {
    let api = MockAuthApi::default();
    assert!(api.login(&LoginRequest::new("Admin@AeroCast.com", DEMO_PASSWORD)).is_ok());
}

#[test]
fn wrong_password_is_rejected() {
    let api = MockAuthApi::default();
    let err = api.login(&LoginRequest::new(DEMO_EMAIL, "nope-nope")).unwrap_err();
    assert_eq!(err, AuthError::InvalidCredentials);
}

#[test]
fn unknown_email_is_rejected_like_wrong_password() {
    let api = MockAuthApi::default();
    let err = api.login(&LoginRequest::new("ghost@example.com", DEMO_PASSWORD)).unwrap_err();
    assert_eq!(err, AuthError::InvalidCredentials);
}

#[test]
fn register_creates_passenger_that_can_log_in() {
    let mut api = MockAuthApi::default();
    let resp = api.register(&registration("jean@example.com")).unwrap();
    assert_eq!(resp.user.role, UserRole::Passenger);
    assert_eq!(resp.user.passport.as_deref(), Some("AB123456"));
    assert!(uuid::Uuid::parse_str(&resp.user.id).is_ok());

    let again = api.login(&LoginRequest::new("jean@example.com", "longenough")).unwrap();
    assert_eq!(again.user, resp.user);
    assert_ne!(again.token, resp.token);
}

#[test]
fn register_rejects_taken_email() {
    let mut api = MockAuthApi::default();
    let err = api.register(&registration(DEMO_EMAIL)).unwrap_err();
    assert_eq!(err, AuthError::EmailTaken { email: DEMO_EMAIL.to_owned() });
}

#[test]
fn check_session_accepts_issued_tokens_only() {
    let api = MockAuthApi::default();
    let resp = api.login(&LoginRequest::new(DEMO_EMAIL, DEMO_PASSWORD)).unwrap();
    assert_eq!(api.check_session(&resp.token), Ok(()));
    assert_eq!(api.check_session("mock-token-not-a-uuid"), Err(AuthError::SessionExpired));
    assert_eq!(api.check_session("forged"), Err(AuthError::SessionExpired));
    assert_eq!(api.check_session(""), Err(AuthError::SessionExpired));
}
