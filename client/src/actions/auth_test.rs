use std::collections::BTreeMap;

use super::*;
use crate::net::error::NOT_UNIQUE;
use crate::net::test_helpers::{Call, MockClient, auth_ok};
use crate::net::types::{FieldError, USERS};
use futures::executor::block_on;

fn register_form(email: &str, password: &str, confirm: &str) -> RegisterForm {
    RegisterForm {
        name: "Ralph".to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        confirm_password: confirm.to_owned(),
        avatar: None,
    }
}

fn duplicate_email() -> ApiError {
    let mut fields = BTreeMap::new();
    fields.insert(
        "email".to_owned(),
        FieldError { code: NOT_UNIQUE.to_owned(), message: "The email is invalid or already in use.".to_owned() },
    );
    ApiError::Status { status: 400, message: "Failed to create record.".to_owned(), fields }
}

// =============================================================
// login
// =============================================================

#[test]
fn login_signs_in_and_stores_display_name() {
    let client = MockClient::new().with_auth(Ok(auth_ok("u1", "Ralph Edwards", "ralph@example.com")));
    let mut session = SessionState::default();
    let form = LoginForm { email: "ralph@example.com".to_owned(), password: "password1".to_owned() };

    block_on(login(&client, &mut session, &form)).expect("login");

    assert!(session.is_authenticated());
    assert_eq!(session.display_name(), "Ralph Edwards");
    assert_eq!(client.auth_token().as_deref(), Some("token-u1"));
    assert_eq!(
        client.calls(),
        vec![Call::AuthWithPassword { collection: USERS.to_owned(), identity: "ralph@example.com".to_owned() }]
    );
}

#[test]
fn login_failure_leaves_session_signed_out() {
    let client = MockClient::new().with_auth(Err(ApiError::Status {
        status: 400,
        message: "Failed to authenticate.".to_owned(),
        fields: BTreeMap::new(),
    }));
    let mut session = SessionState::default();
    let form = LoginForm { email: "ralph@example.com".to_owned(), password: "wrong-pass".to_owned() };

    let err = block_on(login(&client, &mut session, &form)).unwrap_err();

    assert!(matches!(err, LoginError::Rejected(_)));
    assert_eq!(err.to_string(), "Login failed. Check your email and password.");
    assert!(!session.is_authenticated());
}

#[test]
fn login_with_blank_fields_makes_no_request() {
    let client = MockClient::new();
    let mut session = SessionState::default();
    let form = LoginForm { email: String::new(), password: "password1".to_owned() };

    let err = block_on(login(&client, &mut session, &form)).unwrap_err();

    assert_eq!(err, LoginError::Invalid(LoginInvalid::MissingFields));
    assert!(client.calls().is_empty());
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_from_signed_in_clears_session_and_token() {
    let client = MockClient::new().with_auth(Ok(auth_ok("u1", "Ralph", "ralph@example.com")));
    let mut session = SessionState::default();
    let form = LoginForm { email: "ralph@example.com".to_owned(), password: "password1".to_owned() };
    block_on(login(&client, &mut session, &form)).expect("login");

    logout(&client, &mut session);

    assert!(!session.is_authenticated());
    assert_eq!(client.auth_token(), None);
}

#[test]
fn logout_from_signed_out_stays_signed_out() {
    let client = MockClient::new();
    let mut session = SessionState::default();

    logout(&client, &mut session);

    assert!(!session.is_authenticated());
    assert_eq!(client.calls(), vec![Call::ClearAuth]);
}

// =============================================================
// register
// =============================================================

#[test]
fn register_rejects_bad_email_without_request() {
    let client = MockClient::new();
    let err = block_on(register(&client, &register_form("not-an-email", "password1", "password1"))).unwrap_err();
    assert_eq!(err, RegisterError::Invalid(RegisterInvalid::InvalidEmail));
    assert_eq!(err.to_string(), "Invalid email format");
    assert!(client.calls().is_empty());
}

#[test]
fn register_rejects_mismatched_passwords_without_request() {
    let client = MockClient::new();
    let err = block_on(register(&client, &register_form("a@b.co", "password1", "password2"))).unwrap_err();
    assert_eq!(err, RegisterError::Invalid(RegisterInvalid::PasswordMismatch));
    assert!(client.calls().is_empty());
}

#[test]
fn register_rejects_short_password_without_request() {
    let client = MockClient::new();
    let err = block_on(register(&client, &register_form("a@b.co", "short", "short"))).unwrap_err();
    assert_eq!(err, RegisterError::Invalid(RegisterInvalid::PasswordTooShort));
    assert!(client.calls().is_empty());
}

#[test]
fn register_creates_user_record() {
    let client = MockClient::new()
        .with_create(Ok(serde_json::json!({ "id": "u9", "name": "Ralph", "email": "a@b.co" })));

    let user = block_on(register(&client, &register_form("a@b.co", "password1", "password1"))).expect("user");

    assert_eq!(user.id, "u9");
    let creates = client.create_calls();
    assert_eq!(creates.len(), 1);
    assert_eq!(creates[0].0, USERS);
    assert_eq!(creates[0].1.text_value("passwordConfirm"), Some("password1"));
}

#[test]
fn register_maps_duplicate_email_to_field_error() {
    let client = MockClient::new().with_create(Err(duplicate_email()));
    let err = block_on(register(&client, &register_form("a@b.co", "password1", "password1"))).unwrap_err();
    assert_eq!(err, RegisterError::EmailTaken);
    assert_eq!(err.to_string(), "Email is already in use");
}

#[test]
fn register_surfaces_other_failures() {
    let client = MockClient::new().with_create(Err(ApiError::Transport("offline".to_owned())));
    let err = block_on(register(&client, &register_form("a@b.co", "password1", "password1"))).unwrap_err();
    assert_eq!(err, RegisterError::Failed(ApiError::Transport("offline".to_owned())));
    assert_eq!(err.to_string(), "Registration failed. Please try again.");
}

#[test]
fn register_error_field_places_messages() {
    assert_eq!(RegisterError::EmailTaken.field(), Some(RegisterField::Email));
    assert_eq!(
        RegisterError::Invalid(RegisterInvalid::PasswordMismatch).field(),
        Some(RegisterField::ConfirmPassword)
    );
    assert_eq!(RegisterError::Failed(ApiError::NotFound).field(), None);
}
