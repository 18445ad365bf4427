use super::*;

fn duplicate_email_body() -> ErrorBody {
    let mut data = BTreeMap::new();
    data.insert(
        "email".to_owned(),
        FieldError { code: NOT_UNIQUE.to_owned(), message: "The email is invalid or already in use.".to_owned() },
    );
    ErrorBody { code: 400, message: "Failed to create record.".to_owned(), data }
}

#[test]
fn from_body_maps_404_to_not_found() {
    assert_eq!(ApiError::from_body(404, ErrorBody::default()), ApiError::NotFound);
}

#[test]
fn from_body_keeps_message_and_fields() {
    let err = ApiError::from_body(400, duplicate_email_body());
    assert_eq!(err.to_string(), "request failed (400): Failed to create record.");
    assert_eq!(err.field_code("email"), Some(NOT_UNIQUE));
    assert!(err.is_not_unique("email"));
    assert!(!err.is_not_unique("name"));
}

#[test]
fn from_body_fills_blank_message_with_status() {
    let err = ApiError::from_body(500, ErrorBody::default());
    assert_eq!(err.to_string(), "request failed (500): HTTP 500");
}

#[test]
fn non_status_errors_have_no_field_codes() {
    assert_eq!(ApiError::Transport("offline".to_owned()).field_code("email"), None);
    assert!(!ApiError::Unavailable.is_not_unique("email"));
}
