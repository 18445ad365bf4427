use super::*;

#[test]
fn accept_attr_lists_png_and_jpeg() {
    assert_eq!(accept_attr(), "image/png,image/jpeg");
}

#[test]
fn is_accepted_image_is_case_insensitive() {
    assert!(is_accepted_image("image/png"));
    assert!(is_accepted_image("IMAGE/JPEG"));
    assert!(!is_accepted_image("image/gif"));
    assert!(!is_accepted_image(""));
}

#[test]
fn alert_is_noop_but_callable() {
    alert("hello");
}
