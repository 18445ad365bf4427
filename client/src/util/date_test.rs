use super::*;

#[test]
fn format_created_handles_backend_timestamp() {
    assert_eq!(format_created("2024-03-05 14:22:01.123Z").as_deref(), Some("05 March 2024"));
}

#[test]
fn format_created_handles_rfc3339() {
    assert_eq!(format_created("2023-12-31T23:59:59Z").as_deref(), Some("31 December 2023"));
}

#[test]
fn format_created_zero_pads_day() {
    assert_eq!(format_created("2022-07-01 00:00:00.000Z").as_deref(), Some("01 July 2022"));
}

#[test]
fn format_created_rejects_garbage() {
    assert_eq!(format_created(""), None);
    assert_eq!(format_created("yesterday"), None);
    assert_eq!(format_created("2024-13-40 00:00:00Z"), None);
}

#[test]
fn format_created_does_not_panic_on_multibyte_input() {
    assert_eq!(format_created("２０２４-03-05"), None);
}
