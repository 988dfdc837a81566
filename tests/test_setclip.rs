use rpasuite::setclip::{DEFAULT_CLEAR_SECS, parse_clear_delay};

#[test]
fn test_parse_clear_delay_valid() {
    assert_eq!(parse_clear_delay(Some("45".to_string())), 45);
    assert_eq!(parse_clear_delay(Some("0".to_string())), 0);
}

#[test]
fn test_parse_clear_delay_missing_uses_default() {
    assert_eq!(parse_clear_delay(None), DEFAULT_CLEAR_SECS);
}

#[test]
fn test_parse_clear_delay_invalid_uses_default() {
    assert_eq!(parse_clear_delay(Some("abc".to_string())), DEFAULT_CLEAR_SECS);
    assert_eq!(parse_clear_delay(Some("-5".to_string())), DEFAULT_CLEAR_SECS);
    assert_eq!(parse_clear_delay(Some("".to_string())), DEFAULT_CLEAR_SECS);
}
