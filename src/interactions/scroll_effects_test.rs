use super::*;

// =============================================================================
// navbar_scrolled
// =============================================================================

#[test]
fn at_threshold_is_scrolled() {
    assert!(navbar_scrolled(100.0));
}

#[test]
fn below_threshold_is_not_scrolled() {
    assert!(!navbar_scrolled(99.9));
}

#[test]
fn top_of_page_is_not_scrolled() {
    assert!(!navbar_scrolled(0.0));
}

#[test]
fn deep_scroll_is_scrolled() {
    assert!(navbar_scrolled(4_000.0));
}

// =============================================================================
// parse_speed
// =============================================================================

#[test]
fn missing_attribute_defaults() {
    assert_eq!(parse_speed(None), 0.5);
}

#[test]
fn malformed_attribute_defaults() {
    assert_eq!(parse_speed(Some("fast".to_string())), 0.5);
}

#[test]
fn numeric_attribute_is_used() {
    assert_eq!(parse_speed(Some("0.3".to_string())), 0.3);
}

#[test]
fn padded_attribute_is_trimmed() {
    assert_eq!(parse_speed(Some(" 0.8 ".to_string())), 0.8);
}

// =============================================================================
// parallax_offset
// =============================================================================

#[test]
fn offset_moves_against_scroll() {
    assert_eq!(parallax_offset(200.0, 0.5), -100.0);
}

#[test]
fn zero_scroll_is_zero_offset() {
    assert_eq!(parallax_offset(0.0, 0.5), 0.0);
}
