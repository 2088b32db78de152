use super::*;

// =============================================================================
// is_fragment_href
// =============================================================================

#[test]
fn fragment_href_is_detected() {
    assert!(is_fragment_href("#services"));
}

#[test]
fn bare_hash_is_a_fragment() {
    assert!(is_fragment_href("#"));
}

#[test]
fn absolute_url_is_not_a_fragment() {
    assert!(!is_fragment_href("https://example.com/#services"));
}

#[test]
fn relative_path_is_not_a_fragment() {
    assert!(!is_fragment_href("/pricing"));
}

// =============================================================================
// scroll_target_top
// =============================================================================

#[test]
fn target_top_subtracts_header_offset() {
    assert_eq!(scroll_target_top(500), 420.0);
}

#[test]
fn target_near_page_top_goes_negative() {
    // The browser clamps negative scroll positions itself.
    assert_eq!(scroll_target_top(40), -40.0);
}
