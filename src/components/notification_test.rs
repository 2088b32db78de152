use super::*;

// =============================================================================
// NotificationKind::color
// =============================================================================

#[test]
fn success_is_green() {
    assert_eq!(NotificationKind::Success.color(), "#4caf50");
}

#[test]
fn error_is_red() {
    assert_eq!(NotificationKind::Error.color(), "#f44336");
}

#[test]
fn info_is_blue() {
    assert_eq!(NotificationKind::Info.color(), "#2196f3");
}

// =============================================================================
// NotificationKind::class_suffix
// =============================================================================

#[test]
fn class_suffixes_match_kind() {
    assert_eq!(NotificationKind::Success.class_suffix(), "success");
    assert_eq!(NotificationKind::Error.class_suffix(), "error");
    assert_eq!(NotificationKind::Info.class_suffix(), "info");
}

// =============================================================================
// NotificationKind::default
// =============================================================================

#[test]
fn default_kind_is_info() {
    assert_eq!(NotificationKind::default(), NotificationKind::Info);
}
