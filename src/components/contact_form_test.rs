use super::*;

// =============================================================================
// is_valid_email
// =============================================================================

#[test]
fn plain_address_is_valid() {
    assert!(is_valid_email("sarah@brightline.com"));
}

#[test]
fn subdomain_address_is_valid() {
    assert!(is_valid_email("ops@mail.brightline.co.uk"));
}

#[test]
fn missing_at_is_invalid() {
    assert!(!is_valid_email("sarah.brightline.com"));
}

#[test]
fn missing_domain_dot_is_invalid() {
    assert!(!is_valid_email("sarah@brightline"));
}

#[test]
fn empty_local_part_is_invalid() {
    assert!(!is_valid_email("@brightline.com"));
}

#[test]
fn trailing_dot_is_invalid() {
    assert!(!is_valid_email("sarah@brightline."));
}

#[test]
fn leading_domain_dot_is_invalid() {
    assert!(!is_valid_email("sarah@.com"));
}

#[test]
fn double_at_is_invalid() {
    assert!(!is_valid_email("sarah@@brightline.com"));
}

#[test]
fn whitespace_is_invalid() {
    assert!(!is_valid_email("sarah smith@brightline.com"));
}

#[test]
fn empty_string_is_invalid() {
    assert!(!is_valid_email(""));
}

// =============================================================================
// validate
// =============================================================================

#[test]
fn complete_submission_passes() {
    assert_eq!(validate("Sarah", "sarah@brightline.com", "Hello"), Ok(()));
}

#[test]
fn empty_name_is_rejected() {
    assert_eq!(
        validate("", "sarah@brightline.com", "Hello"),
        Err(FormError::MissingFields)
    );
}

#[test]
fn empty_email_is_rejected() {
    assert_eq!(validate("Sarah", "", "Hello"), Err(FormError::MissingFields));
}

#[test]
fn empty_message_is_rejected() {
    assert_eq!(
        validate("Sarah", "sarah@brightline.com", ""),
        Err(FormError::MissingFields)
    );
}

#[test]
fn all_empty_is_rejected_as_missing() {
    assert_eq!(validate("", "", ""), Err(FormError::MissingFields));
}

#[test]
fn bad_email_is_rejected() {
    assert_eq!(
        validate("Sarah", "not-an-email", "Hello"),
        Err(FormError::InvalidEmail)
    );
}

#[test]
fn missing_fields_win_over_bad_email() {
    // The empty-field check short-circuits before the email shape check.
    assert_eq!(validate("", "not-an-email", "Hello"), Err(FormError::MissingFields));
}

// =============================================================================
// FormError::message
// =============================================================================

#[test]
fn error_messages_match_the_notifications() {
    assert_eq!(
        FormError::MissingFields.message(),
        "Please fill in all required fields."
    );
    assert_eq!(
        FormError::InvalidEmail.message(),
        "Please enter a valid email address."
    );
}
