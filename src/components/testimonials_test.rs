use super::*;

// =============================================================================
// parse_translate_x
// =============================================================================

#[test]
fn empty_transform_is_zero() {
    assert_eq!(parse_translate_x(""), 0.0);
}

#[test]
fn negative_offset_parses() {
    assert_eq!(parse_translate_x("translateX(-380px)"), -380.0);
}

#[test]
fn zero_offset_parses() {
    assert_eq!(parse_translate_x("translateX(0px)"), 0.0);
}

#[test]
fn malformed_transform_is_zero() {
    assert_eq!(parse_translate_x("rotate(45deg)"), 0.0);
}

#[test]
fn garbage_value_is_zero() {
    assert_eq!(parse_translate_x("translateX(abcpx)"), 0.0);
}

// =============================================================================
// step_offset
// =============================================================================

#[test]
fn advance_steps_one_card_left() {
    assert_eq!(step_offset(0.0, 1, 4), -380.0);
}

#[test]
fn retreat_steps_one_card_right() {
    assert_eq!(step_offset(-760.0, -1, 4), -380.0);
}

#[test]
fn offset_at_track_length_does_not_wrap() {
    // Four cards: magnitude 1520 equals the track length exactly.
    assert_eq!(step_offset(-1140.0, 1, 4), -1520.0);
}

#[test]
fn offset_past_track_length_wraps_to_zero() {
    assert_eq!(step_offset(-1520.0, 1, 4), 0.0);
}

#[test]
fn advancing_past_every_card_returns_to_start() {
    let mut offset = 0.0;
    for _ in 0..5 {
        offset = step_offset(offset, 1, 4);
    }
    assert_eq!(offset, 0.0);
}

#[test]
fn retreat_from_start_wraps_to_zero() {
    // Stepping right from 0 with a single card overshoots the track.
    assert_eq!(step_offset(380.0, -1, 1), 0.0);
}
