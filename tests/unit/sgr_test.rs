//! Unit tests for SGR interpretation

use cmdlog2tex::ansi::AnsiColor;
use cmdlog2tex::{interpret_sgr, StyleState};

const CODES: &[&str] = &["1", "3", "4", "22", "23", "31", "39", "44", "49", "92", "105", "x", ""];

#[test]
fn reset_anywhere_wins_over_earlier_params() {
    let styled = interpret_sgr(&["1", "31", "44"], &StyleState::default());
    for prefix_len in 0..CODES.len() {
        let mut params: Vec<&str> = CODES[..prefix_len].to_vec();
        params.push("0");
        assert_eq!(interpret_sgr(&params, &styled), StyleState::default());
    }
}

#[test]
fn params_after_reset_are_ignored() {
    let state = interpret_sgr(&["0", "1", "31"], &StyleState::default());
    assert!(state.is_default());
}

#[test]
fn leading_zero_parses_as_number() {
    let state = interpret_sgr(&["01", "34"], &StyleState::default());
    assert!(state.bold);
    assert_eq!(state.foreground, Some(AnsiColor::Blue));
}

#[test]
fn unknown_params_keep_previous_state() {
    let previous = interpret_sgr(&["3", "35"], &StyleState::default());
    assert_eq!(interpret_sgr(&["5", "x", "999"], &previous), previous);
}

#[test]
fn green_is_dimmer_as_background() {
    assert_eq!(AnsiColor::Green.foreground_literal(), "lime");
    assert_eq!(AnsiColor::Green.background_literal(), "green");
    assert_eq!(AnsiColor::BrightBlue.foreground_literal(), "#82AAFF");
}
