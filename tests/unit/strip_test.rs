//! Properties of the escape stripper over generated captures

use cmdlog2tex::ansi::{tokenize, SequenceKind, Token};
use cmdlog2tex::strip;

use crate::helpers::{random_log, INVISIBLE_SEQUENCES};

#[test]
fn plain_output_has_no_control_codes() {
    for seed in 1..300 {
        let log = random_log(seed, 40);
        let plain = strip(&log, false);
        assert!(
            !plain.chars().any(|c| c.is_control() && c != '\n'),
            "seed {}: {:?}",
            seed,
            plain
        );
        assert!(!plain.contains("\n\n\n"), "seed {}", seed);
    }
}

#[test]
fn plain_strip_is_idempotent() {
    for seed in 1..300 {
        let once = strip(&random_log(seed, 40), false);
        assert_eq!(strip(&once, false), once, "seed {}", seed);
    }
}

#[test]
fn style_stream_only_keeps_style_sequences() {
    for seed in 1..300 {
        let kept = strip(&random_log(seed, 40), true);
        for token in tokenize(&kept) {
            match token {
                Token::Sequence(seq) => assert!(
                    matches!(seq.kind, SequenceKind::Sgr | SequenceKind::Csi),
                    "seed {}: {:?}",
                    seed,
                    seq
                ),
                Token::Backspace | Token::Control(_) => panic!("seed {}: {:?}", seed, token),
                _ => {}
            }
        }
    }
}

#[test]
fn stripping_the_style_stream_matches_plain_text() {
    let log = "\x1b]0;t\x07\x1b[1;32m$\x1b[0m ls\r\n\x1b[34msrc\x1b[0m\r\n";
    assert_eq!(strip(&strip(log, true), false), strip(log, false));
}

#[test]
fn crlf_split_by_invisible_sequence_is_one_line_break() {
    for seq in INVISIBLE_SEQUENCES {
        for ending in ["\r{}\n", "\r{}\r\n", "{}\r\n", "\r\n{}"] {
            let ending = ending.replace("{}", seq);
            let log = format!("first{}second", ending);
            assert_eq!(strip(&log, false), "first\nsecond", "{:?}", log);
        }
    }
}

#[test]
fn plain_line_count_never_exceeds_input_line_count() {
    for seed in 1..300 {
        let log = random_log(seed, 40);
        let plain = strip(&log, false);
        let input_lines = log.matches('\n').count() + log.matches('\r').count();
        assert!(plain.matches('\n').count() <= input_lines, "seed {}", seed);
    }
}
