//! End-to-end conversion tests through the library API

use cmdlog2tex::{ConversionConfig, Converter, Mode, Theme};

use crate::helpers::SAMPLE_LOG;

fn convert(mode: Mode, log: &str) -> cmdlog2tex::Document {
    Converter::new(ConversionConfig {
        mode,
        ..Default::default()
    })
    .convert(log)
}

#[test]
fn colored_prompt_session() {
    let doc = convert(Mode::Colored, SAMPLE_LOG);
    insta::assert_snapshot!(doc.body, @r"
    \textbf{\textcolor{lime}{user@host}}:\textbf{\textcolor{blue}{\textasciitilde{}/project}}\$ ls \\
    \textbf{\textcolor{blue}{src}} \ Cargo.toml \\
    ");
}

#[test]
fn plain_prompt_session() {
    let doc = convert(Mode::Plain, SAMPLE_LOG);
    assert_eq!(doc.body, "user@host:~/project$ ls\nsrc  Cargo.toml\n");
}

#[test]
fn progress_bar_redraw_keeps_final_state() {
    let log = "Downloading\n\x1b[32m[##   ]  40%\r\x1b[K[#####] 100%\x1b[0m\ndone\n";
    let doc = convert(Mode::Plain, log);
    assert_eq!(doc.body, "Downloading\n[#####] 100%\ndone\n");

    let doc = convert(Mode::Colored, log);
    assert_eq!(
        doc.body,
        "Downloading \\\\\n\\textcolor{lime}{[\\#\\#\\#\\#\\#] 100\\%} \\\\\ndone \\\\"
    );
}

#[test]
fn redraw_of_previous_row_is_dropped() {
    let log = "$ make\nbuilding...\n\x1b[1A\x1b[2Kbuilding... ok\nfinished\n";
    let doc = convert(Mode::Plain, log);
    assert_eq!(doc.body, "$ make\nbuilding...\nfinished\n");
}

#[test]
fn blank_line_runs_collapse_in_plain_mode() {
    let doc = convert(Mode::Plain, "a\n\n\n\n\nb\n");
    assert_eq!(doc.body, "a\n\nb\n");
}

#[test]
fn every_line_has_balanced_scopes() {
    let log = "\x1b[1;31mfirst\nsecond\x1b[3m\nthird\x1b[0m\n";
    let doc = convert(Mode::Colored, log);
    for line in doc.body.lines() {
        let opens = line.matches('{').count() - line.matches("\\{").count();
        let closes = line.matches('}').count() - line.matches("\\}").count();
        assert_eq!(opens, closes, "unbalanced line: {}", line);
    }
    assert_eq!(doc.body.lines().count(), 3);
}

#[test]
fn light_theme_and_title_in_document() {
    let doc = Converter::new(ConversionConfig {
        mode: Mode::Colored,
        theme: Theme::Light,
        title: "~/demo".to_string(),
    })
    .convert("ok\n");
    assert!(doc
        .text
        .contains("\\begin{terminalcolored}{\\textasciitilde{}/demo}{light}"));
    assert!(doc.text.trim_end().ends_with("\\end{document}"));
}

#[test]
fn arbitrary_bytes_never_fail() {
    // deterministic pseudo-random byte soup rich in escape characters
    let mut seed: u32 = 0x2545_f491;
    for _ in 0..200 {
        let bytes: Vec<u8> = (0..64)
            .map(|_| {
                seed ^= seed << 13;
                seed ^= seed >> 17;
                seed ^= seed << 5;
                match seed % 8 {
                    0 => 0x1b,
                    1 => b'[',
                    2 => b';',
                    3 => b'\r',
                    4 => b'\n',
                    _ => (seed >> 8) as u8,
                }
            })
            .collect();
        let log = cmdlog2tex::files::decode_lossy(bytes);
        let plain = convert(Mode::Plain, &log);
        assert!(!plain.body.contains('\x1b'));
        let colored = convert(Mode::Colored, &log);
        assert!(!colored.body.contains('\x1b'));
    }
}
