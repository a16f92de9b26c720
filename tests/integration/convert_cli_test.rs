//! CLI tests for the convert command

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{cli, read, write_config, write_file, SAMPLE_LOG};

#[test]
fn convert_colored_writes_document_and_support_file() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let input = write_file(&work, "session.log", SAMPLE_LOG);
    let output = work.path().join("session.tex");

    cli(home.path())
        .args(["convert", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("session.tex"))
        .stdout(predicate::str::contains("colored mode"));

    let text = read(&output);
    assert!(text.contains("\\begin{terminalcolored}{Terminal}{dark}"));
    assert!(text.contains("\\textbf{\\textcolor{lime}{user@host}}"));
    assert!(!text.contains('\x1b'));
    assert!(work.path().join("terminalboxes.sty").exists());
}

#[test]
fn convert_plain_flag() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let input = write_file(&work, "session.log", SAMPLE_LOG);
    let output = work.path().join("plain.tex");

    cli(home.path())
        .arg("convert")
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .args(["--plain", "--theme", "light"])
        .assert()
        .success();

    let text = read(&output);
    assert!(text.contains(
        "\\begin{terminalplain}{Terminal}{light}\nuser@host:~/project$ ls\nsrc  Cargo.toml\n\n\\end{terminalplain}"
    ));
}

#[test]
fn log2tex_alias_works() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let input = write_file(&work, "a.log", "hello\n");
    let output = work.path().join("a.tex");

    cli(home.path())
        .arg("log2tex")
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();
    assert!(read(&output).contains("hello \\\\"));
}

#[test]
fn missing_input_fails_without_output() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let output = work.path().join("out.tex");

    cli(home.path())
        .arg("convert")
        .arg("-i")
        .arg(work.path().join("missing.log"))
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));

    assert!(!output.exists());
    assert!(!work.path().join("terminalboxes.sty").exists());
}

#[test]
fn missing_input_leaves_existing_output_untouched() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let output = write_file(&work, "out.tex", "previous");

    cli(home.path())
        .arg("convert")
        .arg("-i")
        .arg(work.path().join("missing.log"))
        .arg("-o")
        .arg(&output)
        .assert()
        .failure();

    assert_eq!(read(&output), "previous");
}

#[test]
fn invalid_utf8_input_is_converted() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let input = write_file(&work, "bin.log", b"ok \xff\xfe done\n".as_slice());
    let output = work.path().join("bin.tex");

    cli(home.path())
        .arg("convert")
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    assert!(read(&output).contains("ok \u{fffd}\u{fffd} done \\\\"));
}

#[test]
fn env_mode_applies_and_flag_overrides_it() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let input = write_file(&work, "a.log", "\x1b[31mred\x1b[0m\n");
    let output = work.path().join("a.tex");

    cli(home.path())
        .env("LOG2TEX_MODE", "plain")
        .arg("convert")
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();
    assert!(read(&output).contains("\\begin{terminalplain}"));

    cli(home.path())
        .env("LOG2TEX_MODE", "plain")
        .arg("convert")
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--colored")
        .assert()
        .success();
    assert!(read(&output).contains("\\textcolor{red}{red}"));
}

#[test]
fn invalid_env_value_falls_back_to_config_file() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    write_config(home.path(), "[convert]\ntheme = \"light\"\ntitle = \"Demo\"\n");
    let input = write_file(&work, "a.log", "x\n");
    let output = work.path().join("a.tex");

    cli(home.path())
        .env("LOG2TEX_THEME", "sepia")
        .arg("convert")
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("invalid theme 'sepia'"));

    assert!(read(&output).contains("\\begin{terminalcolored}{Demo}{light}"));
}

#[test]
fn custom_colors_are_defined_in_preamble() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let input = write_file(&work, "a.log", "\x1b[91merror\x1b[0m\n\x1b[91mfatal\x1b[0m\n");
    let output = work.path().join("a.tex");

    cli(home.path())
        .arg("convert")
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Defined 1 custom colors"));

    let text = read(&output);
    assert_eq!(
        text.matches("\\definecolor{colorff6b6b}{rgb}{1.000,0.420,0.420}")
            .count(),
        1
    );
    assert!(text.contains(
        "\\textcolor{colorff6b6b}{error} \\\\\n\\textcolor{colorff6b6b}{fatal} \\\\"
    ));
}

#[test]
fn custom_template_file() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let template = write_file(&work, "tpl.tex", "% <<title>>\n<<content>>\n");
    let input = write_file(&work, "a.log", "x\n");
    let output = work.path().join("a.tex");

    cli(home.path())
        .arg("convert")
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--template")
        .arg(&template)
        .args(["--title", "50% done"])
        .assert()
        .success();

    assert_eq!(read(&output), "% 50\\% done\nx \\\\\n");
}

#[test]
fn invalid_template_is_reported() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let template = write_file(&work, "tpl.tex", "<<content>> <<author>>");
    let input = write_file(&work, "a.log", "x\n");
    let output = work.path().join("a.tex");

    cli(home.path())
        .arg("convert")
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--template")
        .arg(&template)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown template placeholder: <<author>>"));

    assert!(!output.exists());
}

#[test]
fn debug_env_writes_cleaned_log() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let input = write_file(&work, "a.log", "\x1b]0;title\x07\x1b[31mred\x1b[0m\n");
    let output = work.path().join("a.tex");

    cli(home.path())
        .env("LOG2TEX_DEBUG", "1")
        .arg("convert")
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("saved cleaned log"));

    assert_eq!(
        read(&work.path().join("a.tex.cleaned.log")),
        "\x1b[31mred\x1b[0m\n"
    );
}

#[test]
fn output_directory_is_created() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let input = write_file(&work, "a.log", "x\n");
    let output = work.path().join("build").join("docs").join("a.tex");

    cli(home.path())
        .arg("convert")
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    assert!(output.exists());
    assert!(work.path().join("build/docs/terminalboxes.sty").exists());
}
