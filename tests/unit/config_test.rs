//! Unit tests for config module

use cmdlog2tex::config::{
    ConversionOverrides, ConvertConfig, ExecConfig, ExecSettings, ENV_MODE, ENV_SHELL, ENV_THEME,
};
use cmdlog2tex::{Config, ConversionConfig, Mode, Theme};

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn default_config_is_empty() {
    let config = Config::default();
    assert_eq!(config.convert, ConvertConfig::default());
    assert_eq!(config.exec, ExecConfig::default());
    let toml_str = config.to_toml().unwrap();
    assert!(!toml_str.contains("mode"));
    assert!(!toml_str.contains("shell"));
}

#[test]
fn config_parses_from_toml() {
    let toml_str = r#"
[convert]
mode = "plain"
theme = "light"
title = "Build log"
template = "/tmp/paper.tex"

[exec]
shell = "zsh -i"
keep_log = false
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.convert.mode, Some(Mode::Plain));
    assert_eq!(config.convert.theme, Some(Theme::Light));
    assert_eq!(config.convert.title.as_deref(), Some("Build log"));
    assert_eq!(
        config.convert.template.as_deref(),
        Some(std::path::Path::new("/tmp/paper.tex"))
    );
    assert_eq!(config.exec.shell.as_deref(), Some("zsh -i"));
    assert_eq!(config.exec.keep_log, Some(false));
}

#[test]
fn missing_sections_use_defaults() {
    let config: Config = toml::from_str("[exec]\nkeep_log = true\n").unwrap();
    assert_eq!(config.convert, ConvertConfig::default());
}

#[test]
fn unknown_mode_in_file_is_rejected() {
    assert!(toml::from_str::<Config>("[convert]\nmode = \"fancy\"\n").is_err());
}

#[test]
fn config_serialization_roundtrip() {
    let mut config = Config::default();
    config.convert.mode = Some(Mode::Plain);
    config.exec.shell = Some("fish".to_string());
    let parsed: Config = toml::from_str(&config.to_toml().unwrap()).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn mode_and_theme_parse_case_insensitively() {
    assert_eq!(" Plain ".parse::<Mode>(), Ok(Mode::Plain));
    assert_eq!("COLORED".parse::<Mode>(), Ok(Mode::Colored));
    assert_eq!("Light".parse::<Theme>(), Ok(Theme::Light));

    let err = "sepia".parse::<Theme>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid theme 'sepia' (expected one of: dark, light)"
    );
}

#[test]
fn display_matches_config_spelling() {
    assert_eq!(Mode::Plain.to_string(), "plain");
    assert_eq!(Theme::Dark.to_string(), "dark");
    assert_eq!(Mode::Colored.environment(), "terminalcolored");
}

#[test]
fn precedence_is_cli_then_env_then_file() {
    let file = ConvertConfig {
        mode: Some(Mode::Plain),
        theme: Some(Theme::Light),
        title: Some("From file".to_string()),
        template: None,
    };
    let env = |name: &str| match name {
        ENV_MODE => Some("colored".to_string()),
        ENV_THEME => Some("dark".to_string()),
        _ => None,
    };

    let resolved = ConversionConfig::resolve(&ConversionOverrides::default(), &file, env);
    assert_eq!(resolved.mode, Mode::Colored);
    assert_eq!(resolved.theme, Theme::Dark);
    assert_eq!(resolved.title, "From file");

    let overrides = ConversionOverrides {
        mode: Some(Mode::Plain),
        title: Some("From CLI".to_string()),
        ..Default::default()
    };
    let resolved = ConversionConfig::resolve(&overrides, &file, env);
    assert_eq!(resolved.mode, Mode::Plain);
    assert_eq!(resolved.theme, Theme::Dark);
    assert_eq!(resolved.title, "From CLI");
}

#[test]
fn nothing_configured_gives_defaults() {
    let resolved = ConversionConfig::resolve(
        &ConversionOverrides::default(),
        &ConvertConfig::default(),
        no_env,
    );
    assert_eq!(resolved, ConversionConfig::default());
    assert_eq!(
        ExecSettings::resolve(None, false, &ExecConfig::default(), no_env),
        ExecSettings::default()
    );
}

#[test]
fn exec_shell_precedence_and_no_log() {
    let file = ExecConfig {
        shell: Some("zsh -i".to_string()),
        keep_log: Some(true),
    };
    let env = |name: &str| (name == ENV_SHELL).then(|| "sh".to_string());

    let settings = ExecSettings::resolve(None, false, &file, env);
    assert_eq!(settings.shell, "sh");
    assert!(settings.keep_log);

    let settings = ExecSettings::resolve(Some("dash".to_string()), true, &file, env);
    assert_eq!(settings.shell, "dash");
    assert!(!settings.keep_log);
}

#[test]
fn effective_config_reports_resolved_values() {
    let config: Config = toml::from_str("[convert]\ntheme = \"light\"\n").unwrap();
    let effective = config.effective(|name: &str| (name == ENV_MODE).then(|| "plain".to_string()));
    assert_eq!(effective.convert.mode, Some(Mode::Plain));
    assert_eq!(effective.convert.theme, Some(Theme::Light));
    assert_eq!(effective.convert.title.as_deref(), Some("Terminal"));
    assert_eq!(effective.exec.keep_log, Some(true));
}
