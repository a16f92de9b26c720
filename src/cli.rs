//! CLI definitions for cmdlog2tex
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for man page generation.

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell as CompletionShell;

use crate::config::{ConversionOverrides, Mode, Theme};

/// Build clap styles for help output.
///
/// - Green: headers, usage, command names
/// - White: placeholders and valid values
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "cmdlog2tex")]
#[command(about = "Convert ANSI terminal logs into LaTeX documents")]
#[command(
    long_about = "cmdlog2tex - Convert ANSI terminal logs into LaTeX documents.

Terminal output captured with escape codes (colors, bold, cursor movement,
window titles) is cleaned up and turned into a LaTeX document that uses the
bundled terminalboxes package. Colored mode reproduces colors and emphasis,
plain mode produces a verbatim transcript.

QUICK START:
    cmdlog2tex convert -i session.log -o session.tex
    cmdlog2tex exec -i commands.sh -o demo.tex
    cmdlog2tex check

ENVIRONMENT:
    LOG2TEX_MODE     Default mode (plain, colored)
    LOG2TEX_THEME    Default theme (dark, light)
    CMD2TEX_SHELL    Shell used by exec (default: bash --login -i)
    LOG2TEX_DEBUG    Also write the cleaned log to <output>.cleaned.log"
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command that writes a document.
#[derive(Args, Debug, Clone, Default)]
pub struct StyleArgs {
    /// Plain transcript without colors
    #[arg(long, conflicts_with_all = ["colored", "mode"])]
    pub plain: bool,

    /// Reproduce colors and emphasis
    #[arg(long, conflicts_with = "mode")]
    pub colored: bool,

    /// Output mode
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,

    /// Color theme of the terminal box
    #[arg(long, value_enum)]
    pub theme: Option<Theme>,

    /// Title of the terminal box
    #[arg(long)]
    pub title: Option<String>,

    /// Custom document template (placeholders: <<color_defs>>, <<env_name>>,
    /// <<theme>>, <<title>>, <<content>>)
    #[arg(long, value_name = "FILE")]
    pub template: Option<PathBuf>,
}

impl StyleArgs {
    /// Explicit command line choices, to be layered over env and config.
    pub fn overrides(&self) -> ConversionOverrides {
        let mode = if self.plain {
            Some(Mode::Plain)
        } else if self.colored {
            Some(Mode::Colored)
        } else {
            self.mode
        };
        ConversionOverrides {
            mode,
            theme: self.theme,
            title: self.title.clone(),
            template: self.template.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a captured log into a LaTeX document
    #[command(
        visible_alias = "log2tex",
        long_about = "Convert a captured terminal log into a LaTeX document.

The document loads terminalboxes.sty, which is written next to the output
file. Compile the result with xelatex.

EXAMPLES:
    cmdlog2tex convert -i build.log -o build.tex
    cmdlog2tex convert -i build.log -o build.tex --plain --theme light
    LOG2TEX_MODE=plain cmdlog2tex convert -i build.log -o build.tex"
    )]
    Convert {
        /// Captured terminal log
        #[arg(short, long, value_name = "LOG")]
        input: PathBuf,

        /// LaTeX file to write
        #[arg(short, long, value_name = "TEX")]
        output: PathBuf,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Run a commands file under `script` and convert the capture
    #[command(
        visible_alias = "cmd2tex",
        long_about = "Run a file of shell commands in an interactive shell recorded by
`script`, then convert the capture into a LaTeX document.

The raw capture is saved as <commands>.ansilog next to the commands file.

EXAMPLES:
    cmdlog2tex exec -i demo.sh -o demo.tex
    cmdlog2tex exec -i demo.sh -o demo.tex --shell 'zsh -i' --no-log"
    )]
    Exec {
        /// File with the commands to run
        #[arg(short, long, value_name = "COMMANDS")]
        input: PathBuf,

        /// LaTeX file to write
        #[arg(short, long, value_name = "TEX")]
        output: PathBuf,

        /// Shell that runs the commands
        #[arg(long)]
        shell: Option<String>,

        /// Delete the raw .ansilog capture after conversion
        #[arg(long)]
        no_log: bool,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Check external dependencies
    #[command(long_about = "Check that the external tools cmdlog2tex relies on are available.

EXAMPLE:
    cmdlog2tex check")]
    Check,

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    #[command(long_about = "Print a shell completion script to stdout.

EXAMPLES:
    cmdlog2tex completions bash > ~/.local/share/bash-completion/completions/cmdlog2tex
    cmdlog2tex completions zsh > ~/.zfunc/_cmdlog2tex")]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show effective configuration as TOML
    #[command(long_about = "Display the configuration in effect, in TOML format.

Values come from the config file, the environment and built-in defaults.
Config file location: ~/.config/cmdlog2tex/config.toml

EXAMPLE:
    cmdlog2tex config show")]
    Show,
    /// Print the config file path
    Path,
}
