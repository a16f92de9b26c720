//! xtask - Build tasks for cmdlog2tex
//!
//! Run with: cargo xtask <command>
//!
//! Commands:
//! - gen-docs: Generate man pages and COMMANDS.md from the CLI definitions

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Command, CommandFactory, Parser, Subcommand};

use cmdlog2tex::cli::Cli;

const BIN_NAME: &str = "cmdlog2tex";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build tasks for cmdlog2tex")]
struct Xtask {
    #[command(subcommand)]
    command: XtaskCommand,
}

#[derive(Subcommand)]
enum XtaskCommand {
    /// Generate documentation from CLI definitions
    #[command(name = "gen-docs")]
    GenDocs {
        /// Output directory (default: docs/)
        #[arg(long, short, default_value = "docs")]
        output: PathBuf,

        /// Generate man pages only
        #[arg(long, conflicts_with = "markdown")]
        man: bool,

        /// Generate COMMANDS.md only
        #[arg(long)]
        markdown: bool,
    },
}

fn main() -> Result<()> {
    let args = Xtask::parse();

    match args.command {
        XtaskCommand::GenDocs {
            output,
            man,
            markdown,
        } => {
            let gen_all = !man && !markdown;
            if gen_all || man {
                generate_man_pages(&output)?;
            }
            if gen_all || markdown {
                generate_markdown(&output)?;
            }
        }
    }

    Ok(())
}

/// Generate man pages using clap_mangen, one per (sub)command.
fn generate_man_pages(output: &Path) -> Result<()> {
    let man_dir = output.join("man");
    fs::create_dir_all(&man_dir).context("Failed to create man directory")?;

    let cmd = Cli::command().name(BIN_NAME);
    write_man_page(&man_dir, BIN_NAME, &cmd)?;

    for subcommand in visible_subcommands(&cmd) {
        let page = format!("{}-{}", BIN_NAME, subcommand.get_name());
        write_man_page(&man_dir, &page, subcommand)?;

        for nested in visible_subcommands(subcommand) {
            let nested_page = format!("{}-{}", page, nested.get_name());
            write_man_page(&man_dir, &nested_page, nested)?;
        }
    }

    println!("Man pages generated in {}", man_dir.display());
    Ok(())
}

fn write_man_page(dir: &Path, page: &str, cmd: &Command) -> Result<()> {
    let mut buffer = Vec::new();
    clap_mangen::Man::new(cmd.clone().name(page.to_string())).render(&mut buffer)?;
    let path = dir.join(format!("{}.1", page));
    fs::write(&path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Generated: {}", path.display());
    Ok(())
}

fn visible_subcommands(cmd: &Command) -> impl Iterator<Item = &Command> {
    cmd.get_subcommands().filter(|c| !c.is_hide_set())
}

/// Generate COMMANDS.md markdown documentation
fn generate_markdown(output: &Path) -> Result<()> {
    fs::create_dir_all(output).context("Failed to create output directory")?;

    let cmd = Cli::command();
    let mut markdown = String::new();

    markdown.push_str("# cmdlog2tex Command Reference\n\n");
    markdown.push_str("This document is auto-generated from the CLI definitions.\n\n");

    if let Some(long_about) = cmd.get_long_about() {
        markdown.push_str(&format!("```\n{}\n```\n\n", long_about));
    }

    for subcommand in visible_subcommands(&cmd) {
        push_command_section(&mut markdown, BIN_NAME, subcommand);
        for nested in visible_subcommands(subcommand) {
            let parent = format!("{} {}", BIN_NAME, subcommand.get_name());
            push_command_section(&mut markdown, &parent, nested);
        }
    }

    let path = output.join("COMMANDS.md");
    fs::write(&path, markdown).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Generated: {}", path.display());
    Ok(())
}

fn push_command_section(markdown: &mut String, parent: &str, cmd: &Command) {
    markdown.push_str(&format!("## {} {}\n\n", parent, cmd.get_name()));

    let aliases: Vec<&str> = cmd.get_visible_aliases().collect();
    if !aliases.is_empty() {
        markdown.push_str(&format!("Aliases: `{}`\n\n", aliases.join("`, `")));
    }

    if let Some(about) = cmd.get_long_about().or_else(|| cmd.get_about()) {
        markdown.push_str(&format!("```\n{}\n```\n\n", about));
    }

    let options: Vec<_> = cmd
        .get_arguments()
        .filter(|a| !matches!(a.get_id().as_str(), "help" | "version"))
        .collect();
    if options.is_empty() {
        return;
    }

    markdown.push_str("| Option | Description |\n|---|---|\n");
    for arg in options {
        let name = match (arg.get_long(), arg.get_short()) {
            (Some(long), Some(short)) => format!("`-{}`, `--{}`", short, long),
            (Some(long), None) => format!("`--{}`", long),
            (None, Some(short)) => format!("`-{}`", short),
            (None, None) => format!("`<{}>`", arg.get_id().as_str().to_uppercase()),
        };
        let help = arg
            .get_help()
            .map(|h| h.to_string().replace('\n', " "))
            .unwrap_or_default();
        markdown.push_str(&format!("| {} | {} |\n", name, help));
    }
    markdown.push('\n');
}
