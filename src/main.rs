//! cmdlog2tex - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use cmdlog2tex::cli::{Cli, Commands, ConfigCommands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    cmdlog2tex::logging::init(cli.verbose);

    match cli.command {
        Commands::Convert {
            input,
            output,
            style,
        } => commands::convert::handle(&input, &output, &style),
        Commands::Exec {
            input,
            output,
            shell,
            no_log,
            style,
        } => commands::exec::handle(&input, &output, shell, no_log, &style),
        Commands::Check => commands::check::handle(),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}
