use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{Generator, generate};
use notetree::cli::{Cli, Commands};
use notetree::output::{self, Verbosity};
use notetree::{NotetreeContext, commands};
use std::io;
use std::process;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter directives.
const LOG_ENV: &str = "NOTETREE_LOG";

fn main() {
    if let Err(e) = run() {
        output::error(&format!("{e:#}"));
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    output::set_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose));
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Completion { shell }) => {
            print_completions(shell, &mut Cli::command());
        }
        None => {
            let ctx = NotetreeContext::new(cli.root, cli.config, cli.output)?;
            commands::generate::execute(&ctx)?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    // Ignore the error if a subscriber was already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn print_completions<G: Generator>(g: G, cmd: &mut clap::Command) {
    let name = cmd.get_name().to_string();
    generate(g, cmd, name, &mut io::stdout());
}
