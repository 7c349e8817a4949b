//! CLI entry point - the composition root.
//!
//! Loads `.env`, sets up logging, parses arguments and routes to handlers.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use contentpath_cli::handlers::set::SetArgs;
use contentpath_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let ctx = bootstrap(CliConfig::with_defaults()?)?;

    match command {
        Commands::Get { json } => handlers::get::execute(&ctx, json, cli.verbose),
        Commands::Set {
            path,
            default: _,
            force,
            dry_run,
        } => {
            // clap guarantees exactly one of PATH and --default
            let args = SetArgs {
                path,
                force,
                dry_run,
                verbose: cli.verbose,
            };
            handlers::set::execute(&ctx, &args)
        }
    }
}

fn main() -> ExitCode {
    // Load .env from the working directory if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if !err.is_reported() {
                eprintln!("Error: {err}");
            }
            ExitCode::from(err.exit_code())
        }
    }
}
