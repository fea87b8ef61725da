use clap::Parser;
use docweave::handlers;
use docweave::{Cli, Command};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Command::Certs { root } => handlers::run_certs(root),
        Command::Controls { root } => handlers::run_controls(root),
        Command::Docs { root } => handlers::run_docs(root),
        Command::Diff { root } => handlers::run_diff(root),
        Command::All { root } => handlers::run_all(root),
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "docweave=debug"
    } else {
        "docweave=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
