use clap::Parser;
use colored::*;
use pepsum::cli::Cli;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // PEPSUM_LOG wins over RUST_LOG, which wins over -v
    let filter = std::env::var("PEPSUM_LOG")
        .ok()
        .and_then(|level| EnvFilter::try_new(level).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(cli.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = pepsum::cli::commands::summarize::run(cli.summarize) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);

        let exit_code = match e.downcast_ref::<pepsum::PepsumError>() {
            Some(pepsum::PepsumError::Config(_)) => 2,
            Some(pepsum::PepsumError::Io(_)) => 3,
            Some(pepsum::PepsumError::Parse(_))
            | Some(pepsum::PepsumError::Csv(_))
            | Some(pepsum::PepsumError::MissingColumn { .. })
            | Some(pepsum::PepsumError::DuplicateCode { .. }) => 4,
            _ => 1,
        };
        process::exit(exit_code);
    }
}
