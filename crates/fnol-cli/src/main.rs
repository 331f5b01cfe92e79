//! CLI application for First Notice of Loss triage.

mod commands;

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{batch, config, process};

/// FNOL triage - Extract claim fields from loss notices and route them
#[derive(Parser)]
#[command(name = "fnol")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Claim document to triage (same as `fnol process <FILE>`)
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Triage a single claim document
    Process(process::ProcessArgs),

    /// Triage multiple claim documents
    Batch(batch::BatchArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays machine-readable
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config_path = cli.config.as_deref();

    match (cli.command, cli.file) {
        (Some(Commands::Process(args)), _) => process::run(args, config_path).await,
        (Some(Commands::Batch(args)), _) => batch::run(args, config_path).await,
        (Some(Commands::Config(args)), _) => config::run(args, config_path).await,
        (None, Some(file)) => process::run(process::ProcessArgs::for_file(file), config_path).await,
        (None, None) => Cli::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                "a claim document path is required\n\nUsage: fnol <FILE>",
            )
            .exit(),
    }
}
