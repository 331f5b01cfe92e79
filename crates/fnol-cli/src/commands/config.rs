//! Config command - inspect or create the triage configuration.
//!
//! Every subcommand acts on the file named by the global `--config` option,
//! falling back to the platform default location.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use console::style;
use serde_json::Value;

use fnol_core::models::config::FnolConfig;

use super::process::load_config;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the configuration in effect
    Show,

    /// Write a configuration file with default thresholds
    Init {
        /// Where to write it (default: the active config location)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print one value, addressed by a dotted key (e.g. "triage.fraud_keyword")
    Get { key: String },

    /// Print the active config location and whether it exists
    Path,
}

pub async fn run(args: ConfigArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let location = config_path
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path);

    match args.command {
        ConfigCommand::Show => {
            if !location.exists() {
                eprintln!(
                    "{} {} does not exist, showing built-in defaults.",
                    style("ℹ").blue(),
                    location.display()
                );
            }
            let config = load_config(config_path)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigCommand::Init { output, force } => {
            let target = output.unwrap_or(location);
            write_default(&target, force)?;
            println!(
                "{} Created configuration file at {}",
                style("✓").green(),
                target.display()
            );
        }
        ConfigCommand::Get { key } => {
            let config = load_config(config_path)?;
            println!("{}", serde_json::to_string_pretty(&lookup(&config, &key)?)?);
        }
        ConfigCommand::Path => {
            let status = if location.exists() {
                style("exists").green()
            } else {
                style("not created (run 'fnol config init')").yellow()
            };
            println!("{} [{}]", location.display(), status);
        }
    }

    Ok(())
}

/// Location of the user configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("fnol")
        .join("config.json")
}

fn write_default(target: &Path, force: bool) -> anyhow::Result<()> {
    if target.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            target.display()
        );
    }

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }

    FnolConfig::default().save(target)?;
    Ok(())
}

fn lookup(config: &FnolConfig, key: &str) -> anyhow::Result<Value> {
    let pointer = format!("/{}", key.replace('.', "/"));

    serde_json::to_value(config)?
        .pointer(&pointer)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("Configuration key not found: {}", key))
}
