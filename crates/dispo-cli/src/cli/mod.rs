//! CLI for the dispo Content-Disposition filename decoder.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dispo_core::config;

use commands::{run_config_path, run_decode};

/// Top-level CLI for the dispo filename decoder.
#[derive(Debug, Parser)]
#[command(name = "dispo")]
#[command(about = "dispo: tolerant Content-Disposition filename extraction", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Decode a raw Content-Disposition header value and print the filename.
    Decode {
        /// Raw header value; read from stdin when omitted.
        header: Option<String>,

        /// Print the filename even when its extension is not in the accepted list.
        #[arg(long)]
        any_extension: bool,
    },

    /// Print the path of the configuration file.
    ConfigPath,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Decode {
                header,
                any_extension,
            } => run_decode(&cfg, header.as_deref(), any_extension)?,
            CliCommand::ConfigPath => run_config_path()?,
        }

        Ok(())
    }
}
