//! `dispo config-path` – show where the configuration file lives.

use anyhow::Result;
use dispo_core::config;

pub fn run_config_path() -> Result<()> {
    println!("{}", config::config_path()?.display());
    Ok(())
}
