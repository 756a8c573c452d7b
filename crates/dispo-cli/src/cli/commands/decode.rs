//! `dispo decode [HEADER]` – decode a Content-Disposition value.

use anyhow::{bail, Context, Result};
use dispo_core::config::DispoConfig;
use dispo_core::disposition::{filename_from_content_disposition, has_accepted_extension};
use std::io::Read;

pub fn run_decode(cfg: &DispoConfig, header: Option<&str>, any_extension: bool) -> Result<()> {
    let header = match header {
        Some(h) => h.to_string(),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading header value from stdin")?;
            buf.trim_end_matches(['\r', '\n']).to_string()
        }
    };

    let Some(filename) = filename_from_content_disposition(&header) else {
        bail!("no filename parameter in Content-Disposition value");
    };
    if filename.is_empty() {
        bail!("Content-Disposition filename decoded to an empty string");
    }
    if !any_extension && !has_accepted_extension(&filename, &cfg.accepted_extensions) {
        bail!(
            "decoded filename {:?} does not match accepted extensions {:?}",
            filename,
            cfg.accepted_extensions
        );
    }

    println!("{filename}");
    Ok(())
}
