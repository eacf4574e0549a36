//! `jna-bindgen init` — write a default configuration file.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use jna_bindgen::config::CONFIG_FILE_NAME;
use jna_bindgen::BindgenConfig;

/// Write `jna-bindgen.toml` into `dir`.
pub fn run(dir: &Path, force: bool) -> Result<()> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.exists() && !force {
        bail!("'{}' already exists (use --force to overwrite)", path.display());
    }
    fs::write(&path, BindgenConfig::template())
        .with_context(|| format!("writing {}", path.display()))?;
    println!("Created {}", path.display());
    Ok(())
}
