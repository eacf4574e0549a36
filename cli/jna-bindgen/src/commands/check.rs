//! `jna-bindgen check` — resolve every declaration without writing files.

use std::path::Path;

use anyhow::{Context, Result};
use jna_bindgen::{BindgenConfig, BindingGenerator, ParsedHeaders};

/// Fail if any declaration in `input` uses a C type missing from the tables.
pub fn run(input: &Path, config: BindgenConfig) -> Result<()> {
    let headers =
        ParsedHeaders::load(input).with_context(|| format!("reading {}", input.display()))?;
    let report = BindingGenerator::new(config)
        .check(&headers)
        .with_context(|| format!("checking {}", input.display()))?;

    println!(
        "OK: {} declarations, {} functions resolved, {} skipped",
        headers.len(),
        report.functions,
        report.skipped_total()
    );
    for (reason, count) in &report.skipped {
        println!("  {reason}: {count}");
    }
    Ok(())
}
