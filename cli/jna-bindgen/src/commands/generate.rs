//! `jna-bindgen generate` — write the Java binding tree.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use jna_bindgen::logging::LOG_FILE_NAME;
use jna_bindgen::{BindgenConfig, BindingGenerator, LogContext, ParsedHeaders};

/// Generate bindings for the declarations in `input` under `output_dir`.
///
/// With `log_file`, a DEBUG trace of every declaration is written to
/// `jna-bindgen.log` in `output_dir`.
pub fn run(
    input: &Path,
    output_dir: &Path,
    config: BindgenConfig,
    log_file: bool,
    verbose: bool,
) -> Result<()> {
    let headers =
        ParsedHeaders::load(input).with_context(|| format!("reading {}", input.display()))?;

    fs::create_dir_all(output_dir)
        .with_context(|| format!("creating {}", output_dir.display()))?;
    let log_path = log_file.then(|| output_dir.join(LOG_FILE_NAME));
    let log = LogContext::new(verbose, log_path.as_deref()).context("opening log file")?;

    let generator = BindingGenerator::new(config);
    let report = generator
        .generate(&headers, output_dir, &log)
        .with_context(|| format!("generating bindings from {}", input.display()))?;

    println!(
        "Generated {} files, {} constants, {} functions ({} declarations skipped)",
        report.files_written.len() + 1,
        report.constants,
        report.functions,
        report.skipped_total()
    );
    if let Some(aggregate) = &report.aggregate_file {
        println!("  {}", aggregate.display());
    }
    if let Some(path) = log.log_file() {
        println!("  log: {}", path.display());
    }

    Ok(())
}
