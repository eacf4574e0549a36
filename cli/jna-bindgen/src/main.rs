//! jna-bindgen CLI — generate Java/JNA bindings from a parsed C API dump.

mod commands;

use std::path::{Path, PathBuf};
use std::process;

use anyhow::Context;
use clap::{Parser, Subcommand};

use jna_bindgen::BindgenConfig;

#[derive(Parser)]
#[command(name = "jna-bindgen", version, about = "Java/JNA binding generator for C APIs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the Java binding tree
    Generate {
        /// Parser declaration dump (JSON)
        #[arg(long)]
        input: PathBuf,
        /// Output root directory (default: current directory)
        #[arg(long)]
        output: Option<PathBuf>,
        /// Configuration file (default: nearest jna-bindgen.toml)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Do not write jna-bindgen.log to the output directory
        #[arg(long)]
        no_log_file: bool,
        /// Log every declaration to stderr
        #[arg(short, long)]
        verbose: bool,
    },
    /// Resolve every type without writing any files
    Check {
        /// Parser declaration dump (JSON)
        #[arg(long)]
        input: PathBuf,
        /// Configuration file (default: nearest jna-bindgen.toml)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Write a default jna-bindgen.toml to the current directory
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    match cli.command {
        Commands::Generate {
            input,
            output,
            config,
            no_log_file,
            verbose,
        } => {
            let config = load_config(&cwd, config.as_deref())?;
            let output = output.unwrap_or_else(|| cwd.clone());
            commands::generate::run(&input, &output, config, !no_log_file, verbose)
        }

        Commands::Check { input, config } => {
            let config = load_config(&cwd, config.as_deref())?;
            commands::check::run(&input, config)
        }

        Commands::Init { force } => commands::init::run(&cwd, force),
    }
}

/// Load an explicit configuration file, or search upward from `cwd`.
/// Falls back to the built-in defaults when nothing is found.
fn load_config(cwd: &Path, explicit: Option<&Path>) -> anyhow::Result<BindgenConfig> {
    if let Some(path) = explicit {
        return BindgenConfig::load(path).with_context(|| format!("loading {}", path.display()));
    }
    match BindgenConfig::find_and_load(cwd)? {
        Some((config, _path)) => Ok(config),
        None => Ok(BindgenConfig::default()),
    }
}
