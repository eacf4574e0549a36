//! Per-run logging context.
//!
//! A [`LogContext`] owns a `tracing` dispatcher that writes INFO (or DEBUG
//! when verbose) to stderr and, optionally, everything at DEBUG to a log
//! file truncated at construction. Nothing is installed globally; the
//! dispatcher is only active inside [`LogContext::in_scope`].

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::Dispatch;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, Layer};

use crate::error::Result;

/// Default log file name, placed in the output directory by the CLI.
pub const LOG_FILE_NAME: &str = "jna-bindgen.log";

pub struct LogContext {
    dispatch: Dispatch,
    log_file: Option<PathBuf>,
}

impl LogContext {
    /// Build a context logging to stderr and, if given, to `log_file`.
    pub fn new(verbose: bool, log_file: Option<&Path>) -> Result<Self> {
        let console_level = if verbose {
            LevelFilter::DEBUG
        } else {
            LevelFilter::INFO
        };
        let console = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .with_filter(Targets::new().with_target("jna_bindgen", console_level));

        let file_layer = match log_file {
            Some(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent)?;
                }
                let file = File::create(path)?;
                Some(
                    fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file))
                        .with_filter(Targets::new().with_target("jna_bindgen", LevelFilter::DEBUG)),
                )
            }
            None => None,
        };

        let subscriber = tracing_subscriber::registry().with(console).with(file_layer);
        Ok(Self {
            dispatch: Dispatch::new(subscriber),
            log_file: log_file.map(Path::to_path_buf),
        })
    }

    /// A context that drops every event.
    pub fn silent() -> Self {
        Self {
            dispatch: Dispatch::none(),
            log_file: None,
        }
    }

    /// Run `f` with this context's dispatcher as the default.
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }

    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }
}

impl std::fmt::Debug for LogContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogContext")
            .field("log_file", &self.log_file)
            .finish_non_exhaustive()
    }
}
