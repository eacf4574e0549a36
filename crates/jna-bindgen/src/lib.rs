//! Java/JNA binding source generation from parsed C API declarations.
//!
//! Consumes the JSON declaration dump of a C header parser (HELICS by
//! default) and writes a Java source tree: one file per enum, struct,
//! numeric macro and opaque handle, plus an aggregate class holding the
//! global constants and the JNA library interface.
//!
//! ## Modules
//!
//! - [`declaration`] — Parser output model, in declaration order
//! - [`typemap`] — C → Java type tables for return and argument positions
//! - [`policy`] — Functions and macros excluded from generation
//! - [`config`] — `jna-bindgen.toml` configuration
//! - [`emit`] — Per-declaration Java renderers
//! - [`generator`] — Orchestration and file output
//! - [`logging`] — Per-run `tracing` context

pub mod config;
pub mod declaration;
pub mod emit;
pub mod error;
pub mod generator;
pub mod logging;
pub mod policy;
pub mod typemap;

// Re-export key types for convenience
pub use config::BindgenConfig;
pub use declaration::{Declaration, ParsedHeaders};
pub use emit::{JavaSource, SkipReason};
pub use error::BindgenError;
pub use generator::{BindingGenerator, GenerationReport};
pub use logging::LogContext;
pub use policy::ExclusionPolicy;
pub use typemap::TypeMapper;
