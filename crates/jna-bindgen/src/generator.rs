//! Orchestration: walk the parsed declarations in order, dispatch each to
//! its renderer, write standalone files as they are produced, then write
//! the aggregate class.
//!
//! An unmapped type aborts the run immediately. Files written before the
//! failure stay on disk; the tool is a regenerate-from-scratch build step.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::BindgenConfig;
use crate::declaration::{record_json, Declaration, ParsedHeaders};
use crate::emit::boilerplate::render_aggregate;
use crate::emit::enums::render_enum;
use crate::emit::functions::render_function;
use crate::emit::macros::render_macro;
use crate::emit::pointers::render_opaque_pointer;
use crate::emit::structs::render_struct;
use crate::emit::variables::render_variable;
use crate::emit::{Emission, JavaSource, SkipReason};
use crate::error::Result;
use crate::logging::LogContext;
use crate::policy::ExclusionPolicy;
use crate::typemap::TypeMapper;

/// Summary of one generation (or check) run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Standalone per-type files, in write order.
    pub files_written: Vec<PathBuf>,
    /// The aggregate class file; `None` for a check run.
    pub aggregate_file: Option<PathBuf>,
    /// Macro constant classes imported by the aggregate class.
    pub constant_classes: Vec<String>,
    pub constants: usize,
    pub functions: usize,
    pub skipped: BTreeMap<SkipReason, usize>,
}

impl GenerationReport {
    pub fn skipped_total(&self) -> usize {
        self.skipped.values().sum()
    }
}

/// Fragments collected for the aggregate class.
#[derive(Default)]
struct Accumulator {
    constant_classes: Vec<String>,
    constants: Vec<String>,
    functions: Vec<String>,
    skipped: BTreeMap<SkipReason, usize>,
}

impl Accumulator {
    fn skip(&mut self, reason: SkipReason, decl: &Declaration) {
        debug!(reason = %reason, spelling = decl.spelling(), "skipping declaration");
        *self.skipped.entry(reason).or_default() += 1;
    }
}

pub struct BindingGenerator {
    config: BindgenConfig,
    types: TypeMapper,
    policy: ExclusionPolicy,
}

impl BindingGenerator {
    pub fn new(config: BindgenConfig) -> Self {
        let types = config.type_mapper();
        let policy = config.policy();
        Self {
            config,
            types,
            policy,
        }
    }

    pub fn config(&self) -> &BindgenConfig {
        &self.config
    }

    pub fn types(&self) -> &TypeMapper {
        &self.types
    }

    /// Generate the full binding tree under `output_dir`.
    ///
    /// Per-type files go to the package directory below `output_dir`; the
    /// aggregate class goes to `output_dir` itself.
    pub fn generate(
        &self,
        headers: &ParsedHeaders,
        output_dir: &Path,
        log: &LogContext,
    ) -> Result<GenerationReport> {
        log.in_scope(|| self.generate_in_scope(headers, output_dir))
    }

    fn generate_in_scope(&self, headers: &ParsedHeaders, output_dir: &Path) -> Result<GenerationReport> {
        let package_dir = output_dir.join(self.config.package_dir());
        fs::create_dir_all(&package_dir)?;
        info!(
            declarations = headers.len(),
            output = %output_dir.display(),
            "generating bindings"
        );

        let mut files_written = Vec::new();
        let acc = self.walk(headers, &mut |source: &JavaSource| -> Result<()> {
            let path = package_dir.join(source.file_name());
            fs::write(&path, &source.contents)?;
            debug!(path = %path.display(), "wrote {}", source.class_name);
            files_written.push(path);
            Ok(())
        })?;

        let aggregate = render_aggregate(
            &self.config.output,
            &acc.constant_classes,
            &acc.constants,
            &acc.functions,
        );
        let aggregate_path = output_dir.join(format!("{}.java", self.config.output.aggregate_class));
        fs::write(&aggregate_path, aggregate)?;

        let report = GenerationReport {
            files_written,
            aggregate_file: Some(aggregate_path),
            constant_classes: acc.constant_classes,
            constants: acc.constants.len(),
            functions: acc.functions.len(),
            skipped: acc.skipped,
        };
        info!(
            files = report.files_written.len(),
            constants = report.constants,
            functions = report.functions,
            skipped = report.skipped_total(),
            "bindings written"
        );
        Ok(report)
    }

    /// Render every declaration without touching the filesystem.
    ///
    /// Fails with the same error `generate` would on the first unmapped type.
    pub fn check(&self, headers: &ParsedHeaders) -> Result<GenerationReport> {
        let acc = self.walk(headers, &mut |_: &JavaSource| -> Result<()> { Ok(()) })?;
        Ok(GenerationReport {
            files_written: Vec::new(),
            aggregate_file: None,
            constant_classes: acc.constant_classes,
            constants: acc.constants.len(),
            functions: acc.functions.len(),
            skipped: acc.skipped,
        })
    }

    fn walk(
        &self,
        headers: &ParsedHeaders,
        sink: &mut dyn FnMut(&JavaSource) -> Result<()>,
    ) -> Result<Accumulator> {
        let package = self.config.output.package.as_str();
        let mut acc = Accumulator::default();

        for (cursor, decl) in headers.iter() {
            debug!(cursor, kind = decl.kind_name(), "{}", record_json(decl));
            match decl {
                Declaration::Enum(d) => sink(&render_enum(d, package))?,
                Declaration::Struct(d) => {
                    let source = render_struct(d, package, &self.config.structs.error_struct, &self.types)?;
                    sink(&source)?;
                }
                Declaration::Macro(d) => match render_macro(d, package, &self.policy) {
                    Emission::Emitted(source) => {
                        sink(&source)?;
                        acc.constant_classes.push(source.class_name);
                    }
                    Emission::Skipped(reason) => acc.skip(reason, decl),
                },
                Declaration::Variable(d) => match render_variable(d) {
                    Emission::Emitted(fragment) => acc.constants.push(fragment),
                    Emission::Skipped(reason) => acc.skip(reason, decl),
                },
                Declaration::Typedef(d) => match render_opaque_pointer(d, package) {
                    Emission::Emitted(source) => sink(&source)?,
                    Emission::Skipped(reason) => acc.skip(reason, decl),
                },
                Declaration::Function(d) => match render_function(d, &self.types, &self.policy)? {
                    Emission::Emitted(fragment) => acc.functions.push(fragment),
                    Emission::Skipped(reason) => acc.skip(reason, decl),
                },
                Declaration::Unsupported => acc.skip(SkipReason::UnsupportedKind, decl),
            }
        }
        Ok(acc)
    }
}
