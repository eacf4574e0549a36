//! Per-declaration Java source renderers.
//!
//! Renderers are pure: they return text and leave file placement to the
//! [`crate::generator`]. Declarations that JNA cannot express come back as
//! [`Emission::Skipped`]; an unmapped C type is a hard error.
//!
//! - [`enums`] — `enum` files with an int accessor
//! - [`structs`] — `Structure` subclasses
//! - [`macros`] — one constant class per numeric macro
//! - [`variables`] — constant fragments for the aggregate class
//! - [`pointers`] — `PointerType` handle classes for `void *` typedefs
//! - [`functions`] — native method signatures
//! - [`boilerplate`] — the aggregate class wrapping everything else

pub mod boilerplate;
pub mod enums;
pub mod functions;
pub mod macros;
pub mod naming;
pub mod pointers;
pub mod structs;
pub mod variables;

use std::fmt;

/// A rendered standalone Java source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaSource {
    /// Class name; the file is `<class_name>.java`.
    pub class_name: String,
    pub contents: String,
}

impl JavaSource {
    pub fn file_name(&self) -> String {
        format!("{}.java", self.class_name)
    }
}

/// Why a declaration produced no output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SkipReason {
    IgnoredFunction,
    IgnoredMacro,
    NonNumericValue,
    NonPointerTypedef,
    UnsupportedKind,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IgnoredFunction => write!(f, "ignored function"),
            Self::IgnoredMacro => write!(f, "ignored macro"),
            Self::NonNumericValue => write!(f, "non-numeric value"),
            Self::NonPointerTypedef => write!(f, "non-pointer typedef"),
            Self::UnsupportedKind => write!(f, "unsupported declaration kind"),
        }
    }
}

/// Output of a renderer that may legitimately produce nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum Emission<T> {
    Emitted(T),
    Skipped(SkipReason),
}

impl<T> Emission<T> {
    pub fn emitted(self) -> Option<T> {
        match self {
            Self::Emitted(t) => Some(t),
            Self::Skipped(_) => None,
        }
    }
}

/// Write `/*\n<text>\n*/\n`, each line prefixed with `indent`.
pub(crate) fn push_block_comment(out: &mut String, text: &str, indent: &str) {
    out.push_str(indent);
    out.push_str("/*\n");
    for line in text.lines() {
        out.push_str(indent);
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(indent);
    out.push_str("*/\n");
}
