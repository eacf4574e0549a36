//! Native method declarations for the JNA library interface.

use crate::declaration::{record_json, CTypeRef, FunctionDecl};
use crate::error::{BindgenError, Result, TypePosition};
use crate::policy::ExclusionPolicy;
use crate::typemap::TypeMapper;

use super::{Emission, SkipReason};

/// A function signature with every type resolved to its Java spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaSignature {
    pub name: String,
    pub return_type: String,
    /// `(java type, parameter name)` in declared order.
    pub parameters: Vec<(String, String)>,
}

impl JavaSignature {
    /// `<ret> <name>(<type> <arg>, ...);`
    pub fn declaration(&self) -> String {
        let params: Vec<String> = self
            .parameters
            .iter()
            .map(|(ty, name)| format!("{ty} {name}"))
            .collect();
        format!("{} {}({});", self.return_type, self.name, params.join(", "))
    }
}

fn lookup<'a>(
    decl: &FunctionDecl,
    type_ref: &CTypeRef<'_>,
    position: TypePosition,
    owner: &str,
    types: &'a TypeMapper,
) -> Result<&'a str> {
    let Some(c_type) = type_ref.spelling() else {
        return Err(BindgenError::MissingType {
            spelling: owner.to_string(),
            record: record_json(decl),
        });
    };
    let mapped = match position {
        TypePosition::Return => types.return_type(type_ref),
        TypePosition::Argument => types.argument_type(type_ref),
    };
    mapped.ok_or_else(|| BindgenError::UnmappedType {
        position,
        c_type: c_type.to_string(),
        record: record_json(decl),
    })
}

/// Resolve the return and argument types of a function.
///
/// Fails on the first C type missing from its table; the error carries the
/// whole function record.
pub fn resolve_signature(decl: &FunctionDecl, types: &TypeMapper) -> Result<JavaSignature> {
    let name = &decl.spelling;
    let return_type = lookup(decl, &decl.return_type_ref(), TypePosition::Return, name, types)?;
    let mut parameters = Vec::with_capacity(decl.arguments.len());
    for arg in decl.arguments.values() {
        let owner = format!("{name}({})", arg.spelling);
        let java_type = lookup(decl, &arg.type_ref(), TypePosition::Argument, &owner, types)?;
        parameters.push((java_type.to_string(), arg.spelling.clone()));
    }
    Ok(JavaSignature {
        name: name.clone(),
        return_type: return_type.to_string(),
        parameters,
    })
}

/// Render a function as a native method of the library interface.
///
/// The raw documentation comment is copied verbatim above the declaration.
/// Excluded functions produce nothing.
pub fn render_function(
    decl: &FunctionDecl,
    types: &TypeMapper,
    policy: &ExclusionPolicy,
) -> Result<Emission<String>> {
    if policy.is_function_ignored(&decl.spelling) {
        return Ok(Emission::Skipped(SkipReason::IgnoredFunction));
    }
    let signature = resolve_signature(decl, types)?;

    let mut out = String::new();
    if let Some(comment) = decl.raw_comment.as_deref() {
        out.push_str("\t\t");
        out.push_str(comment);
        out.push('\n');
    }
    out.push_str("\t\t");
    out.push_str(&signature.declaration());
    out.push('\n');
    Ok(Emission::Emitted(out))
}
