//! Standalone constant classes for numeric macros.

use crate::declaration::{LiteralValue, MacroDecl};
use crate::policy::ExclusionPolicy;

use super::naming::{java_double_literal, java_integer, java_unsigned, pascal_case};
use super::{push_block_comment, Emission, JavaSource, SkipReason};

/// Render a numeric macro as a final class holding one constant.
///
/// The class name is the pascal-cased macro spelling; the constant keeps the
/// macro spelling unchanged. Integer values become `int` (or `long` when
/// out of range) and float values become `double`.
pub fn render_macro(decl: &MacroDecl, package: &str, policy: &ExclusionPolicy) -> Emission<JavaSource> {
    if policy.is_macro_ignored(&decl.spelling) {
        return Emission::Skipped(SkipReason::IgnoredMacro);
    }
    let (java_type, literal) = match &decl.value {
        Some(LiteralValue::Float(v)) => ("double", java_double_literal(*v)),
        Some(LiteralValue::Int(v)) => java_integer(*v),
        Some(LiteralValue::UInt(v)) => java_unsigned(*v),
        _ => return Emission::Skipped(SkipReason::NonNumericValue),
    };

    let class_name = pascal_case(&decl.spelling);
    let mut out = String::new();
    if let Some(comment) = decl.brief_comment.as_deref() {
        push_block_comment(&mut out, comment, "");
    }
    out.push_str(&format!("package {package};\n\npublic final class {class_name}{{"));
    out.push_str(&format!(
        "\n\tpublic static final {java_type} {} = {literal};",
        decl.spelling
    ));
    out.push_str(&format!("\n\tprivate {class_name}(){{}}"));
    out.push_str("\n}\n");

    Emission::Emitted(JavaSource {
        class_name,
        contents: out,
    })
}
