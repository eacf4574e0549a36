//! Opaque handle classes for `void *` typedefs.

use crate::declaration::TypedefDecl;

use super::{push_block_comment, Emission, JavaSource, SkipReason};

/// Whether a C type spelling is an untyped pointer, ignoring whitespace.
pub fn is_void_pointer(c_type: &str) -> bool {
    let compact: String = c_type.chars().filter(|c| !c.is_whitespace()).collect();
    compact == "void*"
}

/// Render a `typedef void *Name;` as a `PointerType` subclass.
pub fn render_opaque_pointer(decl: &TypedefDecl, package: &str) -> Emission<JavaSource> {
    if !decl.value.as_deref().is_some_and(is_void_pointer) {
        return Emission::Skipped(SkipReason::NonPointerTypedef);
    }
    let name = &decl.spelling;
    let mut out = String::new();
    if let Some(comment) = decl.brief_comment.as_deref() {
        push_block_comment(&mut out, comment, "");
    }
    out.push_str(&format!(
        "package {package};\n\nimport com.sun.jna.Pointer;\nimport com.sun.jna.PointerType;\n\n"
    ));
    out.push_str(&format!("public class {name} extends PointerType{{"));
    out.push_str(&format!(
        "\n\tpublic {name}(Pointer address){{\n\t\tsuper(address);\n\t}}"
    ));
    out.push_str(&format!("\n\tpublic {name}(){{\n\t\tsuper();\n\t}}"));
    out.push_str("\n}\n");

    Emission::Emitted(JavaSource {
        class_name: name.clone(),
        contents: out,
    })
}
