//! Enum files.

use crate::declaration::EnumDecl;

use super::naming::java_integer;
use super::JavaSource;

/// Render a C enum as a Java enum carrying each enumerator's integer value.
/// The value field is `long` when any enumerator is outside the `int` range.
///
/// The leading comment lists every enumerator as
/// `<spelling>: value:<value>\t<comment>`. Entries are emitted in declared
/// order, comma-separated, with a semicolon after the last one.
pub fn render_enum(decl: &EnumDecl, package: &str) -> JavaSource {
    let name = &decl.spelling;
    let mut out = String::new();

    out.push_str("/*\n");
    out.push_str(decl.brief_comment.as_deref().unwrap_or(""));
    out.push_str("\n\nAttributes:");
    for e in decl.enumerations.values() {
        out.push_str(&format!(
            "\n\t{}: value:{}\t{}",
            e.spelling,
            e.value,
            e.brief_comment.as_deref().unwrap_or("")
        ));
    }
    out.push_str("\n*/\n");

    out.push_str(&format!("package {package};\n\npublic enum {name}{{"));
    let count = decl.enumerations.len();
    if count == 0 {
        out.push_str("\n\t;");
    }
    let literals: Vec<(&'static str, String)> = decl
        .enumerations
        .values()
        .map(|e| java_integer(e.value))
        .collect();
    let value_type = if literals.iter().any(|(ty, _)| *ty == "long") {
        "long"
    } else {
        "int"
    };
    for (i, (e, (_, literal))) in decl.enumerations.values().zip(&literals).enumerate() {
        let terminator = if i + 1 == count { ';' } else { ',' };
        out.push_str(&format!("\n\t{}({literal}){terminator}", e.spelling));
    }
    out.push_str(&format!("\n\tprivate final {value_type} value;"));
    out.push_str(&format!(
        "\n\tprivate {name}({value_type} value){{\n\t\tthis.value = value;\n\t}}"
    ));
    out.push_str(&format!(
        "\n\tpublic {value_type} value(){{\n\t\treturn this.value;\n\t}}"
    ));
    out.push_str("\n}\n");

    JavaSource {
        class_name: name.clone(),
        contents: out,
    }
}
