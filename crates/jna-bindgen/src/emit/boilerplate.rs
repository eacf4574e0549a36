//! The aggregate class: license header, imports, constants and the nested
//! JNA library interface holding every native method.

use crate::config::OutputConfig;

use super::push_block_comment;

/// Assemble the aggregate source file.
///
/// `constant_classes` are the standalone macro classes, each imported
/// statically; `constants` and `functions` are fragments produced by the
/// variable and function renderers, kept in the given order.
pub fn render_aggregate(
    output: &OutputConfig,
    constant_classes: &[String],
    constants: &[String],
    functions: &[String],
) -> String {
    let package = &output.package;
    let class = &output.aggregate_class;
    let iface = &output.interface;

    let mut out = String::new();
    push_block_comment(&mut out, &output.license_header, "");
    out.push('\n');
    out.push_str(&format!("package {package};\n\n"));
    for constant_class in constant_classes {
        out.push_str(&format!("import static {package}.{constant_class}.*;\n"));
    }
    out.push_str("import com.sun.jna.*;\n");
    out.push_str("import com.sun.jna.ptr.*;\n\n");

    out.push_str(&format!("public class {class} {{\n"));
    for constant in constants {
        out.push_str(constant);
    }
    if !constants.is_empty() {
        out.push('\n');
    }
    out.push_str(&format!("\tpublic interface {iface} extends Library {{\n"));
    out.push_str(&format!(
        "\t\t{iface} INSTANCE = ({iface})Native.loadLibrary(\"{}\", {iface}.class);\n",
        output.native_library
    ));
    for function in functions {
        out.push('\n');
        out.push_str(function);
    }
    out.push_str("\t}\n");
    out.push_str("}\n");
    out
}
