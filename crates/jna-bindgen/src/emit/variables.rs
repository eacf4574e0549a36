//! Constant fragments for global variables.

use crate::declaration::{LiteralValue, VariableDecl};

use super::naming::{java_double_literal, java_integer, java_unsigned};
use super::{push_block_comment, Emission, SkipReason};

/// C types whose string-valued variables are emitted as `double` constants.
/// The string is an expression naming another constant (e.g. a macro).
pub const TIME_TYPES: &[&str] = &["Double", "HelicsTime"];

/// Render a global variable as a constant declaration inside the aggregate
/// class. The fragment is indented one level and ends with a newline.
pub fn render_variable(decl: &VariableDecl) -> Emission<String> {
    let (java_type, literal) = match &decl.value {
        Some(LiteralValue::Float(v)) => ("double", java_double_literal(*v)),
        Some(LiteralValue::Int(v)) => java_integer(*v),
        Some(LiteralValue::UInt(v)) => java_unsigned(*v),
        Some(LiteralValue::Text(expr))
            if decl
                .c_type
                .as_deref()
                .is_some_and(|t| TIME_TYPES.contains(&t)) =>
        {
            ("double", expr.trim().to_string())
        }
        _ => return Emission::Skipped(SkipReason::NonNumericValue),
    };

    let mut out = String::new();
    if let Some(comment) = decl.brief_comment.as_deref() {
        push_block_comment(&mut out, comment, "\t");
    }
    out.push_str(&format!(
        "\tpublic static final {java_type} {} = {literal};\n",
        decl.spelling
    ));
    Emission::Emitted(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(spelling: &str, c_type: &str, value: LiteralValue, comment: Option<&str>) -> VariableDecl {
        VariableDecl {
            spelling: spelling.to_string(),
            brief_comment: comment.map(str::to_string),
            raw_comment: None,
            value: Some(value),
            c_type: Some(c_type.to_string()),
        }
    }

    #[test]
    fn float_variable() {
        let decl = var(
            "HELICS_TIME_EPSILON",
            "HelicsTime",
            LiteralValue::Float(1e-9),
            Some("definition of the minimum time resolution"),
        );
        let frag = render_variable(&decl).emitted().unwrap();
        assert_eq!(
            frag,
            "\t/*\n\tdefinition of the minimum time resolution\n\t*/\n\tpublic static final double HELICS_TIME_EPSILON = 1e-09;\n"
        );
    }

    #[test]
    fn int_variable() {
        let decl = var("HELICS_TRUE", "HelicsBool", LiteralValue::Int(1), None);
        assert_eq!(
            render_variable(&decl).emitted().unwrap(),
            "\tpublic static final int HELICS_TRUE = 1;\n"
        );
    }

    #[test]
    fn unsigned_variable_is_long() {
        let decl = var("HELICS_ALL_FLAGS", "uint64_t", LiteralValue::UInt(u64::MAX), None);
        assert_eq!(
            render_variable(&decl).emitted().unwrap(),
            "\tpublic static final long HELICS_ALL_FLAGS = 0xFFFFFFFFFFFFFFFFL;\n"
        );
    }

    #[test]
    fn time_typed_expression() {
        let decl = var(
            "HELICS_TIME_MAXTIME",
            "HelicsTime",
            LiteralValue::Text("HELICS_BIG_NUMBER".to_string()),
            None,
        );
        assert_eq!(
            render_variable(&decl).emitted().unwrap(),
            "\tpublic static final double HELICS_TIME_MAXTIME = HELICS_BIG_NUMBER;\n"
        );

        let decl = var(
            "cHelicsBigNumber",
            "Double",
            LiteralValue::Text("HELICS_BIG_NUMBER".to_string()),
            None,
        );
        assert!(render_variable(&decl).emitted().is_some());
    }

    #[test]
    fn string_with_other_type_is_dropped() {
        let decl = var(
            "HELICS_VERSION_STRING",
            "Char_S_*",
            LiteralValue::Text("\"3.0.0\"".to_string()),
            Some("version"),
        );
        assert_eq!(render_variable(&decl), Emission::Skipped(SkipReason::NonNumericValue));
    }

    #[test]
    fn missing_value_is_dropped() {
        let mut decl = var("X", "Int", LiteralValue::Int(0), None);
        decl.value = None;
        assert_eq!(render_variable(&decl), Emission::Skipped(SkipReason::NonNumericValue));
    }
}
