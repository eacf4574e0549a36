//! `Structure` files.

use crate::declaration::{record_json, StructDecl};
use crate::error::{BindgenError, Result};
use crate::typemap::{TypeMapper, GENERIC_POINTER};

use super::JavaSource;

/// Render a C struct as a JNA `Structure` with one public field per member.
///
/// Members of `error_struct` whose type resolves to a generic `Pointer` are
/// bound as `String`: the native error message pointer is read as a string.
pub fn render_struct(
    decl: &StructDecl,
    package: &str,
    error_struct: &str,
    types: &TypeMapper,
) -> Result<JavaSource> {
    let name = &decl.spelling;
    let mut fields = Vec::with_capacity(decl.members.len());
    for member in decl.members.values() {
        let type_ref = member.type_ref();
        let java_type =
            types
                .member_type(&type_ref)
                .ok_or_else(|| BindgenError::MissingType {
                    spelling: format!("{name}.{}", member.spelling),
                    record: record_json(decl),
                })?;
        let java_type = if name == error_struct && java_type == GENERIC_POINTER {
            "String"
        } else {
            java_type
        };
        fields.push((member, java_type));
    }

    let mut out = String::new();
    out.push_str("/*\n");
    out.push_str(decl.brief_comment.as_deref().unwrap_or(""));
    out.push_str("\n*/\n");
    out.push_str(&format!("package {package};\n\nimport com.sun.jna.Structure;\n\n"));
    if !fields.is_empty() {
        let order: Vec<String> = fields
            .iter()
            .map(|(m, _)| format!("\"{}\"", m.spelling))
            .collect();
        out.push_str(&format!("@Structure.FieldOrder({{{}}})\n", order.join(", ")));
    }
    out.push_str(&format!("public class {name} extends Structure{{"));
    for (member, java_type) in &fields {
        if let Some(comment) = member.brief_comment.as_deref() {
            out.push_str(&format!("\n\t/*{comment}*/"));
        }
        out.push_str(&format!("\n\tpublic {java_type} {};", member.spelling));
    }
    out.push_str("\n}\n");

    Ok(JavaSource {
        class_name: name.clone(),
        contents: out,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declaration::{Ordered, StructMember};

    fn member(spelling: &str, c_type: &str, pointer: Option<&str>, comment: Option<&str>) -> StructMember {
        StructMember {
            spelling: spelling.to_string(),
            c_type: Some(c_type.to_string()),
            pointer_type: pointer.map(str::to_string),
            double_pointer_type: None,
            brief_comment: comment.map(str::to_string),
        }
    }

    fn error_struct(name: &str) -> StructDecl {
        StructDecl {
            spelling: name.to_string(),
            brief_comment: Some("helics error object".to_string()),
            raw_comment: None,
            members: Ordered(vec![
                (
                    "0".to_string(),
                    member("error_code", "Int", None, Some("an error code associated with the error")),
                ),
                (
                    "1".to_string(),
                    member("message", "Pointer", Some("Void_*"), Some("a message associated with the error")),
                ),
            ]),
        }
    }

    #[test]
    fn error_struct_message_is_string() {
        let src = render_struct(
            &error_struct("HelicsError"),
            "com.java.helics",
            "HelicsError",
            &TypeMapper::default(),
        )
        .unwrap();
        let expected = "/*
helics error object
*/
package com.java.helics;

import com.sun.jna.Structure;

@Structure.FieldOrder({\"error_code\", \"message\"})
public class HelicsError extends Structure{
\t/*an error code associated with the error*/
\tpublic int error_code;
\t/*a message associated with the error*/
\tpublic String message;
}
";
        assert_eq!(src.contents, expected);
    }

    #[test]
    fn other_structs_keep_generic_pointer() {
        let src = render_struct(
            &error_struct("HelicsOther"),
            "com.java.helics",
            "HelicsError",
            &TypeMapper::default(),
        )
        .unwrap();
        assert!(src.contents.contains("\tpublic Pointer message;"));
        assert!(!src.contents.contains("String"));
    }

    #[test]
    fn unmapped_member_type_falls_back_to_spelling() {
        let decl = StructDecl {
            spelling: "HelicsComplex".to_string(),
            brief_comment: None,
            raw_comment: None,
            members: Ordered(vec![
                ("0".to_string(), member("real", "Double", None, None)),
                ("1".to_string(), member("imag", "double", None, None)),
            ]),
        };
        let src = render_struct(&decl, "com.java.helics", "HelicsError", &TypeMapper::default()).unwrap();
        assert!(src.contents.contains("\n\tpublic double real;\n\tpublic double imag;\n}"));
        assert!(src.contents.contains("@Structure.FieldOrder({\"real\", \"imag\"})"));
    }

    #[test]
    fn member_without_type_is_an_error() {
        let decl = StructDecl {
            spelling: "Broken".to_string(),
            brief_comment: None,
            raw_comment: None,
            members: Ordered(vec![(
                "0".to_string(),
                StructMember {
                    spelling: "x".to_string(),
                    c_type: None,
                    pointer_type: None,
                    double_pointer_type: None,
                    brief_comment: None,
                },
            )]),
        };
        let err = render_struct(&decl, "com.java.helics", "HelicsError", &TypeMapper::default())
            .unwrap_err();
        assert!(err.to_string().contains("Broken.x"));
    }
}
