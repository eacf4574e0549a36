//! Declaration records produced by the external C header parser.
//!
//! The parser dumps a JSON object mapping compilation-unit ids to records.
//! Object key order is the parser's traversal order and is preserved for the
//! top-level mapping and for every nested mapping (enumerators, members,
//! arguments).

use std::collections::HashSet;
use std::fmt;
use std::marker::PhantomData;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{BindgenError, Result};

/// A string-keyed mapping that keeps document order.
#[derive(Debug, Clone, PartialEq)]
pub struct Ordered<T>(pub Vec<(String, T)>);

impl<T> Default for Ordered<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> Ordered<T> {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate `(key, value)` pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate values in document order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.0.iter().map(|(_, v)| v)
    }
}

impl<T> FromIterator<(String, T)> for Ordered<T> {
    fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Ordered<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct OrderedVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for OrderedVisitor<T> {
            type Value = Ordered<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of declaration entries")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, T>()? {
                    entries.push((key, value));
                }
                Ok(Ordered(entries))
            }
        }

        deserializer.deserialize_map(OrderedVisitor(PhantomData))
    }
}

impl<T: Serialize> Serialize for Ordered<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// A literal value attached to a macro or variable, classified by JSON type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LiteralValue {
    Int(i64),
    /// Integers above `i64::MAX`.
    UInt(u64),
    Float(f64),
    Text(String),
    Other(serde_json::Value),
}

/// A C type slot resolved by first-match priority: double pointer, then
/// pointer, then plain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CTypeRef<'a> {
    DoublePointer(&'a str),
    Pointer(&'a str),
    Plain(&'a str),
    None,
}

impl<'a> CTypeRef<'a> {
    pub fn resolve(
        double_pointer: Option<&'a str>,
        pointer: Option<&'a str>,
        plain: Option<&'a str>,
    ) -> Self {
        match (double_pointer, pointer, plain) {
            (Some(t), _, _) => Self::DoublePointer(t),
            (None, Some(t), _) => Self::Pointer(t),
            (None, None, Some(t)) => Self::Plain(t),
            (None, None, None) => Self::None,
        }
    }

    /// The C spelling used as the table key, if any slot was set.
    pub fn spelling(&self) -> Option<&'a str> {
        match *self {
            Self::DoublePointer(t) | Self::Pointer(t) | Self::Plain(t) => Some(t),
            Self::None => None,
        }
    }
}

/// One enumerator of an enum declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enumerator {
    #[serde(default)]
    pub spelling: String,
    pub value: i64,
    pub brief_comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumDecl {
    #[serde(default)]
    pub spelling: String,
    pub brief_comment: Option<String>,
    pub raw_comment: Option<String>,
    #[serde(default)]
    pub enumerations: Ordered<Enumerator>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructMember {
    #[serde(default)]
    pub spelling: String,
    #[serde(rename = "type")]
    pub c_type: Option<String>,
    pub pointer_type: Option<String>,
    pub double_pointer_type: Option<String>,
    pub brief_comment: Option<String>,
}

impl StructMember {
    pub fn type_ref(&self) -> CTypeRef<'_> {
        CTypeRef::resolve(
            self.double_pointer_type.as_deref(),
            self.pointer_type.as_deref(),
            self.c_type.as_deref(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructDecl {
    #[serde(default)]
    pub spelling: String,
    pub brief_comment: Option<String>,
    pub raw_comment: Option<String>,
    #[serde(default)]
    pub members: Ordered<StructMember>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroDecl {
    #[serde(default)]
    pub spelling: String,
    pub brief_comment: Option<String>,
    pub raw_comment: Option<String>,
    pub value: Option<LiteralValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDecl {
    #[serde(default)]
    pub spelling: String,
    pub brief_comment: Option<String>,
    pub raw_comment: Option<String>,
    pub value: Option<LiteralValue>,
    #[serde(rename = "type")]
    pub c_type: Option<String>,
}

/// A typedef; only `void *` typedefs become opaque handle classes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypedefDecl {
    #[serde(default)]
    pub spelling: String,
    pub brief_comment: Option<String>,
    pub raw_comment: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Argument {
    #[serde(default)]
    pub spelling: String,
    #[serde(rename = "type")]
    pub c_type: Option<String>,
    pub pointer_type: Option<String>,
    pub double_pointer_type: Option<String>,
}

impl Argument {
    pub fn type_ref(&self) -> CTypeRef<'_> {
        CTypeRef::resolve(
            self.double_pointer_type.as_deref(),
            self.pointer_type.as_deref(),
            self.c_type.as_deref(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDecl {
    #[serde(default)]
    pub spelling: String,
    pub brief_comment: Option<String>,
    pub raw_comment: Option<String>,
    pub result_type: Option<String>,
    pub pointer_type: Option<String>,
    pub double_pointer_type: Option<String>,
    #[serde(default)]
    pub arguments: Ordered<Argument>,
}

impl FunctionDecl {
    pub fn return_type_ref(&self) -> CTypeRef<'_> {
        CTypeRef::resolve(
            self.double_pointer_type.as_deref(),
            self.pointer_type.as_deref(),
            self.result_type.as_deref(),
        )
    }
}

/// A single declaration record, tagged by the parser's cursor kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Declaration {
    #[serde(rename = "ENUM_DECL")]
    Enum(EnumDecl),
    #[serde(rename = "STRUCT_DECL")]
    Struct(StructDecl),
    #[serde(rename = "MACRO_DEFINITION")]
    Macro(MacroDecl),
    #[serde(rename = "VAR_DECL")]
    Variable(VariableDecl),
    #[serde(rename = "TYPEDEF_DECL")]
    Typedef(TypedefDecl),
    #[serde(rename = "FUNCTION_DECL")]
    Function(FunctionDecl),
    /// Any cursor kind outside the supported set.
    #[serde(other)]
    Unsupported,
}

impl Declaration {
    pub fn spelling(&self) -> &str {
        match self {
            Self::Enum(d) => &d.spelling,
            Self::Struct(d) => &d.spelling,
            Self::Macro(d) => &d.spelling,
            Self::Variable(d) => &d.spelling,
            Self::Typedef(d) => &d.spelling,
            Self::Function(d) => &d.spelling,
            Self::Unsupported => "",
        }
    }

    /// The parser's cursor kind name for this record.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Enum(_) => "ENUM_DECL",
            Self::Struct(_) => "STRUCT_DECL",
            Self::Macro(_) => "MACRO_DEFINITION",
            Self::Variable(_) => "VAR_DECL",
            Self::Typedef(_) => "TYPEDEF_DECL",
            Self::Function(_) => "FUNCTION_DECL",
            Self::Unsupported => "UNSUPPORTED",
        }
    }
}

/// Render a record as pretty JSON for diagnostics.
pub fn record_json<T: Serialize + fmt::Debug>(record: &T) -> String {
    serde_json::to_string_pretty(record).unwrap_or_else(|_| format!("{record:?}"))
}

/// The complete parser output: compilation-unit id to declaration, in order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParsedHeaders {
    declarations: Ordered<Declaration>,
}

impl ParsedHeaders {
    /// Parse a parser dump from a JSON string.
    ///
    /// Each compilation-unit id may appear only once.
    pub fn parse(input: &str) -> Result<Self> {
        let headers: Self = serde_json::from_str(input)?;
        headers.check_unique_ids()?;
        Ok(headers)
    }

    fn check_unique_ids(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.len());
        for (id, decl) in self.iter() {
            if !seen.insert(id) {
                return Err(BindgenError::InvalidDeclarations {
                    detail: format!("duplicate id '{id}' ({} {})", decl.kind_name(), decl.spelling()),
                });
            }
        }
        Ok(())
    }

    /// Parse a parser dump from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn from_declarations(declarations: Vec<(String, Declaration)>) -> Self {
        Self {
            declarations: Ordered(declarations),
        }
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Iterate `(compilation-unit id, declaration)` in parser order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Declaration)> {
        self.declarations.iter()
    }

    /// All function declarations, in parser order.
    pub fn functions(&self) -> impl Iterator<Item = &FunctionDecl> {
        self.declarations.values().filter_map(|d| match d {
            Declaration::Function(f) => Some(f),
            _ => None,
        })
    }
}
