//! C type spelling to Java/JNA type spelling.
//!
//! Return and argument positions use separate tables. The argument table
//! additionally maps pointers to primitives onto JNA `*ByReference` wrappers,
//! because out-parameters are passed as reference objects rather than native
//! pointers. A miss in either table is fatal; see [`crate::emit`].

use std::collections::BTreeMap;

use crate::declaration::CTypeRef;

/// Built-in return-position table.
const RETURN_TYPES: &[(&str, &str)] = &[
    ("Char_S", "char"),
    ("Char_S_*", "String"),
    ("Double", "double"),
    ("Int", "int"),
    ("Void", "void"),
    ("Void_*", "Pointer"),
    ("HelicsBool", "int"),
    ("HelicsBroker", "HelicsBroker"),
    ("HelicsCore", "HelicsCore"),
    ("HelicsDataBuffer", "HelicsDataBuffer"),
    ("HelicsEndpoint", "HelicsEndpoint"),
    ("HelicsFederate", "HelicsFederate"),
    ("HelicsFederateInfo", "HelicsFederateInfo"),
    ("HelicsFederateState", "HelicsFederateState"),
    ("HelicsFilter", "HelicsFilter"),
    ("HelicsInput", "HelicsInput"),
    ("HelicsIterationResult", "HelicsIterationResult"),
    ("HelicsMessage", "HelicsMessage"),
    ("HelicsPublication", "HelicsPublication"),
    ("HelicsQuery", "HelicsQuery"),
    ("HelicsTime", "double"),
    ("HelicsTranslator", "HelicsTranslator"),
    ("int32_t", "int"),
    ("int64_t", "long"),
];

/// Built-in argument-position table.
const ARGUMENT_TYPES: &[(&str, &str)] = &[
    ("Char_S", "char"),
    ("Char_S_*", "String"),
    ("Double", "double"),
    ("Double_*", "DoubleByReference"),
    ("Int", "int"),
    ("Int_*", "IntByReference"),
    ("Void_*", "Pointer"),
    ("HelicsBool", "int"),
    ("HelicsBroker", "HelicsBroker"),
    ("HelicsCore", "HelicsCore"),
    ("HelicsDataBuffer", "HelicsDataBuffer"),
    ("HelicsDataTypes", "int"),
    ("HelicsEndpoint", "HelicsEndpoint"),
    ("HelicsError_*", "HelicsError"),
    ("HelicsFederate", "HelicsFederate"),
    ("HelicsFederateInfo", "HelicsFederateInfo"),
    ("HelicsFilter", "HelicsFilter"),
    ("HelicsFilterTypes", "int"),
    ("HelicsInput", "HelicsInput"),
    ("HelicsIterationRequest", "HelicsIterationRequest"),
    ("HelicsIterationResult_*", "HelicsIterationResult"),
    ("HelicsMessage", "HelicsMessage"),
    ("HelicsPublication", "HelicsPublication"),
    ("HelicsQuery", "HelicsQuery"),
    ("HelicsQueryBuffer", "HelicsQueryBuffer"),
    ("HelicsTime", "double"),
    ("HelicsTranslator", "HelicsTranslator"),
    ("HelicsTranslatorTypes", "int"),
    ("int32_t", "int"),
    ("int64_t", "long"),
];

/// The JNA spelling of an untyped native pointer.
pub const GENERIC_POINTER: &str = "Pointer";

/// Lookup tables from C type spellings to Java type spellings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMapper {
    returns: BTreeMap<String, String>,
    arguments: BTreeMap<String, String>,
}

impl Default for TypeMapper {
    fn default() -> Self {
        Self {
            returns: to_table(RETURN_TYPES),
            arguments: to_table(ARGUMENT_TYPES),
        }
    }
}

fn to_table(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(c, java)| (c.to_string(), java.to_string()))
        .collect()
}

impl TypeMapper {
    /// Built-in tables extended with extra entries. Extra entries override
    /// built-ins with the same C spelling.
    pub fn with_extra<'a>(
        extra_returns: impl IntoIterator<Item = (&'a String, &'a String)>,
        extra_arguments: impl IntoIterator<Item = (&'a String, &'a String)>,
    ) -> Self {
        let mut mapper = Self::default();
        mapper
            .returns
            .extend(extra_returns.into_iter().map(|(k, v)| (k.clone(), v.clone())));
        mapper
            .arguments
            .extend(extra_arguments.into_iter().map(|(k, v)| (k.clone(), v.clone())));
        mapper
    }

    /// Java type for a function return slot.
    pub fn return_type(&self, ty: &CTypeRef<'_>) -> Option<&str> {
        ty.spelling()
            .and_then(|c| self.returns.get(c))
            .map(String::as_str)
    }

    /// Java type for a function argument slot.
    pub fn argument_type(&self, ty: &CTypeRef<'_>) -> Option<&str> {
        ty.spelling()
            .and_then(|c| self.arguments.get(c))
            .map(String::as_str)
    }

    /// Java type for a struct member: argument table, falling back to the
    /// C spelling itself.
    pub fn member_type<'a>(&'a self, ty: &CTypeRef<'a>) -> Option<&'a str> {
        self.argument_type(ty).or_else(|| ty.spelling())
    }

    pub fn return_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.returns.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn argument_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.arguments.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_return_primitives() {
        let tm = TypeMapper::default();
        assert_eq!(tm.return_type(&CTypeRef::Plain("Double")), Some("double"));
        assert_eq!(tm.return_type(&CTypeRef::Plain("Void")), Some("void"));
        assert_eq!(tm.return_type(&CTypeRef::Plain("HelicsTime")), Some("double"));
        assert_eq!(tm.return_type(&CTypeRef::Plain("int64_t")), Some("long"));
        assert_eq!(tm.return_type(&CTypeRef::Pointer("Char_S_*")), Some("String"));
        assert_eq!(tm.return_type(&CTypeRef::Pointer("Void_*")), Some(GENERIC_POINTER));
    }

    #[test]
    fn map_out_parameters_to_references() {
        let tm = TypeMapper::default();
        assert_eq!(
            tm.argument_type(&CTypeRef::Pointer("Double_*")),
            Some("DoubleByReference")
        );
        assert_eq!(tm.argument_type(&CTypeRef::Pointer("Int_*")), Some("IntByReference"));
        assert_eq!(tm.argument_type(&CTypeRef::Plain("Double")), Some("double"));
        assert_eq!(
            tm.argument_type(&CTypeRef::Pointer("HelicsError_*")),
            Some("HelicsError")
        );
    }

    #[test]
    fn tables_are_position_specific() {
        let tm = TypeMapper::default();
        // Out-parameter wrappers never appear in return position.
        assert_eq!(tm.return_type(&CTypeRef::Pointer("Double_*")), None);
        // Federate state is only ever returned.
        assert_eq!(tm.argument_type(&CTypeRef::Plain("HelicsFederateState")), None);
        assert_eq!(
            tm.return_type(&CTypeRef::Plain("HelicsFederateState")),
            Some("HelicsFederateState")
        );
    }

    #[test]
    fn input_handles_map_to_input() {
        let tm = TypeMapper::default();
        assert_eq!(tm.argument_type(&CTypeRef::Plain("HelicsInput")), Some("HelicsInput"));
    }

    #[test]
    fn misses_and_empty_slots() {
        let tm = TypeMapper::default();
        assert_eq!(tm.return_type(&CTypeRef::Plain("UnknownType")), None);
        assert_eq!(tm.argument_type(&CTypeRef::None), None);
        assert_eq!(tm.member_type(&CTypeRef::None), None);
    }

    #[test]
    fn member_falls_back_to_c_spelling() {
        let tm = TypeMapper::default();
        assert_eq!(tm.member_type(&CTypeRef::Plain("Double")), Some("double"));
        assert_eq!(tm.member_type(&CTypeRef::Plain("int")), Some("int"));
        assert_eq!(tm.member_type(&CTypeRef::Pointer("Void_*")), Some(GENERIC_POINTER));
    }

    #[test]
    fn extra_entries_extend_and_override() {
        let extra_ret = BTreeMap::from([("HelicsNewHandle".to_string(), "HelicsNewHandle".to_string())]);
        let extra_arg = BTreeMap::from([("Int".to_string(), "long".to_string())]);
        let tm = TypeMapper::with_extra(&extra_ret, &extra_arg);
        assert_eq!(
            tm.return_type(&CTypeRef::Plain("HelicsNewHandle")),
            Some("HelicsNewHandle")
        );
        assert_eq!(tm.argument_type(&CTypeRef::Plain("Int")), Some("long"));
        // Built-ins are still present.
        assert_eq!(tm.return_type(&CTypeRef::Plain("Int")), Some("int"));
    }
}
