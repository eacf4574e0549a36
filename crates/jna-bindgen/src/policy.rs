//! Exclusion policy for declarations that JNA cannot express.
//!
//! Functions taking raw byte buffers, callback registrations and argv-style
//! entry points have no reference-based JNA form and are skipped. The
//! character data-type macro is skipped because its value does not survive
//! the int/double constant encoding.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Functions excluded from the native interface by default.
pub const DEFAULT_IGNORED_FUNCTIONS: &[&str] = &[
    "helicsCreateBrokerFromArgs",
    "helicsCreateCoreFromArgs",
    "helicsFederateInfoLoadFromArgs",
    "helicsEndpointSendBytes",
    "helicsEndpointSendBytesAt",
    "helicsEndpointSendBytesTo",
    "helicsEndpointSendBytesToAt",
    "helicsInputGetNamedPoint",
    "helicsInputGetString",
    "helicsInputGetVector",
    "helicsInputGetComplexVector",
    "helicsInputSetDefaultBytes",
    "helicsInputSetDefaultVector",
    "helicsInputSetDefaultComplexVector",
    "helicsMessageAppendData",
    "helicsMessageGetBytes",
    "helicsMessageSetData",
    "helicsMessageGetBytesPointer",
    "helicsPublicationPublishBytes",
    "helicsPublicationPublishVector",
    "helicsPublicationPublishComplexVector",
    "helicsLoadSignalHandlerCallback",
    "helicsLoadSignalHandlerCallbackNoExit",
    "helicsBrokerSetLoggingCallback",
    "helicsCoreSetLoggingCallback",
    "helicsFederateSetLoggingCallback",
    "helicsFilterSetCustomCallback",
    "helicsFederateSetQueryCallback",
    "helicsFederateSetTimeUpdateCallback",
    "helicsFederateSetStateChangeCallback",
    "helicsFederateSetTimeRequestEntryCallback",
    "helicsFederateSetTimeRequestReturnCallback",
    "helicsTranslatorSetCustomCallback",
    "helicsTimeToBytes",
    "helicsComplexToBytes",
    "helicsComplexObjectToBytes",
    "helicsVectorToBytes",
    "helicsComplexVectorToBytes",
    "helicsDataBufferToString",
    "helicsDataBufferToRawString",
    "helicsDataBufferToVector",
    "helicsDataBufferToComplexVector",
    "helicsDataBufferToNamedPoint",
    "helicsCloseLibrary",
    "helicsErrorInitialize",
    "helicsErrorClear",
];

/// Macros excluded from constant generation by default.
pub const DEFAULT_IGNORED_MACROS: &[&str] = &["HELICS_DATA_TYPE_CHAR"];

/// Sets of identifiers skipped during generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionPolicy {
    #[serde(default)]
    pub ignored_functions: BTreeSet<String>,
    #[serde(default)]
    pub ignored_macros: BTreeSet<String>,
}

impl Default for ExclusionPolicy {
    fn default() -> Self {
        Self {
            ignored_functions: DEFAULT_IGNORED_FUNCTIONS.iter().map(|s| s.to_string()).collect(),
            ignored_macros: DEFAULT_IGNORED_MACROS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ExclusionPolicy {
    /// A policy that excludes nothing.
    pub fn empty() -> Self {
        Self {
            ignored_functions: BTreeSet::new(),
            ignored_macros: BTreeSet::new(),
        }
    }

    /// Add identifiers on top of the current lists.
    pub fn extend(
        &mut self,
        functions: impl IntoIterator<Item = String>,
        macros: impl IntoIterator<Item = String>,
    ) {
        self.ignored_functions.extend(functions);
        self.ignored_macros.extend(macros);
    }

    pub fn is_function_ignored(&self, name: &str) -> bool {
        self.ignored_functions.contains(name)
    }

    pub fn is_macro_ignored(&self, name: &str) -> bool {
        self.ignored_macros.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_known_exclusions() {
        let policy = ExclusionPolicy::default();
        assert_eq!(policy.ignored_functions.len(), DEFAULT_IGNORED_FUNCTIONS.len());
        assert!(policy.is_function_ignored("helicsEndpointSendBytes"));
        assert!(policy.is_function_ignored("helicsFederateSetLoggingCallback"));
        assert!(policy.is_function_ignored("helicsCreateBrokerFromArgs"));
        assert!(!policy.is_function_ignored("helicsCreateBroker"));
        assert!(policy.is_macro_ignored("HELICS_DATA_TYPE_CHAR"));
        assert!(!policy.is_macro_ignored("HELICS_DATA_TYPE_INT"));
    }

    #[test]
    fn default_function_list_has_no_duplicates() {
        let unique: BTreeSet<&str> = DEFAULT_IGNORED_FUNCTIONS.iter().copied().collect();
        assert_eq!(unique.len(), DEFAULT_IGNORED_FUNCTIONS.len());
    }

    #[test]
    fn extend_adds_identifiers() {
        let mut policy = ExclusionPolicy::default();
        policy.extend(
            vec!["helicsNewCallback".to_string()],
            vec!["HELICS_NEW_MACRO".to_string()],
        );
        assert!(policy.is_function_ignored("helicsNewCallback"));
        assert!(policy.is_function_ignored("helicsErrorClear"));
        assert!(policy.is_macro_ignored("HELICS_NEW_MACRO"));
        assert!(policy.is_macro_ignored("HELICS_DATA_TYPE_CHAR"));
    }

    #[test]
    fn empty_policy_excludes_nothing() {
        let policy = ExclusionPolicy::empty();
        assert!(!policy.is_function_ignored("helicsErrorClear"));
        assert!(!policy.is_macro_ignored("HELICS_DATA_TYPE_CHAR"));
    }
}
