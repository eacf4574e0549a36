//! `jna-bindgen.toml` configuration.
//!
//! Every section is optional; an absent file yields the HELICS defaults.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BindgenError, Result};
use crate::policy::ExclusionPolicy;
use crate::typemap::TypeMapper;

/// File name searched for by [`BindgenConfig::find_and_load`].
pub const CONFIG_FILE_NAME: &str = "jna-bindgen.toml";

const DEFAULT_LICENSE_HEADER: &str = "\
Copyright (c) 2017-2022,
Battelle Memorial Institute; Lawrence Livermore National Security, LLC; Alliance for Sustainable Energy, LLC.  See
the top-level NOTICE for additional details. All rights reserved.
SPDX-License-Identifier: BSD-3-Clause";

/// Top-level generator configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BindgenConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub structs: StructConfig,
    #[serde(default)]
    pub exclusions: ExclusionConfig,
    #[serde(default)]
    pub types: TypeConfig,
}

/// Java-side naming of the generated sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Java package of every generated file.
    #[serde(default = "default_package")]
    pub package: String,
    /// Class holding the constants and the native interface.
    #[serde(default = "default_aggregate_class")]
    pub aggregate_class: String,
    /// Nested JNA `Library` interface name.
    #[serde(default = "default_interface")]
    pub interface: String,
    /// Native library name passed to `Native.loadLibrary`.
    #[serde(default = "default_native_library")]
    pub native_library: String,
    /// Text placed in the comment block at the top of the aggregate file.
    #[serde(default = "default_license_header")]
    pub license_header: String,
}

fn default_package() -> String {
    "com.java.helics".to_string()
}

fn default_aggregate_class() -> String {
    "JavaHelics".to_string()
}

fn default_interface() -> String {
    "HelicsInterface".to_string()
}

fn default_native_library() -> String {
    "helics".to_string()
}

fn default_license_header() -> String {
    DEFAULT_LICENSE_HEADER.to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            package: default_package(),
            aggregate_class: default_aggregate_class(),
            interface: default_interface(),
            native_library: default_native_library(),
            license_header: default_license_header(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructConfig {
    /// Struct whose generic-pointer members are bound as `String`.
    #[serde(default = "default_error_struct")]
    pub error_struct: String,
}

fn default_error_struct() -> String {
    "HelicsError".to_string()
}

impl Default for StructConfig {
    fn default() -> Self {
        Self {
            error_struct: default_error_struct(),
        }
    }
}

/// Identifiers excluded in addition to the built-in lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExclusionConfig {
    #[serde(default)]
    pub functions: Vec<String>,
    #[serde(default)]
    pub macros: Vec<String>,
}

/// Entries added to the built-in type tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeConfig {
    #[serde(default, rename = "return")]
    pub returns: BTreeMap<String, String>,
    #[serde(default, rename = "argument")]
    pub arguments: BTreeMap<String, String>,
}

impl BindgenConfig {
    /// Parse a configuration from a TOML string.
    pub fn parse(input: &str) -> Result<Self> {
        let config: BindgenConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Search upward from `start_dir` for a configuration file, returning it
    /// along with the path it was found at.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                let config = Self::load(&candidate)?;
                return Ok(Some((config, candidate)));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    fn validate(&self) -> Result<()> {
        let out = &self.output;
        if out.package.is_empty() || out.package.split('.').any(|seg| !is_java_identifier(seg)) {
            return Err(BindgenError::InvalidConfig {
                detail: format!("output.package '{}' is not a Java package name", out.package),
            });
        }
        for (key, value) in [
            ("output.aggregate_class", &out.aggregate_class),
            ("output.interface", &out.interface),
            ("structs.error_struct", &self.structs.error_struct),
        ] {
            if !is_java_identifier(value) {
                return Err(BindgenError::InvalidConfig {
                    detail: format!("{key} '{value}' is not a Java identifier"),
                });
            }
        }
        if out.native_library.is_empty() {
            return Err(BindgenError::InvalidConfig {
                detail: "output.native_library is required".to_string(),
            });
        }
        Ok(())
    }

    /// Built-in exclusion lists plus the configured additions.
    pub fn policy(&self) -> ExclusionPolicy {
        let mut policy = ExclusionPolicy::default();
        policy.extend(
            self.exclusions.functions.iter().cloned(),
            self.exclusions.macros.iter().cloned(),
        );
        policy
    }

    /// Built-in type tables plus the configured additions.
    pub fn type_mapper(&self) -> TypeMapper {
        TypeMapper::with_extra(&self.types.returns, &self.types.arguments)
    }

    /// Directory of per-type files relative to the output root.
    pub fn package_dir(&self) -> PathBuf {
        self.output.package.split('.').collect()
    }

    /// Default template written by `jna-bindgen init`.
    pub fn template() -> String {
        r#"[output]
package = "com.java.helics"
aggregate_class = "JavaHelics"
interface = "HelicsInterface"
native_library = "helics"

[structs]
error_struct = "HelicsError"

[exclusions]
# Added to the built-in lists.
functions = []
macros = []

[types.return]

[types.argument]
"#
        .to_string()
    }
}

fn is_java_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declaration::CTypeRef;

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[output]
package = "org.example.bindings"
aggregate_class = "ExampleNative"
interface = "ExampleInterface"
native_library = "example"
license_header = "SPDX-License-Identifier: MIT"

[structs]
error_struct = "ExampleError"

[exclusions]
functions = ["exampleRegisterCallback"]
macros = ["EXAMPLE_CHAR"]

[types.return]
ExampleHandle = "ExampleHandle"

[types.argument]
ExampleHandle = "ExampleHandle"
"Float_*" = "FloatByReference"
"#;
        let config = BindgenConfig::parse(toml_str).unwrap();
        assert_eq!(config.output.package, "org.example.bindings");
        assert_eq!(config.output.aggregate_class, "ExampleNative");
        assert_eq!(config.output.native_library, "example");
        assert_eq!(config.structs.error_struct, "ExampleError");
        assert_eq!(config.package_dir(), PathBuf::from("org/example/bindings"));

        let policy = config.policy();
        assert!(policy.is_function_ignored("exampleRegisterCallback"));
        assert!(policy.is_function_ignored("helicsErrorClear"));
        assert!(policy.is_macro_ignored("EXAMPLE_CHAR"));

        let types = config.type_mapper();
        assert_eq!(
            types.return_type(&CTypeRef::Plain("ExampleHandle")),
            Some("ExampleHandle")
        );
        assert_eq!(
            types.argument_type(&CTypeRef::Pointer("Float_*")),
            Some("FloatByReference")
        );
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = BindgenConfig::parse("").unwrap();
        assert_eq!(config, BindgenConfig::default());
        assert_eq!(config.output.package, "com.java.helics");
        assert_eq!(config.output.aggregate_class, "JavaHelics");
        assert_eq!(config.structs.error_struct, "HelicsError");
        assert!(config.output.license_header.contains("BSD-3-Clause"));
    }

    #[test]
    fn template_is_valid_config() {
        let config = BindgenConfig::parse(&BindgenConfig::template()).unwrap();
        assert_eq!(config.output.package, "com.java.helics");
        assert!(config.exclusions.functions.is_empty());
        assert_eq!(config.policy(), ExclusionPolicy::default());
    }

    #[test]
    fn reject_bad_identifiers() {
        assert!(BindgenConfig::parse("[output]\npackage = \"com..helics\"\n").is_err());
        assert!(BindgenConfig::parse("[output]\naggregate_class = \"1Bad\"\n").is_err());
        assert!(BindgenConfig::parse("[structs]\nerror_struct = \"Bad-Name\"\n").is_err());
        assert!(BindgenConfig::parse("[output]\nnative_library = \"\"\n").is_err());
    }

    #[test]
    fn reject_invalid_toml() {
        assert!(BindgenConfig::parse("this is not valid toml [[[").is_err());
    }

    #[test]
    fn find_and_load_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[output]\nnative_library = \"parent\"\n",
        )
        .unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let (config, path) = BindgenConfig::find_and_load(&nested).unwrap().unwrap();
        assert_eq!(config.output.native_library, "parent");
        assert_eq!(path, dir.path().join(CONFIG_FILE_NAME));
    }
}
