//! This module holds the data model of a c_cpp_properties.json file and the
//! functionality to load one build configuration from it.

use std::fs;
use std::path::Path;

// non-std crates
use serde::Deserialize;
use serde_json::Value;

// project specific modules/crates
use crate::comments::strip_comments;
use crate::error::{Error, Result};

/// Used to deserialize a c_cpp_properties.json document.
#[derive(Deserialize, Debug)]
pub struct CppProperties {
    /// The list of build configurations declared in the file.
    #[serde(default)]
    pub configurations: Vec<Configuration>,

    /// The schema version of the file. Accepted but unused.
    #[serde(default)]
    pub version: Option<u64>,
}

/// Used to deserialize a single build configuration.
///
/// Every field is optional at this layer; requiredness is enforced by
/// [`Configuration::resolve`] so that a missing field is reported by name
/// instead of surfacing as a deserialization failure.
#[derive(Deserialize, Debug)]
pub struct Configuration {
    /// The display name of the configuration (ie "Linux" or "Win32").
    #[serde(default)]
    pub name: Option<String>,

    /// The ordered list of include search paths.
    #[serde(default, rename = "includePath")]
    pub include_path: Option<Vec<String>>,

    /// The ordered list of preprocessor defines.
    #[serde(default)]
    pub defines: Option<Vec<String>>,

    /// The path to the compiler executable.
    #[serde(default, rename = "compilerPath")]
    pub compiler_path: Option<String>,

    /// The C++ language standard (ie "c++17").
    #[serde(default, rename = "cppStandard")]
    pub cpp_standard: Option<String>,
}

/// The fields of one [`Configuration`] after the requiredness checks.
#[derive(Debug, PartialEq)]
pub struct CompileSettings {
    /// Include search paths, in configuration order.
    pub include_paths: Vec<String>,

    /// Preprocessor defines, in configuration order.
    pub defines: Vec<String>,

    /// The compiler executable path, copied verbatim.
    pub compiler_path: String,

    /// The language standard; an empty string when the configuration does
    /// not declare one.
    pub standard: String,
}

impl CppProperties {
    /// Returns the first entry of the configurations list.
    ///
    /// Multi-configuration files are valid input; every entry past the
    /// first is ignored.
    pub fn first_configuration(&self) -> Result<&Configuration> {
        self.configurations
            .first()
            .ok_or_else(|| Error::Schema(String::from("no configurations found")))
    }
}

impl Configuration {
    /// Checks the required fields and clones them out into [`CompileSettings`].
    ///
    /// `includePath`, `defines` and `compilerPath` must all be present; a
    /// record built around a missing compiler path would be meaningless, so
    /// absence is an error rather than an empty substitute. `cppStandard`
    /// is the one optional field.
    pub fn resolve(&self) -> Result<CompileSettings> {
        let include_paths = self.include_path.clone().ok_or_else(|| {
            Error::Schema(String::from("includePath not found in configuration"))
        })?;
        let defines = self
            .defines
            .clone()
            .ok_or_else(|| Error::Schema(String::from("defines not found in configuration")))?;
        let compiler_path = self.compiler_path.clone().ok_or_else(|| {
            Error::Schema(String::from("compilerPath not found in configuration"))
        })?;
        let standard = self.cpp_standard.clone().unwrap_or_default();
        Ok(CompileSettings {
            include_paths,
            defines,
            compiler_path,
            standard,
        })
    }
}

/// Reads and parses a c_cpp_properties.json file.
///
/// Comments are stripped from the raw text before it is parsed. The parsed
/// document is returned unmodified; field extraction is a separate step.
pub fn load_properties(path: &Path) -> Result<CppProperties> {
    if !path.exists() {
        return Err(Error::NotFound {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let cleaned = strip_comments(&content);
    let document: Value = serde_json::from_str(&cleaned).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_value(document)
        .map_err(|source| Error::Schema(format!("unexpected document shape: {source}")))
}

#[cfg(test)]
mod test {
    use std::fs;
    use std::path::PathBuf;

    use tempfile::TempDir;

    use super::{load_properties, Configuration, CppProperties};
    use crate::error::Error;

    const FULL_DOCUMENT: &str = r#"{
    // intellisense configuration
    "configurations": [
        {
            "name": "Linux",
            "includePath": [
                "${workspaceFolder}/include",
                "/usr/include"
            ],
            "defines": ["DEBUG=1", "UNICODE"],
            "compilerPath": "/usr/bin/g++",
            /* the standard used by
               the build scripts */
            "cppStandard": "c++17"
        },
        {
            "name": "Win32",
            "includePath": [],
            "defines": [],
            "compilerPath": "cl.exe"
        }
    ],
    "version": 4
}"#;

    fn write_properties(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("c_cpp_properties.json");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn loads_commented_document() {
        let dir = TempDir::new().unwrap();
        let path = write_properties(&dir, FULL_DOCUMENT);
        let properties = load_properties(&path).unwrap();
        assert_eq!(properties.version, Some(4));
        assert_eq!(properties.configurations.len(), 2);
        let config = properties.first_configuration().unwrap();
        assert_eq!(config.name.as_deref(), Some("Linux"));
        let settings = config.resolve().unwrap();
        assert_eq!(
            settings.include_paths,
            ["${workspaceFolder}/include", "/usr/include"]
        );
        assert_eq!(settings.defines, ["DEBUG=1", "UNICODE"]);
        assert_eq!(settings.compiler_path, "/usr/bin/g++");
        assert_eq!(settings.standard, "c++17");
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no_such_file.json");
        let result = load_properties(&path);
        assert!(matches!(result, Err(Error::NotFound { .. })));
    }

    #[test]
    fn unbalanced_braces_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_properties(&dir, "{ \"configurations\": [ {");
        let result = load_properties(&path);
        assert!(matches!(result, Err(Error::Parse { .. })));
    }

    #[test]
    fn wrong_document_shape_is_schema_error() {
        let dir = TempDir::new().unwrap();
        let path = write_properties(&dir, "[1, 2, 3]");
        let result = load_properties(&path);
        assert!(matches!(result, Err(Error::Schema(_))));
    }

    #[test]
    fn empty_configurations_list() {
        let dir = TempDir::new().unwrap();
        let path = write_properties(&dir, "{ \"configurations\": [] }");
        let properties = load_properties(&path).unwrap();
        let result = properties.first_configuration();
        assert!(matches!(result, Err(Error::Schema(_))));
    }

    #[test]
    fn missing_configurations_key() {
        let dir = TempDir::new().unwrap();
        let path = write_properties(&dir, "{ \"version\": 4 }");
        let properties = load_properties(&path).unwrap();
        assert!(matches!(
            properties.first_configuration(),
            Err(Error::Schema(_))
        ));
    }

    fn parse_configuration(json: &str) -> Configuration {
        let properties: CppProperties = serde_json::from_str(json).unwrap();
        properties.configurations.into_iter().next().unwrap()
    }

    #[test]
    fn each_required_field_is_reported_by_name() {
        for (document, missing) in [
            (
                r#"{"configurations": [{"defines": [], "compilerPath": "g++"}]}"#,
                "includePath",
            ),
            (
                r#"{"configurations": [{"includePath": [], "compilerPath": "g++"}]}"#,
                "defines",
            ),
            (
                r#"{"configurations": [{"includePath": [], "defines": []}]}"#,
                "compilerPath",
            ),
        ] {
            let config = parse_configuration(document);
            match config.resolve() {
                Err(Error::Schema(message)) => assert!(message.contains(missing)),
                other => panic!("expected a schema error, got {other:?}"),
            }
        }
    }

    #[test]
    fn missing_standard_defaults_to_empty() {
        let config = parse_configuration(
            r#"{"configurations": [{"includePath": [], "defines": [], "compilerPath": "g++"}]}"#,
        );
        let settings = config.resolve().unwrap();
        assert_eq!(settings.standard, "");
    }
}
