// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::binding::{BindType, Value};
use crate::config::validate_config;
use crate::converters::ConverterRegistry;
use crate::errors::ConfigError;
use crate::observability::messages::config::{ConfigLoaded, ConfigValidationFailed};
use crate::observability::messages::StructuredLog;

/// A binding document: the participants to create and the bindings between them.
///
/// Typically loaded from a YAML, TOML or JSON file.
///
/// # Fields
/// * `participants` - Property bags to create, each with its initial properties
/// * `bindings` - Bindings applied in document order once all participants exist
///
/// # Example
/// ```yaml
/// participants:
///   - id: mod_a
///     properties:
///       data: ""
///   - id: mod_b
///     properties:
///       data: null
/// bindings:
///   - provider: mod_a
///     source: data
///     receiver: mod_b
///     destination: data
///     converter: hex_to_bytes
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub participants: Vec<ParticipantConfig>,
    #[serde(default)]
    pub bindings: Vec<BindingConfig>,
}

/// A participant declared in a binding document.
///
/// Only declared properties can be bound or assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantConfig {
    pub id: String,
    #[serde(default)]
    pub properties: BTreeMap<String, Value>,
}

/// One binding between two declared participants.
///
/// # Fields
/// * `provider` / `source` - Participant ID and property driving the binding
/// * `receiver` / `destination` - Participant ID and property kept in sync
/// * `bind_type` - `one_way` (default) or `two_way`
/// * `converter` - Registered converter for provider → receiver (optional)
/// * `back_converter` - Registered converter for receiver → provider, two-way only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BindingConfig {
    pub provider: String,
    pub source: String,
    pub receiver: String,
    pub destination: String,
    #[serde(default)]
    pub bind_type: BindType,
    #[serde(default)]
    pub converter: Option<String>,
    #[serde(default)]
    pub back_converter: Option<String>,
}

/// Serialization format of a binding document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
    Json,
}

impl ConfigFormat {
    /// Pick the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "yaml" | "yml" => Ok(ConfigFormat::Yaml),
            "toml" => Ok(ConfigFormat::Toml),
            "json" => Ok(ConfigFormat::Json),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Parse a binding document from a string.
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<Config, ConfigError> {
    let cfg = match format {
        ConfigFormat::Yaml => serde_yaml::from_str(content)?,
        ConfigFormat::Toml => toml::from_str(content)?,
        ConfigFormat::Json => serde_json::from_str(content)?,
    };
    Ok(cfg)
}

/// Load a binding document, choosing the parser by file extension.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;
    let cfg = parse_config(&content, format)?;

    ConfigLoaded {
        path: &path.display().to_string(),
        participant_count: cfg.participants.len(),
        binding_count: cfg.bindings.len(),
    }
    .log();

    Ok(cfg)
}

/// Load a binding document and validate it against `registry`.
///
/// All validation problems are reported together in `ConfigError::Validation`.
pub fn load_and_validate_config<P: AsRef<Path>>(
    path: P,
    registry: &ConverterRegistry,
) -> Result<Config, ConfigError> {
    let cfg = load_config(path)?;

    if let Err(errors) = validate_config(&cfg, registry) {
        ConfigValidationFailed {
            error_count: errors.len(),
        }
        .log();
        return Err(ConfigError::Validation(errors));
    }

    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const YAML: &str = r#"
participants:
  - id: mod_a
    properties:
      data: ""
  - id: mod_b
    properties:
      data: ~
bindings:
  - provider: mod_a
    source: data
    receiver: mod_b
    destination: data
    converter: hex_to_bytes
"#;

    #[test]
    fn parse_basic_config() {
        let cfg = parse_config(YAML, ConfigFormat::Yaml).unwrap();

        assert_eq!(cfg.participants.len(), 2);
        assert_eq!(cfg.participants[0].properties["data"], Value::from(""));
        assert_eq!(cfg.participants[1].properties["data"], Value::Null);
        assert_eq!(cfg.bindings[0].bind_type, BindType::OneWay);
        assert_eq!(cfg.bindings[0].converter.as_deref(), Some("hex_to_bytes"));
        assert_eq!(cfg.bindings[0].back_converter, None);
    }

    #[test]
    fn parse_toml_config() {
        let toml = r#"
[[participants]]
id = "left"
properties = { count = 1 }

[[participants]]
id = "right"
properties = { count = 0 }

[[bindings]]
provider = "left"
source = "count"
receiver = "right"
destination = "count"
bind_type = "two_way"
"#;
        let cfg = parse_config(toml, ConfigFormat::Toml).unwrap();
        assert_eq!(cfg.participants[0].properties["count"], Value::Int(1));
        assert_eq!(cfg.bindings[0].bind_type, BindType::TwoWay);
    }

    #[test]
    fn parse_json_config() {
        let json = r#"{"participants": [{"id": "solo", "properties": {"on": true}}]}"#;
        let cfg = parse_config(json, ConfigFormat::Json).unwrap();
        assert_eq!(cfg.participants[0].properties["on"], Value::Bool(true));
        assert!(cfg.bindings.is_empty());
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ConfigFormat::from_path(Path::new("a.YML")).unwrap(), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("a.toml")).unwrap(), ConfigFormat::Toml);
        assert!(matches!(
            ConfigFormat::from_path(Path::new("a.ini")),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_load_and_validate_valid_config() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(YAML.as_bytes()).unwrap();

        let cfg = load_and_validate_config(file.path(), &ConverterRegistry::with_builtins()).unwrap();
        assert_eq!(cfg.bindings.len(), 1);
    }

    #[test]
    fn test_load_and_validate_reports_unknown_converter() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(YAML.as_bytes()).unwrap();

        let err = load_and_validate_config(file.path(), &ConverterRegistry::new()).unwrap_err();
        match err {
            ConfigError::Validation(errors) => assert_eq!(errors.len(), 1),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_config("does/not/exist.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
