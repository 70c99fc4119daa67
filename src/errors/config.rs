// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use thiserror::Error;

use super::BindingError;

/// Errors that can occur while validating a binding document
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Two participants share the same ID
    DuplicateParticipantId {
        /// The duplicate participant ID
        participant_id: String,
    },
    /// A binding references a participant that is not declared
    UnknownParticipant {
        /// Index of the binding in the document
        binding_index: usize,
        /// The participant ID that couldn't be resolved
        participant_id: String,
    },
    /// A binding references a property the participant does not declare
    UnknownProperty {
        /// Index of the binding in the document
        binding_index: usize,
        /// The participant the property was looked up on
        participant_id: String,
        /// The missing property
        property: String,
    },
    /// A binding names a converter the registry does not know
    UnknownConverter {
        /// Index of the binding in the document
        binding_index: usize,
        /// The converter name that couldn't be resolved
        converter: String,
    },
    /// A one-way binding declares a back converter that would never run
    BackConverterOnOneWay {
        /// Index of the binding in the document
        binding_index: usize,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateParticipantId { participant_id } => {
                write!(f, "Duplicate participant ID: '{}'", participant_id)
            }
            ValidationError::UnknownParticipant {
                binding_index,
                participant_id,
            } => {
                write!(
                    f,
                    "Binding #{} references participant '{}' which does not exist",
                    binding_index, participant_id
                )
            }
            ValidationError::UnknownProperty {
                binding_index,
                participant_id,
                property,
            } => {
                write!(
                    f,
                    "Binding #{} references property '{}' which is not declared on '{}'",
                    binding_index, property, participant_id
                )
            }
            ValidationError::UnknownConverter {
                binding_index,
                converter,
            } => {
                write!(
                    f,
                    "Binding #{} uses converter '{}' which is not registered",
                    binding_index, converter
                )
            }
            ValidationError::BackConverterOnOneWay { binding_index } => {
                write!(
                    f,
                    "Binding #{} is one-way but declares a back_converter",
                    binding_index
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Errors raised while loading a binding document and building a runtime from it.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The file extension does not map to a supported format.
    #[error("Unsupported config format: '{0}'")]
    UnsupportedFormat(String),

    #[error("Configuration validation failed:\n{}", join_errors(.0))]
    Validation(Vec<ValidationError>),

    /// A runtime lookup named a participant that was never created.
    #[error("Unknown participant: '{0}'")]
    UnknownParticipant(String),

    #[error("Binding failed: {0}")]
    Binding(#[from] BindingError),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_joined() {
        let err = ConfigError::Validation(vec![
            ValidationError::DuplicateParticipantId {
                participant_id: "a".to_string(),
            },
            ValidationError::BackConverterOnOneWay { binding_index: 2 },
        ]);

        let text = err.to_string();
        assert!(text.starts_with("Configuration validation failed:"));
        assert!(text.contains("Duplicate participant ID: 'a'"));
        assert!(text.contains("Binding #2 is one-way"));
    }
}
