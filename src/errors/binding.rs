// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Error types for the binding engine.
//!
//! Every failure the engine can report is a variant of [`BindingError`]. Errors are
//! raised synchronously where they are detected: `BindManager::bind` validates
//! eagerly before registering anything, while descriptor-level failures (missing
//! properties, dropped participants, converter errors) surface from `notify`.

use std::fmt;
use thiserror::Error;

/// Which side of a binding a property reference was used on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyRole {
    Source,
    Destination,
}

impl fmt::Display for PropertyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyRole::Source => write!(f, "source"),
            PropertyRole::Destination => write!(f, "destination"),
        }
    }
}

/// Errors raised by binding descriptors, subscriptions and the bind manager.
#[derive(Error, Debug)]
pub enum BindingError {
    /// A participant does not expose the `Bindable` capability.
    #[error("participant '{participant}' is not bindable")]
    NotBindable { participant: String },

    /// A named property (or a callable's declared name) is absent on a participant.
    #[error("property '{property}' does not exist on '{participant}'")]
    PropertyNotFound {
        participant: String,
        property: String,
    },

    /// Two-way binding was requested with a callable endpoint.
    #[error(
        "two-way binding requires named properties on both sides, got source '{source_property}' and destination '{destination_property}'"
    )]
    InvalidBindConfiguration {
        source_property: String,
        destination_property: String,
    },

    /// A property reference cannot be used in the requested role.
    #[error("property '{property}' cannot be used as {role}")]
    InvalidPropertyKind { property: String, role: PropertyRole },

    /// The provider or receiver behind a descriptor no longer exists.
    #[error("participant holding {role} property '{property}' has been dropped")]
    ParticipantDropped { property: String, role: PropertyRole },

    /// A converter rejected the value it was given.
    #[error("converter '{converter}' failed: {source}")]
    Conversion {
        converter: String,
        #[source]
        source: anyhow::Error,
    },

    /// A host refused a value of the wrong shape for one of its properties.
    #[error("property '{property}' expects {expected}, got {actual}")]
    TypeMismatch {
        property: String,
        expected: &'static str,
        actual: &'static str,
    },
}

impl BindingError {
    pub(crate) fn property_not_found(participant: &str, property: &str) -> Self {
        BindingError::PropertyNotFound {
            participant: participant.to_string(),
            property: property.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_not_found_message() {
        let err = BindingError::property_not_found("mod_a", "data");
        assert_eq!(err.to_string(), "property 'data' does not exist on 'mod_a'");
    }

    #[test]
    fn test_conversion_error_keeps_source() {
        let err = BindingError::Conversion {
            converter: "hex_to_bytes".to_string(),
            source: anyhow::anyhow!("odd number of digits"),
        };
        assert_eq!(
            err.to_string(),
            "converter 'hex_to_bytes' failed: odd number of digits"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_invalid_kind_names_role() {
        let err = BindingError::InvalidPropertyKind {
            property: "set_label".to_string(),
            role: PropertyRole::Source,
        };
        assert_eq!(err.to_string(), "property 'set_label' cannot be used as source");
    }
}
