// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Binding document validation.
//!
//! Checks that a [`Config`] can be turned into a runtime without any bind call
//! failing on a configuration mistake. All problems are collected so a user sees
//! every issue at once:
//!
//! 1. **Uniqueness**: participant IDs are unique
//! 2. **References**: bindings name declared participants and declared properties
//! 3. **Converters**: converter names resolve in the registry, and one-way
//!    bindings carry no `back_converter`
//!
//! Property checks are skipped for a binding whose participant is unknown, since
//! the unknown participant is already reported.
//!
//! # Example
//! ```rust
//! use bindery::config::{validate_config, BindingConfig, Config, ParticipantConfig};
//! use bindery::converters::ConverterRegistry;
//! use bindery::binding::BindType;
//! use bindery::errors::ValidationError;
//! use std::collections::BTreeMap;
//!
//! let config = Config {
//!     participants: vec![ParticipantConfig { id: "a".to_string(), properties: BTreeMap::new() }],
//!     bindings: vec![BindingConfig {
//!         provider: "a".to_string(),
//!         source: "x".to_string(),
//!         receiver: "b".to_string(),
//!         destination: "y".to_string(),
//!         bind_type: BindType::OneWay,
//!         converter: None,
//!         back_converter: None,
//!     }],
//! };
//!
//! let errors = validate_config(&config, &ConverterRegistry::with_builtins()).unwrap_err();
//! assert!(errors.contains(&ValidationError::UnknownParticipant {
//!     binding_index: 0,
//!     participant_id: "b".to_string(),
//! }));
//! ```

use std::collections::{HashMap, HashSet};

use crate::binding::BindType;
use crate::config::{Config, ParticipantConfig};
use crate::converters::ConverterRegistry;
use crate::errors::ValidationError;

/// Validate a binding document against the converters in `registry`.
pub fn validate_config(
    config: &Config,
    registry: &ConverterRegistry,
) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    errors.extend(unique_participant_ids(config));
    errors.extend(binding_references(config));
    errors.extend(binding_converters(config, registry));

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn unique_participant_ids(config: &Config) -> Vec<ValidationError> {
    let mut seen_ids = HashSet::new();
    let mut errors = Vec::new();

    for participant in &config.participants {
        if !seen_ids.insert(&participant.id) {
            errors.push(ValidationError::DuplicateParticipantId {
                participant_id: participant.id.clone(),
            });
        }
    }
    errors
}

fn binding_references(config: &Config) -> Vec<ValidationError> {
    let participants: HashMap<&str, &ParticipantConfig> = config
        .participants
        .iter()
        .map(|p| (p.id.as_str(), p))
        .collect();
    let mut errors = Vec::new();

    for (index, binding) in config.bindings.iter().enumerate() {
        let endpoints = [
            (&binding.provider, &binding.source),
            (&binding.receiver, &binding.destination),
        ];

        for (participant_id, property) in endpoints {
            match participants.get(participant_id.as_str()) {
                None => errors.push(ValidationError::UnknownParticipant {
                    binding_index: index,
                    participant_id: participant_id.clone(),
                }),
                Some(participant) if !participant.properties.contains_key(property) => {
                    errors.push(ValidationError::UnknownProperty {
                        binding_index: index,
                        participant_id: participant_id.clone(),
                        property: property.clone(),
                    })
                }
                Some(_) => {}
            }
        }
    }
    errors
}

fn binding_converters(config: &Config, registry: &ConverterRegistry) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (index, binding) in config.bindings.iter().enumerate() {
        for name in binding.converter.iter().chain(binding.back_converter.iter()) {
            if !registry.contains(name) {
                errors.push(ValidationError::UnknownConverter {
                    binding_index: index,
                    converter: name.clone(),
                });
            }
        }

        if binding.bind_type == BindType::OneWay && binding.back_converter.is_some() {
            errors.push(ValidationError::BackConverterOnOneWay {
                binding_index: index,
            });
        }
    }
    errors
}
