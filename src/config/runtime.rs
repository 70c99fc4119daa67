// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::BTreeMap;
use std::rc::Rc;

use crate::binding::{BindManager, ConverterPair, PropertyBag, Value};
use crate::config::{validate_config, Config};
use crate::converters::ConverterRegistry;
use crate::errors::ConfigError;
use crate::observability::messages::config::{ParticipantCreated, RuntimeBuilt};
use crate::observability::messages::StructuredLog;
use crate::traits::Participant;

/// Participants created from a binding document, with their bindings applied.
pub struct BindingRuntime {
    participants: BTreeMap<String, Rc<PropertyBag>>,
    binding_count: usize,
}

impl BindingRuntime {
    /// The property bag registered under `id`.
    pub fn participant(&self, id: &str) -> Option<Rc<PropertyBag>> {
        self.participants.get(id).cloned()
    }

    /// `participant` as a handle for `BindManager` calls.
    pub fn handle(&self, id: &str) -> Option<Participant> {
        self.participants
            .get(id)
            .map(|bag| Rc::clone(bag) as Participant)
    }

    /// Participant IDs, sorted.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.participants.keys().map(String::as_str)
    }

    pub fn binding_count(&self) -> usize {
        self.binding_count
    }

    pub fn get(&self, id: &str, property: &str) -> Option<Value> {
        self.participants.get(id).and_then(|bag| bag.get(property))
    }

    /// Assign a property on a participant and propagate it through its bindings.
    pub fn set(&self, id: &str, property: &str, value: impl Into<Value>) -> Result<(), ConfigError> {
        let bag = self
            .participants
            .get(id)
            .ok_or_else(|| ConfigError::UnknownParticipant(id.to_string()))?;
        bag.set(property, value)?;
        Ok(())
    }
}

impl std::fmt::Debug for BindingRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BindingRuntime")
            .field("participant_ids", &self.participants.keys().collect::<Vec<_>>())
            .field("binding_count", &self.binding_count)
            .finish()
    }
}

/// Binding runtime builder - creates participants and applies bindings from a document.
///
/// # Examples
///
/// ```
/// use bindery::binding::Value;
/// use bindery::config::{parse_config, ConfigFormat, RuntimeBuilder};
/// use bindery::converters::ConverterRegistry;
///
/// let config = parse_config(r#"
/// participants:
///   - id: mod_a
///     properties: { data: "" }
///   - id: mod_b
///     properties: { data: ~ }
/// bindings:
///   - { provider: mod_a, source: data, receiver: mod_b, destination: data, converter: hex_to_bytes }
/// "#, ConfigFormat::Yaml).unwrap();
///
/// let runtime = RuntimeBuilder::from_config(&config, &ConverterRegistry::with_builtins()).unwrap();
/// runtime.set("mod_a", "data", "aa ff").unwrap();
/// assert_eq!(runtime.get("mod_b", "data"), Some(Value::Bytes(vec![0xaa, 0xff])));
/// ```
pub struct RuntimeBuilder;

impl RuntimeBuilder {
    /// Validate `cfg`, create one `PropertyBag` per participant and bind them.
    ///
    /// Initial property values are assigned without notification, and bindings do
    /// not push values, so receivers keep their declared values until the first
    /// change.
    pub fn from_config(
        cfg: &Config,
        registry: &ConverterRegistry,
    ) -> Result<BindingRuntime, ConfigError> {
        validate_config(cfg, registry).map_err(ConfigError::Validation)?;

        let mut participants = BTreeMap::new();
        for participant in &cfg.participants {
            let bag = PropertyBag::new(participant.id.clone());
            for (name, value) in &participant.properties {
                bag.define(name.clone(), value.clone());
            }
            ParticipantCreated {
                participant_id: &participant.id,
                property_count: participant.properties.len(),
            }
            .log();
            participants.insert(participant.id.clone(), Rc::new(bag));
        }

        let runtime = BindingRuntime {
            participants,
            binding_count: cfg.bindings.len(),
        };

        for binding in &cfg.bindings {
            let provider = runtime
                .handle(&binding.provider)
                .ok_or_else(|| ConfigError::UnknownParticipant(binding.provider.clone()))?;
            let receiver = runtime
                .handle(&binding.receiver)
                .ok_or_else(|| ConfigError::UnknownParticipant(binding.receiver.clone()))?;
            let converters = ConverterPair {
                forward: binding.converter.as_deref().and_then(|name| registry.get(name)),
                backward: binding.back_converter.as_deref().and_then(|name| registry.get(name)),
            };

            BindManager::bind(
                &provider,
                binding.source.as_str(),
                &receiver,
                binding.destination.as_str(),
                binding.bind_type,
                converters,
            )?;
        }

        RuntimeBuilt {
            participant_count: runtime.participants.len(),
            binding_count: runtime.binding_count,
        }
        .log();

        Ok(runtime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_config, ConfigFormat};

    fn build(yaml: &str) -> Result<BindingRuntime, ConfigError> {
        let cfg = parse_config(yaml, ConfigFormat::Yaml).unwrap();
        RuntimeBuilder::from_config(&cfg, &ConverterRegistry::with_builtins())
    }

    #[test]
    fn test_two_way_runtime() {
        let runtime = build(
            r#"
participants:
  - id: field
    properties: { text: "" }
  - id: model
    properties: { text: "" }
bindings:
  - provider: field
    source: text
    receiver: model
    destination: text
    bind_type: two_way
    converter: to_uppercase
    back_converter: to_lowercase
"#,
        )
        .unwrap();

        runtime.set("field", "text", "hello").unwrap();
        assert_eq!(runtime.get("model", "text"), Some(Value::from("HELLO")));
        assert_eq!(runtime.get("field", "text"), Some(Value::from("hello")));

        runtime.set("model", "text", "WORLD").unwrap();
        assert_eq!(runtime.get("field", "text"), Some(Value::from("world")));
    }

    #[test]
    fn test_initial_values_are_not_pushed() {
        let runtime = build(
            r#"
participants:
  - id: a
    properties: { n: 5 }
  - id: b
    properties: { n: 0 }
bindings:
  - { provider: a, source: n, receiver: b, destination: n }
"#,
        )
        .unwrap();

        assert_eq!(runtime.get("b", "n"), Some(Value::Int(0)));
        assert_eq!(runtime.binding_count(), 1);
        assert_eq!(runtime.ids().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let err = build(
            r#"
participants:
  - id: a
    properties: { n: 5 }
bindings:
  - { provider: a, source: n, receiver: missing, destination: n }
"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_set_unknown_participant() {
        let runtime = build("participants: []").unwrap();
        assert!(matches!(
            runtime.set("ghost", "n", 1i64),
            Err(ConfigError::UnknownParticipant(id)) if id == "ghost"
        ));
    }

    #[test]
    fn test_set_propagates_conversion_errors() {
        let runtime = build(
            r#"
participants:
  - id: a
    properties: { hex: "" }
  - id: b
    properties: { bytes: ~ }
bindings:
  - { provider: a, source: hex, receiver: b, destination: bytes, converter: hex_to_bytes }
"#,
        )
        .unwrap();

        assert!(matches!(
            runtime.set("a", "hex", "xyz"),
            Err(ConfigError::Binding(_))
        ));
    }
}
