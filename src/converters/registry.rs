// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;

use crate::binding::{Converter, Value};
use crate::converters::{hex, text};

/// Named converters available to binding documents.
///
/// Lookups hand out clones that share the registered function, so two bindings
/// built from the same name carry equal converters.
///
/// ```
/// use bindery::converters::ConverterRegistry;
///
/// let registry = ConverterRegistry::with_builtins();
/// assert!(registry.contains("hex_to_bytes"));
/// assert_eq!(registry.get("hex_to_bytes"), registry.get("hex_to_bytes"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConverterRegistry {
    converters: HashMap<String, Converter>,
}

impl ConverterRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry preloaded with the built-in converters:
    /// - "hex_to_bytes" -> hex text to bytes
    /// - "bytes_to_hex" -> bytes to spaced lowercase hex text
    /// - "to_uppercase" / "to_lowercase" -> text case
    /// - "to_text" -> display form of any value
    /// - "parse_int" -> text to integer
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("hex_to_bytes", hex::hex_to_bytes);
        registry.register("bytes_to_hex", hex::bytes_to_hex);
        registry.register("to_uppercase", text::to_uppercase);
        registry.register("to_lowercase", text::to_lowercase);
        registry.register("to_text", text::to_text);
        registry.register("parse_int", text::parse_int);
        registry
    }

    /// Register `func` under `name`, replacing any previous entry.
    pub fn register(
        &mut self,
        name: &str,
        func: impl Fn(Value) -> anyhow::Result<Value> + 'static,
    ) {
        self.insert(Converter::new(name, func));
    }

    /// Register an existing converter under its own name.
    pub fn insert(&mut self, converter: Converter) {
        self.converters.insert(converter.name().to_string(), converter);
    }

    pub fn get(&self, name: &str) -> Option<Converter> {
        self.converters.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.converters.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.converters.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_are_registered() {
        let registry = ConverterRegistry::with_builtins();
        assert_eq!(
            registry.names(),
            vec![
                "bytes_to_hex",
                "hex_to_bytes",
                "parse_int",
                "to_lowercase",
                "to_text",
                "to_uppercase"
            ]
        );
    }

    #[test]
    fn test_register_replaces_existing() {
        let mut registry = ConverterRegistry::with_builtins();
        let before = registry.get("to_text").unwrap();
        registry.register("to_text", |_| Ok(Value::from("fixed")));
        let after = registry.get("to_text").unwrap();

        assert_ne!(before, after);
        assert_eq!(after.convert(Value::Int(1)).unwrap(), Value::from("fixed"));
    }

    #[test]
    fn test_unknown_name() {
        assert!(ConverterRegistry::new().get("hex_to_bytes").is_none());
    }
}
