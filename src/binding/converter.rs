// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::rc::Rc;

use crate::binding::value::Value;
use crate::errors::BindingError;

type ConvertFn = dyn Fn(Value) -> anyhow::Result<Value>;

/// A named value transform applied between a binding's source and destination.
///
/// Converters compare by identity of the wrapped function. Cloning shares the
/// function, so a clone is equal to its original.
#[derive(Clone)]
pub struct Converter {
    name: Rc<str>,
    func: Rc<ConvertFn>,
}

impl Converter {
    pub fn new(
        name: impl Into<Rc<str>>,
        func: impl Fn(Value) -> anyhow::Result<Value> + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            func: Rc::new(func),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the converter, tagging failures with its name.
    pub fn convert(&self, value: Value) -> Result<Value, BindingError> {
        (self.func)(value).map_err(|source| BindingError::Conversion {
            converter: self.name.to_string(),
            source,
        })
    }
}

impl PartialEq for Converter {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.func, &other.func)
    }
}

impl fmt::Debug for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Converter").field(&self.name).finish()
    }
}

/// Converters for both directions of a binding.
///
/// `forward` runs provider → receiver. `backward` runs receiver → provider and is
/// only used by two-way bindings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConverterPair {
    pub forward: Option<Converter>,
    pub backward: Option<Converter>,
}

impl ConverterPair {
    /// No conversion in either direction.
    pub fn identity() -> Self {
        Self::default()
    }

    pub fn forward(converter: Converter) -> Self {
        Self {
            forward: Some(converter),
            backward: None,
        }
    }

    pub fn both(forward: Converter, backward: Converter) -> Self {
        Self {
            forward: Some(forward),
            backward: Some(backward),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn double() -> Converter {
        Converter::new("double", |v| match v {
            Value::Int(i) => Ok(Value::Int(i * 2)),
            other => anyhow::bail!("expected int, got {}", other.type_name()),
        })
    }

    #[test]
    fn test_convert_applies_function() {
        assert_eq!(double().convert(Value::Int(4)).unwrap(), Value::Int(8));
    }

    #[test]
    fn test_convert_failure_is_tagged() {
        let err = double().convert(Value::from("x")).unwrap_err();
        match err {
            BindingError::Conversion { converter, .. } => assert_eq!(converter, "double"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_identity_equality() {
        let a = double();
        let b = double();
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }
}
