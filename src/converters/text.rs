// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Text converters.

use anyhow::{bail, Context};

use crate::binding::Value;

pub fn to_uppercase(value: Value) -> anyhow::Result<Value> {
    match value {
        Value::Text(text) => Ok(Value::Text(text.to_uppercase())),
        other => bail!("expected text, got {}", other.type_name()),
    }
}

pub fn to_lowercase(value: Value) -> anyhow::Result<Value> {
    match value {
        Value::Text(text) => Ok(Value::Text(text.to_lowercase())),
        other => bail!("expected text, got {}", other.type_name()),
    }
}

/// Render any value with its `Display` form. Text passes through unchanged.
pub fn to_text(value: Value) -> anyhow::Result<Value> {
    match value {
        Value::Text(text) => Ok(Value::Text(text)),
        other => Ok(Value::Text(other.to_string())),
    }
}

/// Parse trimmed text as a signed integer. Integers pass through unchanged.
pub fn parse_int(value: Value) -> anyhow::Result<Value> {
    match value {
        Value::Int(i) => Ok(Value::Int(i)),
        Value::Text(text) => {
            let parsed = text
                .trim()
                .parse::<i64>()
                .with_context(|| format!("'{}' is not an integer", text))?;
            Ok(Value::Int(parsed))
        }
        other => bail!("expected text, got {}", other.type_name()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_conversion() {
        assert_eq!(to_uppercase(Value::from("MiXed")).unwrap(), Value::from("MIXED"));
        assert_eq!(to_lowercase(Value::from("MiXed")).unwrap(), Value::from("mixed"));
        assert!(to_uppercase(Value::Int(1)).is_err());
    }

    #[test]
    fn test_to_text_uses_display() {
        assert_eq!(to_text(Value::Int(42)).unwrap(), Value::from("42"));
        assert_eq!(to_text(Value::Bool(true)).unwrap(), Value::from("true"));
        assert_eq!(to_text(Value::from("same")).unwrap(), Value::from("same"));
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int(Value::from(" 17 ")).unwrap(), Value::Int(17));
        assert_eq!(parse_int(Value::Int(3)).unwrap(), Value::Int(3));
        assert!(parse_int(Value::from("seventeen")).is_err());
    }
}
