// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Hex text ⇄ bytes conversion.

use anyhow::{anyhow, bail};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::binding::Value;

static HEX_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9a-fA-F]+$").unwrap());

/// Decode hex text such as `"aa ff"` into bytes. Spaces are ignored.
///
/// ```
/// use bindery::binding::Value;
/// use bindery::converters::hex::hex_to_bytes;
///
/// let bytes = hex_to_bytes(Value::from("aa ff")).unwrap();
/// assert_eq!(bytes, Value::Bytes(vec![0xaa, 0xff]));
/// ```
pub fn hex_to_bytes(value: Value) -> anyhow::Result<Value> {
    let text = match value {
        Value::Text(text) => text,
        other => bail!("expected hex text, got {}", other.type_name()),
    };

    let digits: String = text.chars().filter(|c| *c != ' ').collect();
    if !HEX_DIGITS.is_match(&digits) {
        bail!("'{}' is not a hex string", text);
    }
    if digits.len() % 2 != 0 {
        bail!("'{}' has an odd number of hex digits", text);
    }

    let bytes = (0..digits.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|e| anyhow!("invalid hex pair '{}': {}", &digits[i..i + 2], e))
        })
        .collect::<anyhow::Result<Vec<u8>>>()?;

    Ok(Value::Bytes(bytes))
}

/// Encode bytes as lowercase hex pairs separated by spaces, e.g. `"aa ff"`.
pub fn bytes_to_hex(value: Value) -> anyhow::Result<Value> {
    match value {
        Value::Bytes(bytes) => Ok(Value::Text(
            bytes
                .iter()
                .map(|b| format!("{:02x}", b))
                .collect::<Vec<_>>()
                .join(" "),
        )),
        other => bail!("expected bytes, got {}", other.type_name()),
    }
}
