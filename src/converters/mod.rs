// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Built-in converters and the name → converter registry used by binding documents.

pub mod hex;
pub mod registry;
pub mod text;

pub use registry::ConverterRegistry;
