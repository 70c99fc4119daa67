// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod binding;       // binding engine
pub mod config;        // binding documents + runtime
pub mod converters;    // built-in converters
pub mod errors;        // error handling
pub mod observability;
pub mod traits;        // participant capabilities
