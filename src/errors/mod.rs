// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod binding;
mod config;

pub use binding::{BindingError, PropertyRole};
pub use config::{ConfigError, ValidationError};
