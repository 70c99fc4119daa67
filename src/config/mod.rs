// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Declarative binding documents: loading, validation and runtime building.

mod loader;
mod runtime;
mod validation;

#[cfg(test)]
mod integration_tests;

pub use loader::{
    load_and_validate_config, load_config, parse_config, BindingConfig, Config, ConfigFormat,
    ParticipantConfig,
};
pub use runtime::{BindingRuntime, RuntimeBuilder};
pub use validation::validate_config;
