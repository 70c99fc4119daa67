// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for binding documents and runtime building.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A binding document was read and parsed.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use bindery::observability::messages::config::ConfigLoaded;
///
/// let msg = ConfigLoaded {
///     path: "bindings.yaml",
///     participant_count: 2,
///     binding_count: 1,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct ConfigLoaded<'a> {
    pub path: &'a str,
    pub participant_count: usize,
    pub binding_count: usize,
}

impl Display for ConfigLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded binding config {}: {} participants, {} bindings",
            self.path, self.participant_count, self.binding_count
        )
    }
}

impl StructuredLog for ConfigLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            path = self.path,
            participant_count = self.participant_count,
            binding_count = self.binding_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "config_loaded",
            span_name = name,
            path = self.path,
            participant_count = self.participant_count,
            binding_count = self.binding_count,
        )
    }
}

/// Validation of a binding document found problems.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct ConfigValidationFailed {
    pub error_count: usize,
}

impl Display for ConfigValidationFailed {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Binding config validation failed with {} errors",
            self.error_count
        )
    }
}

impl StructuredLog for ConfigValidationFailed {
    fn log(&self) {
        tracing::error!(error_count = self.error_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "config_validation_failed",
            span_name = name,
            error_count = self.error_count,
        )
    }
}

/// A participant was instantiated from the binding document.
///
/// # Log Level
/// `debug!` - Diagnostic detail
pub struct ParticipantCreated<'a> {
    pub participant_id: &'a str,
    pub property_count: usize,
}

impl Display for ParticipantCreated<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Created participant '{}' with {} properties",
            self.participant_id, self.property_count
        )
    }
}

impl StructuredLog for ParticipantCreated<'_> {
    fn log(&self) {
        tracing::debug!(
            participant_id = self.participant_id,
            property_count = self.property_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "participant_created",
            span_name = name,
            participant_id = self.participant_id,
        )
    }
}

/// All participants were created and all bindings applied.
///
/// # Log Level
/// `info!` - Important operational event
pub struct RuntimeBuilt {
    pub participant_count: usize,
    pub binding_count: usize,
}

impl Display for RuntimeBuilt {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Binding runtime ready: {} participants, {} bindings",
            self.participant_count, self.binding_count
        )
    }
}

impl StructuredLog for RuntimeBuilt {
    fn log(&self) {
        tracing::info!(
            participant_count = self.participant_count,
            binding_count = self.binding_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "runtime_built",
            span_name = name,
            participant_count = self.participant_count,
            binding_count = self.binding_count,
        )
    }
}
