// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for the human-readable text and
//! [`StructuredLog`] to emit the same message as a structured `tracing` event
//! at the level the message documents.
//!
//! # Organization
//!
//! * `binding` - bind manager, subscription and descriptor events
//! * `config` - binding document and runtime builder events
//!
//! # Usage Pattern
//!
//! ```rust
//! use bindery::observability::messages::binding::BindingCreated;
//! use bindery::observability::messages::StructuredLog;
//!
//! let msg = BindingCreated {
//!     provider: "mod_a",
//!     source_property: "data",
//!     receiver: "mod_b",
//!     destination_property: "data",
//!     two_way: false,
//! };
//!
//! let span = msg.span("bind");
//! let _guard = span.enter();
//! msg.log();
//! ```

use tracing::Span;

pub mod binding;
pub mod config;

/// A message that knows how to log itself as a structured event.
pub trait StructuredLog {
    /// Emit the message at its documented level, with its fields attached.
    fn log(&self);

    /// Build a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
