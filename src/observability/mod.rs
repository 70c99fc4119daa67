// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! This module provides centralized message types for all diagnostic and operational
//! logging throughout the crate. Message types follow a struct-based pattern with a
//! `Display` implementation to:
//!
//! * Eliminate magic strings scattered throughout the codebase
//! * Keep field names consistent between the text and the structured event
//! * Provide consistent, structured logging output
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::binding` - bind/unbind lifecycle and notification dispatch
//! * `messages::config` - binding document loading, validation and runtime building
//!
//! # Usage
//!
//! ```rust
//! use bindery::observability::messages::binding::BindRejected;
//! use bindery::observability::messages::StructuredLog;
//!
//! let error = std::io::Error::new(std::io::ErrorKind::Other, "test error");
//! let msg = BindRejected {
//!     provider: "mod_a",
//!     source_property: "data",
//!     receiver: "mod_b",
//!     destination_property: "data",
//!     error: &error,
//! };
//!
//! msg.log();
//! ```

pub mod messages;
