// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for binding lifecycle and change propagation.
//!
//! This module contains message types for logging events related to:
//! * Binding creation, rejection and removal
//! * Converter swaps
//! * Subscription registration on a participant
//! * Notification dispatch and destination writes

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A binding was validated and registered.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use bindery::observability::messages::binding::BindingCreated;
///
/// let msg = BindingCreated {
///     provider: "mod_a",
///     source_property: "data",
///     receiver: "mod_b",
///     destination_property: "data",
///     two_way: true,
/// };
///
/// assert_eq!(msg.to_string(), "Bound mod_a.data <-> mod_b.data");
/// ```
pub struct BindingCreated<'a> {
    pub provider: &'a str,
    pub source_property: &'a str,
    pub receiver: &'a str,
    pub destination_property: &'a str,
    pub two_way: bool,
}

impl Display for BindingCreated<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let arrow = if self.two_way { "<->" } else { "->" };
        write!(
            f,
            "Bound {}.{} {} {}.{}",
            self.provider, self.source_property, arrow, self.receiver, self.destination_property
        )
    }
}

impl StructuredLog for BindingCreated<'_> {
    fn log(&self) {
        tracing::info!(
            provider = self.provider,
            source_property = self.source_property,
            receiver = self.receiver,
            destination_property = self.destination_property,
            two_way = self.two_way,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "binding",
            span_name = name,
            provider = self.provider,
            source_property = self.source_property,
            receiver = self.receiver,
            destination_property = self.destination_property,
            two_way = self.two_way,
        )
    }
}

/// A bind request failed validation; nothing was registered.
///
/// # Log Level
/// `warn!` - Caller error surfaced as a `Result`
pub struct BindRejected<'a> {
    pub provider: &'a str,
    pub source_property: &'a str,
    pub receiver: &'a str,
    pub destination_property: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for BindRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Rejected binding {}.{} -> {}.{}: {}",
            self.provider,
            self.source_property,
            self.receiver,
            self.destination_property,
            self.error
        )
    }
}

impl StructuredLog for BindRejected<'_> {
    fn log(&self) {
        tracing::warn!(
            provider = self.provider,
            source_property = self.source_property,
            receiver = self.receiver,
            destination_property = self.destination_property,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "bind_rejected",
            span_name = name,
            provider = self.provider,
            source_property = self.source_property,
            receiver = self.receiver,
            destination_property = self.destination_property,
            error = %self.error,
        )
    }
}

/// A binding was torn down.
///
/// # Log Level
/// `info!` - Important operational event
pub struct BindingRemoved<'a> {
    pub provider: &'a str,
    pub source_property: &'a str,
    pub receiver: &'a str,
    pub destination_property: &'a str,
    /// Descriptors removed across both participants
    pub removed: usize,
}

impl Display for BindingRemoved<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Unbound {}.{} from {}.{} ({} descriptors removed)",
            self.provider,
            self.source_property,
            self.receiver,
            self.destination_property,
            self.removed
        )
    }
}

impl StructuredLog for BindingRemoved<'_> {
    fn log(&self) {
        tracing::info!(
            provider = self.provider,
            source_property = self.source_property,
            receiver = self.receiver,
            destination_property = self.destination_property,
            removed = self.removed,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "unbind",
            span_name = name,
            provider = self.provider,
            source_property = self.source_property,
            receiver = self.receiver,
            destination_property = self.destination_property,
        )
    }
}

/// The converters of an existing binding were replaced.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ConverterChanged<'a> {
    pub provider: &'a str,
    pub source_property: &'a str,
    pub receiver: &'a str,
    pub destination_property: &'a str,
    pub forward: Option<&'a str>,
    pub backward: Option<&'a str>,
}

impl Display for ConverterChanged<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Changed converters of {}.{} -> {}.{} to ({}, {})",
            self.provider,
            self.source_property,
            self.receiver,
            self.destination_property,
            self.forward.unwrap_or("identity"),
            self.backward.unwrap_or("identity")
        )
    }
}

impl StructuredLog for ConverterChanged<'_> {
    fn log(&self) {
        tracing::info!(
            provider = self.provider,
            source_property = self.source_property,
            receiver = self.receiver,
            destination_property = self.destination_property,
            forward = self.forward,
            backward = self.backward,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "change_converter",
            span_name = name,
            provider = self.provider,
            source_property = self.source_property,
            receiver = self.receiver,
            destination_property = self.destination_property,
        )
    }
}

/// A descriptor was added to a participant's subscriptions.
///
/// # Log Level
/// `debug!` - Diagnostic detail
pub struct SubscriptionAdded<'a> {
    pub source_property: &'a str,
    pub destination_property: &'a str,
    pub converter: Option<&'a str>,
    pub subscription_count: usize,
}

impl Display for SubscriptionAdded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Subscribed {} -> {} via {} ({} subscriptions)",
            self.source_property,
            self.destination_property,
            self.converter.unwrap_or("identity"),
            self.subscription_count
        )
    }
}

impl StructuredLog for SubscriptionAdded<'_> {
    fn log(&self) {
        tracing::debug!(
            source_property = self.source_property,
            destination_property = self.destination_property,
            converter = self.converter,
            subscription_count = self.subscription_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "subscription_added",
            span_name = name,
            source_property = self.source_property,
            destination_property = self.destination_property,
        )
    }
}

/// An equal descriptor was already registered; registration was a no-op.
///
/// # Log Level
/// `debug!` - Diagnostic detail
pub struct DuplicateSubscriptionSkipped<'a> {
    pub source_property: &'a str,
    pub destination_property: &'a str,
}

impl Display for DuplicateSubscriptionSkipped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Subscription {} -> {} already registered",
            self.source_property, self.destination_property
        )
    }
}

impl StructuredLog for DuplicateSubscriptionSkipped<'_> {
    fn log(&self) {
        tracing::debug!(
            source_property = self.source_property,
            destination_property = self.destination_property,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "duplicate_subscription",
            span_name = name,
            source_property = self.source_property,
            destination_property = self.destination_property,
        )
    }
}

/// Matching descriptors were removed from a participant's subscriptions.
///
/// # Log Level
/// `debug!` - Diagnostic detail
pub struct SubscriptionsRemoved<'a> {
    pub source_property: &'a str,
    pub destination_property: &'a str,
    pub removed: usize,
}

impl Display for SubscriptionsRemoved<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Removed {} subscriptions {} -> {}",
            self.removed, self.source_property, self.destination_property
        )
    }
}

impl StructuredLog for SubscriptionsRemoved<'_> {
    fn log(&self) {
        tracing::debug!(
            source_property = self.source_property,
            destination_property = self.destination_property,
            removed = self.removed,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "subscriptions_removed",
            span_name = name,
            source_property = self.source_property,
            destination_property = self.destination_property,
        )
    }
}

/// A notification matched zero or more descriptors and is being dispatched.
///
/// # Log Level
/// `debug!` - Diagnostic detail
pub struct NotificationDispatched<'a> {
    pub property: &'a str,
    pub matched: usize,
}

impl Display for NotificationDispatched<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Notifying '{}': {} matching bindings",
            self.property, self.matched
        )
    }
}

impl StructuredLog for NotificationDispatched<'_> {
    fn log(&self) {
        tracing::debug!(property = self.property, matched = self.matched, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "notify",
            span_name = name,
            property = self.property,
            matched = self.matched,
        )
    }
}

/// A destination received a new value.
///
/// # Log Level
/// `trace!` - Per-update detail
pub struct DestinationWritten<'a> {
    pub receiver: &'a str,
    pub destination_property: &'a str,
    pub value_type: &'a str,
}

impl Display for DestinationWritten<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Wrote {} value to {}.{}",
            self.value_type, self.receiver, self.destination_property
        )
    }
}

impl StructuredLog for DestinationWritten<'_> {
    fn log(&self) {
        tracing::trace!(
            receiver = self.receiver,
            destination_property = self.destination_property,
            value_type = self.value_type,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!(
            "destination_written",
            span_name = name,
            receiver = self.receiver,
            destination_property = self.destination_property,
        )
    }
}

/// A destination already held the converted value; no write happened.
///
/// # Log Level
/// `trace!` - Per-update detail
pub struct DestinationWriteSuppressed<'a> {
    pub receiver: &'a str,
    pub destination_property: &'a str,
}

impl Display for DestinationWriteSuppressed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}.{} already up to date",
            self.receiver, self.destination_property
        )
    }
}

impl StructuredLog for DestinationWriteSuppressed<'_> {
    fn log(&self) {
        tracing::trace!(
            receiver = self.receiver,
            destination_property = self.destination_property,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!(
            "destination_write_suppressed",
            span_name = name,
            receiver = self.receiver,
            destination_property = self.destination_property,
        )
    }
}
