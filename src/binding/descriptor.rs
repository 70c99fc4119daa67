// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The binding descriptor: one directed synchronization rule.
//!
//! A [`BindInfo`] links a source property on a provider to a destination property
//! on a receiver, with an optional converter in between. It lives in the
//! provider's `Subscriptions` and is evaluated by [`BindInfo::update`] whenever the
//! provider notifies a change of the source property.
//!
//! Provider and receiver are held as `Weak` handles. A two-way binding places one
//! descriptor on each side, each pointing at the other, without creating an `Rc`
//! cycle. Reading through a dropped participant fails with
//! `BindingError::ParticipantDropped`.

use std::fmt;
use std::rc::{Rc, Weak};

use crate::binding::converter::Converter;
use crate::binding::property::PropertyRef;
use crate::binding::value::Value;
use crate::errors::{BindingError, PropertyRole};
use crate::observability::messages::binding::{DestinationWriteSuppressed, DestinationWritten};
use crate::observability::messages::StructuredLog;
use crate::traits::{Participant, PropertyObject};

const DROPPED: &str = "<dropped>";

/// A directed binding from `provider.source` to `receiver.destination`.
pub struct BindInfo {
    provider: Weak<dyn PropertyObject>,
    source: PropertyRef,
    receiver: Weak<dyn PropertyObject>,
    destination: PropertyRef,
    converter: Option<Converter>,
}

impl BindInfo {
    pub fn new(
        provider: &Participant,
        source: PropertyRef,
        receiver: &Participant,
        destination: PropertyRef,
        converter: Option<Converter>,
    ) -> Self {
        Self {
            provider: Rc::downgrade(provider),
            source,
            receiver: Rc::downgrade(receiver),
            destination,
            converter,
        }
    }

    pub fn source(&self) -> &PropertyRef {
        &self.source
    }

    pub fn destination(&self) -> &PropertyRef {
        &self.destination
    }

    pub fn converter(&self) -> Option<&Converter> {
        self.converter.as_ref()
    }

    /// The provider, if it is still alive.
    pub fn provider(&self) -> Option<Participant> {
        self.provider.upgrade()
    }

    /// The receiver, if it is still alive.
    pub fn receiver(&self) -> Option<Participant> {
        self.receiver.upgrade()
    }

    /// Read the current source value from the provider.
    pub fn read_source(&self) -> Result<Value, BindingError> {
        match &self.source {
            PropertyRef::Named(name) => {
                let provider = self.provider.upgrade().ok_or_else(|| {
                    BindingError::ParticipantDropped {
                        property: name.clone(),
                        role: PropertyRole::Source,
                    }
                })?;
                provider
                    .get_property(name)
                    .ok_or_else(|| BindingError::property_not_found(provider.name(), name))
            }
            PropertyRef::Getter(getter) => Ok(getter.call()),
            PropertyRef::Setter(setter) => Err(BindingError::InvalidPropertyKind {
                property: setter.name().to_string(),
                role: PropertyRole::Source,
            }),
        }
    }

    /// Write `value` to the destination on the receiver.
    pub fn write_destination(&self, value: Value) -> Result<(), BindingError> {
        match &self.destination {
            PropertyRef::Named(name) => {
                let receiver = self.receiver_for(name)?;
                receiver.set_property(name, value)
            }
            PropertyRef::Setter(setter) => {
                setter.call(value);
                Ok(())
            }
            PropertyRef::Getter(getter) => Err(BindingError::InvalidPropertyKind {
                property: getter.name().to_string(),
                role: PropertyRole::Destination,
            }),
        }
    }

    /// Read the destination's current value; only named destinations are readable.
    pub fn read_destination_for_compare(&self) -> Result<Value, BindingError> {
        match &self.destination {
            PropertyRef::Named(name) => {
                let receiver = self.receiver_for(name)?;
                receiver
                    .get_property(name)
                    .ok_or_else(|| BindingError::property_not_found(receiver.name(), name))
            }
            callable => Err(BindingError::InvalidPropertyKind {
                property: callable.name().to_string(),
                role: PropertyRole::Destination,
            }),
        }
    }

    /// Run the converter over `value`, identity when none is installed.
    pub fn apply_converter(&self, value: Value) -> Result<Value, BindingError> {
        match &self.converter {
            Some(converter) => converter.convert(value),
            None => Ok(value),
        }
    }

    /// Transfer the converted source value to the destination.
    ///
    /// Named destinations are compared first and left alone when they already hold
    /// the converted value, which also stops a cascade through a receiver that
    /// notifies on assignment. Callable destinations cannot be read, so they are
    /// written on every update.
    pub fn update(&self) -> Result<(), BindingError> {
        let value = self.apply_converter(self.read_source()?)?;

        if !self.destination.is_callable() && self.read_destination_for_compare()? == value {
            DestinationWriteSuppressed {
                receiver: &self.receiver_name(),
                destination_property: self.destination.name(),
            }
            .log();
            return Ok(());
        }

        DestinationWritten {
            receiver: &self.receiver_name(),
            destination_property: self.destination.name(),
            value_type: value.type_name(),
        }
        .log();
        self.write_destination(value)
    }

    /// Compare two descriptors by source, receiver and destination.
    ///
    /// The provider is not part of the comparison. With `compare_converter` the
    /// converters must also be the same function (or both absent).
    pub fn is_equal(&self, other: &BindInfo, compare_converter: bool) -> bool {
        let same_mapping = self.source == other.source
            && Weak::ptr_eq(&self.receiver, &other.receiver)
            && self.destination == other.destination;

        if !same_mapping {
            return false;
        }
        !compare_converter || self.converter == other.converter
    }

    pub(crate) fn provider_name(&self) -> String {
        self.provider
            .upgrade()
            .map(|p| p.name().to_string())
            .unwrap_or_else(|| DROPPED.to_string())
    }

    pub(crate) fn receiver_name(&self) -> String {
        self.receiver
            .upgrade()
            .map(|r| r.name().to_string())
            .unwrap_or_else(|| DROPPED.to_string())
    }

    fn receiver_for(&self, property: &str) -> Result<Participant, BindingError> {
        self.receiver
            .upgrade()
            .ok_or_else(|| BindingError::ParticipantDropped {
                property: property.to_string(),
                role: PropertyRole::Destination,
            })
    }
}

impl fmt::Debug for BindInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BindInfo")
            .field("provider", &self.provider_name())
            .field("source", &self.source)
            .field("receiver", &self.receiver_name())
            .field("destination", &self.destination)
            .field("converter", &self.converter)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::property::{Getter, Setter};
    use crate::binding::PropertyBag;
    use std::cell::{Cell, RefCell};

    /// Receiver that counts assignments and never notifies.
    struct CountingSink {
        value: RefCell<Value>,
        writes: Cell<usize>,
    }

    impl CountingSink {
        fn new(value: Value) -> Rc<Self> {
            Rc::new(Self {
                value: RefCell::new(value),
                writes: Cell::new(0),
            })
        }
    }

    impl PropertyObject for CountingSink {
        fn name(&self) -> &str {
            "sink"
        }

        fn get_property(&self, property: &str) -> Option<Value> {
            (property == "value").then(|| self.value.borrow().clone())
        }

        fn set_property(&self, property: &str, value: Value) -> Result<(), BindingError> {
            if property != "value" {
                return Err(BindingError::property_not_found("sink", property));
            }
            self.writes.set(self.writes.get() + 1);
            *self.value.borrow_mut() = value;
            Ok(())
        }

        fn has_member(&self, member: &str) -> bool {
            member == "value"
        }
    }

    fn upper() -> Converter {
        Converter::new("upper", |v| match v {
            Value::Text(s) => Ok(Value::Text(s.to_uppercase())),
            other => anyhow::bail!("expected text, got {}", other.type_name()),
        })
    }

    fn bag(id: &str, value: &str) -> Participant {
        Rc::new(PropertyBag::new(id).with_property("value", value))
    }

    #[test]
    fn test_update_writes_converted_value() {
        let provider = bag("p", "hello");
        let sink = CountingSink::new(Value::Null);
        let receiver: Participant = sink.clone();

        let info = BindInfo::new(&provider, "value".into(), &receiver, "value".into(), Some(upper()));
        info.update().unwrap();

        assert_eq!(*sink.value.borrow(), Value::from("HELLO"));
        assert_eq!(sink.writes.get(), 1);
    }

    #[test]
    fn test_update_skips_write_when_destination_is_current() {
        let provider = bag("p", "hello");
        let sink = CountingSink::new(Value::from("HELLO"));
        let receiver: Participant = sink.clone();

        let info = BindInfo::new(&provider, "value".into(), &receiver, "value".into(), Some(upper()));
        info.update().unwrap();
        info.update().unwrap();

        assert_eq!(sink.writes.get(), 0);
    }

    #[test]
    fn test_update_always_calls_setter_sink() {
        let provider = bag("p", "hello");
        let receiver = bag("r", "");
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let setter = Setter::new("value", move |_| counter.set(counter.get() + 1));

        let info = BindInfo::new(&provider, "value".into(), &receiver, setter.into(), None);
        info.update().unwrap();
        info.update().unwrap();

        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_getter_source_is_invoked() {
        let provider = bag("p", "");
        let sink = CountingSink::new(Value::Null);
        let receiver: Participant = sink.clone();
        let getter = Getter::new("value", || Value::Int(7));

        let info = BindInfo::new(&provider, getter.into(), &receiver, "value".into(), None);
        info.update().unwrap();

        assert_eq!(*sink.value.borrow(), Value::Int(7));
    }

    #[test]
    fn test_setter_as_source_is_invalid_kind() {
        let provider = bag("p", "");
        let receiver = bag("r", "");
        let setter = Setter::new("value", |_| {});

        let info = BindInfo::new(&provider, setter.into(), &receiver, "value".into(), None);
        assert!(matches!(
            info.read_source(),
            Err(BindingError::InvalidPropertyKind { role: PropertyRole::Source, .. })
        ));
    }

    #[test]
    fn test_callable_destination_cannot_be_read() {
        let provider = bag("p", "");
        let receiver = bag("r", "");
        let setter = Setter::new("value", |_| {});

        let info = BindInfo::new(&provider, "value".into(), &receiver, setter.into(), None);
        assert!(matches!(
            info.read_destination_for_compare(),
            Err(BindingError::InvalidPropertyKind { role: PropertyRole::Destination, .. })
        ));
    }

    #[test]
    fn test_dropped_receiver_fails_update() {
        let provider = bag("p", "x");
        let receiver = bag("r", "");
        let info = BindInfo::new(&provider, "value".into(), &receiver, "value".into(), None);
        assert!(info.receiver().is_some());
        drop(receiver);

        assert!(info.receiver().is_none());
        assert_eq!(info.provider().map(|p| p.name().to_string()), Some("p".to_string()));
        assert!(matches!(
            info.update(),
            Err(BindingError::ParticipantDropped { role: PropertyRole::Destination, .. })
        ));
    }

    #[test]
    fn test_converter_error_propagates() {
        let provider: Participant = Rc::new(PropertyBag::new("p").with_property("value", 3i64));
        let receiver = bag("r", "");
        let info = BindInfo::new(&provider, "value".into(), &receiver, "value".into(), Some(upper()));

        assert!(matches!(info.update(), Err(BindingError::Conversion { .. })));
    }

    #[test]
    fn test_is_equal_ignores_provider() {
        let p1 = bag("p1", "");
        let p2 = bag("p2", "");
        let receiver = bag("r", "");

        let a = BindInfo::new(&p1, "value".into(), &receiver, "value".into(), None);
        let b = BindInfo::new(&p2, "value".into(), &receiver, "value".into(), None);
        assert!(a.is_equal(&b, true));
    }

    #[test]
    fn test_is_equal_converter_comparison_is_optional() {
        let provider = bag("p", "");
        let receiver = bag("r", "");
        let conv = upper();

        let with = BindInfo::new(&provider, "value".into(), &receiver, "value".into(), Some(conv.clone()));
        let same = BindInfo::new(&provider, "value".into(), &receiver, "value".into(), Some(conv));
        let without = BindInfo::new(&provider, "value".into(), &receiver, "value".into(), None);

        assert!(with.is_equal(&same, true));
        assert!(!with.is_equal(&without, true));
        assert!(with.is_equal(&without, false));
    }

    #[test]
    fn test_is_equal_requires_same_receiver() {
        let provider = bag("p", "");
        let r1 = bag("r1", "");
        let r2 = bag("r2", "");

        let a = BindInfo::new(&provider, "value".into(), &r1, "value".into(), None);
        let b = BindInfo::new(&provider, "value".into(), &r2, "value".into(), None);
        assert!(!a.is_equal(&b, false));
    }
}
