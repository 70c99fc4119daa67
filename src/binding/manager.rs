// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Validated construction and teardown of bindings.
//!
//! [`BindManager`] is the entry point callers use to connect participants. A bind
//! request is fully validated before anything is registered:
//!
//! 1. both participants expose the `Bindable` capability (`NotBindable`)
//! 2. each property, or each callable's declared name, exists on its participant
//!    (`PropertyNotFound`)
//! 3. two-way bindings use named properties on both ends (`InvalidBindConfiguration`)
//! 4. a setter is never a source and a getter never a destination
//!    (`InvalidPropertyKind`)
//!
//! One-way binding registers a forward descriptor on the provider. Two-way binding
//! additionally registers a reverse descriptor on the receiver. Nothing is pushed
//! at bind time: the first transfer happens on the next notification, or on an
//! explicit [`BindManager::sync`].

use serde::{Deserialize, Serialize};

use crate::binding::converter::{Converter, ConverterPair};
use crate::binding::descriptor::BindInfo;
use crate::binding::property::PropertyRef;
use crate::errors::{BindingError, PropertyRole};
use crate::observability::messages::binding::{
    BindRejected, BindingCreated, BindingRemoved, ConverterChanged,
};
use crate::observability::messages::StructuredLog;
use crate::traits::{Bindable, Participant};

/// Direction(s) in which a binding propagates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BindType {
    /// Provider → receiver only
    #[default]
    OneWay,
    /// Provider → receiver and receiver → provider
    TwoWay,
}

/// Stateless orchestration surface for `bind`, `unbind` and `change_converter`.
pub struct BindManager;

impl BindManager {
    /// Bind `provider.source` to `receiver.destination`.
    ///
    /// `converters.forward` is installed on the provider → receiver descriptor;
    /// `converters.backward` on the reverse descriptor of a two-way binding.
    ///
    /// ```
    /// use bindery::binding::{BindManager, BindType, ConverterPair, PropertyBag, Value};
    /// use bindery::traits::Participant;
    /// use std::rc::Rc;
    ///
    /// let left = Rc::new(PropertyBag::new("left").with_property("text", ""));
    /// let right = Rc::new(PropertyBag::new("right").with_property("text", ""));
    /// let (p, r): (Participant, Participant) = (left.clone(), right.clone());
    ///
    /// BindManager::bind(&p, "text", &r, "text", BindType::TwoWay, ConverterPair::identity()).unwrap();
    ///
    /// left.set("text", "from left").unwrap();
    /// assert_eq!(right.get("text"), Some(Value::from("from left")));
    ///
    /// right.set("text", "from right").unwrap();
    /// assert_eq!(left.get("text"), Some(Value::from("from right")));
    /// ```
    pub fn bind(
        provider: &Participant,
        source: impl Into<PropertyRef>,
        receiver: &Participant,
        destination: impl Into<PropertyRef>,
        bind_type: BindType,
        converters: ConverterPair,
    ) -> Result<(), BindingError> {
        let source = source.into();
        let destination = destination.into();

        let (provider_capability, receiver_capability) =
            match Self::validate(provider, &source, receiver, &destination, bind_type) {
                Ok(capabilities) => capabilities,
                Err(error) => {
                    BindRejected {
                        provider: provider.name(),
                        source_property: source.name(),
                        receiver: receiver.name(),
                        destination_property: destination.name(),
                        error: &error,
                    }
                    .log();
                    return Err(error);
                }
            };

        let msg = BindingCreated {
            provider: provider.name(),
            source_property: source.name(),
            receiver: receiver.name(),
            destination_property: destination.name(),
            two_way: bind_type == BindType::TwoWay,
        };
        let span = msg.span("bind");
        let _guard = span.enter();

        provider_capability.register_subscription(BindInfo::new(
            provider,
            source.clone(),
            receiver,
            destination.clone(),
            converters.forward,
        ));
        if bind_type == BindType::TwoWay {
            receiver_capability.register_subscription(BindInfo::new(
                receiver,
                destination.clone(),
                provider,
                source.clone(),
                converters.backward,
            ));
        }

        msg.log();
        Ok(())
    }

    /// Remove the binding between `provider.source` and `receiver.destination`.
    ///
    /// The mirrored reverse descriptor is always removed from the receiver as
    /// well, so this works for one-way and two-way bindings alike. Missing
    /// bindings and non-bindable participants are ignored, which makes `unbind`
    /// idempotent.
    pub fn unbind(
        provider: &Participant,
        source: impl Into<PropertyRef>,
        receiver: &Participant,
        destination: impl Into<PropertyRef>,
    ) {
        let source = source.into();
        let destination = destination.into();

        let mut removed = 0;
        if let Some(capability) = provider.as_bindable() {
            removed += capability.subscriptions().unregister(&BindInfo::new(
                provider,
                source.clone(),
                receiver,
                destination.clone(),
                None,
            ));
        }
        if let Some(capability) = receiver.as_bindable() {
            removed += capability.subscriptions().unregister(&BindInfo::new(
                receiver,
                destination.clone(),
                provider,
                source.clone(),
                None,
            ));
        }

        BindingRemoved {
            provider: provider.name(),
            source_property: source.name(),
            receiver: receiver.name(),
            destination_property: destination.name(),
            removed,
        }
        .log();
    }

    /// Replace the converter(s) of an existing binding.
    ///
    /// The forward descriptor is always re-registered with `converters.forward`;
    /// the reverse descriptor only when `bind_type` is two-way. Each swap is an
    /// unregister followed by a register, never an in-place mutation.
    pub fn change_converter(
        provider: &Participant,
        source: impl Into<PropertyRef>,
        receiver: &Participant,
        destination: impl Into<PropertyRef>,
        bind_type: BindType,
        converters: ConverterPair,
    ) -> Result<(), BindingError> {
        let source = source.into();
        let destination = destination.into();

        let provider_capability = Self::require_bindable(provider)?;
        let receiver_capability = match bind_type {
            BindType::TwoWay => Some(Self::require_bindable(receiver)?),
            BindType::OneWay => None,
        };

        ConverterChanged {
            provider: provider.name(),
            source_property: source.name(),
            receiver: receiver.name(),
            destination_property: destination.name(),
            forward: converters.forward.as_ref().map(Converter::name),
            backward: converters.backward.as_ref().map(Converter::name),
        }
        .log();

        let forward = BindInfo::new(provider, source.clone(), receiver, destination.clone(), None);
        provider_capability.unregister_subscription(&forward);
        provider_capability.register_subscription(BindInfo::new(
            provider,
            source.clone(),
            receiver,
            destination.clone(),
            converters.forward,
        ));

        if let Some(receiver_capability) = receiver_capability {
            let reverse =
                BindInfo::new(receiver, destination.clone(), provider, source.clone(), None);
            receiver_capability.unregister_subscription(&reverse);
            receiver_capability.register_subscription(BindInfo::new(
                receiver,
                destination,
                provider,
                source,
                converters.backward,
            ));
        }
        Ok(())
    }

    /// Push the current value of `provider.source` through its bindings now.
    ///
    /// Binding never transfers a value on its own; call this right after `bind`
    /// to bring receivers in line with the provider.
    pub fn sync(provider: &Participant, source: impl Into<PropertyRef>) -> Result<(), BindingError> {
        let source = source.into();
        Self::require_bindable(provider)?.notify(&source)
    }

    fn validate<'a>(
        provider: &'a Participant,
        source: &PropertyRef,
        receiver: &'a Participant,
        destination: &PropertyRef,
        bind_type: BindType,
    ) -> Result<(&'a dyn Bindable, &'a dyn Bindable), BindingError> {
        let provider_capability = Self::require_bindable(provider)?;
        let receiver_capability = Self::require_bindable(receiver)?;

        Self::require_member(provider, source)?;
        Self::require_member(receiver, destination)?;

        if bind_type == BindType::TwoWay && (source.is_callable() || destination.is_callable()) {
            return Err(BindingError::InvalidBindConfiguration {
                source_property: source.to_string(),
                destination_property: destination.to_string(),
            });
        }

        if let PropertyRef::Setter(setter) = source {
            return Err(BindingError::InvalidPropertyKind {
                property: setter.name().to_string(),
                role: PropertyRole::Source,
            });
        }
        if let PropertyRef::Getter(getter) = destination {
            return Err(BindingError::InvalidPropertyKind {
                property: getter.name().to_string(),
                role: PropertyRole::Destination,
            });
        }

        Ok((provider_capability, receiver_capability))
    }

    fn require_bindable(participant: &Participant) -> Result<&dyn Bindable, BindingError> {
        participant
            .as_bindable()
            .ok_or_else(|| BindingError::NotBindable {
                participant: participant.name().to_string(),
            })
    }

    fn require_member(participant: &Participant, property: &PropertyRef) -> Result<(), BindingError> {
        if participant.has_member(property.name()) {
            Ok(())
        } else {
            Err(BindingError::property_not_found(participant.name(), property.name()))
        }
    }
}
