// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::binding::{BindInfo, PropertyRef, Subscriptions};
use crate::errors::BindingError;

/// Capability of a participant that owns outgoing bindings and can be notified
/// about property changes.
///
/// Implementors only provide the [`Subscriptions`] container; registration and
/// notification come from the provided methods. Expose the capability to the
/// bind manager by returning `Some(self)` from `PropertyObject::as_bindable`.
///
/// ```
/// use bindery::binding::{Subscriptions, Value};
/// use bindery::errors::BindingError;
/// use bindery::traits::{Bindable, PropertyObject};
/// use std::cell::RefCell;
///
/// struct Thermometer {
///     celsius: RefCell<Value>,
///     subscriptions: Subscriptions,
/// }
///
/// impl PropertyObject for Thermometer {
///     fn name(&self) -> &str {
///         "thermometer"
///     }
///
///     fn get_property(&self, property: &str) -> Option<Value> {
///         (property == "celsius").then(|| self.celsius.borrow().clone())
///     }
///
///     fn set_property(&self, property: &str, value: Value) -> Result<(), BindingError> {
///         if property != "celsius" {
///             return Err(BindingError::PropertyNotFound {
///                 participant: self.name().to_string(),
///                 property: property.to_string(),
///             });
///         }
///         *self.celsius.borrow_mut() = value;
///         self.notify_named("celsius")
///     }
///
///     fn has_member(&self, member: &str) -> bool {
///         member == "celsius"
///     }
///
///     fn as_bindable(&self) -> Option<&dyn Bindable> {
///         Some(self)
///     }
/// }
///
/// impl Bindable for Thermometer {
///     fn subscriptions(&self) -> &Subscriptions {
///         &self.subscriptions
///     }
/// }
/// ```
pub trait Bindable {
    fn subscriptions(&self) -> &Subscriptions;

    /// Add a descriptor unless an equal one (converter included) is present.
    fn register_subscription(&self, descriptor: BindInfo) {
        self.subscriptions().register(descriptor);
    }

    /// Remove every descriptor matching `descriptor`, ignoring converters.
    fn unregister_subscription(&self, descriptor: &BindInfo) {
        self.subscriptions().unregister(descriptor);
    }

    /// Run every descriptor whose source is `property`, in registration order.
    fn notify(&self, property: &PropertyRef) -> Result<(), BindingError> {
        self.subscriptions().notify(property)
    }

    /// Shorthand for notifying a named property.
    fn notify_named(&self, property: &str) -> Result<(), BindingError> {
        self.subscriptions().notify_named(property)
    }
}
