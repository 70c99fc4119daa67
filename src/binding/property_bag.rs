// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::binding::subscriptions::Subscriptions;
use crate::binding::value::Value;
use crate::errors::BindingError;
use crate::traits::{Bindable, PropertyObject};

/// A ready-made bindable participant holding a fixed set of named properties.
///
/// Properties are declared up front with [`with_property`](Self::with_property) or
/// [`define`](Self::define); assigning an undeclared property fails with
/// `PropertyNotFound`. Every successful [`set`](Self::set) notifies the property,
/// whether or not the value changed.
///
/// ```
/// use bindery::binding::{BindManager, BindType, ConverterPair, PropertyBag, Value};
/// use bindery::traits::Participant;
/// use std::rc::Rc;
///
/// let celsius = Rc::new(PropertyBag::new("sensor").with_property("reading", 0i64));
/// let display = Rc::new(PropertyBag::new("display").with_property("reading", 0i64));
/// let provider: Participant = celsius.clone();
/// let receiver: Participant = display.clone();
///
/// BindManager::bind(&provider, "reading", &receiver, "reading", BindType::OneWay, ConverterPair::identity())
///     .unwrap();
///
/// celsius.set("reading", 21i64).unwrap();
/// assert_eq!(display.get("reading"), Some(Value::Int(21)));
/// ```
#[derive(Debug)]
pub struct PropertyBag {
    id: String,
    properties: RefCell<BTreeMap<String, Value>>,
    subscriptions: Subscriptions,
}

impl PropertyBag {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            properties: RefCell::new(BTreeMap::new()),
            subscriptions: Subscriptions::new(),
        }
    }

    /// Builder-style [`define`](Self::define).
    pub fn with_property(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.define(name, value);
        self
    }

    /// Declare a property (or overwrite its value) without notifying.
    pub fn define(&self, name: impl Into<String>, value: impl Into<Value>) {
        self.properties.borrow_mut().insert(name.into(), value.into());
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        self.properties.borrow().get(name).cloned()
    }

    /// Assign a declared property, then notify it.
    pub fn set(&self, name: &str, value: impl Into<Value>) -> Result<(), BindingError> {
        {
            let mut properties = self.properties.borrow_mut();
            let slot = properties
                .get_mut(name)
                .ok_or_else(|| BindingError::property_not_found(&self.id, name))?;
            *slot = value.into();
        }
        self.notify_named(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.properties.borrow().contains_key(name)
    }

    /// All properties, ordered by name.
    pub fn snapshot(&self) -> Vec<(String, Value)> {
        self.properties
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

impl PropertyObject for PropertyBag {
    fn name(&self) -> &str {
        &self.id
    }

    fn get_property(&self, property: &str) -> Option<Value> {
        self.get(property)
    }

    fn set_property(&self, property: &str, value: Value) -> Result<(), BindingError> {
        self.set(property, value)
    }

    fn has_member(&self, member: &str) -> bool {
        self.contains(member)
    }

    fn as_bindable(&self) -> Option<&dyn Bindable> {
        Some(self)
    }
}

impl Bindable for PropertyBag {
    fn subscriptions(&self) -> &Subscriptions {
        &self.subscriptions
    }
}
