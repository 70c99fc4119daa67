// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Property references: the two ways a binding can address a property.
//!
//! A [`PropertyRef::Named`] reference is resolved on the host through
//! `PropertyObject::get_property` / `set_property` every time it is accessed, so a
//! host may change what a name maps to between notifications. Callables
//! ([`Getter`] for sources, [`Setter`] for destinations) are invoked directly.
//!
//! Callables compare by identity: a clone of a `Getter` equals the original, two
//! separately constructed getters never do, even with the same name. Keep the
//! handle you bound with to notify and unbind later.
//!
//! A closure that captures its own host through an `Rc` keeps the host alive for
//! as long as the binding exists. Capture a `Weak` instead.

use std::fmt;
use std::rc::Rc;

use crate::binding::value::Value;

/// A named zero-argument callable producing a source value.
#[derive(Clone)]
pub struct Getter {
    name: Rc<str>,
    func: Rc<dyn Fn() -> Value>,
}

impl Getter {
    pub fn new(name: impl Into<Rc<str>>, func: impl Fn() -> Value + 'static) -> Self {
        Self {
            name: name.into(),
            func: Rc::new(func),
        }
    }

    /// The member name checked against the provider at bind time.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn call(&self) -> Value {
        (self.func)()
    }
}

impl PartialEq for Getter {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.func, &other.func)
    }
}

impl fmt::Debug for Getter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Getter").field(&self.name).finish()
    }
}

/// A named one-argument callable consuming a destination value.
///
/// Setters are write-only sinks: the engine cannot read their current value, so
/// every update through a setter invokes it.
#[derive(Clone)]
pub struct Setter {
    name: Rc<str>,
    func: Rc<dyn Fn(Value)>,
}

impl Setter {
    pub fn new(name: impl Into<Rc<str>>, func: impl Fn(Value) + 'static) -> Self {
        Self {
            name: name.into(),
            func: Rc::new(func),
        }
    }

    /// The member name checked against the receiver at bind time.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn call(&self, value: Value) {
        (self.func)(value)
    }
}

impl PartialEq for Setter {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.func, &other.func)
    }
}

impl fmt::Debug for Setter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Setter").field(&self.name).finish()
    }
}

/// The source or destination side of a binding.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyRef {
    Named(String),
    Getter(Getter),
    Setter(Setter),
}

impl PropertyRef {
    pub fn named(name: impl Into<String>) -> Self {
        PropertyRef::Named(name.into())
    }

    /// The property name, or the callable's declared name.
    pub fn name(&self) -> &str {
        match self {
            PropertyRef::Named(name) => name,
            PropertyRef::Getter(getter) => getter.name(),
            PropertyRef::Setter(setter) => setter.name(),
        }
    }

    pub fn is_callable(&self) -> bool {
        !matches!(self, PropertyRef::Named(_))
    }

    /// True when this is a named reference to `name`.
    pub fn is_named(&self, name: &str) -> bool {
        matches!(self, PropertyRef::Named(n) if n == name)
    }
}

impl fmt::Display for PropertyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyRef::Named(name) => write!(f, "{}", name),
            PropertyRef::Getter(getter) => write!(f, "{}()", getter.name()),
            PropertyRef::Setter(setter) => write!(f, "{}(value)", setter.name()),
        }
    }
}

impl From<&str> for PropertyRef {
    fn from(name: &str) -> Self {
        PropertyRef::Named(name.to_string())
    }
}

impl From<String> for PropertyRef {
    fn from(name: String) -> Self {
        PropertyRef::Named(name)
    }
}

impl From<Getter> for PropertyRef {
    fn from(getter: Getter) -> Self {
        PropertyRef::Getter(getter)
    }
}

impl From<Setter> for PropertyRef {
    fn from(setter: Setter) -> Self {
        PropertyRef::Setter(setter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_refs_compare_by_name() {
        assert_eq!(PropertyRef::from("data"), PropertyRef::named("data"));
        assert_ne!(PropertyRef::from("data"), PropertyRef::from("other"));
    }

    #[test]
    fn test_callables_compare_by_identity() {
        let a = Getter::new("read", || Value::Int(1));
        let b = Getter::new("read", || Value::Int(1));

        assert_eq!(PropertyRef::from(a.clone()), PropertyRef::from(a.clone()));
        assert_ne!(PropertyRef::from(a), PropertyRef::from(b));
    }

    #[test]
    fn test_different_kinds_never_equal() {
        let getter = Getter::new("data", || Value::Null);
        assert_ne!(PropertyRef::from(getter), PropertyRef::from("data"));
    }

    #[test]
    fn test_display_marks_callables() {
        let setter = Setter::new("set_label", |_| {});
        assert_eq!(PropertyRef::from(setter).to_string(), "set_label(value)");
        assert_eq!(PropertyRef::from("data").to_string(), "data");
    }
}
