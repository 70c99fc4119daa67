// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::binding::descriptor::BindInfo;
use crate::binding::property::PropertyRef;
use crate::errors::BindingError;
use crate::observability::messages::binding::{
    DuplicateSubscriptionSkipped, NotificationDispatched, SubscriptionAdded, SubscriptionsRemoved,
};
use crate::observability::messages::StructuredLog;

/// The outgoing bindings of one participant, in registration order.
///
/// Starts empty and only changes through [`register`](Self::register) and
/// [`unregister`](Self::unregister). Dispatch works on a snapshot of the list, so
/// an update may reenter `notify` (or register and unregister bindings) on any
/// participant, including this one. A descriptor removed during a dispatch is
/// skipped if it has not run yet; one added during a dispatch first runs on the
/// next notification.
#[derive(Default)]
pub struct Subscriptions {
    entries: RefCell<Vec<Rc<BindInfo>>>,
}

impl Subscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `descriptor` unless an equal descriptor, converter included, is
    /// already registered. Returns whether it was added.
    pub fn register(&self, descriptor: BindInfo) -> bool {
        let mut entries = self.entries.borrow_mut();

        if entries.iter().any(|existing| existing.is_equal(&descriptor, true)) {
            DuplicateSubscriptionSkipped {
                source_property: descriptor.source().name(),
                destination_property: descriptor.destination().name(),
            }
            .log();
            return false;
        }

        let descriptor = Rc::new(descriptor);
        entries.push(Rc::clone(&descriptor));
        let count = entries.len();
        drop(entries);

        SubscriptionAdded {
            source_property: descriptor.source().name(),
            destination_property: descriptor.destination().name(),
            converter: descriptor.converter().map(|c| c.name()),
            subscription_count: count,
        }
        .log();
        true
    }

    /// Remove every descriptor equal to `descriptor` with converters ignored.
    /// Returns how many were removed; zero is not an error.
    pub fn unregister(&self, descriptor: &BindInfo) -> usize {
        let mut entries = self.entries.borrow_mut();
        let before = entries.len();
        entries.retain(|existing| !existing.is_equal(descriptor, false));
        let removed = before - entries.len();
        drop(entries);

        if removed > 0 {
            SubscriptionsRemoved {
                source_property: descriptor.source().name(),
                destination_property: descriptor.destination().name(),
                removed,
            }
            .log();
        }
        removed
    }

    /// Update every descriptor whose source equals `property`.
    ///
    /// Stops at the first failing update and returns its error.
    pub fn notify(&self, property: &PropertyRef) -> Result<(), BindingError> {
        self.dispatch(property.name(), |source| source == property)
    }

    /// Update every descriptor whose source is the named property `property`.
    pub fn notify_named(&self, property: &str) -> Result<(), BindingError> {
        self.dispatch(property, |source| source.is_named(property))
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Snapshot of the registered descriptors.
    pub fn descriptors(&self) -> Vec<Rc<BindInfo>> {
        self.entries.borrow().clone()
    }

    fn dispatch(
        &self,
        label: &str,
        matches: impl Fn(&PropertyRef) -> bool,
    ) -> Result<(), BindingError> {
        let matched: Vec<Rc<BindInfo>> = self
            .entries
            .borrow()
            .iter()
            .filter(|descriptor| matches(descriptor.source()))
            .cloned()
            .collect();

        if matched.is_empty() {
            return Ok(());
        }

        let msg = NotificationDispatched {
            property: label,
            matched: matched.len(),
        };
        let span = msg.span("notify");
        let _guard = span.enter();
        msg.log();

        for descriptor in matched {
            if self.is_registered(&descriptor) {
                descriptor.update()?;
            }
        }
        Ok(())
    }

    fn is_registered(&self, descriptor: &Rc<BindInfo>) -> bool {
        self.entries
            .borrow()
            .iter()
            .any(|entry| Rc::ptr_eq(entry, descriptor))
    }
}

impl fmt::Debug for Subscriptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscriptions")
            .field("subscription_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::converter::Converter;
    use crate::binding::property::Getter;
    use crate::binding::value::Value;
    use crate::binding::PropertyBag;
    use crate::traits::Participant;

    fn pair() -> (Participant, Participant) {
        let p: Participant = Rc::new(PropertyBag::new("p").with_property("x", 1i64));
        let r: Participant = Rc::new(PropertyBag::new("r").with_property("y", 0i64));
        (p, r)
    }

    #[test]
    fn test_register_is_idempotent() {
        let (p, r) = pair();
        let subs = Subscriptions::new();

        assert!(subs.register(BindInfo::new(&p, "x".into(), &r, "y".into(), None)));
        assert!(!subs.register(BindInfo::new(&p, "x".into(), &r, "y".into(), None)));
        assert_eq!(subs.len(), 1);
    }

    #[test]
    fn test_descriptors_keep_registration_order() {
        let (p, r) = pair();
        let subs = Subscriptions::new();
        subs.register(BindInfo::new(&p, "x".into(), &r, "y".into(), None));
        subs.register(BindInfo::new(&p, "z".into(), &r, "y".into(), None));

        let sources: Vec<String> = subs
            .descriptors()
            .iter()
            .map(|d| d.source().name().to_string())
            .collect();
        assert_eq!(sources, vec!["x", "z"]);
    }

    #[test]
    fn test_register_keeps_distinct_converters() {
        let (p, r) = pair();
        let subs = Subscriptions::new();
        let a = Converter::new("a", Ok);
        let b = Converter::new("b", Ok);

        subs.register(BindInfo::new(&p, "x".into(), &r, "y".into(), Some(a)));
        subs.register(BindInfo::new(&p, "x".into(), &r, "y".into(), Some(b)));
        assert_eq!(subs.len(), 2);
    }

    #[test]
    fn test_unregister_ignores_converter_and_removes_all_matches() {
        let (p, r) = pair();
        let subs = Subscriptions::new();
        subs.register(BindInfo::new(&p, "x".into(), &r, "y".into(), Some(Converter::new("a", Ok))));
        subs.register(BindInfo::new(&p, "x".into(), &r, "y".into(), Some(Converter::new("b", Ok))));

        let removed = subs.unregister(&BindInfo::new(&p, "x".into(), &r, "y".into(), None));
        assert_eq!(removed, 2);
        assert!(subs.is_empty());
    }

    #[test]
    fn test_unregister_missing_is_noop() {
        let (p, r) = pair();
        let subs = Subscriptions::new();
        assert_eq!(subs.unregister(&BindInfo::new(&p, "x".into(), &r, "y".into(), None)), 0);
    }

    #[test]
    fn test_notify_only_runs_matching_source() {
        let (p, r) = pair();
        let subs = Subscriptions::new();
        subs.register(BindInfo::new(&p, "x".into(), &r, "y".into(), None));

        subs.notify_named("other").unwrap();
        assert_eq!(r.get_property("y"), Some(Value::Int(0)));

        subs.notify_named("x").unwrap();
        assert_eq!(r.get_property("y"), Some(Value::Int(1)));
    }

    #[test]
    fn test_notify_matches_callables_by_identity() {
        let (p, r) = pair();
        let subs = Subscriptions::new();
        let getter = Getter::new("x", || Value::Int(42));
        let lookalike = Getter::new("x", || Value::Int(42));
        subs.register(BindInfo::new(&p, getter.clone().into(), &r, "y".into(), None));

        subs.notify(&lookalike.into()).unwrap();
        assert_eq!(r.get_property("y"), Some(Value::Int(0)));

        subs.notify(&getter.into()).unwrap();
        assert_eq!(r.get_property("y"), Some(Value::Int(42)));
    }
}
