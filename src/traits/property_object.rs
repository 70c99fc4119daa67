// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::rc::Rc;

use crate::binding::Value;
use crate::errors::BindingError;
use crate::traits::Bindable;

/// Shared handle to a binding participant.
///
/// Descriptors keep only `Weak` copies of these handles, so the caller owns
/// every provider and receiver.
pub type Participant = Rc<dyn PropertyObject>;

/// Property access surface of any object that can take part in a binding.
///
/// Named properties are resolved through [`get_property`](Self::get_property) and
/// [`set_property`](Self::set_property) on every access. Methods take `&self`:
/// participants keep their state behind `Cell`/`RefCell` so the engine can write
/// into a receiver while its provider is mid-notification.
pub trait PropertyObject {
    /// Identifier used in logs and error messages.
    fn name(&self) -> &str;

    /// Current value of a named property, `None` if the host has no such property.
    fn get_property(&self, property: &str) -> Option<Value>;

    /// Assign a named property.
    ///
    /// Hosts that want the change observed call their own `notify` from here and
    /// return its result.
    fn set_property(&self, property: &str, value: Value) -> Result<(), BindingError>;

    /// Whether the host exposes a property or callable member with this name.
    fn has_member(&self, member: &str) -> bool;

    /// The `Bindable` capability, if this host implements it.
    fn as_bindable(&self) -> Option<&dyn Bindable> {
        None
    }
}
