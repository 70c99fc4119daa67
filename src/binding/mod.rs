// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Property binding engine.
//!
//! Keeps a property of a receiver in sync with a property of a provider:
//!
//! * [`BindInfo`] - one directed rule: read source, convert, write destination
//! * [`Subscriptions`] - a participant's outgoing rules and the `notify` dispatch
//! * [`BindManager`] - validated `bind`, `unbind` and `change_converter`
//! * [`PropertyBag`] - a ready-made participant with named properties
//!
//! Change propagation is explicit. A provider calls `notify` after mutating a
//! property; the engine never watches for assignments on its own.

mod converter;
mod descriptor;
mod manager;
mod property;
mod property_bag;
mod subscriptions;
mod value;


pub use converter::{Converter, ConverterPair};
pub use descriptor::BindInfo;
pub use manager::{BindManager, BindType};
pub use property::{Getter, PropertyRef, Setter};
pub use property_bag::PropertyBag;
pub use subscriptions::Subscriptions;
pub use value::Value;
