// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod bindable;
pub mod property_object;

pub use bindable::Bindable;
pub use property_object::{Participant, PropertyObject};
