// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Dynamic values exchanged between modules
//!
//! Factories receive and produce [`Value`]s. The interesting member is
//! [`Object`]: a shared, mutable property map with reference semantics,
//! which is what lets a dependency cycle settle lazily through a partially
//! populated exports object.

mod function;
mod object;
mod value;

pub use function::{Callable, NativeFn};
pub use object::Object;
pub use value::Value;
