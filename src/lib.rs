// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! # skein
//!
//! A lazy, cycle-tolerant module registry and resolver.
//!
//! Modules are registered under a unique id with an ordered dependency list
//! and a factory. Resolution is depth-first and memoized: each factory runs
//! at most once, receiving its resolved dependency values in declaration
//! order plus the module's own mutable exports object.
//!
//! Reference cycles are not an error. A module that depends on one of its
//! ancestors receives the ancestor's *current* exports object as a
//! placeholder instead of re-entering resolution. Because the placeholder is
//! the same shared object the ancestor later populates, a dependent that
//! reads a property at call time sees the final value, while one that copies
//! a property out at definition time keeps whatever was there at that moment
//! (usually [`Value::Undefined`]). Both behaviors are deliberate.
//!
//! ## Quick Start
//!
//! ```
//! use skein::{ModuleRegistry, Resolver, Value};
//!
//! # fn main() -> skein::Result<()> {
//! let registry = ModuleRegistry::new();
//!
//! registry.register("greeting", &[], |_args| {
//!     Ok(Some(Value::String("hello".into())))
//! })?;
//!
//! registry.register("app", &["greeting", "exports"], |args| {
//!     let exports = args[1].as_object().expect("exports object");
//!     exports.set("message", args[0].clone());
//!     Ok(None)
//! })?;
//!
//! let app = Resolver::new(&registry).resolve("app")?;
//! let exports = app.as_object().expect("app resolves to its exports");
//! assert_eq!(exports.get("message"), Value::String("hello".into()));
//! # Ok(())
//! # }
//! ```
//!
//! ## Reserved dependency ids
//!
//! - `"exports"` binds the module's own exports object at that argument
//!   position. Independently, the exports object is always appended as the
//!   trailing factory argument.
//! - `"module"` binds a context object carrying the module's `id` and its
//!   `exports`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod module_system;
pub mod runtime;

// Re-exports
pub use error::{ModuleError, Result};
pub use module_system::{
    EXPORTS_ID, MODULE_ID, ModuleRegistry, ModuleState, RESERVED_IDS, Resolver, is_reserved,
    require, resolved_exports,
};
pub use runtime::{Callable, Object, Value};

/// Version of the skein crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
