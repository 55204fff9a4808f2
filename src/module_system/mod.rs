// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Lazy module registration and resolution
//!
//! Modules are declared up front and resolved on demand.
//!
//! ## Registration
//! - `register(id, dependencies, factory)`
//! - Dependency order is factory argument order
//! - Reserved pseudo-dependencies: `exports`, `module`
//!
//! ## Resolution
//! - Depth-first, synchronous, memoized
//! - Each factory runs at most once, cycles included
//! - A cyclic dependency binds to the ancestor's current exports object
//! - A failed module stays failed; its factory is never re-run

mod cache;
mod record;
mod registry;
mod require;
mod resolver;

pub use cache::{ResolutionCache, Settled};
pub use record::{Factory, ModuleRecord, ModuleState};
pub use registry::ModuleRegistry;
pub use require::{require, resolved_exports};
pub use resolver::{EXPORTS_ID, MODULE_ID, RESERVED_IDS, Resolver, is_reserved};
