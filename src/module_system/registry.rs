// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Process-wide module table

use crate::error::{ModuleError, Result};
use crate::module_system::cache::ResolutionCache;
use crate::module_system::record::{ModuleRecord, ModuleState};
use crate::module_system::resolver::is_reserved;
use crate::runtime::Value;
use parking_lot::{Mutex, MutexGuard};
use rustc_hash::FxHashMap;
use tracing::debug;

/// Process-wide table of module records.
///
/// The table is append-only for the registry's lifetime: records are added
/// by [`register`](Self::register) and mutated by the resolver, never
/// removed. A single mutex guards the register/resolve critical section,
/// so partial `Resolving` state is never observed from another thread.
pub struct ModuleRegistry {
    modules: Mutex<FxHashMap<String, ModuleRecord>>,
    cache: ResolutionCache,
}

impl ModuleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            modules: Mutex::new(FxHashMap::default()),
            cache: ResolutionCache::new(),
        }
    }

    /// Register a module under a unique id.
    ///
    /// `dependencies` is the factory's argument order. The reserved ids
    /// `"exports"` and `"module"` may appear as pseudo-dependencies but
    /// cannot be registered themselves. Fails with
    /// [`ModuleError::DuplicateId`] when the id is taken, leaving the
    /// table unchanged. No factory is invoked here.
    pub fn register<F>(&self, id: impl Into<String>, dependencies: &[&str], factory: F) -> Result<()>
    where
        F: Fn(&[Value]) -> std::result::Result<Option<Value>, String> + Send + Sync + 'static,
    {
        let id = id.into();
        validate_id(&id)?;

        let mut modules = self.modules.lock();
        if modules.contains_key(&id) {
            return Err(ModuleError::DuplicateId(id));
        }

        let dependencies: Vec<String> = dependencies.iter().map(|dep| (*dep).to_string()).collect();
        debug!("Registered module '{}' ({} dependencies)", id, dependencies.len());
        modules.insert(
            id.clone(),
            ModuleRecord::new(id, dependencies, Box::new(factory)),
        );
        Ok(())
    }

    /// Check whether an id is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.modules.lock().contains_key(id)
    }

    /// Resolution state of a registered id, `None` if unregistered.
    pub fn state(&self, id: &str) -> Option<ModuleState> {
        self.modules.lock().get(id).map(ModuleRecord::state)
    }

    /// All registered ids.
    pub fn ids(&self) -> Vec<String> {
        self.modules.lock().keys().cloned().collect()
    }

    /// Number of registered modules.
    pub fn len(&self) -> usize {
        self.modules.lock().len()
    }

    /// Check whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.modules.lock().is_empty()
    }

    /// Take the register/resolve critical-section lock.
    pub(crate) fn lock_modules(&self) -> MutexGuard<'_, FxHashMap<String, ModuleRecord>> {
        self.modules.lock()
    }

    pub(crate) fn cache(&self) -> &ResolutionCache {
        &self.cache
    }
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_id(id: &str) -> Result<()> {
    if id.is_empty() || id.contains('\0') {
        return Err(ModuleError::InvalidId(id.to_string()));
    }
    if is_reserved(id) {
        return Err(ModuleError::ReservedId(id.to_string()));
    }
    Ok(())
}
