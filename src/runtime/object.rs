// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Shared object representation.

use super::value::Value;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::Arc;

/// A shared, mutable property map.
///
/// `Object` is a handle: cloning it clones the handle, not the storage, so
/// every clone reads and writes the same underlying map. Module exports
/// rely on this: a dependent that received the object while it was still
/// empty observes properties added later.
#[derive(Clone, Default)]
pub struct Object {
    properties: Arc<RwLock<FxHashMap<String, Value>>>,
}

impl Object {
    /// Creates a new empty object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets a property value, `Undefined` if absent.
    pub fn get(&self, key: &str) -> Value {
        self.lookup(key).unwrap_or(Value::Undefined)
    }

    /// Gets a property value, if present.
    pub fn lookup(&self, key: &str) -> Option<Value> {
        self.properties.read().get(key).cloned()
    }

    /// Sets a property value.
    pub fn set(&self, key: impl Into<String>, value: Value) {
        self.properties.write().insert(key.into(), value);
    }

    /// Checks if a property exists.
    pub fn has(&self, key: &str) -> bool {
        self.properties.read().contains_key(key)
    }

    /// Deletes a property, returning whether it existed.
    pub fn delete(&self, key: &str) -> bool {
        self.properties.write().remove(key).is_some()
    }

    /// Returns all property names.
    pub fn keys(&self) -> Vec<String> {
        self.properties.read().keys().cloned().collect()
    }

    /// Returns the number of properties.
    pub fn len(&self) -> usize {
        self.properties.read().len()
    }

    /// Checks if the object has no properties.
    pub fn is_empty(&self) -> bool {
        self.properties.read().is_empty()
    }

    /// Checks whether two handles share the same storage.
    pub fn ptr_eq(&self, other: &Object) -> bool {
        Arc::ptr_eq(&self.properties, &other.properties)
    }
}

impl fmt::Debug for Object {
    // Property values may refer back to this object (cycles), so only the
    // key set is printed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys = self.keys();
        keys.sort();
        f.debug_struct("Object").field("keys", &keys).finish()
    }
}
