// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Convenience entry points over the resolver

use crate::error::Result;
use crate::module_system::cache::Settled;
use crate::module_system::registry::ModuleRegistry;
use crate::module_system::resolver::Resolver;
use crate::runtime::{Object, Value};

/// Resolve a module by id.
pub fn require(registry: &ModuleRegistry, id: &str) -> Result<Value> {
    Resolver::new(registry).resolve(id)
}

/// Snapshot of every settled-resolved module, as an object keyed by id.
///
/// Failed modules are omitted. The snapshot reflects the moment of the
/// call and does not grow as further modules resolve.
pub fn resolved_exports(registry: &ModuleRegistry) -> Value {
    let snapshot = Object::new();
    for id in registry.cache().keys() {
        if let Some(Settled::Resolved(value)) = registry.cache().get(&id) {
            snapshot.set(id, value);
        }
    }
    Value::Object(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_delegates_to_resolver() {
        let registry = ModuleRegistry::new();
        registry
            .register("m", &[], |_| Ok(Some(Value::Boolean(true))))
            .unwrap();
        assert_eq!(require(&registry, "m").unwrap(), Value::Boolean(true));
    }

    #[test]
    fn test_snapshot_only_contains_settled_modules() {
        let registry = ModuleRegistry::new();
        registry
            .register("seen", &[], |_| Ok(Some(Value::Number(1.0))))
            .unwrap();
        registry
            .register("unseen", &[], |_| Ok(Some(Value::Number(2.0))))
            .unwrap();

        require(&registry, "seen").unwrap();

        let snapshot = resolved_exports(&registry);
        let snapshot = snapshot.as_object().expect("snapshot object");
        assert_eq!(snapshot.get("seen"), Value::Number(1.0));
        assert!(!snapshot.has("unseen"));
    }
}
