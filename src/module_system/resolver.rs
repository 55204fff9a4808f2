// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Depth-first module resolution with cycle tolerance

use crate::error::{ModuleError, Result};
use crate::module_system::cache::Settled;
use crate::module_system::record::{ModuleRecord, Progress};
use crate::module_system::registry::ModuleRegistry;
use crate::runtime::{Object, Value};
use rustc_hash::FxHashMap;
use tracing::{debug, trace, warn};

/// Reserved pseudo-dependency bound to the module's own exports object.
pub const EXPORTS_ID: &str = "exports";

/// Reserved pseudo-dependency bound to a module-context object carrying
/// `id` and `exports`.
pub const MODULE_ID: &str = "module";

/// All reserved dependency ids.
pub const RESERVED_IDS: &[&str] = &[EXPORTS_ID, MODULE_ID];

/// Check if an id names a reserved pseudo-dependency.
pub fn is_reserved(id: &str) -> bool {
    RESERVED_IDS.contains(&id)
}

/// Drives depth-first resolution over a registry.
///
/// Cycle tolerance: a module that depends on one of its ancestors receives
/// the ancestor's *current* exports object instead of re-entering
/// resolution. A factory that copies a property off such a placeholder at
/// definition time keeps [`Value::Undefined`]; one that holds the object
/// and reads at call time sees whatever the ancestor eventually exported.
/// The second behavior is the point of the exports-object idiom; the first
/// is its documented hazard, reproduced here on purpose.
pub struct Resolver<'a> {
    registry: &'a ModuleRegistry,
}

impl<'a> Resolver<'a> {
    /// Create a resolver over a registry.
    pub fn new(registry: &'a ModuleRegistry) -> Self {
        Self { registry }
    }

    /// Resolve a module id to its final value.
    ///
    /// Memoized: a settled module returns its value, or replays its
    /// failure, without re-running any factory.
    pub fn resolve(&self, id: &str) -> Result<Value> {
        // Settled outcomes are immutable; skip the registry lock entirely.
        if let Some(outcome) = self.registry.cache().get(id) {
            trace!("Settled cache hit for module '{}'", id);
            return match outcome {
                Settled::Resolved(value) => Ok(value),
                Settled::Failed(reason) => Err(ModuleError::factory(id, reason)),
            };
        }

        let mut modules = self.registry.lock_modules();
        let mut chain = Vec::new();
        self.resolve_in(&mut modules, id, &mut chain)
    }

    /// Recursive resolution step.
    ///
    /// `chain` is the ancestor id path, kept for diagnostics only; cycle
    /// detection itself is the per-record state.
    fn resolve_in(
        &self,
        modules: &mut FxHashMap<String, ModuleRecord>,
        id: &str,
        chain: &mut Vec<String>,
    ) -> Result<Value> {
        let record = modules
            .get(id)
            .ok_or_else(|| ModuleError::unknown_module(id))?;

        match record.progress() {
            Progress::Resolved { value } => return Ok(value.clone()),
            Progress::Failed { reason } => {
                return Err(ModuleError::factory(id, reason.clone()));
            }
            Progress::Resolving { exports } => {
                // `id` is its own ancestor: hand back the incomplete
                // exports object and let the cycle settle lazily.
                trace!("Cycle: {} -> {}", chain.join(" -> "), id);
                return Ok(Value::Object(exports.clone()));
            }
            Progress::Registered { .. } => {}
        }

        let dependencies = record.dependencies().to_vec();

        // The exports object must exist before any dependency resolves, so
        // that cyclic dependents have something to bind to.
        let exports = Object::new();
        let Some(factory) = modules
            .get_mut(id)
            .and_then(|record| record.begin_resolving(exports.clone()))
        else {
            return Err(ModuleError::factory(id, "module entered resolution twice"));
        };

        chain.push(id.to_string());
        trace!("Resolving module '{}' ({} dependencies)", id, dependencies.len());

        let mut args = Vec::with_capacity(dependencies.len() + 1);
        for dep in &dependencies {
            let value = match dep.as_str() {
                EXPORTS_ID => Value::Object(exports.clone()),
                MODULE_ID => module_context(id, &exports),
                _ => match self.resolve_in(modules, dep, chain) {
                    Ok(value) => value,
                    Err(err) => {
                        // The factory never ran; a record left `Resolving`
                        // would hand out placeholders forever.
                        chain.pop();
                        self.settle_failure(
                            modules,
                            id,
                            format!("dependency '{}' failed: {}", dep, err),
                        );
                        return Err(err);
                    }
                },
            };
            args.push(value);
        }

        args.push(Value::Object(exports.clone()));

        let outcome = factory(&args);
        chain.pop();

        match outcome {
            Ok(returned) => {
                let value = returned.unwrap_or_else(|| Value::Object(exports));
                if let Some(record) = modules.get_mut(id) {
                    record.complete(value.clone());
                }
                self.registry
                    .cache()
                    .set(id.to_string(), Settled::Resolved(value.clone()));
                debug!("Resolved module '{}'", id);
                Ok(value)
            }
            Err(reason) => {
                self.settle_failure(modules, id, reason.clone());
                Err(ModuleError::factory(id, reason))
            }
        }
    }

    /// Move a record to `Failed` and publish the outcome.
    fn settle_failure(
        &self,
        modules: &mut FxHashMap<String, ModuleRecord>,
        id: &str,
        reason: String,
    ) {
        warn!("Module '{}' failed: {}", id, reason);
        if let Some(record) = modules.get_mut(id) {
            record.fail(reason.clone());
        }
        self.registry.cache().set(id.to_string(), Settled::Failed(reason));
    }
}

/// Build the `module` pseudo-dependency: a context object exposing the
/// module's id and its exports object.
fn module_context(id: &str, exports: &Object) -> Value {
    let context = Object::new();
    context.set("id", Value::String(id.to_string()));
    context.set("exports", Value::Object(exports.clone()));
    Value::Object(context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module_system::record::ModuleState;

    #[test]
    fn test_is_reserved() {
        assert!(is_reserved("exports"));
        assert!(is_reserved("module"));
        assert!(!is_reserved("lodash"));
    }

    #[test]
    fn test_resolve_without_dependencies() {
        let registry = ModuleRegistry::new();
        registry
            .register("answer", &[], |_| Ok(Some(Value::Number(42.0))))
            .unwrap();

        let resolver = Resolver::new(&registry);
        assert_eq!(resolver.resolve("answer").unwrap(), Value::Number(42.0));
        assert_eq!(registry.state("answer"), Some(ModuleState::Resolved));
    }

    #[test]
    fn test_unknown_module() {
        let registry = ModuleRegistry::new();
        let result = Resolver::new(&registry).resolve("ghost");
        assert!(matches!(result, Err(ModuleError::UnknownModule(id)) if id == "ghost"));
    }

    #[test]
    fn test_no_return_resolves_to_exports() {
        let registry = ModuleRegistry::new();
        registry
            .register("bare", &[], |args| {
                let Some(Value::Object(exports)) = args.last() else {
                    return Err("missing trailing exports".to_string());
                };
                exports.set("x", Value::Number(1.0));
                Ok(None)
            })
            .unwrap();

        let value = Resolver::new(&registry).resolve("bare").unwrap();
        let exports = value.as_object().expect("exports object");
        assert_eq!(exports.get("x"), Value::Number(1.0));
    }

    #[test]
    fn test_module_context() {
        let exports = Object::new();
        let context = module_context("demo/widget", &exports);
        let context = context.as_object().expect("context object");
        assert_eq!(context.get("id"), Value::String("demo/widget".into()));
        let bound = context.get("exports");
        assert!(bound.as_object().expect("exports bound").ptr_eq(&exports));
    }
}
