// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Module records and their resolution state

use crate::runtime::{Object, Value};
use std::fmt;

/// Factory signature for module bodies.
///
/// Receives the resolved dependency values in declaration order, followed
/// by the module's own exports object as trailing argument. Returning
/// `Ok(None)` resolves the module to its exports object.
pub type Factory = Box<dyn Fn(&[Value]) -> Result<Option<Value>, String> + Send + Sync>;

/// Resolution state of a module record.
///
/// Transitions are monotonic: `Registered → Resolving → Resolved` or
/// `Registered → Resolving → Failed`. A record never leaves a terminal
/// state and `Resolving` is entered at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleState {
    /// Registered; factory not yet invoked
    Registered,
    /// On the current resolution chain; the exports object exists but may
    /// still be incomplete
    Resolving,
    /// Terminal: the resolved value is final
    Resolved,
    /// Terminal: the factory or a dependency failed
    Failed,
}

/// Resolution progress, carrying the data valid for each state.
pub(crate) enum Progress {
    /// Factory waiting to run
    Registered {
        /// The module factory, consumed on entry to `Resolving`
        factory: Factory,
    },
    /// Mid-resolution; `exports` is the placeholder handed to cyclic
    /// dependents
    Resolving {
        /// The module's exports object
        exports: Object,
    },
    /// Finished
    Resolved {
        /// The final module value
        value: Value,
    },
    /// Failed for good
    Failed {
        /// Reason replayed on every later resolution attempt
        reason: String,
    },
}

/// A registered module: id, ordered dependencies, and resolution progress.
pub struct ModuleRecord {
    id: String,
    dependencies: Vec<String>,
    progress: Progress,
}

impl ModuleRecord {
    pub(crate) fn new(id: String, dependencies: Vec<String>, factory: Factory) -> Self {
        Self {
            id,
            dependencies,
            progress: Progress::Registered { factory },
        }
    }

    /// The module's id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Declared dependency ids, in factory argument order.
    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    /// Current resolution state.
    pub fn state(&self) -> ModuleState {
        match self.progress {
            Progress::Registered { .. } => ModuleState::Registered,
            Progress::Resolving { .. } => ModuleState::Resolving,
            Progress::Resolved { .. } => ModuleState::Resolved,
            Progress::Failed { .. } => ModuleState::Failed,
        }
    }

    pub(crate) fn progress(&self) -> &Progress {
        &self.progress
    }

    /// Enters `Resolving`, installing the freshly created exports object
    /// and handing the factory to the caller. Returns `None` if the record
    /// is not `Registered`; the record is left untouched in that case.
    pub(crate) fn begin_resolving(&mut self, exports: Object) -> Option<Factory> {
        if !matches!(self.progress, Progress::Registered { .. }) {
            return None;
        }
        match std::mem::replace(&mut self.progress, Progress::Resolving { exports }) {
            Progress::Registered { factory } => Some(factory),
            _ => None,
        }
    }

    /// Enters the `Resolved` terminal state.
    pub(crate) fn complete(&mut self, value: Value) {
        debug_assert_eq!(self.state(), ModuleState::Resolving);
        self.progress = Progress::Resolved { value };
    }

    /// Enters the `Failed` terminal state.
    pub(crate) fn fail(&mut self, reason: String) {
        debug_assert_eq!(self.state(), ModuleState::Resolving);
        self.progress = Progress::Failed { reason };
    }
}

impl fmt::Debug for ModuleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleRecord")
            .field("id", &self.id)
            .field("dependencies", &self.dependencies)
            .field("state", &self.state())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> ModuleRecord {
        ModuleRecord::new(id.to_string(), Vec::new(), Box::new(|_| Ok(None)))
    }

    #[test]
    fn test_states_walk_forward() {
        let mut rec = record("m");
        assert_eq!(rec.state(), ModuleState::Registered);

        let factory = rec.begin_resolving(Object::new());
        assert!(factory.is_some());
        assert_eq!(rec.state(), ModuleState::Resolving);

        rec.complete(Value::Number(1.0));
        assert_eq!(rec.state(), ModuleState::Resolved);
    }

    #[test]
    fn test_resolving_is_entered_at_most_once() {
        let mut rec = record("m");
        assert!(rec.begin_resolving(Object::new()).is_some());
        assert!(rec.begin_resolving(Object::new()).is_none());
        assert_eq!(rec.state(), ModuleState::Resolving);
    }

    #[test]
    fn test_failure_is_terminal() {
        let mut rec = record("m");
        rec.begin_resolving(Object::new());
        rec.fail("broken".to_string());
        assert_eq!(rec.state(), ModuleState::Failed);
        assert!(rec.begin_resolving(Object::new()).is_none());
    }
}
