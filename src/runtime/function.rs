// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Native function representation.

use super::value::Value;
use std::fmt;
use std::sync::Arc;

/// Signature of a native (Rust) function exposed as a value.
pub type NativeFn = dyn Fn(&[Value]) -> Result<Value, String> + Send + Sync;

/// A callable value: a named or anonymous native function.
#[derive(Clone)]
pub struct Callable {
    name: Option<String>,
    func: Arc<NativeFn>,
}

impl Callable {
    /// Creates an anonymous callable.
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, String> + Send + Sync + 'static,
    {
        Self {
            name: None,
            func: Arc::new(func),
        }
    }

    /// Creates a named callable.
    pub fn named<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, String> + Send + Sync + 'static,
    {
        Self {
            name: Some(name.into()),
            func: Arc::new(func),
        }
    }

    /// The function name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Invokes the underlying function.
    pub fn invoke(&self, args: &[Value]) -> Result<Value, String> {
        (self.func)(args)
    }

    /// Checks whether two callables share the same underlying function.
    pub fn ptr_eq(&self, other: &Callable) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "NativeFunction({})", name),
            None => write!(f, "NativeFunction(anonymous)"),
        }
    }
}
