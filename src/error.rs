// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Error types for module registration and resolution

use thiserror::Error;

/// Result type for module system operations
pub type Result<T> = std::result::Result<T, ModuleError>;

/// Errors that can occur while registering or resolving modules
#[derive(Debug, Error)]
pub enum ModuleError {
    /// An id was registered twice
    #[error("Module already registered: '{0}'")]
    DuplicateId(String),

    /// Requested id was never registered
    #[error("Cannot find module '{0}'")]
    UnknownModule(String),

    /// Module id is empty or contains forbidden characters
    #[error("Invalid module id: {0:?}")]
    InvalidId(String),

    /// Module id collides with a reserved dependency name
    #[error("Reserved module id: '{0}'")]
    ReservedId(String),

    /// A module factory failed, on this attempt or an earlier one
    #[error("Factory for module '{id}' failed: {reason}")]
    Factory {
        /// Id of the failed module
        id: String,
        /// Reason reported by the factory
        reason: String,
    },

    /// A value that is not a function was called
    #[error("TypeError: {0} is not a function")]
    NotCallable(&'static str),

    /// A native function returned an error
    #[error("{0}")]
    CallFailed(String),
}

impl ModuleError {
    /// Create an UnknownModule error
    pub fn unknown_module(id: impl Into<String>) -> Self {
        Self::UnknownModule(id.into())
    }

    /// Create a Factory error
    pub fn factory(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Factory {
            id: id.into(),
            reason: reason.into(),
        }
    }
}
