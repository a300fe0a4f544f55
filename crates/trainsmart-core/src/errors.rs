// ABOUTME: Unified error types for the TrainSmart engine crates
// ABOUTME: Provides EngineError, EngineResult, and constructor helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrainSmart

//! # Engine Error Types
//!
//! The engine degrades gracefully wherever it can: unrecognized goals fall
//! through to defaults, lookup misses return the input unchanged, and
//! persistence failures are logged and swallowed at the call site. The
//! variants here cover the cases that cannot degrade silently:
//!
//! - `InvalidInput` - numeric input rejected at the boundary (zero reps,
//!   negative weight)
//! - `InvalidTransition` - a session operation called in the wrong phase
//! - `Storage` - a persistence call failed (callers log and continue)

use thiserror::Error;

/// Result alias used throughout the engine crates.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors surfaced by the engine.
#[derive(Debug, Clone, Error)]
pub enum EngineError {
    /// Numeric or structural input rejected before reaching the engine
    #[error("invalid input for {field}: {reason}")]
    InvalidInput {
        /// Name of the offending field
        field: String,
        /// Why the value was rejected
        reason: String,
    },

    /// A session operation was requested in a phase that does not accept it
    #[error("invalid session transition: {operation} not accepted while {phase}")]
    InvalidTransition {
        /// The requested operation
        operation: String,
        /// The phase the session was in
        phase: String,
    },

    /// A persistence call failed; sessions continue on in-memory state
    #[error("storage operation failed: {details}")]
    Storage {
        /// Details about the failure
        details: String,
    },
}

impl EngineError {
    /// Create an "invalid input" error
    #[must_use]
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create an "invalid transition" error
    #[must_use]
    pub fn invalid_transition(operation: impl Into<String>, phase: impl Into<String>) -> Self {
        Self::InvalidTransition {
            operation: operation.into(),
            phase: phase.into(),
        }
    }

    /// Create a "storage" error
    #[must_use]
    pub fn storage(details: impl Into<String>) -> Self {
        Self::Storage {
            details: details.into(),
        }
    }
}
