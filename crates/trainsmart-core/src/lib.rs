// ABOUTME: Core types and configuration for the TrainSmart adaptive training engine
// ABOUTME: Foundation crate with models, error handling, and threshold configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrainSmart

#![deny(unsafe_code)]

//! # TrainSmart Core
//!
//! Foundation crate providing shared types for the TrainSmart adaptive
//! training engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `EngineError` and `EngineResult`
//! - **models**: Domain types (baselines, goals, exercises, pain, session records)
//! - **config**: Tunable engine thresholds with sensible defaults

/// Unified error handling for the engine crates
pub mod errors;

/// Domain data models (baselines, exercises, pain entries, session records)
pub mod models;

/// Engine threshold configuration with `Default` implementations
pub mod config;
