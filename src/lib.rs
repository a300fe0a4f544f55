// ABOUTME: Adaptive resistance-training engine: periodization, pain substitution, auto-regulation
// ABOUTME: In-process library crate; no network surface, invoked by the runtime shell
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrainSmart

#![deny(unsafe_code)]

//! # TrainSmart Engine
//!
//! Generates and continuously adapts personalized resistance-training
//! programs. Given per-pattern strength baselines, a stated goal, location,
//! and reported pain, the engine produces a structured multi-day program and
//! then, set-by-set during a live session, recalibrates load, volume, and
//! exercise selection from perceived-effort feedback.
//!
//! ## Engines
//!
//! - [`volume`]: DUP periodization rules mapping (baseline, goal, level,
//!   location, day-type) to a sets/reps/rest/intensity prescription
//! - [`pain`]: severity-ranked exercise substitution and deload policy
//! - [`session`]: per-set auto-regulation state machine
//!
//! ## Supporting modules
//!
//! - [`program`]: assembles baselines + volume + pain guidance into programs
//!   and weekly splits
//! - [`storage`]: persistence boundary for durable adjustments and set logs
//! - [`rest`]: rest-prescription parsing shared by programs and sessions

pub use trainsmart_core::config;
pub use trainsmart_core::errors;
pub use trainsmart_core::models;

/// DUP volume/intensity calculator
pub mod volume;

/// Pain knowledge base, conflict detection, substitution, and deload policy
pub mod pain;

/// Program assembly and weekly split generation
pub mod program;

/// Live-session auto-regulation state machine
pub mod session;

/// Persistence boundary for durable adjustments and set logs
pub mod storage;

/// Rest-prescription parsing ("90s", "2-3min")
pub mod rest;
