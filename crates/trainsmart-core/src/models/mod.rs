// ABOUTME: Domain data models for the TrainSmart engine
// ABOUTME: Baselines, goals, exercises, pain entries, and session records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrainSmart

//! # Domain Models
//!
//! Shared data types consumed by the engines:
//!
//! - **baseline**: movement patterns, per-pattern screening baselines, athlete
//!   level/goal/location enums
//! - **exercise**: prescriptions, volume results, programs, weekly splits
//! - **pain**: body areas, severities, pain entries
//! - **session**: set logs, durable modifications, tempo modifiers, alerts

/// Movement patterns, screening baselines, athlete profile enums
pub mod baseline;

/// Exercise prescriptions, programs, and weekly splits
pub mod exercise;

/// Pain reporting types
pub mod pain;

/// Live-session records (set logs, modifications, safety alerts)
pub mod session;

pub use baseline::{DayType, Goal, Level, Location, MovementPattern, PatternBaseline, PatternBaselines, TrainingType};
pub use exercise::{BaselineRef, DayWorkout, Exercise, Program, Reps, VolumeResult, WeeklySplit};
pub use pain::{BodyArea, PainEntry, PainSeverity};
pub use session::{AlertSeverity, ExerciseModification, SafetyAlert, SetLog, TempoModifier};
