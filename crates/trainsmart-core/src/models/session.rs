// ABOUTME: Live-session records shared with the persistence boundary
// ABOUTME: Set logs, durable exercise modifications, tempo modifiers, safety alerts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrainSmart

//! Session-side records.
//!
//! These types cross the persistence boundary: the session controller writes
//! them fire-and-forget during a live session and reads
//! [`ExerciseModification`]s back at the start of the next one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Append-only record of one completed set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetLog {
    /// 1-based set number within the exercise
    pub set_number: u32,
    /// Repetitions actually completed
    pub reps_completed: u32,
    /// Load used in kg, when weight-bearing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_used: Option<f64>,
    /// Rating of perceived exertion, 1-10
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpe: Option<u8>,
    /// Reps in reserve, 0-5
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rir: Option<u8>,
    /// True when this set triggered an automatic adjustment
    #[serde(default)]
    pub adjusted: bool,
    /// Human-readable reason for the adjustment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjustment_reason: Option<String>,
}

/// A time-under-tension prescription that raises difficulty without changing
/// the exercise or the load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TempoModifier {
    /// Stable identifier, e.g. "slow_eccentric"
    pub id: String,
    /// Tempo notation, eccentric-pause-concentric, e.g. "3-1-1"
    pub tempo: String,
    /// Short athlete-facing description
    pub description: String,
}

impl TempoModifier {
    /// First time-under-tension step: slow eccentric.
    #[must_use]
    pub fn slow_eccentric() -> Self {
        Self {
            id: "slow_eccentric".to_owned(),
            tempo: "3-1-1".to_owned(),
            description: "Three-second lowering phase".to_owned(),
        }
    }

    /// Whether this modifier adds time-under-tension over the standard tempo.
    #[must_use]
    pub fn is_aggravator(&self) -> bool {
        self.id != "standard"
    }
}

/// A durable delta applied to an exercise, keyed by (athlete, program,
/// exercise). Written when RIR validation downgrades or upgrades; read back at
/// the start of later sessions to restore state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseModification {
    /// Athlete the modification belongs to
    pub athlete_id: Uuid,
    /// Program the modification belongs to
    pub program_id: Uuid,
    /// Exercise the modification applies to (original prescription name)
    pub exercise_name: String,
    /// Variant originally prescribed
    pub original_variant: String,
    /// Variant currently in effect
    pub current_variant: String,
    /// Active tempo modifier, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tempo_modifier: Option<TempoModifier>,
    /// Originally prescribed weight in kg
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_weight: Option<f64>,
    /// Weight currently in effect in kg
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_weight: Option<f64>,
    /// Originally prescribed reps
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_reps: Option<u32>,
    /// Reps currently in effect
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_reps: Option<u32>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Severity of a safety alert raised by RIR validation or pain escalation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    /// Athlete pushed past the target; monitor
    Warning,
    /// Athlete substantially exceeded safe effort; intervene
    Critical,
}

/// A safety alert recorded for coach review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyAlert {
    /// Athlete the alert concerns
    pub athlete_id: Uuid,
    /// Alert severity
    pub severity: AlertSeverity,
    /// Exercise that triggered the alert
    pub exercise: String,
    /// Human-readable explanation
    pub message: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}
