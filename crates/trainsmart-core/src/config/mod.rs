// ABOUTME: Tunable engine thresholds with Default implementations
// ABOUTME: Auto-regulation deltas and pain escalation thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrainSmart

//! # Engine Configuration
//!
//! Threshold configuration consumed by the auto-regulation loop and the pain
//! escalation logic. Defaults encode the hand-tuned production values; embedders
//! may override individual groups via `EngineConfig { .. }`.

use serde::{Deserialize, Serialize};

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Rep-delta and RIR auto-regulation thresholds
    pub auto_regulation: AutoRegulationConfig,
    /// Pain escalation thresholds
    pub pain: PainThresholds,
}

/// Thresholds for the per-set auto-regulation loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoRegulationConfig {
    /// Rep deficit at which load is reduced immediately
    pub rep_deficit_reduce: i32,
    /// Rep deficit that is logged for next-session recalibration only
    pub rep_deficit_monitor: i32,
    /// Rep surplus at which load is raised by the large step
    pub rep_surplus_large: i32,
    /// Rep surplus at which load is raised by the small step
    pub rep_surplus_small: i32,
    /// Multiplier applied on an immediate reduction
    pub reduce_factor: f64,
    /// Multiplier for the small immediate increase
    pub increase_factor_small: f64,
    /// Multiplier for the large immediate increase
    pub increase_factor_large: f64,
    /// RIR shortfall that triggers a downgrade
    pub rir_downgrade_delta: i32,
    /// RIR shortfall that escalates the downgrade alert to critical
    pub rir_critical_delta: i32,
    /// RIR surplus that triggers an upgrade
    pub rir_upgrade_delta: i32,
    /// Per-RIR-point weight reduction on a downgrade, percent
    pub downgrade_percent_per_rir: f64,
    /// Cap on the downgrade weight reduction, percent
    pub downgrade_percent_cap: f64,
    /// Multiplier applied when an upgrade raises the weight
    pub upgrade_weight_factor: f64,
}

impl Default for AutoRegulationConfig {
    fn default() -> Self {
        Self {
            rep_deficit_reduce: -4,
            rep_deficit_monitor: -2,
            rep_surplus_large: 5,
            rep_surplus_small: 3,
            reduce_factor: 0.90,
            increase_factor_small: 1.05,
            increase_factor_large: 1.10,
            rir_downgrade_delta: -2,
            rir_critical_delta: -3,
            rir_upgrade_delta: 2,
            downgrade_percent_per_rir: 5.0,
            downgrade_percent_cap: 15.0,
            upgrade_weight_factor: 1.05,
        }
    }
}

/// Thresholds for mid-session pain escalation and recovery mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PainThresholds {
    /// 0-10 intensity at which the loop suspends for an athlete choice
    pub suggest_reduction_min: u8,
    /// 0-10 intensity at which only conservative choices are offered
    pub critical_min: u8,
    /// Intensity increase over the session's first report that raises an alert
    pub progressive_alert_delta: u8,
    /// Number of severe areas before a full rest day is suggested
    pub max_severe_areas: usize,
    /// Consecutive sessions at or above `recovery_intensity_min` before
    /// recovery mode is offered
    pub recovery_sessions_min: u32,
    /// Intensity floor for the recovery-mode counter
    pub recovery_intensity_min: u8,
    /// Load multiplier published for the "continue adapted" choice
    pub adapted_load_factor: f64,
}

impl Default for PainThresholds {
    fn default() -> Self {
        Self {
            suggest_reduction_min: 4,
            critical_min: 7,
            progressive_alert_delta: 2,
            max_severe_areas: 2,
            recovery_sessions_min: 3,
            recovery_intensity_min: 4,
            adapted_load_factor: 0.75,
        }
    }
}
