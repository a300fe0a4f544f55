// ABOUTME: Per-set rep-delta auto-regulation with an in-session oscillation guard
// ABOUTME: Immediate weight changes apply to loaded work only; bodyweight work is monitored
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrainSmart

//! Rep-delta evaluation.
//!
//! Compares completed reps against the per-set target. Large deficits reduce
//! the load for the next set immediately; large surpluses raise it. Small
//! misses are only logged so one bad set never whipsaws the prescription.
//!
//! The oscillation guard refuses an immediate change that would reverse the
//! previous automatic change within the same session and surfaces an advisory
//! instead. Reps-in-reserve modifications target the next session and are
//! exempt.

use serde::{Deserialize, Serialize};

use trainsmart_core::config::AutoRegulationConfig;

use crate::program::round_to_half;

/// Direction of an automatic in-session weight change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Load was reduced
    Down,
    /// Load was raised
    Up,
}

/// Result of evaluating one set's rep delta.
#[derive(Debug, Clone, PartialEq)]
pub enum RepDeltaOutcome {
    /// Load changed for the remaining sets
    Adjusted {
        /// Weight now in effect, in kg
        new_weight: f64,
        /// Which way the load moved
        direction: Direction,
        /// Athlete-facing explanation
        reason: String,
    },
    /// Deficit logged for next-session recalibration, no immediate change
    Monitor {
        /// Signed rep delta
        delta: i32,
    },
    /// Small surplus logged, no immediate change
    Noted {
        /// Signed rep delta
        delta: i32,
    },
    /// Within tolerance of the target
    OnTarget,
    /// Change refused because it would reverse this session's previous
    /// automatic adjustment
    Suppressed {
        /// Direction the refused change would have taken
        direction: Direction,
        /// Advisory for the athlete or coach
        advisory: String,
    },
}

impl RepDeltaOutcome {
    /// Whether this outcome changed the working weight.
    #[must_use]
    pub fn is_adjustment(&self) -> bool {
        matches!(self, Self::Adjusted { .. })
    }
}

/// Evaluate one set's completed reps against the target.
///
/// `current_weight` of `None` (or zero) marks bodyweight work: deficits and
/// surpluses are recorded but the prescription is never changed mid-session.
#[must_use]
pub fn evaluate_rep_delta(
    target_reps: u32,
    reps_completed: u32,
    current_weight: Option<f64>,
    last_direction: Option<Direction>,
    config: &AutoRegulationConfig,
) -> RepDeltaOutcome {
    let delta = reps_completed as i32 - target_reps as i32;
    let loaded = current_weight.is_some_and(|w| w > 0.0);

    if delta <= config.rep_deficit_reduce {
        if !loaded {
            return RepDeltaOutcome::Monitor { delta };
        }
        return attempt_change(
            current_weight,
            config.reduce_factor,
            Direction::Down,
            last_direction,
            format!("{} reps under target, reducing load", -delta),
        );
    }
    if delta <= config.rep_deficit_monitor {
        return RepDeltaOutcome::Monitor { delta };
    }
    if delta >= config.rep_surplus_large {
        if !loaded {
            return RepDeltaOutcome::Noted { delta };
        }
        return attempt_change(
            current_weight,
            config.increase_factor_large,
            Direction::Up,
            last_direction,
            format!("{delta} reps over target, raising load"),
        );
    }
    if delta >= config.rep_surplus_small {
        if !loaded {
            return RepDeltaOutcome::Noted { delta };
        }
        return attempt_change(
            current_weight,
            config.increase_factor_small,
            Direction::Up,
            last_direction,
            format!("{delta} reps over target, raising load slightly"),
        );
    }
    if delta == 0 {
        return RepDeltaOutcome::OnTarget;
    }
    RepDeltaOutcome::Noted { delta }
}

fn attempt_change(
    current_weight: Option<f64>,
    factor: f64,
    direction: Direction,
    last_direction: Option<Direction>,
    reason: String,
) -> RepDeltaOutcome {
    let Some(weight) = current_weight else {
        return RepDeltaOutcome::OnTarget;
    };
    if last_direction.is_some() && last_direction != Some(direction) {
        tracing::warn!(?direction, "oscillation guard suppressed a load change");
        return RepDeltaOutcome::Suppressed {
            direction,
            advisory: "Load already moved the other way this session; review the prescription"
                .to_owned(),
        };
    }
    RepDeltaOutcome::Adjusted {
        new_weight: round_to_half(weight * factor),
        direction,
        reason,
    }
}
