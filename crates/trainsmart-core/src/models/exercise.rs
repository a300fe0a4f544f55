// ABOUTME: Exercise prescriptions, volume results, programs, and weekly splits
// ABOUTME: Output types of the volume calculator and program assembler
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrainSmart

//! Prescription output types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::baseline::{Goal, Level, MovementPattern};

/// A repetition prescription: either a fixed count or an inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reps {
    /// Exact repetition count
    Fixed(u32),
    /// Inclusive repetition range, e.g. 10-15
    Range(u32, u32),
}

impl Reps {
    /// Lower bound of the prescription, used for duration math and deloads.
    #[must_use]
    pub fn target(self) -> u32 {
        match self {
            Self::Fixed(n) | Self::Range(n, _) => n,
        }
    }
}

impl fmt::Display for Reps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(n) => write!(f, "{n}"),
            Self::Range(lo, hi) => write!(f, "{lo}-{hi}"),
        }
    }
}

/// Pure output of the volume/intensity calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeResult {
    /// Working sets
    pub sets: u32,
    /// Repetitions per set
    pub reps: u32,
    /// Rest prescription, e.g. "90s" or "2-3min"
    pub rest: String,
    /// Intensity band, e.g. "75%" or "85-90%"
    pub intensity: String,
    /// Day label, e.g. "Heavy Day - Maximal strength"
    pub notes: String,
}

/// Back-reference from a prescribed exercise to the screening baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineRef {
    /// Variant that was tested
    pub variant_id: String,
    /// Subjective difficulty rating, 1-10
    pub difficulty: u8,
    /// Observed max reps
    pub max_reps: u32,
}

/// A prescribed exercise within a program or live session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    /// Display name of the variant to perform
    pub name: String,
    /// Movement pattern this exercise trains
    pub pattern: MovementPattern,
    /// Working sets
    pub sets: u32,
    /// Repetition prescription
    pub reps: Reps,
    /// Rest prescription, e.g. "90s"
    pub rest: String,
    /// Intensity band, e.g. "75%" or "Low"
    pub intensity: String,
    /// Suggested working weight in kg, when derivable from screening
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Screening baseline this prescription traces to (absent for correctives)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline: Option<BaselineRef>,
    /// Superset pairing; exercises sharing a group alternate sets without rest
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superset_group: Option<u32>,
    /// True when pain management replaced the originally selected variant
    #[serde(default)]
    pub was_replaced: bool,
    /// Free-form prescription notes
    pub notes: String,
}

/// A generated single-day program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    /// Display name
    pub name: String,
    /// Split label, e.g. "FULL BODY" or "UPPER/LOWER"
    pub split: String,
    /// Ordered exercise list
    pub exercises: Vec<Exercise>,
    /// Athlete level the program was built for
    pub level: Level,
    /// Primary goal
    pub goal: Goal,
    /// Weekly training frequency
    pub frequency: u8,
    /// Program-level notes
    pub notes: String,
}

/// One training day inside a weekly split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayWorkout {
    /// 1-based day number within the week
    pub day_number: u8,
    /// Display name, e.g. "Day 1 - Full Body A"
    pub day_name: String,
    /// Short focus description
    pub focus: String,
    /// Ordered exercise list
    pub exercises: Vec<Exercise>,
    /// Estimated duration in minutes, including warm-up and cool-down
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_duration: Option<u32>,
}

/// A generated multi-day weekly split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySplit {
    /// Display name, e.g. "Full Body 3x/week"
    pub split_name: String,
    /// Longer description of the split strategy
    pub description: String,
    /// Training days in week order
    pub days: Vec<DayWorkout>,
    /// Mean estimated workout duration in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_duration: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reps_display_matches_prescription_format() {
        assert_eq!(Reps::Fixed(8).to_string(), "8");
        assert_eq!(Reps::Range(10, 15).to_string(), "10-15");
    }

    #[test]
    fn reps_target_uses_lower_bound() {
        assert_eq!(Reps::Fixed(5).target(), 5);
        assert_eq!(Reps::Range(12, 15).target(), 12);
    }
}
