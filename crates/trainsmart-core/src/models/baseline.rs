// ABOUTME: Movement patterns, screening baselines, and athlete profile enums
// ABOUTME: Inputs consumed by the volume calculator and program assembler
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrainSmart

//! Screening output and athlete profile types.
//!
//! A screening session measures one [`PatternBaseline`] per movement pattern.
//! Baselines are immutable once screening completes; one per pattern per
//! athlete per mesocycle.

use serde::{Deserialize, Serialize};

/// Movement category a baseline is measured against.
///
/// `Corrective` is reserved for rehabilitative work appended by the pain
/// engine; corrective exercises are never auto-regulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementPattern {
    /// Squat-type (knee-dominant) lower body work
    LowerPush,
    /// Hinge-type (hip-dominant) lower body work
    LowerPull,
    /// Bench/push-up plane pressing
    HorizontalPush,
    /// Row plane pulling
    HorizontalPull,
    /// Overhead pressing
    VerticalPush,
    /// Pull-up/pulldown plane pulling
    VerticalPull,
    /// Trunk stability and flexion work
    Core,
    /// Low-load rehabilitative work targeting a painful area
    Corrective,
}

impl MovementPattern {
    /// Canonical prescription order used at program generation.
    pub const GENERATION_ORDER: [Self; 6] = [
        Self::LowerPush,
        Self::HorizontalPush,
        Self::VerticalPush,
        Self::VerticalPull,
        Self::LowerPull,
        Self::Core,
    ];

    /// Whether the auto-regulation loop may adjust exercises of this pattern.
    #[must_use]
    pub fn is_auto_regulated(self) -> bool {
        self != Self::Corrective
    }

    /// Whether this pattern primarily loads the lower body.
    #[must_use]
    pub fn is_lower_body(self) -> bool {
        matches!(self, Self::LowerPush | Self::LowerPull)
    }

    /// Stable snake_case identifier.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LowerPush => "lower_push",
            Self::LowerPull => "lower_pull",
            Self::HorizontalPush => "horizontal_push",
            Self::HorizontalPull => "horizontal_pull",
            Self::VerticalPush => "vertical_push",
            Self::VerticalPull => "vertical_pull",
            Self::Core => "core",
            Self::Corrective => "corrective",
        }
    }
}

/// Per-pattern measured capability from the screening session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternBaseline {
    /// Identifier of the exercise variant actually tested
    pub variant_id: String,
    /// Display name of the tested variant
    pub variant_name: String,
    /// Observed repetitions at the reference load
    pub max_reps: u32,
    /// Subjective difficulty rating, 1-10
    pub difficulty: u8,
    /// 10RM load in kg when the test was performed with external load
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_10rm: Option<f64>,
}

/// One optional baseline per measured movement pattern.
///
/// `horizontal_pull` is not screened directly; the assembler estimates it
/// from `vertical_pull` when building row work.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatternBaselines {
    /// Squat-type baseline
    pub lower_push: Option<PatternBaseline>,
    /// Hinge-type baseline
    pub lower_pull: Option<PatternBaseline>,
    /// Horizontal pressing baseline
    pub horizontal_push: Option<PatternBaseline>,
    /// Overhead pressing baseline
    pub vertical_push: Option<PatternBaseline>,
    /// Vertical pulling baseline
    pub vertical_pull: Option<PatternBaseline>,
    /// Core baseline
    pub core: Option<PatternBaseline>,
}

impl PatternBaselines {
    /// Baseline for a pattern, if it was measured.
    #[must_use]
    pub fn get(&self, pattern: MovementPattern) -> Option<&PatternBaseline> {
        match pattern {
            MovementPattern::LowerPush => self.lower_push.as_ref(),
            MovementPattern::LowerPull => self.lower_pull.as_ref(),
            MovementPattern::HorizontalPush => self.horizontal_push.as_ref(),
            MovementPattern::VerticalPush => self.vertical_push.as_ref(),
            MovementPattern::VerticalPull => self.vertical_pull.as_ref(),
            MovementPattern::Core => self.core.as_ref(),
            MovementPattern::HorizontalPull | MovementPattern::Corrective => None,
        }
    }
}

/// Training experience tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    /// New trainee; fixed anatomical-adaptation prescriptions
    Beginner,
    /// Established trainee; full DUP prescriptions
    Intermediate,
    /// Advanced trainee; higher set counts, tighter RIR targets
    Advanced,
}

/// Where the athlete trains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    /// Commercial gym with external load available
    Gym,
    /// Home training, bodyweight-dominant
    Home,
}

/// Equipment style the athlete selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingType {
    /// Bodyweight-only work
    Bodyweight,
    /// Free weights and bars
    Equipment,
    /// Guided machines
    Machines,
}

/// Daily undulating periodization day classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// High intensity, low reps
    Heavy,
    /// High volume, moderate intensity
    Volume,
    /// Submaximal middle ground
    Moderate,
}

/// Stated training goal.
///
/// Screening passes goals through as free text; [`Goal::parse`] accepts both
/// the English and Italian aliases the intake flow produces. Unrecognized
/// strings are carried in `Other` and receive the generic fallback
/// prescription rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Goal {
    /// Maximal strength
    Strength,
    /// Muscle gain
    Hypertrophy,
    /// Fat loss / toning
    FatLoss,
    /// Muscular endurance
    Endurance,
    /// Balanced general fitness
    GeneralFitness,
    /// Sport-specific performance
    SportPerformance,
    /// Motor recovery / rehabilitation
    MotorRecovery,
    /// Pregnancy-safe training
    Pregnancy,
    /// Adapted training
    Disability,
    /// Unrecognized goal string, kept verbatim for display
    Other(String),
}

impl Goal {
    /// Parse a goal string, accepting the intake flow's aliases.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "strength" | "forza" => Self::Strength,
            "muscle_gain" | "massa" | "massa muscolare" | "ipertrofia" | "hypertrophy" => {
                Self::Hypertrophy
            }
            "fat_loss" | "dimagrimento" | "tonificazione" | "definizione" | "toning" => {
                Self::FatLoss
            }
            "endurance" | "resistenza" => Self::Endurance,
            "general_fitness" | "benessere" => Self::GeneralFitness,
            "sport_performance" | "prestazioni_sportive" | "performance" => Self::SportPerformance,
            "motor_recovery" | "recupero_motorio" => Self::MotorRecovery,
            "pregnancy" | "gravidanza" => Self::Pregnancy,
            "disability" | "disabilita" => Self::Disability,
            _ => Self::Other(raw.trim().to_owned()),
        }
    }

    /// Goals trained close to failure (tighter RIR targets).
    #[must_use]
    pub fn is_high_intensity(&self) -> bool {
        matches!(self, Self::Strength | Self::SportPerformance)
    }

    /// Stable identifier for display and serialization.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Strength => "strength",
            Self::Hypertrophy => "muscle_gain",
            Self::FatLoss => "fat_loss",
            Self::Endurance => "endurance",
            Self::GeneralFitness => "general_fitness",
            Self::SportPerformance => "sport_performance",
            Self::MotorRecovery => "motor_recovery",
            Self::Pregnancy => "pregnancy",
            Self::Disability => "disability",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for Goal {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<Goal> for String {
    fn from(goal: Goal) -> Self {
        goal.as_str().to_owned()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn goal_parse_accepts_italian_aliases() {
        assert_eq!(Goal::parse("forza"), Goal::Strength);
        assert_eq!(Goal::parse("Massa Muscolare"), Goal::Hypertrophy);
        assert_eq!(Goal::parse("benessere"), Goal::GeneralFitness);
        assert_eq!(Goal::parse("recupero_motorio"), Goal::MotorRecovery);
    }

    #[test]
    fn goal_parse_keeps_unknown_strings() {
        assert_eq!(
            Goal::parse("crossfit"),
            Goal::Other("crossfit".to_owned())
        );
    }

    #[test]
    fn corrective_pattern_is_never_auto_regulated() {
        assert!(!MovementPattern::Corrective.is_auto_regulated());
        assert!(MovementPattern::Core.is_auto_regulated());
    }

    #[test]
    fn goal_serde_round_trips_through_strings() {
        let json = serde_json::to_string(&Goal::Strength).unwrap();
        assert_eq!(json, "\"strength\"");
        let back: Goal = serde_json::from_str("\"forza\"").unwrap();
        assert_eq!(back, Goal::Strength);
    }
}
