// ABOUTME: Mid-session pain escalation: athlete choices, load bands, recovery mode
// ABOUTME: Intensity at the critical threshold restricts choices to conservative options
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrainSmart

//! Pain escalation policy.
//!
//! A mid-session pain report at or above the suggestion threshold suspends
//! the set loop and puts a choice to the athlete. Reports at or above the
//! critical threshold drop the "continue" options entirely. Load bands map
//! raw intensity to conservative per-region multipliers for the
//! continue-adapted path.

use serde::{Deserialize, Serialize};

use trainsmart_core::config::PainThresholds;
use trainsmart_core::models::PainEntry;

/// Options offered to the athlete after a suspending pain report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PainChoice {
    /// Resume unchanged
    ContinueNormal,
    /// Resume with the adapted load factor applied
    ContinueAdapted,
    /// Swap the current exercise for a safe alternative
    SubstituteExercise,
    /// Skip the current exercise
    SkipExercise,
    /// Skip every remaining exercise that loads the painful area
    SkipArea,
    /// End the session now, keeping all logs
    EndSession,
}

/// Per-region load multipliers for the continue-adapted path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadReduction {
    /// Multiplier for lower-body work
    pub lower_body: f64,
    /// Multiplier for upper-body work
    pub upper_body: f64,
}

/// Choices available for a reported intensity.
///
/// Below the suggestion threshold the loop does not suspend and no choice is
/// put to the athlete; this returns the continue options for completeness.
#[must_use]
pub fn available_choices(intensity: u8, thresholds: &PainThresholds) -> Vec<PainChoice> {
    if intensity >= thresholds.critical_min {
        return vec![
            PainChoice::SubstituteExercise,
            PainChoice::SkipExercise,
            PainChoice::SkipArea,
            PainChoice::EndSession,
        ];
    }
    if intensity >= thresholds.suggest_reduction_min {
        return vec![
            PainChoice::ContinueNormal,
            PainChoice::ContinueAdapted,
            PainChoice::SubstituteExercise,
            PainChoice::SkipExercise,
            PainChoice::SkipArea,
            PainChoice::EndSession,
        ];
    }
    vec![PainChoice::ContinueNormal, PainChoice::ContinueAdapted]
}

/// Load band for a reported intensity; `None` means the work should be
/// skipped outright.
#[must_use]
pub fn load_reduction_band(intensity: u8) -> Option<LoadReduction> {
    match intensity {
        0..=2 => Some(LoadReduction {
            lower_body: 0.95,
            upper_body: 0.95,
        }),
        3..=4 => Some(LoadReduction {
            lower_body: 0.75,
            upper_body: 0.80,
        }),
        5..=6 => Some(LoadReduction {
            lower_body: 0.50,
            upper_body: 0.65,
        }),
        7..=8 => Some(LoadReduction {
            lower_body: 0.25,
            upper_body: 0.40,
        }),
        _ => None,
    }
}

/// Whether repeated painful sessions warrant offering recovery mode for an
/// area.
///
/// `recent_peak_intensities` holds the peak 0-10 rating the area reached in
/// each session, most recent last. Only a trailing run of sessions at or
/// above the recovery intensity floor counts; one quiet session resets it.
#[must_use]
pub fn recovery_mode_due(recent_peak_intensities: &[u8], thresholds: &PainThresholds) -> bool {
    let consecutive = recent_peak_intensities
        .iter()
        .rev()
        .take_while(|&&intensity| intensity >= thresholds.recovery_intensity_min)
        .count() as u32;
    consecutive >= thresholds.recovery_sessions_min
}

/// Session-level verdict over every pain reported at check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultiAreaAction {
    /// Too much concurrent pain; train another day
    RestDay,
    /// Substitute the affected work and train the rest
    Substitute,
    /// Train as planned
    Proceed,
}

/// Evaluate the whole reported pain picture before a session.
///
/// Any area at the critical threshold, or more significant areas than the
/// configured maximum, calls the session off.
#[must_use]
pub fn evaluate_multi_area(pains: &[PainEntry], thresholds: &PainThresholds) -> MultiAreaAction {
    if pains.iter().any(|p| p.intensity >= thresholds.critical_min) {
        return MultiAreaAction::RestDay;
    }
    let significant = pains
        .iter()
        .filter(|p| p.intensity >= thresholds.suggest_reduction_min)
        .count();
    if significant > thresholds.max_severe_areas {
        return MultiAreaAction::RestDay;
    }
    if significant > 0 {
        return MultiAreaAction::Substitute;
    }
    MultiAreaAction::Proceed
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn critical_intensity_restricts_to_conservative_choices() {
        let choices = available_choices(7, &PainThresholds::default());
        assert!(!choices.contains(&PainChoice::ContinueNormal));
        assert!(!choices.contains(&PainChoice::ContinueAdapted));
        assert!(choices.contains(&PainChoice::EndSession));
    }

    #[test]
    fn suggestion_range_offers_everything() {
        let choices = available_choices(5, &PainThresholds::default());
        assert_eq!(choices.len(), 6);
    }

    #[test]
    fn load_bands_step_down_with_intensity() {
        let mild = load_reduction_band(2).unwrap();
        assert!((mild.lower_body - 0.95).abs() < f64::EPSILON);
        let heavy = load_reduction_band(8).unwrap();
        assert!((heavy.upper_body - 0.40).abs() < f64::EPSILON);
        assert!(load_reduction_band(9).is_none());
    }

    #[test]
    fn recovery_mode_needs_a_trailing_run_above_the_floor() {
        let thresholds = PainThresholds::default();
        assert!(recovery_mode_due(&[5, 4, 6], &thresholds));
        assert!(!recovery_mode_due(&[5, 4], &thresholds));
        // A quiet session resets the run.
        assert!(!recovery_mode_due(&[5, 5, 2, 5], &thresholds));
        // Intensity below the floor never counts.
        assert!(!recovery_mode_due(&[3, 3, 3, 3], &thresholds));
    }

    #[test]
    fn multi_area_verdict_steps_with_the_pain_picture() {
        use trainsmart_core::models::BodyArea;

        let thresholds = PainThresholds::default();
        let entry = PainEntry::from_intensity;

        assert_eq!(
            evaluate_multi_area(&[entry(BodyArea::Knee, 2)], &thresholds),
            MultiAreaAction::Proceed
        );
        assert_eq!(
            evaluate_multi_area(&[entry(BodyArea::Knee, 5)], &thresholds),
            MultiAreaAction::Substitute
        );
        // One critical area calls the day off outright.
        assert_eq!(
            evaluate_multi_area(&[entry(BodyArea::Knee, 2), entry(BodyArea::Hip, 8)], &thresholds),
            MultiAreaAction::RestDay
        );
        // Two significant areas are manageable, three are not.
        assert_eq!(
            evaluate_multi_area(
                &[entry(BodyArea::Knee, 5), entry(BodyArea::Hip, 4)],
                &thresholds
            ),
            MultiAreaAction::Substitute
        );
        assert_eq!(
            evaluate_multi_area(
                &[
                    entry(BodyArea::Knee, 5),
                    entry(BodyArea::Hip, 4),
                    entry(BodyArea::Shoulder, 6),
                ],
                &thresholds
            ),
            MultiAreaAction::RestDay
        );
    }
}
