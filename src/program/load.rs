// ABOUTME: Load math: Brzycki estimation, RIR-aware weight targets, progression increments
// ABOUTME: All outputs rounded to the 0.5 kg plate increment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrainSmart

//! Load estimation and progression math.
//!
//! Working weights are derived from the screened 10RM through the Brzycki
//! formula, then backed off by the target reps-in-reserve so the prescription
//! lands at the intended proximity to failure.

use trainsmart_core::models::{DayType, Goal, Level, MovementPattern};

/// Brzycki denominator constant; the formula is undefined at 37 reps.
const BRZYCKI_LIMIT: u32 = 37;

/// Round a load to the nearest 0.5 kg.
#[must_use]
pub fn round_to_half(weight: f64) -> f64 {
    (weight * 2.0).round() / 2.0
}

/// Estimate a one-rep max from a weight lifted for `reps` (Brzycki).
#[must_use]
pub fn estimate_one_rep_max(weight: f64, reps: u32) -> f64 {
    if reps >= BRZYCKI_LIMIT {
        return weight;
    }
    weight * 36.0 / f64::from(BRZYCKI_LIMIT - reps)
}

/// Estimate the load liftable for `target_reps` given a one-rep max (inverse
/// Brzycki). Beyond the formula's domain the estimate degrades to half the
/// one-rep max.
#[must_use]
pub fn estimate_rep_max(one_rep_max: f64, target_reps: u32) -> f64 {
    if target_reps >= BRZYCKI_LIMIT {
        return one_rep_max * 0.5;
    }
    one_rep_max * f64::from(BRZYCKI_LIMIT - target_reps) / 36.0
}

/// Derive a working weight from the screened 10RM for a rep target and a
/// reps-in-reserve target.
///
/// Leaving `target_rir` reps in reserve at `target_reps` means prescribing the
/// load for `target_reps + target_rir` true reps.
#[must_use]
pub fn calculate_weight_from_rir(baseline_10rm: f64, target_reps: u32, target_rir: u8) -> f64 {
    let one_rep_max = estimate_one_rep_max(baseline_10rm, 10);
    let effective_reps = target_reps + u32::from(target_rir);
    round_to_half(estimate_rep_max(one_rep_max, effective_reps))
}

/// Reps-in-reserve target for a prescription.
///
/// Beginners stay far from failure. Strength and sport-performance athletes
/// train one rep closer on every day type.
#[must_use]
pub fn target_rir(level: Level, goal: &Goal, day_type: DayType) -> u8 {
    if level == Level::Beginner {
        return if goal.is_high_intensity() { 2 } else { 3 };
    }
    match day_type {
        DayType::Heavy => {
            if goal.is_high_intensity() {
                1
            } else {
                2
            }
        }
        DayType::Moderate => {
            if goal.is_high_intensity() {
                2
            } else {
                3
            }
        }
        DayType::Volume => {
            if goal.is_high_intensity() {
                3
            } else {
                4
            }
        }
    }
}

/// Session-to-session weight increment for a pattern.
///
/// Lower-body patterns progress at twice the upper-body step. Splitting focus
/// across goals slows progression, and a high last-session RPE suppresses the
/// increment entirely.
#[must_use]
pub fn weight_increment(pattern: MovementPattern, goal_count: usize, last_rpe: Option<u8>) -> f64 {
    let base = if pattern.is_lower_body() { 2.5 } else { 1.25 };
    let progression = match goal_count {
        0 | 1 => 1.0,
        2 => 0.7,
        _ => 0.5,
    };
    let rpe_modifier = match last_rpe {
        Some(rpe) if rpe <= 6 => 1.5,
        Some(rpe) if rpe >= 9 => 0.0,
        Some(rpe) if rpe >= 8 => 0.5,
        _ => 1.0,
    };
    round_to_half(base * progression * rpe_modifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brzycki_round_trips_at_ten_reps() {
        let one_rm = estimate_one_rep_max(100.0, 10);
        assert!((one_rm - 133.333).abs() < 0.01);
        let back = estimate_rep_max(one_rm, 10);
        assert!((back - 100.0).abs() < 0.01);
    }

    #[test]
    fn brzycki_degrades_gracefully_past_its_domain() {
        assert!((estimate_one_rep_max(60.0, 40) - 60.0).abs() < f64::EPSILON);
        assert!((estimate_rep_max(100.0, 37) - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rir_weight_backs_off_from_the_rep_max() {
        // 10RM 100kg, 5 reps at RIR 2 -> load for a true 7RM.
        let weight = calculate_weight_from_rir(100.0, 5, 2);
        let expected = round_to_half(133.333_333 * 30.0 / 36.0);
        assert!((weight - expected).abs() < f64::EPSILON);
        assert!((weight * 2.0).fract().abs() < f64::EPSILON);
    }

    #[test]
    fn rir_targets_tighten_for_high_intensity_goals() {
        assert_eq!(target_rir(Level::Beginner, &Goal::Hypertrophy, DayType::Heavy), 3);
        assert_eq!(target_rir(Level::Beginner, &Goal::Strength, DayType::Volume), 2);
        assert_eq!(target_rir(Level::Advanced, &Goal::Strength, DayType::Heavy), 1);
        assert_eq!(target_rir(Level::Intermediate, &Goal::Hypertrophy, DayType::Volume), 4);
        assert_eq!(target_rir(Level::Intermediate, &Goal::Endurance, DayType::Moderate), 3);
    }

    #[test]
    fn increments_scale_with_pattern_goals_and_rpe() {
        assert!((weight_increment(MovementPattern::LowerPush, 1, None) - 2.5).abs() < f64::EPSILON);
        assert!(
            (weight_increment(MovementPattern::HorizontalPush, 1, None) - 1.25).abs()
                < f64::EPSILON
        );
        // Two goals: 2.5 * 0.7 = 1.75 -> rounds to 2.0.
        assert!((weight_increment(MovementPattern::LowerPush, 2, None) - 2.0).abs() < f64::EPSILON);
        // Easy last session: 1.25 * 1.5 = 1.875 -> rounds to 2.0.
        assert!(
            (weight_increment(MovementPattern::VerticalPush, 1, Some(5)) - 2.0).abs()
                < f64::EPSILON
        );
        // Grinding RPE suppresses progression.
        assert!(weight_increment(MovementPattern::LowerPull, 1, Some(9)).abs() < f64::EPSILON);
    }
}
