// ABOUTME: DUP volume/intensity calculator mapping baseline+goal+level+day to a prescription
// ABOUTME: Pure and total over its inputs; unrecognized goals fall through to a generic default
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrainSmart

//! # Volume/Intensity Calculator
//!
//! Daily Undulating Periodization rules engine. Beginners always receive a
//! fixed anatomical-adaptation prescription regardless of goal and day type;
//! intermediate and advanced athletes get goal- and day-specific sets, reps,
//! rest, and intensity bands derived from their screening baseline.
//!
//! Pure and deterministic: identical inputs always produce identical output,
//! and every input combination resolves to a complete [`VolumeResult`].

use trainsmart_core::models::{DayType, Goal, Level, Location, VolumeResult};

/// Fraction of the screened max used as the working-rep basis.
const WORKING_REP_FRACTION: f64 = 0.75;

/// Compute the sets/reps/rest/intensity prescription for one exercise.
///
/// `baseline_max_reps` is the screened repetition max for the pattern.
/// Unrecognized goals resolve to the generic moderate prescription; this is
/// graceful degradation, not an error path.
#[must_use]
pub fn calculate_volume(
    baseline_max_reps: u32,
    goal: &Goal,
    level: Level,
    location: Location,
    day_type: DayType,
) -> VolumeResult {
    if level == Level::Beginner {
        // Anatomical adaptation: fixed scheme, target 10 reps, floor 8.
        return VolumeResult {
            sets: 3,
            reps: baseline_max_reps.clamp(8, 10),
            rest: "90s".to_owned(),
            intensity: "65%".to_owned(),
            notes: "Anatomical adaptation - technique focus".to_owned(),
        };
    }

    let working = working_reps(baseline_max_reps);

    match goal {
        Goal::Strength => strength(working, level, location, day_type),
        Goal::Hypertrophy => hypertrophy(working, level, day_type),
        Goal::FatLoss => fat_loss(working, level, day_type),
        Goal::Endurance => endurance(working, level, day_type),
        Goal::GeneralFitness => general_fitness(working, level, day_type),
        Goal::SportPerformance => prescription(
            4,
            clamp_reps(working, 6, 10),
            "90-120s",
            "70-80%",
            "Sport-specific strength work",
        ),
        Goal::MotorRecovery => prescription(
            3,
            clamp_reps(working, 8, 12),
            "90-120s",
            "60-70%",
            "Motor recovery - technique focus",
        ),
        Goal::Pregnancy => prescription(
            3,
            clamp_reps(working, 10, 15),
            "90-120s",
            "50-65%",
            "Pregnancy - controlled intensity",
        ),
        Goal::Disability => prescription(
            3,
            clamp_reps(working, 8, 12),
            "120s",
            "60-70%",
            "Adapted training",
        ),
        Goal::Other(_) => prescription(
            4,
            clamp_reps(working, 8, 12),
            "75-90s",
            "70%",
            "General program",
        ),
    }
}

/// Working-rep basis for intermediate/advanced prescriptions.
#[must_use]
pub fn working_reps(baseline_max_reps: u32) -> u32 {
    let scaled = (f64::from(baseline_max_reps) * WORKING_REP_FRACTION).floor() as u32;
    scaled.max(4)
}

fn clamp_reps(working: u32, lo: u32, hi: u32) -> u32 {
    working.clamp(lo, hi)
}

fn prescription(sets: u32, reps: u32, rest: &str, intensity: &str, notes: &str) -> VolumeResult {
    VolumeResult {
        sets,
        reps,
        rest: rest.to_owned(),
        intensity: intensity.to_owned(),
        notes: notes.to_owned(),
    }
}

fn strength(working: u32, level: Level, location: Location, day_type: DayType) -> VolumeResult {
    if location == Location::Gym {
        match day_type {
            DayType::Heavy => prescription(
                if level == Level::Advanced { 5 } else { 4 },
                clamp_reps(working, 3, 5),
                "3-5min",
                "85-90%",
                "Heavy Day - Maximal strength",
            ),
            DayType::Volume => prescription(
                4,
                clamp_reps(working, 10, 15),
                "90-120s",
                "65-70%",
                "Volume Day - Hypertrophy and work capacity",
            ),
            DayType::Moderate => prescription(
                4,
                clamp_reps(working, 5, 6),
                "2-3min",
                "75-80%",
                "Moderate Day - Submaximal strength",
            ),
        }
    } else {
        match day_type {
            DayType::Heavy => prescription(
                if level == Level::Advanced { 6 } else { 5 },
                clamp_reps(working, 3, 6),
                "2-3min",
                "80-85%",
                "Heavy Day - Skill strength",
            ),
            DayType::Volume => prescription(
                5,
                clamp_reps(working, 10, 15),
                "90s",
                "60-70%",
                "Volume Day - Work capacity",
            ),
            DayType::Moderate => prescription(
                5,
                clamp_reps(working, 5, 6),
                "90-120s",
                "70-75%",
                "Moderate Day - Submaximal strength",
            ),
        }
    }
}

fn hypertrophy(working: u32, level: Level, day_type: DayType) -> VolumeResult {
    match day_type {
        DayType::Heavy => prescription(
            if level == Level::Advanced { 5 } else { 4 },
            if working <= 6 { 6 } else { 8 },
            "90-120s",
            "80-85%",
            "Heavy Day - Mechanical tension",
        ),
        DayType::Volume => prescription(
            if level == Level::Advanced { 6 } else { 5 },
            clamp_reps(working, 10, 15),
            "60-75s",
            "65-70%",
            "Volume Day - Metabolic stress",
        ),
        DayType::Moderate => prescription(
            if level == Level::Advanced { 5 } else { 4 },
            clamp_reps(working, 8, 12),
            "75-90s",
            "70-80%",
            "Moderate Day - Classic hypertrophy",
        ),
    }
}

fn fat_loss(working: u32, _level: Level, day_type: DayType) -> VolumeResult {
    match day_type {
        DayType::Heavy => prescription(
            4,
            clamp_reps(working, 8, 10),
            "75-90s",
            "75-80%",
            "Heavy Day - Muscle preservation",
        ),
        DayType::Volume => prescription(
            5,
            clamp_reps(working, 12, 15),
            "45-60s",
            "60-70%",
            "Volume Day - Caloric output",
        ),
        DayType::Moderate => prescription(
            4,
            clamp_reps(working, 10, 12),
            "60-75s",
            "70-75%",
            "Moderate Day - Definition",
        ),
    }
}

fn endurance(working: u32, level: Level, day_type: DayType) -> VolumeResult {
    match day_type {
        DayType::Heavy => prescription(
            4,
            clamp_reps(working, 12, 15),
            "60s",
            "65-70%",
            "Heavy Day - Strength endurance",
        ),
        DayType::Volume => prescription(
            if level == Level::Advanced { 5 } else { 4 },
            clamp_reps(working, 15, 20),
            "30-45s",
            "55-65%",
            "Volume Day - Aerobic capacity",
        ),
        DayType::Moderate => prescription(
            4,
            clamp_reps(working, 12, 18),
            "45-60s",
            "60-70%",
            "Moderate Day - Muscular endurance",
        ),
    }
}

fn general_fitness(working: u32, _level: Level, day_type: DayType) -> VolumeResult {
    match day_type {
        DayType::Heavy => prescription(
            4,
            clamp_reps(working, 6, 10),
            "90s",
            "75-80%",
            "Heavy Day - General strength",
        ),
        DayType::Volume => prescription(
            4,
            clamp_reps(working, 10, 15),
            "60-75s",
            "65-75%",
            "Volume Day - General fitness",
        ),
        DayType::Moderate => prescription(
            4,
            clamp_reps(working, 8, 12),
            "75-90s",
            "70-78%",
            "Moderate Day - Balanced",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn working_reps_floors_at_four() {
        assert_eq!(working_reps(3), 4);
        assert_eq!(working_reps(20), 15);
    }

    #[test]
    fn beginner_prescription_ignores_goal_and_day_type() {
        let a = calculate_volume(
            12,
            &Goal::Strength,
            Level::Beginner,
            Location::Gym,
            DayType::Heavy,
        );
        let b = calculate_volume(
            12,
            &Goal::Endurance,
            Level::Beginner,
            Location::Home,
            DayType::Volume,
        );
        assert_eq!(a, b);
        assert_eq!(a.sets, 3);
        assert_eq!(a.reps, 10);
        assert_eq!(a.rest, "90s");
        assert_eq!(a.intensity, "65%");
    }

    #[test]
    fn beginner_reps_floor_at_eight() {
        let result = calculate_volume(
            5,
            &Goal::GeneralFitness,
            Level::Beginner,
            Location::Gym,
            DayType::Moderate,
        );
        assert_eq!(result.reps, 8);
    }

    #[test]
    fn hypertrophy_heavy_day_uses_six_reps_for_low_baselines() {
        let result = calculate_volume(
            8, // working = 6
            &Goal::Hypertrophy,
            Level::Intermediate,
            Location::Gym,
            DayType::Heavy,
        );
        assert_eq!(result.reps, 6);
        assert_eq!(result.sets, 4);
    }

    #[test]
    fn advanced_strength_heavy_day_adds_a_set() {
        let result = calculate_volume(
            20,
            &Goal::Strength,
            Level::Advanced,
            Location::Gym,
            DayType::Heavy,
        );
        assert_eq!(result.sets, 5);
        assert_eq!(result.reps, 5);
    }
}
