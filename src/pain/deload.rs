// ABOUTME: Severity-tiered deload policy applied before substitution at assembly time
// ABOUTME: Scales sets/reps/load and flags when a replacement or easier variant is required
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrainSmart

//! Pain deload policy.
//!
//! Weighted work absorbs pain through the load factor; bodyweight work cannot,
//! so at home the load factor stays 1.0 and the easier-variant flag carries
//! the reduction instead.

use trainsmart_core::models::{Location, PainSeverity};

/// Volume and load scaling for a painful movement pattern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeloadAdjustment {
    /// Sets after scaling, floored at 2
    pub sets: u32,
    /// Reps after scaling, floored at 3
    pub reps: u32,
    /// Multiplier for the prescribed load; 1.0 for bodyweight work
    pub load_factor: f64,
    /// The exercise must be swapped for a safe alternative
    pub needs_replacement: bool,
    /// Bodyweight work needs an easier variant to carry the reduction
    pub needs_easier_variant: bool,
}

/// Scale a prescription for a reported pain severity.
#[must_use]
pub fn apply_pain_deload(
    sets: u32,
    reps: u32,
    severity: PainSeverity,
    location: Location,
) -> DeloadAdjustment {
    let at_gym = location == Location::Gym;
    match severity {
        PainSeverity::Mild => DeloadAdjustment {
            sets,
            reps: scaled_reps(reps, 0.9),
            load_factor: if at_gym { 0.9 } else { 1.0 },
            needs_replacement: false,
            needs_easier_variant: false,
        },
        PainSeverity::Moderate => DeloadAdjustment {
            sets: sets.saturating_sub(1).max(2),
            reps: scaled_reps(reps, 0.7),
            load_factor: if at_gym { 0.75 } else { 1.0 },
            needs_replacement: false,
            needs_easier_variant: !at_gym,
        },
        PainSeverity::Severe => DeloadAdjustment {
            sets: scaled_sets(sets, 0.5),
            reps: scaled_reps(reps, 0.5),
            load_factor: if at_gym { 0.5 } else { 1.0 },
            needs_replacement: true,
            needs_easier_variant: !at_gym,
        },
    }
}

fn scaled_reps(reps: u32, factor: f64) -> u32 {
    ((f64::from(reps) * factor).floor() as u32).max(3)
}

fn scaled_sets(sets: u32, factor: f64) -> u32 {
    ((f64::from(sets) * factor).floor() as u32).max(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mild_gym_trims_load_not_sets() {
        let adjusted = apply_pain_deload(4, 10, PainSeverity::Mild, Location::Gym);
        assert_eq!(adjusted.sets, 4);
        assert_eq!(adjusted.reps, 9);
        assert!((adjusted.load_factor - 0.9).abs() < f64::EPSILON);
        assert!(!adjusted.needs_replacement);
    }

    #[test]
    fn mild_home_keeps_full_load() {
        let adjusted = apply_pain_deload(4, 10, PainSeverity::Mild, Location::Home);
        assert!((adjusted.load_factor - 1.0).abs() < f64::EPSILON);
        assert!(!adjusted.needs_easier_variant);
    }

    #[test]
    fn moderate_home_requests_an_easier_variant() {
        let adjusted = apply_pain_deload(4, 10, PainSeverity::Moderate, Location::Home);
        assert_eq!(adjusted.sets, 3);
        assert_eq!(adjusted.reps, 7);
        assert!(adjusted.needs_easier_variant);
        assert!(!adjusted.needs_replacement);
    }

    #[test]
    fn severe_gym_halves_volume_and_forces_replacement() {
        let adjusted = apply_pain_deload(4, 10, PainSeverity::Severe, Location::Gym);
        assert_eq!(adjusted.sets, 2);
        assert_eq!(adjusted.reps, 5);
        assert!((adjusted.load_factor - 0.5).abs() < f64::EPSILON);
        assert!(adjusted.needs_replacement);
        assert!(!adjusted.needs_easier_variant);
    }

    #[test]
    fn floors_hold_for_tiny_prescriptions() {
        let adjusted = apply_pain_deload(2, 4, PainSeverity::Severe, Location::Gym);
        assert_eq!(adjusted.sets, 2);
        assert_eq!(adjusted.reps, 3);
    }
}
