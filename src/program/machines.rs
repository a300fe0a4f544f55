// ABOUTME: Free-weight/bodyweight exercise -> guided machine variant mapping
// ABOUTME: Applied at assembly when a gym athlete selected machine training
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrainSmart

//! Guided-machine exercise mapping.
//!
//! Gym athletes who select machine training get their free-weight and
//! calisthenics prescriptions converted to the closest guided machine.
//! Core work keeps its bodyweight form; machines cover it poorly.

/// Lowercased name keys to machine variants, specific before generic so the
/// substring fallback never matches "push-up" inside "pike push-up".
const MACHINE_VARIANTS: &[(&str, &str)] = &[
    // Lower push
    ("pistol assistito", "Leg Press"),
    ("pistol", "Leg Press"),
    ("bulgarian split squat", "Leg Press"),
    ("goblet squat", "Leg Press"),
    ("box squat", "Leg Press"),
    ("jump squat", "Leg Press"),
    ("squat", "Leg Press"),
    ("affondi", "Leg Press"),
    // Lower pull
    ("nordic curl", "Leg Curl Machine"),
    ("stacco rumeno", "Leg Curl Machine"),
    ("romanian deadlift", "Leg Curl Machine"),
    ("glute bridge", "Hip Thrust Machine"),
    // Vertical push, before the horizontal push-up keys
    ("pike push-up", "Shoulder Press Machine"),
    ("pike push up", "Shoulder Press Machine"),
    ("handstand push-up", "Shoulder Press Machine"),
    ("hspu", "Shoulder Press Machine"),
    ("military press", "Shoulder Press Machine"),
    // Horizontal push
    ("push-up", "Chest Press Machine"),
    ("push up", "Chest Press Machine"),
    ("bench press", "Chest Press Machine"),
    // Rows, before the pull-up keys
    ("australian pull-up", "Seated Row Machine"),
    ("inverted row", "Seated Row Machine"),
    ("barbell row", "Seated Row Machine"),
    // Vertical pull
    ("trazioni", "Lat Pulldown Machine"),
    ("pull-up", "Lat Pulldown Machine"),
    ("pull up", "Lat Pulldown Machine"),
    // Core; planks stay bodyweight
    ("l-sit", "Ab Crunch Machine"),
    ("dragon flag", "Ab Crunch Machine"),
];

/// The guided machine covering an exercise, if one exists.
///
/// Exact lowercase match first, then the first substring match in table
/// order. `None` keeps the original prescription.
#[must_use]
pub fn machine_variant(exercise_name: &str) -> Option<&'static str> {
    let lower = exercise_name.to_lowercase();
    if let Some((_, machine)) = MACHINE_VARIANTS.iter().find(|(key, _)| *key == lower) {
        return Some(machine);
    }
    MACHINE_VARIANTS
        .iter()
        .find(|(key, _)| lower.contains(*key))
        .map(|(_, machine)| *machine)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_weight_and_bodyweight_names_resolve() {
        assert_eq!(machine_variant("Squat Completo"), Some("Leg Press"));
        assert_eq!(machine_variant("Stacco Rumeno"), Some("Leg Curl Machine"));
        assert_eq!(
            machine_variant("Push-up Standard"),
            Some("Chest Press Machine")
        );
        assert_eq!(machine_variant("Trazioni"), Some("Lat Pulldown Machine"));
    }

    #[test]
    fn specific_keys_beat_their_generic_substrings() {
        assert_eq!(
            machine_variant("Pike Push-up Rialzato"),
            Some("Shoulder Press Machine")
        );
        assert_eq!(
            machine_variant("Australian Pull-up"),
            Some("Seated Row Machine")
        );
        assert_eq!(machine_variant("Pistol Assistito"), Some("Leg Press"));
    }

    #[test]
    fn unmapped_names_keep_the_original() {
        assert_eq!(machine_variant("Plank"), None);
        assert_eq!(machine_variant("Bird Dog"), None);
    }
}
