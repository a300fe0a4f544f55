// ABOUTME: Pain knowledge base: movement tags, conflict detection, ranked substitution
// ABOUTME: Seven body areas, each with avoid-tags, substitution ladders, correctives
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrainSmart

//! # Pain Substitution Engine
//!
//! Maps a reported pain area to the movements that aggravate it and to
//! severity-ranked replacement ladders. Exercises are matched through a tag
//! registry rather than raw name comparison: a small exact-name table covers
//! catalog entries whose names do not mention the movement, and a keyword scan
//! covers everything else.
//!
//! Substitution ladders are ordered least to most conservative. Mild pain
//! picks the first rung, moderate the middle, severe the last. An exercise
//! with no ladder entry for the area is returned unchanged and a warning is
//! logged, never an error.

pub mod deload;

use trainsmart_core::models::{BodyArea, PainSeverity};

/// Movement qualities an exercise can carry, used for conflict detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExerciseTag {
    /// Single-leg pistol squat variants
    Pistol,
    /// Bulgarian split squat variants
    Bulgarian,
    /// Jumping and plyometric work
    Jump,
    /// Sprinting and running intervals
    Sprint,
    /// Good-morning hip hinges
    GoodMorning,
    /// Romanian deadlift variants
    RomanianDeadlift,
    /// Conventional deadlift variants
    Deadlift,
    /// Handstand push-up variants
    HandstandPushUp,
    /// Freestanding or wall handstand holds
    Handstand,
    /// Planche progressions
    Planche,
    /// Pike push-up variants
    PikePush,
    /// Overhead pressing
    Overhead,
    /// Calf raise variants
    CalfRaise,
    /// Pull-up variants
    PullUp,
    /// Chin-up variants
    ChinUp,
    /// Biceps curl variants
    BicepCurl,
    /// Generic pressing
    Press,
    /// Push-up variants
    PushUp,
    /// Lunge variants
    Lunge,
    /// Squat variants
    Squat,
}

/// Outcome of a substitution lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    /// Exercise to perform; the original when no ladder entry matched
    pub exercise: String,
    /// Whether a replacement was actually made
    pub replaced: bool,
}

/// Catalog entries whose names do not mention the movement they load.
const NAME_REGISTRY: &[(&str, &[ExerciseTag])] = &[
    ("burpee", &[ExerciseTag::Jump, ExerciseTag::PushUp]),
    ("thruster", &[ExerciseTag::Squat, ExerciseTag::Overhead]),
    ("skipping", &[ExerciseTag::Jump]),
    ("wall walk", &[ExerciseTag::Handstand]),
];

/// Keyword fallback, ordered specific to generic so compound names surface
/// their most specific tag first.
const KEYWORD_TAGS: &[(&str, ExerciseTag)] = &[
    ("pistol", ExerciseTag::Pistol),
    ("bulgarian", ExerciseTag::Bulgarian),
    ("jump", ExerciseTag::Jump),
    ("salto", ExerciseTag::Jump),
    ("sprint", ExerciseTag::Sprint),
    ("good morning", ExerciseTag::GoodMorning),
    ("rdl", ExerciseTag::RomanianDeadlift),
    ("romanian", ExerciseTag::RomanianDeadlift),
    ("rumeno", ExerciseTag::RomanianDeadlift),
    ("deadlift", ExerciseTag::Deadlift),
    ("stacco", ExerciseTag::Deadlift),
    ("hspu", ExerciseTag::HandstandPushUp),
    ("handstand push", ExerciseTag::HandstandPushUp),
    ("handstand", ExerciseTag::Handstand),
    ("planche", ExerciseTag::Planche),
    ("pike", ExerciseTag::PikePush),
    ("overhead", ExerciseTag::Overhead),
    ("military", ExerciseTag::Overhead),
    ("calf", ExerciseTag::CalfRaise),
    ("pull-up", ExerciseTag::PullUp),
    ("pull up", ExerciseTag::PullUp),
    ("trazioni", ExerciseTag::PullUp),
    ("chin", ExerciseTag::ChinUp),
    ("curl", ExerciseTag::BicepCurl),
    ("press", ExerciseTag::Press),
    ("push-up", ExerciseTag::PushUp),
    ("push up", ExerciseTag::PushUp),
    ("piegamenti", ExerciseTag::PushUp),
    ("affondi", ExerciseTag::Lunge),
    ("lunge", ExerciseTag::Lunge),
    ("squat", ExerciseTag::Squat),
];

/// Resolve the movement tags an exercise carries.
///
/// Exact registry entries win; otherwise every matching keyword contributes a
/// tag, most specific first. Unknown names yield no tags and therefore never
/// conflict.
#[must_use]
pub fn exercise_tags(name: &str) -> Vec<ExerciseTag> {
    let lowered = name.to_lowercase();
    for (registered, tags) in NAME_REGISTRY {
        if lowered == *registered {
            return tags.to_vec();
        }
    }
    let mut tags = Vec::new();
    for (keyword, tag) in KEYWORD_TAGS {
        if lowered.contains(keyword) && !tags.contains(tag) {
            tags.push(*tag);
        }
    }
    tags
}

/// Per-area guidance: what to avoid, what to substitute, what to prescribe
/// as corrective work.
struct AreaGuidance {
    avoid: &'static [ExerciseTag],
    ladders: &'static [(ExerciseTag, &'static [&'static str])],
    correctives: &'static [&'static str],
}

fn guidance(area: BodyArea) -> &'static AreaGuidance {
    match area {
        BodyArea::Knee => &AreaGuidance {
            avoid: &[ExerciseTag::Pistol, ExerciseTag::Jump, ExerciseTag::Bulgarian],
            ladders: &[
                (
                    ExerciseTag::Pistol,
                    &["Affondi", "Squat Completo", "Glute Bridge"],
                ),
                (
                    ExerciseTag::Jump,
                    &["Step Up", "Squat Completo", "Glute Bridge"],
                ),
                (
                    ExerciseTag::Bulgarian,
                    &["Affondi", "Step Up", "Glute Bridge"],
                ),
                (
                    ExerciseTag::Lunge,
                    &["Step Up", "Squat Completo", "Glute Bridge"],
                ),
                (
                    ExerciseTag::Squat,
                    &["Goblet Squat", "Box Squat", "Glute Bridge"],
                ),
            ],
            correctives: &[
                "Knee Mobility Circles",
                "VMO Activation",
                "Wall Sit Isometric",
                "Quad Stretch",
            ],
        },
        BodyArea::LowerBack => &AreaGuidance {
            avoid: &[ExerciseTag::Deadlift, ExerciseTag::GoodMorning],
            ladders: &[
                (
                    ExerciseTag::RomanianDeadlift,
                    &["Single Leg RDL Leggero", "Glute Bridge", "Bird Dog"],
                ),
                (
                    ExerciseTag::Deadlift,
                    &["RDL Leggero", "Hip Hinge Corpo Libero", "Glute Bridge"],
                ),
                (
                    ExerciseTag::GoodMorning,
                    &["Hip Hinge Corpo Libero", "Bird Dog", "Glute Bridge"],
                ),
                (
                    ExerciseTag::Squat,
                    &["Goblet Squat", "Box Squat", "Leg Press"],
                ),
            ],
            correctives: &["Cat-Cow", "Bird Dog", "Dead Bug", "Pelvic Tilt", "McGill Big 3"],
        },
        BodyArea::Shoulder => &AreaGuidance {
            avoid: &[
                ExerciseTag::HandstandPushUp,
                ExerciseTag::Handstand,
                ExerciseTag::Overhead,
            ],
            ladders: &[
                (
                    ExerciseTag::HandstandPushUp,
                    &["Pike Push-up", "Incline Push-up", "Push-up Standard"],
                ),
                (
                    ExerciseTag::Handstand,
                    &["Pike Push-up", "Incline Push-up", "Push-up Standard"],
                ),
                (
                    ExerciseTag::PikePush,
                    &["Incline Pike Push-up", "Incline Push-up", "Push-up Standard"],
                ),
                (
                    ExerciseTag::Overhead,
                    &["Landmine Press", "Floor Press", "Push-up Standard"],
                ),
                (
                    ExerciseTag::Press,
                    &["Landmine Press", "Floor Press", "Push-up"],
                ),
                (
                    ExerciseTag::PushUp,
                    &["Incline Push-up", "Wall Push-up", "Isometric Hold"],
                ),
            ],
            correctives: &[
                "Shoulder Dislocations",
                "Band Pull-Aparts",
                "Face Pulls",
                "YTW",
                "Wall Slides",
            ],
        },
        BodyArea::Wrist => &AreaGuidance {
            avoid: &[
                ExerciseTag::HandstandPushUp,
                ExerciseTag::Planche,
                ExerciseTag::PushUp,
            ],
            ladders: &[
                (
                    ExerciseTag::HandstandPushUp,
                    &["Pike su Pugni", "Parallettes Pike", "Dips"],
                ),
                (
                    ExerciseTag::Handstand,
                    &["Handstand su Pugni", "Parallettes", "Dips"],
                ),
                (
                    ExerciseTag::Planche,
                    &["Parallettes Lean", "Dips", "Ring Push-up"],
                ),
                (
                    ExerciseTag::PushUp,
                    &["Knuckle Push-up", "Parallettes Push-up", "Dips"],
                ),
            ],
            correctives: &[
                "Wrist Circles",
                "Wrist Flexion/Extension",
                "Finger Flexion",
                "Forearm Stretch",
            ],
        },
        BodyArea::Ankle => &AreaGuidance {
            avoid: &[ExerciseTag::Jump, ExerciseTag::Sprint, ExerciseTag::Pistol],
            ladders: &[
                (ExerciseTag::Jump, &["Step Up", "Box Step", "Squat"]),
                (
                    ExerciseTag::Sprint,
                    &["Walking Lunges", "Step Up", "Squat"],
                ),
                (
                    ExerciseTag::CalfRaise,
                    &["Seated Calf Raise", "Isometric Calf Hold"],
                ),
                (
                    ExerciseTag::Pistol,
                    &["Squat Completo", "Goblet Squat", "Leg Press"],
                ),
            ],
            correctives: &[
                "Ankle Circles",
                "Dorsiflexion Stretch",
                "Calf Stretch",
                "Ankle Mobility Drills",
            ],
        },
        BodyArea::Elbow => &AreaGuidance {
            avoid: &[
                ExerciseTag::PullUp,
                ExerciseTag::ChinUp,
                ExerciseTag::BicepCurl,
            ],
            ladders: &[
                (
                    ExerciseTag::PullUp,
                    &["Assisted Pull-up", "Inverted Row", "Lat Pulldown"],
                ),
                (
                    ExerciseTag::ChinUp,
                    &["Assisted Chin-up", "Inverted Row", "Lat Pulldown"],
                ),
                (
                    ExerciseTag::BicepCurl,
                    &["Isometric Hold", "Eccentric Only", "Band Curl Leggero"],
                ),
            ],
            correctives: &[
                "Elbow Circles",
                "Forearm Stretch",
                "Bicep/Tricep Stretch",
                "Golfer Elbow Rehab",
            ],
        },
        BodyArea::Hip => &AreaGuidance {
            avoid: &[ExerciseTag::Squat, ExerciseTag::Lunge, ExerciseTag::Pistol],
            ladders: &[
                (
                    ExerciseTag::Pistol,
                    &["Squat Assistito", "Goblet Squat", "Leg Press"],
                ),
                (
                    ExerciseTag::Lunge,
                    &["Step Up", "Split Squat", "Leg Press"],
                ),
                (
                    ExerciseTag::Squat,
                    &["Box Squat", "Goblet Squat", "Leg Press"],
                ),
            ],
            correctives: &[
                "Hip Circles",
                "Pigeon Stretch",
                "Hip Flexor Stretch",
                "Glute Activation",
            ],
        },
    }
}

/// Whether an exercise aggravates a reported pain area.
#[must_use]
pub fn is_conflicting(exercise_name: &str, area: BodyArea) -> bool {
    let tags = exercise_tags(exercise_name);
    guidance(area).avoid.iter().any(|avoid| tags.contains(avoid))
}

/// Pick a replacement for an exercise given the area and severity.
///
/// The first tag of the exercise with a ladder in the area wins; within the
/// ladder, mild pain takes the first rung, moderate the middle, severe the
/// most conservative. No ladder entry means the original is kept.
#[must_use]
pub fn find_safe_alternative(
    exercise_name: &str,
    area: BodyArea,
    severity: PainSeverity,
) -> Substitution {
    let tags = exercise_tags(exercise_name);
    for tag in &tags {
        if let Some((_, ladder)) = guidance(area).ladders.iter().find(|(key, _)| key == tag) {
            let index = match severity {
                PainSeverity::Mild => 0,
                PainSeverity::Moderate => 1.min(ladder.len() - 1),
                PainSeverity::Severe => ladder.len() - 1,
            };
            return Substitution {
                exercise: ladder[index].to_owned(),
                replaced: true,
            };
        }
    }
    tracing::warn!(
        exercise = exercise_name,
        area = area.as_str(),
        "no substitution ladder entry, keeping original exercise"
    );
    Substitution {
        exercise: exercise_name.to_owned(),
        replaced: false,
    }
}

/// Corrective exercise names prescribed alongside training for an area.
#[must_use]
pub fn corrective_exercises(area: BodyArea) -> &'static [&'static str] {
    guidance(area).correctives
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compound_names_surface_specific_tag_first() {
        let tags = exercise_tags("Pistol Squat");
        assert_eq!(tags[0], ExerciseTag::Pistol);
        assert!(tags.contains(&ExerciseTag::Squat));
    }

    #[test]
    fn registry_covers_names_without_movement_keywords() {
        assert!(exercise_tags("Burpee").contains(&ExerciseTag::Jump));
        assert!(exercise_tags("Thruster").contains(&ExerciseTag::Overhead));
    }

    #[test]
    fn romanian_deadlift_resolves_before_conventional() {
        let tags = exercise_tags("Stacco Rumeno");
        assert_eq!(tags[0], ExerciseTag::RomanianDeadlift);
    }

    #[test]
    fn knee_pain_conflicts_with_plyometrics_but_not_bridges() {
        assert!(is_conflicting("Jump Squat", BodyArea::Knee));
        assert!(is_conflicting("Pistol Squat", BodyArea::Knee));
        assert!(!is_conflicting("Glute Bridge", BodyArea::Knee));
    }

    #[test]
    fn severity_picks_the_ladder_rung() {
        let mild = find_safe_alternative("Pistol Squat", BodyArea::Knee, PainSeverity::Mild);
        assert_eq!(mild.exercise, "Affondi");
        let severe = find_safe_alternative("Pistol Squat", BodyArea::Knee, PainSeverity::Severe);
        assert_eq!(severe.exercise, "Glute Bridge");
        assert!(severe.replaced);
    }

    #[test]
    fn short_ladder_clamps_moderate_and_severe() {
        let moderate =
            find_safe_alternative("Calf Raise", BodyArea::Ankle, PainSeverity::Moderate);
        assert_eq!(moderate.exercise, "Isometric Calf Hold");
        let severe = find_safe_alternative("Calf Raise", BodyArea::Ankle, PainSeverity::Severe);
        assert_eq!(severe.exercise, "Isometric Calf Hold");
    }

    #[test]
    fn missing_ladder_keeps_the_original() {
        let result = find_safe_alternative("Plank", BodyArea::Knee, PainSeverity::Severe);
        assert_eq!(result.exercise, "Plank");
        assert!(!result.replaced);
    }

    #[test]
    fn every_area_has_correctives() {
        for area in [
            BodyArea::Knee,
            BodyArea::LowerBack,
            BodyArea::Shoulder,
            BodyArea::Wrist,
            BodyArea::Ankle,
            BodyArea::Elbow,
            BodyArea::Hip,
        ] {
            assert!(!corrective_exercises(area).is_empty());
        }
    }
}
