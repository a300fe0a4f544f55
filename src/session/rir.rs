// ABOUTME: Final-set RIR validation: weighted/bodyweight downgrades and tempo-first upgrades
// ABOUTME: Bodyweight difficulty moves along fixed variant ladders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrainSmart

//! Reps-in-reserve validation.
//!
//! Runs once per exercise, on the final set, when the athlete reports RIR.
//! Coming in two or more reps under the target downgrades the prescription
//! for the next session; two or more over upgrades it. A one-rep miss is
//! tolerated and only raises a warning.
//!
//! Upgrades are tempo-first: before any weight or variant moves, a slow
//! eccentric raises difficulty in place. Only when the athlete beats the
//! target again with the tempo active does the load or variant step up, and
//! the tempo resets.

use serde::{Deserialize, Serialize};

use trainsmart_core::config::AutoRegulationConfig;
use trainsmart_core::models::{AlertSeverity, TempoModifier};

use crate::program::round_to_half;

/// Bodyweight difficulty ladders, easiest to hardest.
const VARIANT_LADDERS: &[&[&str]] = &[
    &[
        "Squat Assistito",
        "Squat Completo",
        "Jump Squat",
        "Pistol Assistito",
        "Pistol Completo",
    ],
    &[
        "Wall Push-up",
        "Incline Push-up",
        "Push-up Standard",
        "Diamond Push-up",
        "Archer Push-up",
    ],
    &[
        "Australian Pull-up",
        "Trazioni Assistite",
        "Trazioni",
        "Trazioni Zavorrate",
    ],
    &[
        "Pike Push-up su Ginocchia",
        "Pike Push-up",
        "Pike Push-up Rialzato",
        "HSPU al Muro",
    ],
    &[
        "Glute Bridge",
        "Hip Hinge Corpo Libero",
        "Single Leg RDL Leggero",
        "Nordic Curl Assistito",
    ],
];

/// The next easier rung of the variant's ladder, if one exists.
#[must_use]
pub fn easier_variant(variant: &str) -> Option<&'static str> {
    step_ladder(variant, -1)
}

/// The next harder rung of the variant's ladder, if one exists.
#[must_use]
pub fn harder_variant(variant: &str) -> Option<&'static str> {
    step_ladder(variant, 1)
}

fn step_ladder(variant: &str, step: isize) -> Option<&'static str> {
    for ladder in VARIANT_LADDERS {
        if let Some(position) = ladder.iter().position(|&v| v == variant) {
            let target = position as isize + step;
            if target >= 0 {
                return ladder.get(target as usize).copied();
            }
            return None;
        }
    }
    None
}

/// Snapshot of the exercise state RIR validation reads.
#[derive(Debug, Clone, Copy)]
pub struct RirContext<'a> {
    /// Variant currently in effect
    pub current_variant: &'a str,
    /// Variant originally prescribed
    pub original_variant: &'a str,
    /// Weight currently in effect in kg
    pub current_weight: Option<f64>,
    /// Weight originally prescribed in kg
    pub original_weight: Option<f64>,
    /// Per-set rep target currently in effect
    pub target_reps: u32,
    /// Tempo modifier currently active
    pub tempo: Option<&'a TempoModifier>,
}

/// What the validation decided to change for the next session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "change")]
pub enum RirChange {
    /// Target met within tolerance
    None,
    /// Weighted downgrade
    ReduceWeight {
        /// Weight for the next session in kg
        new_weight: f64,
    },
    /// Bodyweight downgrade to an easier variant with a rep cushion
    EasierVariant {
        /// Variant to switch to
        variant: String,
        /// New per-set rep target
        target_reps: u32,
    },
    /// Bodyweight downgrade with no easier rung left
    ReduceReps {
        /// New per-set rep target
        target_reps: u32,
    },
    /// First upgrade step: add time under tension in place
    AddTempo {
        /// Modifier to apply
        tempo: TempoModifier,
    },
    /// Upgrade restores the originally prescribed weight
    RestoreWeight {
        /// Weight for the next session in kg
        new_weight: f64,
    },
    /// Upgrade past the original weight
    IncreaseWeight {
        /// Weight for the next session in kg
        new_weight: f64,
    },
    /// Upgrade restores the originally prescribed variant
    RestoreVariant {
        /// Variant to switch back to
        variant: String,
    },
    /// Upgrade steps to a harder variant with a lower rep target
    HarderVariant {
        /// Variant to switch to
        variant: String,
        /// New per-set rep target
        target_reps: u32,
    },
    /// Top of the ladder: keep the tempo and raise the rep target
    IncreaseReps {
        /// New per-set rep target
        target_reps: u32,
    },
}

/// Full validation result.
#[derive(Debug, Clone, PartialEq)]
pub struct RirAssessment {
    /// Signed delta, actual minus target
    pub delta: i32,
    /// Change for the next session
    pub change: RirChange,
    /// Whether the active tempo modifier resets
    pub clears_tempo: bool,
    /// Safety alert raised by a downgrade
    pub alert: Option<AlertSeverity>,
}

/// Validate the final-set RIR report against the target.
#[must_use]
pub fn validate_rir(
    actual_rir: u8,
    target_rir: u8,
    context: &RirContext<'_>,
    config: &AutoRegulationConfig,
) -> RirAssessment {
    let delta = i32::from(actual_rir) - i32::from(target_rir);

    if delta <= config.rir_downgrade_delta {
        return downgrade(delta, context, config);
    }
    if delta >= config.rir_upgrade_delta {
        return upgrade(delta, context, config);
    }
    RirAssessment {
        delta,
        change: RirChange::None,
        clears_tempo: false,
        // A one-rep miss is tolerated but still flagged.
        alert: (delta < 0).then_some(AlertSeverity::Warning),
    }
}

fn downgrade(
    delta: i32,
    context: &RirContext<'_>,
    config: &AutoRegulationConfig,
) -> RirAssessment {
    let alert = Some(if delta <= config.rir_critical_delta {
        AlertSeverity::Critical
    } else {
        AlertSeverity::Warning
    });

    let change = if let Some(weight) = context.current_weight.filter(|w| *w > 0.0) {
        let reduction = (f64::from(delta.unsigned_abs()) * config.downgrade_percent_per_rir)
            .min(config.downgrade_percent_cap);
        RirChange::ReduceWeight {
            new_weight: round_to_half(weight * (1.0 - reduction / 100.0)),
        }
    } else if let Some(easier) = easier_variant(context.current_variant) {
        RirChange::EasierVariant {
            variant: easier.to_owned(),
            target_reps: context.target_reps + 2,
        }
    } else {
        RirChange::ReduceReps {
            target_reps: context.target_reps.saturating_sub(2).max(5),
        }
    };

    RirAssessment {
        delta,
        change,
        // An added tempo is the first thing a struggling athlete loses.
        clears_tempo: context.tempo.is_some(),
        alert,
    }
}

fn upgrade(delta: i32, context: &RirContext<'_>, config: &AutoRegulationConfig) -> RirAssessment {
    let tempo_active = context.tempo.is_some_and(TempoModifier::is_aggravator);

    if !tempo_active {
        return RirAssessment {
            delta,
            change: RirChange::AddTempo {
                tempo: TempoModifier::slow_eccentric(),
            },
            clears_tempo: false,
            alert: None,
        };
    }

    if let Some(weight) = context.current_weight.filter(|w| *w > 0.0) {
        let change = match context.original_weight {
            Some(original) if weight < original => RirChange::RestoreWeight {
                new_weight: original,
            },
            _ => RirChange::IncreaseWeight {
                new_weight: round_to_half(weight * config.upgrade_weight_factor),
            },
        };
        return RirAssessment {
            delta,
            change,
            clears_tempo: true,
            alert: None,
        };
    }

    if context.current_variant != context.original_variant {
        return RirAssessment {
            delta,
            change: RirChange::RestoreVariant {
                variant: context.original_variant.to_owned(),
            },
            clears_tempo: true,
            alert: None,
        };
    }
    if let Some(harder) = harder_variant(context.current_variant) {
        return RirAssessment {
            delta,
            change: RirChange::HarderVariant {
                variant: harder.to_owned(),
                target_reps: context.target_reps.saturating_sub(2).max(5),
            },
            clears_tempo: true,
            alert: None,
        };
    }
    RirAssessment {
        delta,
        change: RirChange::IncreaseReps {
            target_reps: context.target_reps + 2,
        },
        clears_tempo: false,
        alert: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AutoRegulationConfig {
        AutoRegulationConfig::default()
    }

    fn weighted(target_reps: u32) -> RirContext<'static> {
        RirContext {
            current_variant: "Back Squat",
            original_variant: "Back Squat",
            current_weight: Some(80.0),
            original_weight: Some(80.0),
            target_reps,
            tempo: None,
        }
    }

    #[test]
    fn one_rep_miss_warns_without_changing_anything() {
        let assessment = validate_rir(1, 2, &weighted(8), &config());
        assert_eq!(assessment.change, RirChange::None);
        assert_eq!(assessment.alert, Some(AlertSeverity::Warning));

        let assessment = validate_rir(2, 2, &weighted(8), &config());
        assert_eq!(assessment.change, RirChange::None);
        assert!(assessment.alert.is_none());
    }

    #[test]
    fn downgrade_strips_an_active_tempo() {
        let tempo = TempoModifier::slow_eccentric();
        let mut context = weighted(8);
        context.tempo = Some(&tempo);
        let assessment = validate_rir(0, 2, &context, &config());
        assert!(assessment.clears_tempo);
    }

    #[test]
    fn weighted_downgrade_is_capped_at_fifteen_percent() {
        // Delta -2: 10% off 80kg.
        let assessment = validate_rir(0, 2, &weighted(8), &config());
        assert_eq!(
            assessment.change,
            RirChange::ReduceWeight { new_weight: 72.0 }
        );
        assert_eq!(assessment.alert, Some(AlertSeverity::Warning));

        // Delta -4 would be 20%, capped to 15% -> 68kg.
        let assessment = validate_rir(0, 4, &weighted(8), &config());
        assert_eq!(
            assessment.change,
            RirChange::ReduceWeight { new_weight: 68.0 }
        );
        assert_eq!(assessment.alert, Some(AlertSeverity::Critical));
    }

    #[test]
    fn bodyweight_downgrade_steps_down_the_ladder() {
        let context = RirContext {
            current_variant: "Push-up Standard",
            original_variant: "Push-up Standard",
            current_weight: None,
            original_weight: None,
            target_reps: 10,
            tempo: None,
        };
        let assessment = validate_rir(0, 2, &context, &config());
        assert_eq!(
            assessment.change,
            RirChange::EasierVariant {
                variant: "Incline Push-up".to_owned(),
                target_reps: 12,
            }
        );
    }

    #[test]
    fn bottom_of_the_ladder_reduces_reps_instead() {
        let context = RirContext {
            current_variant: "Wall Push-up",
            original_variant: "Push-up Standard",
            current_weight: None,
            original_weight: None,
            target_reps: 6,
            tempo: None,
        };
        let assessment = validate_rir(0, 2, &context, &config());
        assert_eq!(assessment.change, RirChange::ReduceReps { target_reps: 5 });
    }

    #[test]
    fn first_upgrade_adds_tempo_without_touching_load() {
        let assessment = validate_rir(4, 2, &weighted(8), &config());
        assert_eq!(
            assessment.change,
            RirChange::AddTempo {
                tempo: TempoModifier::slow_eccentric()
            }
        );
        assert!(!assessment.clears_tempo);
    }

    #[test]
    fn upgrade_with_tempo_restores_a_reduced_weight_first() {
        let tempo = TempoModifier::slow_eccentric();
        let context = RirContext {
            current_variant: "Back Squat",
            original_variant: "Back Squat",
            current_weight: Some(72.0),
            original_weight: Some(80.0),
            target_reps: 8,
            tempo: Some(&tempo),
        };
        let assessment = validate_rir(4, 2, &context, &config());
        assert_eq!(
            assessment.change,
            RirChange::RestoreWeight { new_weight: 80.0 }
        );
        assert!(assessment.clears_tempo);
    }

    #[test]
    fn upgrade_with_tempo_at_original_weight_raises_it() {
        let tempo = TempoModifier::slow_eccentric();
        let mut context = weighted(8);
        context.tempo = Some(&tempo);
        let assessment = validate_rir(4, 2, &context, &config());
        assert_eq!(
            assessment.change,
            RirChange::IncreaseWeight { new_weight: 84.0 }
        );
        assert!(assessment.clears_tempo);
    }

    #[test]
    fn bodyweight_upgrade_steps_up_the_ladder() {
        let tempo = TempoModifier::slow_eccentric();
        let context = RirContext {
            current_variant: "Squat Completo",
            original_variant: "Squat Completo",
            current_weight: None,
            original_weight: None,
            target_reps: 12,
            tempo: Some(&tempo),
        };
        let assessment = validate_rir(4, 2, &context, &config());
        assert_eq!(
            assessment.change,
            RirChange::HarderVariant {
                variant: "Jump Squat".to_owned(),
                target_reps: 10,
            }
        );
    }

    #[test]
    fn top_of_the_ladder_keeps_tempo_and_adds_reps() {
        let tempo = TempoModifier::slow_eccentric();
        let context = RirContext {
            current_variant: "Pistol Completo",
            original_variant: "Pistol Completo",
            current_weight: None,
            original_weight: None,
            target_reps: 8,
            tempo: Some(&tempo),
        };
        let assessment = validate_rir(4, 2, &context, &config());
        assert_eq!(
            assessment.change,
            RirChange::IncreaseReps { target_reps: 10 }
        );
        assert!(!assessment.clears_tempo);
    }

    #[test]
    fn ladder_steps_resolve_neighbors() {
        assert_eq!(easier_variant("Trazioni"), Some("Trazioni Assistite"));
        assert_eq!(harder_variant("Trazioni"), Some("Trazioni Zavorrate"));
        assert_eq!(easier_variant("Squat Assistito"), None);
        assert_eq!(harder_variant("Archer Push-up"), None);
        assert_eq!(easier_variant("Plank"), None);
    }
}
