// ABOUTME: Program assembler: baselines + volume rules + pain guidance -> a prescription
// ABOUTME: Applies at most one pain conflict per exercise, then appends corrective work
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrainSmart

//! # Program Assembly
//!
//! Walks the canonical movement-pattern order, prescribes volume for every
//! pattern with a screening baseline, runs each exercise through the pain
//! pipeline, derives working weights from the 10RM where one was measured,
//! and closes the program with corrective work for every reported pain area.
//!
//! Pain conflicts resolve first-match-wins in the order areas were reported;
//! a later entry never compounds an already-deloaded exercise.

pub mod machines;
pub mod split;

mod load;

pub use load::{
    calculate_weight_from_rir, estimate_one_rep_max, estimate_rep_max, round_to_half, target_rir,
    weight_increment,
};

use trainsmart_core::models::{
    DayType, Exercise, Goal, Level, Location, MovementPattern, PainEntry, PatternBaseline,
    PatternBaselines, Program, Reps, TrainingType,
};

use crate::pain::deload::apply_pain_deload;
use crate::pain::{corrective_exercises, find_safe_alternative, is_conflicting};
use crate::volume::calculate_volume;

/// Inputs to program and split generation.
#[derive(Debug, Clone)]
pub struct ProgramOptions {
    /// Screening baselines, one per measured pattern
    pub baselines: PatternBaselines,
    /// Athlete experience tier
    pub level: Level,
    /// Primary training goal
    pub goal: Goal,
    /// Training location
    pub location: Location,
    /// Equipment style the athlete selected
    pub training_type: TrainingType,
    /// Weekly training frequency, 1-6
    pub frequency: u8,
    /// Reported pains, in reported order
    pub pains: Vec<PainEntry>,
}

/// Generate a single-day program for the given day type.
///
/// Patterns without a baseline are skipped, never invented.
#[must_use]
pub fn generate_program(options: &ProgramOptions, day_type: DayType) -> Program {
    let mut exercises = Vec::new();
    for pattern in MovementPattern::GENERATION_ORDER {
        if let Some(baseline) = options.baselines.get(pattern) {
            exercises.push(prescribe_exercise(pattern, baseline, day_type, options));
        }
    }
    append_correctives(&mut exercises, &options.pains);

    tracing::debug!(
        goal = options.goal.as_str(),
        exercises = exercises.len(),
        "assembled single-day program"
    );

    Program {
        name: format!("Adaptive Program - {}", split_label(options.frequency)),
        split: split_label(options.frequency).to_owned(),
        exercises,
        level: options.level,
        goal: options.goal.clone(),
        frequency: options.frequency,
        notes: String::new(),
    }
}

/// Split label for a weekly frequency.
#[must_use]
pub fn split_label(frequency: u8) -> &'static str {
    match frequency {
        0..=3 => "FULL BODY",
        4 => "UPPER/LOWER",
        _ => "PUSH/PULL/LEGS",
    }
}

/// Prescribe one exercise from its screening baseline.
///
/// Volume comes from the DUP calculator; the pain pipeline may then deload
/// volume, scale the load, and substitute the variant. The first reported
/// pain that conflicts wins; remaining entries are ignored for this exercise.
pub(crate) fn prescribe_exercise(
    pattern: MovementPattern,
    baseline: &PatternBaseline,
    day_type: DayType,
    options: &ProgramOptions,
) -> Exercise {
    let volume = calculate_volume(
        baseline.max_reps,
        &options.goal,
        options.level,
        options.location,
        day_type,
    );

    let mut name = baseline.variant_name.clone();
    let mut notes = volume.notes;
    if options.location == Location::Gym && options.training_type == TrainingType::Machines {
        if let Some(machine) = machines::machine_variant(&name) {
            tracing::debug!(
                original = name,
                machine,
                "converted to guided machine variant"
            );
            if notes.is_empty() {
                notes = format!("Guided machine variant of {name}");
            } else {
                notes = format!("{notes} - Guided machine variant of {name}");
            }
            name = machine.to_owned();
        }
    }
    let mut sets = volume.sets;
    let mut reps = volume.reps;
    let mut load_factor = 1.0;
    let mut was_replaced = false;

    for pain in &options.pains {
        if !is_conflicting(&name, pain.area) {
            continue;
        }
        let deload = apply_pain_deload(sets, reps, pain.severity, options.location);
        sets = deload.sets;
        reps = deload.reps;
        load_factor = deload.load_factor;
        if deload.needs_replacement || deload.needs_easier_variant {
            let substitution = find_safe_alternative(&name, pain.area, pain.severity);
            if substitution.replaced {
                tracing::info!(
                    original = name,
                    replacement = substitution.exercise,
                    area = pain.area.as_str(),
                    "pain substitution applied"
                );
                name = substitution.exercise;
                was_replaced = true;
            }
        }
        break;
    }

    let rir = target_rir(options.level, &options.goal, day_type);
    let weight = baseline
        .weight_10rm
        .map(|w10| round_to_half(calculate_weight_from_rir(w10, reps, rir) * load_factor));

    Exercise {
        name,
        pattern,
        sets,
        reps: Reps::Fixed(reps),
        rest: volume.rest,
        intensity: volume.intensity,
        weight,
        baseline: Some(baseline_ref(baseline)),
        superset_group: None,
        was_replaced,
        notes,
    }
}

fn baseline_ref(baseline: &PatternBaseline) -> trainsmart_core::models::BaselineRef {
    trainsmart_core::models::BaselineRef {
        variant_id: baseline.variant_id.clone(),
        difficulty: baseline.difficulty,
        max_reps: baseline.max_reps,
    }
}

/// Append low-load corrective work for every reported pain area, deduplicated
/// by name across areas.
pub(crate) fn append_correctives(exercises: &mut Vec<Exercise>, pains: &[PainEntry]) {
    for pain in pains {
        for corrective in corrective_exercises(pain.area) {
            if exercises.iter().any(|existing| existing.name == *corrective) {
                continue;
            }
            exercises.push(Exercise {
                name: (*corrective).to_owned(),
                pattern: MovementPattern::Corrective,
                sets: 2,
                reps: Reps::Range(10, 15),
                rest: "30s".to_owned(),
                intensity: "Low".to_owned(),
                weight: None,
                baseline: None,
                superset_group: None,
                was_replaced: false,
                notes: format!("Corrective work - {}", pain.area.as_str()),
            });
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use trainsmart_core::models::BodyArea;

    use super::*;

    fn baseline(variant: &str, max_reps: u32, weight_10rm: Option<f64>) -> PatternBaseline {
        PatternBaseline {
            variant_id: variant.to_lowercase().replace(' ', "_"),
            variant_name: variant.to_owned(),
            max_reps,
            difficulty: 6,
            weight_10rm,
        }
    }

    fn options(pains: Vec<PainEntry>) -> ProgramOptions {
        ProgramOptions {
            baselines: PatternBaselines {
                lower_push: Some(baseline("Squat Completo", 15, None)),
                lower_pull: Some(baseline("Stacco Rumeno", 12, None)),
                horizontal_push: Some(baseline("Push-up Standard", 18, None)),
                vertical_push: Some(baseline("Pike Push-up", 10, None)),
                vertical_pull: Some(baseline("Trazioni", 8, None)),
                core: Some(baseline("Plank", 20, None)),
            },
            level: Level::Intermediate,
            goal: Goal::GeneralFitness,
            location: Location::Home,
            training_type: TrainingType::Bodyweight,
            frequency: 3,
            pains: vec![],
        }
        .with_pains(pains)
    }

    impl ProgramOptions {
        fn with_pains(mut self, pains: Vec<PainEntry>) -> Self {
            self.pains = pains;
            self
        }
    }

    #[test]
    fn program_covers_every_measured_pattern_in_order() {
        let program = generate_program(&options(vec![]), DayType::Moderate);
        let patterns: Vec<_> = program.exercises.iter().map(|e| e.pattern).collect();
        assert_eq!(patterns, MovementPattern::GENERATION_ORDER.to_vec());
    }

    #[test]
    fn missing_baselines_are_skipped() {
        let mut opts = options(vec![]);
        opts.baselines.vertical_pull = None;
        let program = generate_program(&opts, DayType::Moderate);
        assert!(
            !program
                .exercises
                .iter()
                .any(|e| e.pattern == MovementPattern::VerticalPull)
        );
    }

    #[test]
    fn severe_pain_substitutes_and_appends_correctives() {
        let pains = vec![PainEntry::from_intensity(BodyArea::LowerBack, 8)];
        let program = generate_program(&options(pains), DayType::Moderate);

        let hinge = program
            .exercises
            .iter()
            .find(|e| e.pattern == MovementPattern::LowerPull)
            .unwrap();
        assert!(hinge.was_replaced);
        assert_eq!(hinge.name, "Bird Dog");

        assert!(
            program
                .exercises
                .iter()
                .any(|e| e.pattern == MovementPattern::Corrective && e.name == "McGill Big 3")
        );
    }

    #[test]
    fn first_reported_pain_wins_per_exercise() {
        let pains = vec![
            PainEntry::from_intensity(BodyArea::Hip, 2),
            PainEntry::from_intensity(BodyArea::Knee, 9),
        ];
        let program = generate_program(&options(pains), DayType::Moderate);
        let squat = program
            .exercises
            .iter()
            .find(|e| e.pattern == MovementPattern::LowerPush)
            .unwrap();
        // Hip entry is mild: deload without substitution, knee never consulted.
        assert!(!squat.was_replaced);
        assert_eq!(squat.name, "Squat Completo");
    }

    #[test]
    fn weight_reflects_deload_factor() {
        let mut opts = options(vec![PainEntry::from_intensity(BodyArea::Hip, 1)]);
        opts.location = Location::Gym;
        opts.baselines.lower_push = Some(baseline("Back Squat", 10, Some(80.0)));
        let program = generate_program(&opts, DayType::Moderate);
        let squat = program
            .exercises
            .iter()
            .find(|e| e.pattern == MovementPattern::LowerPush)
            .unwrap();
        let unloaded = calculate_weight_from_rir(80.0, squat.reps.target(), 3);
        assert_eq!(squat.weight, Some(round_to_half(unloaded * 0.9)));
    }

    #[test]
    fn corrective_prescriptions_are_fixed_low_load() {
        let pains = vec![PainEntry::from_intensity(BodyArea::Knee, 5)];
        let program = generate_program(&options(pains), DayType::Moderate);
        let corrective = program
            .exercises
            .iter()
            .find(|e| e.pattern == MovementPattern::Corrective)
            .unwrap();
        assert_eq!(corrective.sets, 2);
        assert_eq!(corrective.reps, Reps::Range(10, 15));
        assert_eq!(corrective.rest, "30s");
        assert_eq!(corrective.intensity, "Low");
        assert!(corrective.weight.is_none());
    }

    #[test]
    fn machine_training_converts_gym_prescriptions() {
        let mut opts = options(vec![]);
        opts.location = Location::Gym;
        opts.training_type = TrainingType::Machines;
        let program = generate_program(&opts, DayType::Moderate);

        let lower = program
            .exercises
            .iter()
            .find(|e| e.pattern == MovementPattern::LowerPush)
            .unwrap();
        assert_eq!(lower.name, "Leg Press");
        assert!(lower.notes.contains("Squat Completo"));

        // Core work keeps its bodyweight form.
        let core = program
            .exercises
            .iter()
            .find(|e| e.pattern == MovementPattern::Core)
            .unwrap();
        assert_eq!(core.name, "Plank");
    }

    #[test]
    fn machine_conversion_needs_both_gym_and_machines() {
        let mut opts = options(vec![]);
        opts.training_type = TrainingType::Machines;
        // Still at home: no conversion.
        let program = generate_program(&opts, DayType::Moderate);
        assert_eq!(program.exercises[0].name, "Squat Completo");
    }

    #[test]
    fn split_labels_follow_frequency() {
        assert_eq!(split_label(3), "FULL BODY");
        assert_eq!(split_label(4), "UPPER/LOWER");
        assert_eq!(split_label(6), "PUSH/PULL/LEGS");
    }
}
