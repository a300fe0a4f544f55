// ABOUTME: Weekly split generation: full-body DUP rotation, upper/lower, push/pull/legs
// ABOUTME: Estimates per-day duration from sets, reps, and parsed rest prescriptions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrainSmart

//! # Weekly Split Generation
//!
//! Frequency picks the split: up to three days trains full body with a
//! rotating heavy-pattern schedule, four days runs upper/lower, five or more
//! runs push/pull/legs. Day types undulate so every pattern sees heavy,
//! volume, and moderate exposures across the week.
//!
//! Horizontal pulling is not screened; row work is estimated from the
//! vertical-pull baseline, falling back to a 12-rep assumption.

use trainsmart_core::models::{
    DayType, DayWorkout, Exercise, Location, MovementPattern, PatternBaseline, WeeklySplit,
};

use crate::rest::parse_rest_seconds;

use super::{append_correctives, prescribe_exercise, split_label, ProgramOptions};

/// Rep-max assumed for row work when no vertical-pull baseline exists.
const DEFAULT_ROW_REPS: u32 = 12;

/// Generate a full training week for the requested frequency.
#[must_use]
pub fn generate_weekly_split(options: &ProgramOptions) -> WeeklySplit {
    let frequency = options.frequency.clamp(1, 6);
    let days: Vec<DayWorkout> = match frequency {
        0..=3 => full_body_week(options, frequency),
        4 => upper_lower_week(options),
        _ => push_pull_legs_week(options, frequency),
    };

    let average_duration = mean_duration(&days);
    tracing::debug!(
        split = split_label(frequency),
        days = days.len(),
        average_duration,
        "generated weekly split"
    );

    WeeklySplit {
        split_name: format!("{} {frequency}x/week", split_display_name(frequency)),
        description: split_description(frequency).to_owned(),
        days,
        average_duration,
    }
}

fn split_display_name(frequency: u8) -> &'static str {
    match frequency {
        0..=3 => "Full Body",
        4 => "Upper/Lower",
        _ => "Push/Pull/Legs",
    }
}

fn split_description(frequency: u8) -> &'static str {
    match frequency {
        0..=3 => "Every session trains all patterns; the heavy emphasis rotates across the week",
        4 => "Upper and lower body alternate, each trained twice at different intensities",
        _ => "Push, pull, and leg days alternate with undulating intensity across the week",
    }
}

/// Full-body patterns in session order.
const FULL_BODY_PATTERNS: [MovementPattern; 7] = [
    MovementPattern::LowerPush,
    MovementPattern::HorizontalPush,
    MovementPattern::VerticalPush,
    MovementPattern::VerticalPull,
    MovementPattern::HorizontalPull,
    MovementPattern::LowerPull,
    MovementPattern::Core,
];

const UPPER_PATTERNS: [MovementPattern; 5] = [
    MovementPattern::HorizontalPush,
    MovementPattern::VerticalPull,
    MovementPattern::VerticalPush,
    MovementPattern::HorizontalPull,
    MovementPattern::Core,
];

const LOWER_PATTERNS: [MovementPattern; 3] = [
    MovementPattern::LowerPush,
    MovementPattern::LowerPull,
    MovementPattern::Core,
];

const PUSH_PATTERNS: [MovementPattern; 3] = [
    MovementPattern::HorizontalPush,
    MovementPattern::VerticalPush,
    MovementPattern::Core,
];

const PULL_PATTERNS: [MovementPattern; 3] = [
    MovementPattern::VerticalPull,
    MovementPattern::HorizontalPull,
    MovementPattern::Core,
];

/// Day type for a pattern on a rotating full-body day.
///
/// Core work always stays at volume intensity; the heavy emphasis moves so
/// that each compound pattern is trained heavy once across three sessions.
#[must_use]
pub fn full_body_day_type(day_index: usize, pattern: MovementPattern) -> DayType {
    if matches!(pattern, MovementPattern::Core | MovementPattern::Corrective) {
        return DayType::Volume;
    }
    let heavy: &[MovementPattern] = match day_index % 3 {
        0 => &[
            MovementPattern::LowerPush,
            MovementPattern::HorizontalPush,
        ],
        1 => &[
            MovementPattern::LowerPull,
            MovementPattern::HorizontalPull,
            MovementPattern::VerticalPush,
        ],
        _ => &[MovementPattern::LowerPush, MovementPattern::VerticalPull],
    };
    if heavy.contains(&pattern) {
        DayType::Heavy
    } else {
        DayType::Moderate
    }
}

fn full_body_week(options: &ProgramOptions, frequency: u8) -> Vec<DayWorkout> {
    (0..usize::from(frequency))
        .map(|day_index| {
            let exercises: Vec<Exercise> = FULL_BODY_PATTERNS
                .iter()
                .filter_map(|&pattern| {
                    build_exercise(
                        pattern,
                        full_body_day_type(day_index, pattern),
                        options,
                    )
                })
                .collect();
            let label = ['A', 'B', 'C'][day_index % 3];
            finish_day(
                day_index,
                format!("Day {} - Full Body {label}", day_index + 1),
                "Whole-body session, rotating heavy emphasis".to_owned(),
                exercises,
                options,
            )
        })
        .collect()
}

fn upper_lower_week(options: &ProgramOptions) -> Vec<DayWorkout> {
    let plan: [(&str, &str, &[MovementPattern], DayType); 4] = [
        ("Upper A", "Upper body, heavy", &UPPER_PATTERNS, DayType::Heavy),
        ("Lower A", "Lower body, volume", &LOWER_PATTERNS, DayType::Volume),
        (
            "Upper B",
            "Upper body, moderate",
            &UPPER_PATTERNS,
            DayType::Moderate,
        ),
        (
            "Lower B",
            "Lower body, moderate",
            &LOWER_PATTERNS,
            DayType::Moderate,
        ),
    ];
    build_planned_week(&plan, options)
}

fn push_pull_legs_week(options: &ProgramOptions, frequency: u8) -> Vec<DayWorkout> {
    let plan: [(&str, &str, &[MovementPattern], DayType); 6] = [
        ("Push A", "Pressing, heavy", &PUSH_PATTERNS, DayType::Heavy),
        ("Pull A", "Pulling, volume", &PULL_PATTERNS, DayType::Volume),
        ("Legs A", "Lower body, moderate", &LOWER_PATTERNS, DayType::Moderate),
        ("Push B", "Pressing, volume", &PUSH_PATTERNS, DayType::Volume),
        ("Pull B", "Pulling, moderate", &PULL_PATTERNS, DayType::Moderate),
        ("Legs B", "Lower body, heavy", &LOWER_PATTERNS, DayType::Heavy),
    ];
    build_planned_week(&plan[..usize::from(frequency).min(plan.len())], options)
}

fn build_planned_week(
    plan: &[(&str, &str, &[MovementPattern], DayType)],
    options: &ProgramOptions,
) -> Vec<DayWorkout> {
    plan.iter()
        .enumerate()
        .map(|(day_index, (name, focus, patterns, day_type))| {
            let exercises: Vec<Exercise> = patterns
                .iter()
                .filter_map(|&pattern| {
                    // Core stays at volume intensity regardless of the day.
                    let effective = if pattern == MovementPattern::Core {
                        DayType::Volume
                    } else {
                        *day_type
                    };
                    build_exercise(pattern, effective, options)
                })
                .collect();
            finish_day(
                day_index,
                format!("Day {} - {name}", day_index + 1),
                (*focus).to_owned(),
                exercises,
                options,
            )
        })
        .collect()
}

fn finish_day(
    day_index: usize,
    day_name: String,
    focus: String,
    mut exercises: Vec<Exercise>,
    options: &ProgramOptions,
) -> DayWorkout {
    append_correctives(&mut exercises, &options.pains);
    let estimated_duration = Some(estimate_day_minutes(&exercises));
    DayWorkout {
        day_number: day_index as u8 + 1,
        day_name,
        focus,
        exercises,
        estimated_duration,
    }
}

fn build_exercise(
    pattern: MovementPattern,
    day_type: DayType,
    options: &ProgramOptions,
) -> Option<Exercise> {
    if pattern == MovementPattern::HorizontalPull {
        let baseline = estimated_row_baseline(options);
        return Some(prescribe_exercise(pattern, &baseline, day_type, options));
    }
    options
        .baselines
        .get(pattern)
        .map(|baseline| prescribe_exercise(pattern, baseline, day_type, options))
}

/// Synthesize a row baseline from the vertical-pull screening result.
fn estimated_row_baseline(options: &ProgramOptions) -> PatternBaseline {
    let vertical = options.baselines.get(MovementPattern::VerticalPull);
    let name = if options.location == Location::Gym {
        "Barbell Row"
    } else {
        "Inverted Row"
    };
    PatternBaseline {
        variant_id: "row_estimated".to_owned(),
        variant_name: name.to_owned(),
        max_reps: vertical.map_or(DEFAULT_ROW_REPS, |b| b.max_reps),
        difficulty: vertical.map_or(5, |b| b.difficulty),
        weight_10rm: None,
    }
}

/// Estimate a session's duration in minutes: 5 min warm-up, working time,
/// 3 min cool-down. Each rep is budgeted 3.5 s, bounded to a 20-60 s set.
#[must_use]
pub fn estimate_day_minutes(exercises: &[Exercise]) -> u32 {
    let total_seconds: u32 = exercises
        .iter()
        .map(|exercise| {
            let set_seconds =
                (f64::from(exercise.reps.target()) * 3.5).clamp(20.0, 60.0) as u32;
            let rest_seconds = parse_rest_seconds(&exercise.rest);
            exercise.sets * set_seconds + exercise.sets.saturating_sub(1) * rest_seconds + 30
        })
        .sum();
    5 + total_seconds.div_ceil(60) + 3
}

fn mean_duration(days: &[DayWorkout]) -> Option<u32> {
    let durations: Vec<u32> = days.iter().filter_map(|d| d.estimated_duration).collect();
    if durations.is_empty() {
        return None;
    }
    Some(durations.iter().sum::<u32>() / durations.len() as u32)
}
