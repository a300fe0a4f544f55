// ABOUTME: Live-session state: phases, per-exercise runtime state, set feedback
// ABOUTME: Suspension points and terminals only; evaluation itself is transient
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrainSmart

//! # Live Session State Machine
//!
//! A session walks an exercise list set by set. After every completed set the
//! controller logs the set, evaluates the rep delta against the prescription,
//! and, on the final set of an exercise, validates reported reps-in-reserve
//! against the target. Pain reported mid-session at or above the suggestion
//! threshold suspends the loop until the athlete picks a choice.
//!
//! [`SessionPhase`] only records points where the loop is suspended or
//! finished; evaluation happens inside the controller call and never leaves
//! an intermediate phase behind.

pub mod controller;
pub mod escalation;
pub mod regulation;
pub mod rir;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use trainsmart_core::models::{BodyArea, Exercise, SetLog, TempoModifier};

use regulation::Direction;

/// Where the session loop currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "phase")]
pub enum SessionPhase {
    /// Loop is running; sets may be completed
    Active,
    /// Suspended on a pain report, waiting for the athlete's choice
    AwaitingPainChoice {
        /// Area the report concerned
        area: BodyArea,
        /// Reported 0-10 intensity
        intensity: u8,
    },
    /// All exercises finished or the athlete ended the session
    Completed,
    /// Session abandoned; completed-set logs are retained
    Abandoned,
}

/// Athlete feedback for one completed set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetInput {
    /// Repetitions actually completed
    pub reps_completed: u32,
    /// Load used in kg, when weight-bearing
    pub weight_used: Option<f64>,
    /// Rating of perceived exertion, 1-10
    pub rpe: Option<u8>,
    /// Reps in reserve, 0-5
    pub rir: Option<u8>,
}

/// Runtime state of one exercise within a live session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveExercise {
    /// Prescription this exercise started from
    pub prescription: Exercise,
    /// Variant currently in effect
    pub current_variant: String,
    /// Weight currently in effect in kg
    pub current_weight: Option<f64>,
    /// Per-set rep target currently in effect
    pub target_reps: u32,
    /// Reps-in-reserve target for the final set
    pub target_rir: u8,
    /// Active time-under-tension modifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tempo: Option<TempoModifier>,
    /// Sets completed so far
    pub completed_sets: Vec<SetLog>,
    /// Direction of the last automatic weight change this session
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_auto_direction: Option<Direction>,
    /// Skipped via a pain choice
    #[serde(default)]
    pub skipped: bool,
}

impl LiveExercise {
    /// Wrap a prescription with fresh runtime state.
    #[must_use]
    pub fn new(prescription: Exercise, target_rir: u8) -> Self {
        let current_variant = prescription.name.clone();
        let current_weight = prescription.weight;
        let target_reps = prescription.reps.target();
        Self {
            prescription,
            current_variant,
            current_weight,
            target_reps,
            target_rir,
            tempo: None,
            completed_sets: Vec::new(),
            last_auto_direction: None,
            skipped: false,
        }
    }

    /// Whether all prescribed sets are done or the exercise was skipped.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.skipped || self.completed_sets.len() as u32 >= self.prescription.sets
    }

    /// Whether the next completed set is the final prescribed one.
    #[must_use]
    pub fn on_final_set(&self) -> bool {
        self.completed_sets.len() as u32 + 1 >= self.prescription.sets
    }
}

/// A pain report recorded during the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PainReport {
    /// Affected area
    pub area: BodyArea,
    /// Reported 0-10 intensity
    pub intensity: u8,
    /// Index of the exercise in progress when reported
    pub exercise_index: usize,
}

/// Set feedback queued while a superset round is still open.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PendingFeedback {
    /// Exercise the feedback belongs to
    pub exercise_index: usize,
    /// 1-based set number within that exercise
    pub set_number: u32,
    /// The raw feedback
    pub input: SetInput,
}

/// Full state of one live session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Unique session identifier
    pub session_id: Uuid,
    /// Athlete running the session
    pub athlete_id: Uuid,
    /// Program the session executes
    pub program_id: Uuid,
    /// Current loop phase
    pub phase: SessionPhase,
    /// Exercises in prescription order
    pub exercises: Vec<LiveExercise>,
    /// Index of the exercise in progress
    pub current_exercise: usize,
    /// Pain reports in arrival order
    pub pain_reports: Vec<PainReport>,
    /// Superset feedback awaiting round completion
    pub pending_feedback: Vec<PendingFeedback>,
}

impl SessionState {
    /// Exercise currently in progress, if the session is not finished.
    #[must_use]
    pub fn current(&self) -> Option<&LiveExercise> {
        self.exercises.get(self.current_exercise)
    }

    /// Indices of exercises sharing a superset group.
    #[must_use]
    pub fn group_members(&self, group: u32) -> Vec<usize> {
        self.exercises
            .iter()
            .enumerate()
            .filter(|(_, e)| e.prescription.superset_group == Some(group))
            .map(|(i, _)| i)
            .collect()
    }

    /// Advance past completed exercises; completes the session when none
    /// remain.
    pub fn advance(&mut self) {
        while self
            .exercises
            .get(self.current_exercise)
            .is_some_and(LiveExercise::is_complete)
        {
            self.current_exercise += 1;
        }
        if self.current_exercise >= self.exercises.len() && self.phase == SessionPhase::Active {
            self.phase = SessionPhase::Completed;
        }
    }
}

#[cfg(test)]
mod tests {
    use trainsmart_core::models::{MovementPattern, Reps};

    use super::*;

    fn exercise(name: &str, sets: u32) -> Exercise {
        Exercise {
            name: name.to_owned(),
            pattern: MovementPattern::LowerPush,
            sets,
            reps: Reps::Fixed(10),
            rest: "90s".to_owned(),
            intensity: "70%".to_owned(),
            weight: None,
            baseline: None,
            superset_group: None,
            was_replaced: false,
            notes: String::new(),
        }
    }

    #[test]
    fn live_exercise_tracks_completion() {
        let mut live = LiveExercise::new(exercise("Squat Completo", 2), 2);
        assert!(!live.is_complete());
        assert!(!live.on_final_set());
        live.completed_sets.push(SetLog {
            set_number: 1,
            reps_completed: 10,
            weight_used: None,
            rpe: None,
            rir: None,
            adjusted: false,
            adjustment_reason: None,
        });
        assert!(live.on_final_set());
        assert!(!live.is_complete());
    }

    #[test]
    fn advance_skips_finished_exercises_and_completes_session() {
        let mut state = SessionState {
            session_id: Uuid::new_v4(),
            athlete_id: Uuid::new_v4(),
            program_id: Uuid::new_v4(),
            phase: SessionPhase::Active,
            exercises: vec![
                LiveExercise::new(exercise("Squat Completo", 1), 2),
                LiveExercise::new(exercise("Plank", 1), 2),
            ],
            current_exercise: 0,
            pain_reports: vec![],
            pending_feedback: vec![],
        };
        state.exercises[0].skipped = true;
        state.advance();
        assert_eq!(state.current_exercise, 1);
        state.exercises[1].skipped = true;
        state.advance();
        assert_eq!(state.phase, SessionPhase::Completed);
    }
}
