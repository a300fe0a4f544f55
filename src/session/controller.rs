// ABOUTME: Session controller: wires set feedback to regulation, RIR validation, escalation
// ABOUTME: Persists modifications, set logs, and alerts through the adjustment store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrainSmart

//! Session controller.
//!
//! Owns the per-set loop: logs every set, evaluates rep deltas, runs RIR
//! validation on the final set of each exercise, and suspends on pain
//! reports. Storage writes for logs and alerts are best-effort; a storage
//! failure is logged and never interrupts a live session. Loading state at
//! session start is the one storage call that must succeed.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use trainsmart_core::config::EngineConfig;
use trainsmart_core::errors::{EngineError, EngineResult};
use trainsmart_core::models::{
    AlertSeverity, BodyArea, DayType, Exercise, ExerciseModification, Goal, Level, PainSeverity,
    SafetyAlert, SetLog,
};

use crate::pain::{find_safe_alternative, is_conflicting};
use crate::program::{round_to_half, target_rir};
use crate::rest::parse_rest_seconds;
use crate::storage::AdjustmentStore;

use super::escalation::{available_choices, load_reduction_band, LoadReduction, PainChoice};
use super::regulation::{evaluate_rep_delta, RepDeltaOutcome};
use super::rir::{validate_rir, RirAssessment, RirChange, RirContext};
use super::{LiveExercise, PainReport, PendingFeedback, SessionPhase, SessionState, SetInput};

/// Result of completing one set.
#[derive(Debug, Clone, PartialEq)]
pub struct SetOutcome {
    /// Rep-delta evaluation, absent when deferred or not applicable
    pub rep_delta: Option<RepDeltaOutcome>,
    /// RIR validation result, present only after the exercise's final set
    pub rir: Option<RirAssessment>,
    /// Feedback queued until the superset round closes
    pub deferred: bool,
    /// Advisory rest in seconds before the next set, absent once the
    /// exercise is done
    pub rest_seconds: Option<u32>,
    /// The exercise finished with this set
    pub exercise_complete: bool,
    /// The whole session finished with this set
    pub session_complete: bool,
}

/// Result of a mid-session pain report.
#[derive(Debug, Clone, PartialEq)]
pub struct PainReportOutcome {
    /// The loop suspended waiting for a choice
    pub suspended: bool,
    /// Choices offered to the athlete
    pub choices: Vec<PainChoice>,
    /// Load band for the continue-adapted path; `None` means skip the work
    pub load_reduction: Option<LoadReduction>,
    /// Pain worsened past the progressive-alert threshold this session
    pub progressive_alert: bool,
}

/// Drives live sessions against a persistence backend.
pub struct SessionController<S> {
    store: Arc<S>,
    config: EngineConfig,
}

impl<S: AdjustmentStore> SessionController<S> {
    /// Create a controller over a store with the given thresholds.
    pub fn new(store: Arc<S>, config: EngineConfig) -> Self {
        Self { store, config }
    }

    /// Start a session from a prescription, restoring any durable
    /// modifications saved by earlier sessions. Exercises loading an area in
    /// recovery mode start out skipped.
    ///
    /// # Errors
    /// Returns a storage error when modifications or deactivated areas cannot
    /// be loaded.
    pub async fn start_session(
        &self,
        athlete_id: Uuid,
        program_id: Uuid,
        exercises: Vec<Exercise>,
        level: Level,
        goal: &Goal,
        day_type: DayType,
    ) -> EngineResult<SessionState> {
        let modifications = self
            .store
            .load_active_modifications(athlete_id, program_id)
            .await?;
        let deactivated = self
            .store
            .load_deactivated_areas(athlete_id, program_id)
            .await?;

        let live: Vec<LiveExercise> = exercises
            .into_iter()
            .map(|exercise| {
                let rir = target_rir(level, goal, day_type);
                let mut live = LiveExercise::new(exercise, rir);
                if let Some(saved) = modifications
                    .iter()
                    .find(|m| m.exercise_name == live.prescription.name)
                {
                    live.current_variant = saved.current_variant.clone();
                    live.current_weight = saved.current_weight.or(live.current_weight);
                    if let Some(reps) = saved.current_reps {
                        live.target_reps = reps;
                    }
                    live.tempo = saved.tempo_modifier.clone();
                }
                live.skipped = deactivated
                    .iter()
                    .any(|&area| is_conflicting(&live.current_variant, area));
                live
            })
            .collect();

        tracing::info!(
            %athlete_id,
            %program_id,
            exercises = live.len(),
            restored = modifications.len(),
            deactivated = deactivated.len(),
            "session started"
        );

        let mut state = SessionState {
            session_id: Uuid::new_v4(),
            athlete_id,
            program_id,
            phase: SessionPhase::Active,
            exercises: live,
            current_exercise: 0,
            pain_reports: Vec::new(),
            pending_feedback: Vec::new(),
        };
        state.advance();
        Ok(state)
    }

    /// Record one completed set and run the evaluation pipeline.
    ///
    /// For superset members the evaluation is deferred until every exercise
    /// in the group has logged the same set number, then the whole round is
    /// evaluated in logging order.
    ///
    /// # Errors
    /// Returns an invalid-transition error when the session is not active, or
    /// an invalid-input error for an unknown or finished exercise.
    pub async fn handle_set_complete(
        &self,
        state: &mut SessionState,
        exercise_index: usize,
        input: SetInput,
    ) -> EngineResult<SetOutcome> {
        if state.phase != SessionPhase::Active {
            return Err(EngineError::invalid_transition(
                "complete_set",
                phase_name(&state.phase),
            ));
        }
        let exercise = state.exercises.get_mut(exercise_index).ok_or_else(|| {
            EngineError::invalid_input("exercise_index", "no such exercise in this session")
        })?;
        if exercise.is_complete() {
            return Err(EngineError::invalid_input(
                "exercise_index",
                "exercise already complete",
            ));
        }

        let set_number = exercise.completed_sets.len() as u32 + 1;
        let log = SetLog {
            set_number,
            reps_completed: input.reps_completed,
            weight_used: input.weight_used.or(exercise.current_weight),
            rpe: input.rpe,
            rir: input.rir,
            adjusted: false,
            adjustment_reason: None,
        };
        exercise.completed_sets.push(log.clone());
        let exercise_name = exercise.prescription.name.clone();
        if let Err(error) = self
            .store
            .append_set_log(state.athlete_id, &exercise_name, log)
            .await
        {
            tracing::warn!(%error, "failed to persist set log");
        }

        let mut outcome = SetOutcome {
            rep_delta: None,
            rir: None,
            deferred: false,
            rest_seconds: None,
            exercise_complete: false,
            session_complete: false,
        };

        let group = state.exercises[exercise_index].prescription.superset_group;
        if let Some(group) = group {
            state.pending_feedback.push(PendingFeedback {
                exercise_index,
                set_number,
                input,
            });
            let round = state
                .group_members(group)
                .iter()
                .map(|&i| state.exercises[i].completed_sets.len() as u32)
                .min()
                .unwrap_or(0);
            let due: Vec<PendingFeedback> = {
                let (ready, waiting): (Vec<_>, Vec<_>) =
                    state.pending_feedback.iter().copied().partition(|p| {
                        state.exercises[p.exercise_index].prescription.superset_group
                            == Some(group)
                            && p.set_number <= round
                    });
                state.pending_feedback = waiting;
                ready
            };
            if due.is_empty() {
                outcome.deferred = true;
            }
            for pending in due {
                let (rep_delta, rir) = self
                    .evaluate_feedback(state, pending.exercise_index, pending.input)
                    .await;
                if pending.exercise_index == exercise_index && pending.set_number == set_number {
                    outcome.rep_delta = rep_delta;
                    outcome.rir = rir;
                }
            }
        } else {
            let (rep_delta, rir) = self.evaluate_feedback(state, exercise_index, input).await;
            outcome.rep_delta = rep_delta;
            outcome.rir = rir;
        }

        outcome.exercise_complete = state.exercises[exercise_index].is_complete();
        // No rest between paired movements; the advisory timer starts only
        // when the superset round is closed.
        if !outcome.exercise_complete && !outcome.deferred {
            outcome.rest_seconds = Some(parse_rest_seconds(
                &state.exercises[exercise_index].prescription.rest,
            ));
        }
        state.advance();
        outcome.session_complete = state.phase == SessionPhase::Completed;
        Ok(outcome)
    }

    /// Validate an RIR report supplied after the final set was confirmed.
    ///
    /// RIR normally rides along on the final set's [`SetInput`]; athletes who
    /// confirm the set first and rate the effort afterwards come through
    /// here. Applies the same downgrade/upgrade pipeline and persists the
    /// resulting modification.
    ///
    /// # Errors
    /// Returns an invalid-transition error when the session was suspended or
    /// abandoned, and an invalid-input error for an unknown exercise, an
    /// exercise with sets remaining, a non-auto-regulated exercise, or a
    /// final set whose RIR was already evaluated.
    pub async fn handle_rir_validation(
        &self,
        state: &mut SessionState,
        exercise_index: usize,
        actual_rir: u8,
    ) -> EngineResult<RirAssessment> {
        if !matches!(
            state.phase,
            SessionPhase::Active | SessionPhase::Completed
        ) {
            return Err(EngineError::invalid_transition(
                "validate_rir",
                phase_name(&state.phase),
            ));
        }
        {
            let exercise = state.exercises.get_mut(exercise_index).ok_or_else(|| {
                EngineError::invalid_input("exercise_index", "no such exercise in this session")
            })?;
            if !exercise.prescription.pattern.is_auto_regulated() {
                return Err(EngineError::invalid_input(
                    "exercise_index",
                    "exercise is not auto-regulated",
                ));
            }
            if (exercise.completed_sets.len() as u32) < exercise.prescription.sets {
                return Err(EngineError::invalid_input(
                    "exercise_index",
                    "final set not confirmed yet",
                ));
            }
            let last = exercise.completed_sets.last_mut().ok_or_else(|| {
                EngineError::invalid_input("exercise_index", "no sets were logged")
            })?;
            if last.rir.is_some() {
                return Err(EngineError::invalid_input(
                    "actual_rir",
                    "final-set RIR already evaluated",
                ));
            }
            last.rir = Some(actual_rir);
        }

        let assessment = {
            let exercise = &state.exercises[exercise_index];
            validate_rir(
                actual_rir,
                exercise.target_rir,
                &RirContext {
                    current_variant: &exercise.current_variant,
                    original_variant: &exercise.prescription.name,
                    current_weight: exercise.current_weight,
                    original_weight: exercise.prescription.weight,
                    target_reps: exercise.target_reps,
                    tempo: exercise.tempo.as_ref(),
                },
                &self.config.auto_regulation,
            )
        };
        self.apply_rir_change(state, exercise_index, &assessment)
            .await;
        Ok(assessment)
    }

    /// Record a pain report; suspends the loop at the suggestion threshold.
    ///
    /// # Errors
    /// Returns an invalid-transition error when the session is not active.
    pub async fn handle_pain_report(
        &self,
        state: &mut SessionState,
        area: BodyArea,
        intensity: u8,
    ) -> EngineResult<PainReportOutcome> {
        if state.phase != SessionPhase::Active {
            return Err(EngineError::invalid_transition(
                "report_pain",
                phase_name(&state.phase),
            ));
        }

        let first_intensity = state
            .pain_reports
            .iter()
            .find(|r| r.area == area)
            .map(|r| r.intensity);
        state.pain_reports.push(PainReport {
            area,
            intensity,
            exercise_index: state.current_exercise,
        });

        let progressive_alert = first_intensity.is_some_and(|first| {
            intensity.saturating_sub(first) >= self.config.pain.progressive_alert_delta
        });
        if progressive_alert {
            self.record_alert(
                state.athlete_id,
                AlertSeverity::Warning,
                area.as_str().to_owned(),
                format!("pain in {} worsened during the session to {intensity}/10", area.as_str()),
            )
            .await;
        }

        let suspended = intensity >= self.config.pain.suggest_reduction_min;
        if suspended {
            state.phase = SessionPhase::AwaitingPainChoice { area, intensity };
        }

        Ok(PainReportOutcome {
            suspended,
            choices: available_choices(intensity, &self.config.pain),
            load_reduction: load_reduction_band(intensity),
            progressive_alert,
        })
    }

    /// Apply the athlete's choice and resume (or end) the loop.
    ///
    /// # Errors
    /// Returns an invalid-transition error when no choice is pending, or an
    /// invalid-input error for a choice that was not offered at this
    /// intensity.
    pub fn handle_pain_choice(
        &self,
        state: &mut SessionState,
        choice: PainChoice,
    ) -> EngineResult<()> {
        let SessionPhase::AwaitingPainChoice { area, intensity } = state.phase else {
            return Err(EngineError::invalid_transition(
                "pain_choice",
                phase_name(&state.phase),
            ));
        };
        if !available_choices(intensity, &self.config.pain).contains(&choice) {
            return Err(EngineError::invalid_input(
                "choice",
                "not offered at this pain intensity",
            ));
        }

        state.phase = SessionPhase::Active;
        match choice {
            PainChoice::ContinueNormal => {}
            PainChoice::ContinueAdapted => {
                if let Some(exercise) = state.exercises.get_mut(state.current_exercise) {
                    if let Some(weight) = exercise.current_weight {
                        exercise.current_weight =
                            Some(round_to_half(weight * self.config.pain.adapted_load_factor));
                    }
                }
            }
            PainChoice::SubstituteExercise => {
                let severity = PainSeverity::from_intensity(intensity);
                if let Some(exercise) = state.exercises.get_mut(state.current_exercise) {
                    let substitution =
                        find_safe_alternative(&exercise.current_variant, area, severity);
                    if substitution.replaced {
                        exercise.current_variant = substitution.exercise;
                    }
                }
            }
            PainChoice::SkipExercise => {
                if let Some(exercise) = state.exercises.get_mut(state.current_exercise) {
                    exercise.skipped = true;
                }
                state.advance();
            }
            PainChoice::SkipArea => {
                for exercise in state.exercises.iter_mut().skip(state.current_exercise) {
                    if !exercise.is_complete() && is_conflicting(&exercise.current_variant, area) {
                        exercise.skipped = true;
                    }
                }
                state.advance();
            }
            PainChoice::EndSession => {
                state.phase = SessionPhase::Completed;
            }
        }
        Ok(())
    }

    /// Put an area into recovery mode: deactivate it for the remainder of
    /// the program and skip every remaining exercise loading it in this
    /// session.
    ///
    /// Offered when [`super::escalation::recovery_mode_due`] trips over the
    /// athlete's recent session history. Returns the number of exercises
    /// skipped in the running session.
    ///
    /// # Errors
    /// Returns an invalid-transition error when the session already finished,
    /// or a storage error when the deactivation cannot be persisted; the
    /// deactivation is durable state, so unlike set logs it must succeed.
    pub async fn enter_recovery_mode(
        &self,
        state: &mut SessionState,
        area: BodyArea,
    ) -> EngineResult<usize> {
        if matches!(
            state.phase,
            SessionPhase::Completed | SessionPhase::Abandoned
        ) {
            return Err(EngineError::invalid_transition(
                "enter_recovery_mode",
                phase_name(&state.phase),
            ));
        }
        self.store
            .deactivate_area(state.athlete_id, state.program_id, area)
            .await?;

        let mut skipped = 0;
        for exercise in state.exercises.iter_mut().skip(state.current_exercise) {
            if !exercise.is_complete() && is_conflicting(&exercise.current_variant, area) {
                exercise.skipped = true;
                skipped += 1;
            }
        }
        tracing::info!(
            area = area.as_str(),
            skipped,
            "area deactivated for the remainder of the program"
        );
        state.phase = SessionPhase::Active;
        state.advance();
        Ok(skipped)
    }

    /// Abandon the session. Completed-set logs are retained.
    ///
    /// # Errors
    /// Returns an invalid-transition error when the session already finished.
    pub fn abandon(&self, state: &mut SessionState) -> EngineResult<()> {
        if matches!(
            state.phase,
            SessionPhase::Completed | SessionPhase::Abandoned
        ) {
            return Err(EngineError::invalid_transition(
                "abandon",
                phase_name(&state.phase),
            ));
        }
        state.phase = SessionPhase::Abandoned;
        tracing::info!(session_id = %state.session_id, "session abandoned");
        Ok(())
    }

    async fn evaluate_feedback(
        &self,
        state: &mut SessionState,
        index: usize,
        input: SetInput,
    ) -> (Option<RepDeltaOutcome>, Option<RirAssessment>) {
        let exercise = &mut state.exercises[index];
        if !exercise.prescription.pattern.is_auto_regulated() {
            return (None, None);
        }

        let rep_delta = evaluate_rep_delta(
            exercise.target_reps,
            input.reps_completed,
            exercise.current_weight,
            exercise.last_auto_direction,
            &self.config.auto_regulation,
        );
        if let RepDeltaOutcome::Adjusted {
            new_weight,
            direction,
            ref reason,
        } = rep_delta
        {
            exercise.current_weight = Some(new_weight);
            exercise.last_auto_direction = Some(direction);
            if let Some(last) = exercise.completed_sets.last_mut() {
                last.adjusted = true;
                last.adjustment_reason = Some(reason.clone());
            }
        }

        let mut rir_assessment = None;
        if exercise.is_complete() {
            if let Some(actual_rir) = input.rir {
                let assessment = validate_rir(
                    actual_rir,
                    exercise.target_rir,
                    &RirContext {
                        current_variant: &exercise.current_variant,
                        original_variant: &exercise.prescription.name,
                        current_weight: exercise.current_weight,
                        original_weight: exercise.prescription.weight,
                        target_reps: exercise.target_reps,
                        tempo: exercise.tempo.as_ref(),
                    },
                    &self.config.auto_regulation,
                );
                self.apply_rir_change(state, index, &assessment).await;
                rir_assessment = Some(assessment);
            }
        }

        (Some(rep_delta), rir_assessment)
    }

    async fn apply_rir_change(
        &self,
        state: &mut SessionState,
        index: usize,
        assessment: &RirAssessment,
    ) {
        let athlete_id = state.athlete_id;
        let program_id = state.program_id;
        let exercise = &mut state.exercises[index];

        match &assessment.change {
            RirChange::None => {}
            RirChange::ReduceWeight { new_weight }
            | RirChange::RestoreWeight { new_weight }
            | RirChange::IncreaseWeight { new_weight } => {
                exercise.current_weight = Some(*new_weight);
            }
            RirChange::EasierVariant {
                variant,
                target_reps,
            }
            | RirChange::HarderVariant {
                variant,
                target_reps,
            } => {
                exercise.current_variant = variant.clone();
                exercise.target_reps = *target_reps;
            }
            RirChange::ReduceReps { target_reps } | RirChange::IncreaseReps { target_reps } => {
                exercise.target_reps = *target_reps;
            }
            RirChange::RestoreVariant { variant } => {
                exercise.current_variant = variant.clone();
            }
            RirChange::AddTempo { tempo } => {
                exercise.tempo = Some(tempo.clone());
            }
        }
        if assessment.clears_tempo {
            exercise.tempo = None;
        }

        if assessment.change != RirChange::None {
            let modification = ExerciseModification {
                athlete_id,
                program_id,
                exercise_name: exercise.prescription.name.clone(),
                original_variant: exercise.prescription.name.clone(),
                current_variant: exercise.current_variant.clone(),
                tempo_modifier: exercise.tempo.clone(),
                original_weight: exercise.prescription.weight,
                current_weight: exercise.current_weight,
                original_reps: Some(exercise.prescription.reps.target()),
                current_reps: Some(exercise.target_reps),
                updated_at: Utc::now(),
            };
            if let Err(error) = self.store.save_modification(modification).await {
                tracing::warn!(%error, "failed to persist exercise modification");
            }
        }

        if let Some(severity) = assessment.alert {
            let exercise_name = state.exercises[index].current_variant.clone();
            let message = format!(
                "reported RIR came in {} under target",
                assessment.delta.unsigned_abs()
            );
            self.record_alert(athlete_id, severity, exercise_name, message)
                .await;
        }
    }

    async fn record_alert(
        &self,
        athlete_id: Uuid,
        severity: AlertSeverity,
        exercise: String,
        message: String,
    ) {
        let alert = SafetyAlert {
            athlete_id,
            severity,
            exercise,
            message,
            created_at: Utc::now(),
        };
        if let Err(error) = self.store.log_safety_alert(alert).await {
            tracing::warn!(%error, "failed to persist safety alert");
        }
    }
}

fn phase_name(phase: &SessionPhase) -> &'static str {
    match phase {
        SessionPhase::Active => "active",
        SessionPhase::AwaitingPainChoice { .. } => "awaiting_pain_choice",
        SessionPhase::Completed => "completed",
        SessionPhase::Abandoned => "abandoned",
    }
}
