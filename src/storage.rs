// ABOUTME: Persistence boundary: durable exercise modifications, set logs, safety alerts
// ABOUTME: Trait consumed by the session controller plus an in-memory implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrainSmart

//! # Adjustment Store
//!
//! The session controller persists RIR-driven modifications so the next
//! session starts from the adjusted state, and appends set logs and safety
//! alerts as they happen. Embedders provide their own backing store; the
//! in-memory implementation backs tests and single-process deployments.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use trainsmart_core::errors::{EngineError, EngineResult};
use trainsmart_core::models::{BodyArea, ExerciseModification, SafetyAlert, SetLog};

/// Durable storage consumed by the session controller.
#[async_trait]
pub trait AdjustmentStore: Send + Sync {
    /// Modifications in effect for an athlete's program, any exercise.
    async fn load_active_modifications(
        &self,
        athlete_id: Uuid,
        program_id: Uuid,
    ) -> EngineResult<Vec<ExerciseModification>>;

    /// Insert or replace the modification for its (athlete, program, exercise)
    /// key.
    async fn save_modification(&self, modification: ExerciseModification) -> EngineResult<()>;

    /// Append one completed-set record.
    async fn append_set_log(
        &self,
        athlete_id: Uuid,
        exercise_name: &str,
        log: SetLog,
    ) -> EngineResult<()>;

    /// Record a safety alert for coach review.
    async fn log_safety_alert(&self, alert: SafetyAlert) -> EngineResult<()>;

    /// Deactivate an area for the remainder of the program; exercises loading
    /// it are skipped by every later session.
    async fn deactivate_area(
        &self,
        athlete_id: Uuid,
        program_id: Uuid,
        area: BodyArea,
    ) -> EngineResult<()>;

    /// Areas deactivated for an athlete's program.
    async fn load_deactivated_areas(
        &self,
        athlete_id: Uuid,
        program_id: Uuid,
    ) -> EngineResult<Vec<BodyArea>>;
}

#[derive(Debug, Default)]
struct MemoryState {
    modifications: HashMap<(Uuid, Uuid, String), ExerciseModification>,
    set_logs: HashMap<(Uuid, String), Vec<SetLog>>,
    alerts: Vec<SafetyAlert>,
    deactivated_areas: HashMap<(Uuid, Uuid), Vec<BodyArea>>,
}

/// In-memory [`AdjustmentStore`].
///
/// The mutex is only held for map access, never across an await point.
#[derive(Debug, Default)]
pub struct MemoryAdjustmentStore {
    state: Mutex<MemoryState>,
}

impl MemoryAdjustmentStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn locked<T>(&self, access: impl FnOnce(&mut MemoryState) -> T) -> EngineResult<T> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| EngineError::storage("adjustment store mutex poisoned"))?;
        Ok(access(&mut state))
    }

    /// Set logs recorded for one athlete and exercise, in append order.
    pub fn set_logs(&self, athlete_id: Uuid, exercise_name: &str) -> EngineResult<Vec<SetLog>> {
        self.locked(|state| {
            state
                .set_logs
                .get(&(athlete_id, exercise_name.to_owned()))
                .cloned()
                .unwrap_or_default()
        })
    }

    /// All safety alerts recorded so far.
    pub fn alerts(&self) -> EngineResult<Vec<SafetyAlert>> {
        self.locked(|state| state.alerts.clone())
    }
}

#[async_trait]
impl AdjustmentStore for MemoryAdjustmentStore {
    async fn load_active_modifications(
        &self,
        athlete_id: Uuid,
        program_id: Uuid,
    ) -> EngineResult<Vec<ExerciseModification>> {
        self.locked(|state| {
            state
                .modifications
                .values()
                .filter(|m| m.athlete_id == athlete_id && m.program_id == program_id)
                .cloned()
                .collect()
        })
    }

    async fn save_modification(&self, modification: ExerciseModification) -> EngineResult<()> {
        self.locked(|state| {
            let key = (
                modification.athlete_id,
                modification.program_id,
                modification.exercise_name.clone(),
            );
            state.modifications.insert(key, modification);
        })
    }

    async fn append_set_log(
        &self,
        athlete_id: Uuid,
        exercise_name: &str,
        log: SetLog,
    ) -> EngineResult<()> {
        self.locked(|state| {
            state
                .set_logs
                .entry((athlete_id, exercise_name.to_owned()))
                .or_default()
                .push(log);
        })
    }

    async fn log_safety_alert(&self, alert: SafetyAlert) -> EngineResult<()> {
        self.locked(|state| state.alerts.push(alert))
    }

    async fn deactivate_area(
        &self,
        athlete_id: Uuid,
        program_id: Uuid,
        area: BodyArea,
    ) -> EngineResult<()> {
        self.locked(|state| {
            let areas = state
                .deactivated_areas
                .entry((athlete_id, program_id))
                .or_default();
            if !areas.contains(&area) {
                areas.push(area);
            }
        })
    }

    async fn load_deactivated_areas(
        &self,
        athlete_id: Uuid,
        program_id: Uuid,
    ) -> EngineResult<Vec<BodyArea>> {
        self.locked(|state| {
            state
                .deactivated_areas
                .get(&(athlete_id, program_id))
                .cloned()
                .unwrap_or_default()
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn modification(athlete: Uuid, program: Uuid, exercise: &str) -> ExerciseModification {
        ExerciseModification {
            athlete_id: athlete,
            program_id: program,
            exercise_name: exercise.to_owned(),
            original_variant: exercise.to_owned(),
            current_variant: exercise.to_owned(),
            tempo_modifier: None,
            original_weight: Some(60.0),
            current_weight: Some(54.0),
            original_reps: Some(8),
            current_reps: Some(8),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn save_replaces_by_exercise_key() {
        let store = MemoryAdjustmentStore::new();
        let athlete = Uuid::new_v4();
        let program = Uuid::new_v4();

        store
            .save_modification(modification(athlete, program, "Squat"))
            .await
            .unwrap();
        let mut updated = modification(athlete, program, "Squat");
        updated.current_weight = Some(50.0);
        store.save_modification(updated).await.unwrap();

        let active = store
            .load_active_modifications(athlete, program)
            .await
            .unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].current_weight, Some(50.0));
    }

    #[tokio::test]
    async fn load_filters_by_athlete_and_program() {
        let store = MemoryAdjustmentStore::new();
        let athlete = Uuid::new_v4();
        let program = Uuid::new_v4();
        store
            .save_modification(modification(athlete, program, "Squat"))
            .await
            .unwrap();
        store
            .save_modification(modification(Uuid::new_v4(), program, "Squat"))
            .await
            .unwrap();

        let active = store
            .load_active_modifications(athlete, program)
            .await
            .unwrap();
        assert_eq!(active.len(), 1);
    }

    #[tokio::test]
    async fn set_logs_append_in_order() {
        let store = MemoryAdjustmentStore::new();
        let athlete = Uuid::new_v4();
        for set_number in 1..=3 {
            store
                .append_set_log(
                    athlete,
                    "Push-up",
                    SetLog {
                        set_number,
                        reps_completed: 10,
                        weight_used: None,
                        rpe: None,
                        rir: Some(2),
                        adjusted: false,
                        adjustment_reason: None,
                    },
                )
                .await
                .unwrap();
        }
        let logs = store.set_logs(athlete, "Push-up").unwrap();
        assert_eq!(logs.len(), 3);
        assert_eq!(logs[2].set_number, 3);
    }

    #[tokio::test]
    async fn area_deactivation_is_per_program_and_deduplicated() {
        use trainsmart_core::models::BodyArea;

        let store = MemoryAdjustmentStore::new();
        let athlete = Uuid::new_v4();
        let program = Uuid::new_v4();

        store
            .deactivate_area(athlete, program, BodyArea::Knee)
            .await
            .unwrap();
        store
            .deactivate_area(athlete, program, BodyArea::Knee)
            .await
            .unwrap();
        store
            .deactivate_area(athlete, Uuid::new_v4(), BodyArea::Hip)
            .await
            .unwrap();

        let areas = store
            .load_deactivated_areas(athlete, program)
            .await
            .unwrap();
        assert_eq!(areas, vec![BodyArea::Knee]);
    }
}
