// ABOUTME: Pain reporting types consumed by the substitution engine
// ABOUTME: Body areas, severity classification, and per-session pain entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrainSmart

//! Pain reporting types.

use serde::{Deserialize, Serialize};

/// Body areas with substitution guidance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyArea {
    /// Knee joint
    Knee,
    /// Lumbar spine
    LowerBack,
    /// Shoulder girdle
    Shoulder,
    /// Wrist
    Wrist,
    /// Ankle
    Ankle,
    /// Elbow
    Elbow,
    /// Hip joint
    Hip,
}

impl BodyArea {
    /// Stable snake_case identifier.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Knee => "knee",
            Self::LowerBack => "lower_back",
            Self::Shoulder => "shoulder",
            Self::Wrist => "wrist",
            Self::Ankle => "ankle",
            Self::Elbow => "elbow",
            Self::Hip => "hip",
        }
    }
}

/// Discrete severity tier driving the deload and substitution policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PainSeverity {
    /// 1-3 on the 0-10 scale
    Mild,
    /// 4-5
    Moderate,
    /// 6+
    Severe,
}

impl PainSeverity {
    /// Classify a 0-10 intensity rating into a severity tier.
    #[must_use]
    pub fn from_intensity(intensity: u8) -> Self {
        match intensity {
            0..=3 => Self::Mild,
            4..=5 => Self::Moderate,
            _ => Self::Severe,
        }
    }
}

/// An athlete-reported pain at screening or mid-session.
///
/// Multiple entries may coexist; the assembler applies at most one conflict
/// per exercise, first match in reported order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PainEntry {
    /// Affected body area
    pub area: BodyArea,
    /// Discrete severity tier
    pub severity: PainSeverity,
    /// Raw 0-10 intensity rating
    pub intensity: u8,
}

impl PainEntry {
    /// Build an entry from a raw 0-10 rating, deriving the severity tier.
    #[must_use]
    pub fn from_intensity(area: BodyArea, intensity: u8) -> Self {
        Self {
            area,
            severity: PainSeverity::from_intensity(intensity),
            intensity,
        }
    }
}
