// ABOUTME: Request and result types for the recovery-based training status decision
// ABOUTME: TrainingStatus serializes as "continue" or "cancelled" on the wire
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether tomorrow's training goes ahead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainingStatus {
    /// Training continues as scheduled
    Continue,
    /// All training is cancelled
    Cancelled,
}

impl TrainingStatus {
    /// Wire name of the status
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Continue => "continue",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for TrainingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /training-status` and query of `GET /training-status`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecoveryAssessmentRequest {
    /// Recovery score from the watch, in hours (0-72)
    pub recovery_score: f64,
}

/// Outcome of a recovery assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecoveryAssessmentResult {
    /// Training decision
    pub status: TrainingStatus,
    /// Echo of the submitted recovery score
    pub recovery_hours: f64,
    /// Human-readable advisory
    pub message: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&TrainingStatus::Continue).unwrap(),
            "\"continue\""
        );
        assert_eq!(
            serde_json::to_string(&TrainingStatus::Cancelled).unwrap(),
            "\"cancelled\""
        );
        assert_eq!(TrainingStatus::Cancelled.to_string(), "cancelled");
    }

    #[test]
    fn test_request_rejects_missing_score() {
        let parsed = serde_json::from_str::<RecoveryAssessmentRequest>("{}");
        assert!(parsed.is_err());
    }
}
