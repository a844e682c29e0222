// ABOUTME: Recovery-based training status decision: continue or cancel tomorrow's training
// ABOUTME: Validates the recovery score range and applies the single cancellation threshold
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Training status evaluation
//!
//! A recovery score is the number of hours the watch estimates the athlete
//! still needs to recover. Scores are accepted in `[0, 72]`. Anything above
//! 20 hours cancels tomorrow's training; 20 hours or less keeps the plan.

use crate::errors::AppError;
use recovery_core::constants::recovery::{
    CANCELLED_MESSAGE, CANCEL_TRAINING_ABOVE_HOURS, CONTINUE_MESSAGE, MAX_RECOVERY_HOURS,
    MIN_RECOVERY_HOURS, OUT_OF_RANGE_MESSAGE,
};
use recovery_core::models::{RecoveryAssessmentResult, TrainingStatus};
use thiserror::Error;
use tracing::{info, warn};

/// Recovery score outside `[0, 72]`
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("Recovery score must be between 0 and 72 hours (got {value})")]
pub struct InvalidRangeError {
    /// The rejected score
    pub value: f64,
}

impl From<InvalidRangeError> for AppError {
    fn from(error: InvalidRangeError) -> Self {
        Self::out_of_range(OUT_OF_RANGE_MESSAGE).with_source(error)
    }
}

/// Classify a recovery score into a training decision.
///
/// # Errors
///
/// Returns [`InvalidRangeError`] when the score is negative, above 72, or
/// not a finite number.
pub fn evaluate(recovery_score: f64) -> Result<RecoveryAssessmentResult, InvalidRangeError> {
    // NaN fails `contains`, so non-finite input is rejected here too
    if !(MIN_RECOVERY_HOURS..=MAX_RECOVERY_HOURS).contains(&recovery_score) {
        warn!(
            recovery.score = recovery_score,
            "Rejected recovery score outside accepted range"
        );
        return Err(InvalidRangeError {
            value: recovery_score,
        });
    }

    let (status, message) = if recovery_score > CANCEL_TRAINING_ABOVE_HOURS {
        (TrainingStatus::Cancelled, CANCELLED_MESSAGE)
    } else {
        (TrainingStatus::Continue, CONTINUE_MESSAGE)
    };

    info!(
        recovery.score = recovery_score,
        training.status = %status,
        "Training status evaluated"
    );

    Ok(RecoveryAssessmentResult {
        status,
        recovery_hours: recovery_score,
        message: message.to_owned(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use recovery_core::errors::ErrorCode;

    #[test]
    fn test_boundary_twenty_continues() {
        let result = evaluate(20.0).unwrap();
        assert_eq!(result.status, TrainingStatus::Continue);
        assert_eq!(result.message, "Training will continue as scheduled.");
    }

    #[test]
    fn test_just_above_twenty_cancels() {
        let result = evaluate(20.01).unwrap();
        assert_eq!(result.status, TrainingStatus::Cancelled);
        assert_eq!(
            result.message,
            "No training tomorrow, all training will be cancelled."
        );
    }

    #[test]
    fn test_range_edges() {
        assert_eq!(evaluate(0.0).unwrap().status, TrainingStatus::Continue);
        assert_eq!(evaluate(72.0).unwrap().status, TrainingStatus::Cancelled);
        assert_eq!(evaluate(72.1), Err(InvalidRangeError { value: 72.1 }));
        assert_eq!(evaluate(-0.1), Err(InvalidRangeError { value: -0.1 }));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(evaluate(f64::NAN).is_err());
        assert!(evaluate(f64::INFINITY).is_err());
        assert!(evaluate(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_echoes_input() {
        for score in [0.0, 3.3, 19.99, 20.0, 45.5, 71.9, 72.0] {
            assert_eq!(evaluate(score).unwrap().recovery_hours, score);
        }
    }

    #[test]
    fn test_invalid_range_converts_to_bad_request() {
        let error = AppError::from(evaluate(100.0).unwrap_err());
        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
        assert_eq!(error.http_status(), 400);
        assert_eq!(error.message, "Recovery score must be between 0 and 72 hours");
    }
}
