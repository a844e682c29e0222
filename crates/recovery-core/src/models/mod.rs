// ABOUTME: Core data models for daily fitness metrics and training assessments
// ABOUTME: Re-exports metric and training types shared by the server and CLI tools
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Daily fitness metric records
pub mod metrics;

/// Training status assessment request and result types
pub mod training;

pub use metrics::{DailyMetricsResponse, FitnessMetrics};
pub use training::{RecoveryAssessmentRequest, RecoveryAssessmentResult, TrainingStatus};
