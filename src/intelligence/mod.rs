// ABOUTME: Decision logic built on top of daily fitness metrics
// ABOUTME: Currently hosts the recovery-based training status evaluator

/// Recovery-based training status decision
pub mod training_status;

pub use training_status::{evaluate, InvalidRangeError};
