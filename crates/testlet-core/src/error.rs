//! Testlet construction errors.
//!
//! Every failure is detected synchronously when a testlet is built; a built
//! testlet has no error paths left.

use thiserror::Error;

/// Errors returned when building a [`Testlet`](crate::testlet::Testlet).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TestletError {
    /// No item collection was supplied at all.
    #[error("no items supplied: {expected} items expected")]
    MissingItems { expected: usize },

    /// The collection has the wrong number of items.
    #[error("wrong number of items: {expected} expected, {actual} received")]
    CountMismatch { expected: usize, actual: usize },

    /// The collection has the wrong calibration/scored split.
    #[error(
        "wrong calibration/scored ratio: {expected} calibration items expected, {actual} received"
    )]
    RatioMismatch { expected: usize, actual: usize },

    /// The configuration itself is inconsistent.
    #[error("invalid testlet configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

/// Inconsistencies between the configured counts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("calibration_total ({calibration}) + scored_total ({scored}) != total_count ({total})")]
    TotalMismatch {
        calibration: usize,
        scored: usize,
        total: usize,
    },

    #[error("seen_first_count ({seen_first}) exceeds calibration_total ({calibration})")]
    SeenFirstExceedsCalibration { seen_first: usize, calibration: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_mismatch_reports_both_counts() {
        let err = TestletError::CountMismatch {
            expected: 10,
            actual: 9,
        };
        let msg = err.to_string();
        assert!(msg.contains("wrong number of items"));
        assert!(msg.contains("10 expected"));
        assert!(msg.contains("9 received"));
    }

    #[test]
    fn config_error_converts() {
        let err: TestletError = ConfigError::SeenFirstExceedsCalibration {
            seen_first: 5,
            calibration: 4,
        }
        .into();
        assert!(matches!(err, TestletError::InvalidConfig(_)));
        assert!(err.to_string().contains("seen_first_count (5)"));
    }
}
