use std::fmt::Debug;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BkError>;

/// Failures reported by tree insertion and search.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BkError {
    /// A search was asked for a negative maximum distance.
    #[error("maximum distance must be non-negative, got {tolerance}")]
    NegativeTolerance { tolerance: i64 },

    /// The metric answered with a negative distance for two keys it was asked to compare.
    #[error("negative distance ({distance}) defined between `{first}` and `{second}`")]
    IllegalMetric {
        first: String,
        second: String,
        distance: i64,
    },
}

impl BkError {
    pub fn illegal_metric<K: ?Sized + Debug>(first: &K, second: &K, distance: i64) -> Self {
        BkError::IllegalMetric {
            first: format!("{:?}", first),
            second: format!("{:?}", second),
            distance,
        }
    }
}
