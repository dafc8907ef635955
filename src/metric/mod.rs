use std::convert::TryFrom;
use std::fmt::Debug;

use crate::error::{BkError, Result};
use crate::Dist;

pub mod hamming;
pub mod levenshtein;
mod metric;
pub mod strlen;

pub use metric::Metric;

/// Ask `metric` for the distance between `k1` and `k2`, rejecting negative answers.
pub(crate) fn checked_distance<K, M>(metric: &M, k1: &K, k2: &K) -> Result<Dist>
where
    K: ?Sized + Debug,
    M: Metric<K>,
{
    let raw = metric.distance(k1, k2);
    Dist::try_from(raw).map_err(|_| BkError::illegal_metric(k1, k2, raw))
}
