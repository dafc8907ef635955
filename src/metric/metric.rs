/// A distance function over keys of type `K`.
///
/// Implementations are expected to be symmetric and to satisfy the triangle inequality. Neither
/// property is checked; a metric that breaks them makes searches silently miss matches.
/// Negative distances are checked at every comparison and reported as
/// [`BkError::IllegalMetric`](crate::BkError::IllegalMetric).
pub trait Metric<K: ?Sized> {
    fn distance(&self, k1: &K, k2: &K) -> i64;
}

impl<K: ?Sized, F> Metric<K> for F
where
    F: Fn(&K, &K) -> i64,
{
    #[inline]
    fn distance(&self, k1: &K, k2: &K) -> i64 {
        self(k1, k2)
    }
}
