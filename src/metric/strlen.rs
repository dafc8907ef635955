use crate::metric::Metric;

/// Absolute difference of two strings' lengths, counted in chars.
///
/// Only a pseudo-metric: distinct strings of equal length are at distance zero. It is cheap and
/// easy to reason about, which makes it handy for exercising tree shapes.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct StrLenMetric;

impl<S: AsRef<str> + ?Sized> Metric<S> for StrLenMetric {
    fn distance(&self, k1: &S, k2: &S) -> i64 {
        let l1 = k1.as_ref().chars().count() as i64;
        let l2 = k2.as_ref().chars().count() as i64;
        (l1 - l2).abs()
    }
}
