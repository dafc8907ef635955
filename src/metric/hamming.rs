use std::marker::PhantomData;
use std::ops::BitXor;

use crate::metric::Metric;

pub trait CountOnes {
    fn count_ones(self) -> u32;
}
impl CountOnes for u8 {
    #[inline]
    fn count_ones(self) -> u32 {
        self.count_ones()
    }
}
impl CountOnes for u16 {
    #[inline]
    fn count_ones(self) -> u32 {
        self.count_ones()
    }
}
impl CountOnes for u32 {
    #[inline]
    fn count_ones(self) -> u32 {
        self.count_ones()
    }
}
impl CountOnes for u64 {
    #[inline]
    fn count_ones(self) -> u32 {
        self.count_ones()
    }
}
impl CountOnes for u128 {
    #[inline]
    fn count_ones(self) -> u32 {
        self.count_ones()
    }
}

/// Number of differing bits between two integers.
#[derive(Derivative)]
#[derivative(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HammingMetric<I>(#[derivative(Debug = "ignore")] PhantomData<I>);

impl<I> Metric<I> for HammingMetric<I>
where
    I: Copy + BitXor<I>,
    <I as BitXor<I>>::Output: CountOnes,
{
    #[inline]
    fn distance(&self, k1: &I, k2: &I) -> i64 {
        i64::from((*k1 ^ *k2).count_ones())
    }
}
