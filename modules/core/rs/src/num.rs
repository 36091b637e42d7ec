use std::fmt::Debug;

/// T values are float numbers, e.g. similarities in the [0, 1] range
pub trait Float: ::num::Float + Debug + Default {}

impl<T: ::num::Float + Debug + Default> Float for T {}

/// Sum `value` to `acc` exactly `times` times.
///
/// Repeated addition (instead of `value * times`) keeps the result bit-identical to the
/// step-by-step accumulation performed by dynamic programming over the same values.
#[inline]
pub fn accumulate<T: Float>(acc: T, value: T, times: usize) -> T {
    (0..times).fold(acc, |acc, _| acc + value)
}
