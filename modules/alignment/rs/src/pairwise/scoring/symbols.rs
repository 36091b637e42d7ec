use derive_more::Constructor;

use super::{Comparator, Float};

/// Binary comparator: `equal` similarity for identical symbols, `different` otherwise.
/// With `equal = 1` and `different = 0` the fuzzy diff degrades to the longest common subsequence.
#[derive(Clone, Copy, PartialEq, Debug, Constructor)]
pub struct Equality<S: Float> {
    pub equal: S,
    pub different: S,
}

impl<S: Float> Default for Equality<S> {
    fn default() -> Self {
        Self::new(S::one(), S::zero())
    }
}

impl<Symbol: PartialEq, S: Float> Comparator<Symbol, S> for Equality<S> {
    #[inline(always)]
    fn compare(&self, s1: &Symbol, s2: &Symbol) -> S {
        if s1 == s2 {
            self.equal
        } else {
            self.different
        }
    }
}

/// Case-aware comparator: 1 for identical symbols, `fuzziness` for symbols that differ only
/// by case, 0 otherwise.
#[derive(Clone, Copy, PartialEq, Debug, Constructor)]
pub struct CaseInsensitive<S: Float> {
    pub fuzziness: S,
}

impl<S: Float> Comparator<char, S> for CaseInsensitive<S> {
    #[inline(always)]
    fn compare(&self, s1: &char, s2: &char) -> S {
        if s1 == s2 {
            S::one()
        } else if s1.to_uppercase().eq(s2.to_uppercase()) {
            self.fuzziness
        } else {
            S::zero()
        }
    }
}

impl<S: Float> Comparator<u8, S> for CaseInsensitive<S> {
    #[inline(always)]
    fn compare(&self, s1: &u8, s2: &u8) -> S {
        if s1 == s2 {
            S::one()
        } else if s1.eq_ignore_ascii_case(s2) {
            self.fuzziness
        } else {
            S::zero()
        }
    }
}
