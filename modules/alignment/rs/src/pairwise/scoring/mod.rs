pub use symbols::{CaseInsensitive, Equality};

pub use fuzzydiff_core_rs::num::Float;

mod symbols;

/// Pairwise similarity of symbols from the first and the second sequence.
///
/// Similarity must be in the [0, 1] range where 0 means that the symbols can't be matched at all.
/// Comparators are expected to be pure: the engine may call them more than once for the same pair.
pub trait Comparator<Symbol, S: Float> {
    fn compare(&self, s1: &Symbol, s2: &Symbol) -> S;
}

/// Any function taking two references to symbols and returning a similarity is a comparator.
impl<Symbol, S, F> Comparator<Symbol, S> for F
where
    S: Float,
    F: Fn(&Symbol, &Symbol) -> S,
{
    #[inline(always)]
    fn compare(&self, s1: &Symbol, s2: &Symbol) -> S {
        self(s1, s2)
    }
}
