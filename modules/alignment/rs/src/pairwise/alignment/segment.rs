use std::ops::Range;

use derive_getters::{Dissolve, Getters};
use eyre::{ensure, Result};

use fuzzydiff_core_rs::num::Float;

use super::op::Op;

/// A maximal run of the alignment path with a constant similarity.
///
/// Ranges are half-open positions in the first (`seq1`) and the second (`seq2`) sequence.
/// Segments with a positive similarity are diagonal: both ranges have the same length.
/// Zero-similarity segments collect deleted and/or inserted symbols.
#[derive(Clone, PartialEq, Debug, Getters, Dissolve)]
pub struct Segment<S: Float> {
    /// Similarity of each pair of symbols in the run, in the [0, 1] range.
    q: S,
    /// Covered positions of the first sequence.
    seq1: Range<usize>,
    /// Covered positions of the second sequence.
    seq2: Range<usize>,
}

impl<S: Float> Segment<S> {
    pub fn new(q: S, seq1: Range<usize>, seq2: Range<usize>) -> Result<Self> {
        ensure!(
            seq1.start <= seq1.end && seq2.start <= seq2.end,
            "Segment ranges must not be reversed, got {:?} and {:?}",
            seq1,
            seq2
        );
        ensure!(
            !seq1.is_empty() || !seq2.is_empty(),
            "Segment must span at least one symbol"
        );
        ensure!(
            q.is_zero() || seq1.len() == seq2.len(),
            "Segment with a non-zero similarity must be diagonal, got {:?} and {:?}",
            seq1,
            seq2
        );
        Ok(Self { q, seq1, seq2 })
    }

    /// Construct a segment without validation. Callers guarantee the invariants of `new`.
    #[inline(always)]
    pub(crate) fn new_unchecked(q: S, seq1: Range<usize>, seq2: Range<usize>) -> Self {
        debug_assert!(!seq1.is_empty() || !seq2.is_empty());
        Self { q, seq1, seq2 }
    }

    /// Classify the segment.
    pub fn op(&self) -> Op {
        if self.seq1.is_empty() {
            Op::GapFirst
        } else if self.seq2.is_empty() {
            Op::GapSecond
        } else if self.q <= S::zero() {
            Op::Mismatch
        } else if self.q >= S::one() {
            Op::Match
        } else {
            Op::Equivalent
        }
    }

    /// Number of alignment columns covered by the segment (the longest of two projections).
    /// Segments always cover at least one symbol.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.seq1.len().max(self.seq2.len())
    }

    /// Symbols of the first sequence covered by the segment.
    pub fn slice1<'a, T>(&self, seq1: &'a [T]) -> &'a [T] {
        &seq1[self.seq1.clone()]
    }

    /// Symbols of the second sequence covered by the segment.
    pub fn slice2<'a, T>(&self, seq2: &'a [T]) -> &'a [T] {
        &seq2[self.seq2.clone()]
    }

    /// Merge the next adjacent segment into this one if both carry the same similarity.
    /// Otherwise, return both segments untouched.
    pub fn merge(self, next: Self) -> Result<Self, (Self, Self)> {
        if self.q == next.q && self.seq1.end == next.seq1.start && self.seq2.end == next.seq2.start
        {
            Ok(Self {
                q: self.q,
                seq1: self.seq1.start..next.seq1.end,
                seq2: self.seq2.start..next.seq2.end,
            })
        } else {
            Err((self, next))
        }
    }

    /// RLE representation of the segment: `<len><op symbol>`.
    /// Mismatch runs of unequal projections are rendered as an insertion followed by a deletion.
    pub fn rle(&self) -> String {
        match self.op() {
            Op::Mismatch if self.seq1.len() != self.seq2.len() => format!(
                "{}{}{}{}",
                self.seq2.len(),
                Op::GapFirst.symbol(),
                self.seq1.len(),
                Op::GapSecond.symbol()
            ),
            op => format!("{}{}", self.len(), op.symbol()),
        }
    }
}
