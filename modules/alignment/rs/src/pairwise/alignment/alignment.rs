use derive_getters::{Dissolve, Getters};
use eyre::{ensure, Result};

use fuzzydiff_core_rs::num::{accumulate, Float};

use super::segment::Segment;

/// A fuzzy alignment between two sequences.
///
/// Segments cover both sequences completely and in order: concatenating `seq1` ranges gives
/// `0..len(seq1)`, the same holds for `seq2`. Adjacent segments never share the same similarity.
#[derive(Clone, PartialEq, Debug, Default, Getters, Dissolve)]
pub struct Alignment<S: Float> {
    /// Maximum accumulated similarity, in the [0, min(len(seq1), len(seq2))] range.
    score: S,
    /// Maximal runs of the alignment path.
    segments: Vec<Segment<S>>,
}

impl<S: Float> Alignment<S> {
    /// Create an alignment from its parts, validating that segments are contiguous and maximal.
    pub fn new(score: S, segments: Vec<Segment<S>>) -> Result<Self> {
        let (mut seq1, mut seq2) = (0, 0);
        for (ind, segment) in segments.iter().enumerate() {
            ensure!(
                segment.seq1().start == seq1 && segment.seq2().start == seq2,
                "Segment {ind} is not adjacent to the previous one: expected start ({seq1}, {seq2}), got {:?}",
                segment
            );
            if ind > 0 {
                ensure!(
                    segments[ind - 1].q() != segment.q(),
                    "Segments {} and {ind} share the same similarity and must be merged",
                    ind - 1
                );
            }
            seq1 = segment.seq1().end;
            seq2 = segment.seq2().end;
        }
        Ok(Self { score, segments })
    }

    #[inline(always)]
    pub(crate) fn new_unchecked(score: S, segments: Vec<Segment<S>>) -> Self {
        Self { score, segments }
    }

    /// Checks if the alignment is empty, i.e. both sequences were empty.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments in the alignment.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Length of the first aligned sequence.
    pub fn seq1_len(&self) -> usize {
        self.segments.last().map_or(0, |x| x.seq1().end)
    }

    /// Length of the second aligned sequence.
    pub fn seq2_len(&self) -> usize {
        self.segments.last().map_or(0, |x| x.seq2().end)
    }

    /// Sum of similarities over all aligned pairs: Σ q * len(seq1) across segments.
    ///
    /// Terms are summed in the alignment order, so for alignments produced by the engine the
    /// result is identical to the reported score.
    pub fn accumulated(&self) -> S {
        self.segments.iter().fold(S::zero(), |acc, segment| {
            if segment.q().is_zero() {
                acc
            } else {
                accumulate(acc, *segment.q(), segment.seq1().len())
            }
        })
    }

    /// Returns the RLE representation of the alignment.
    pub fn rle(&self) -> String {
        self.segments.iter().map(|x| x.rle()).collect()
    }

    /// Iterate over alignment segments.
    pub fn iter(&self) -> std::slice::Iter<'_, Segment<S>> {
        self.segments.iter()
    }
}

impl<S: Float> IntoIterator for Alignment<S> {
    type Item = Segment<S>;
    type IntoIter = std::vec::IntoIter<Segment<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.into_iter()
    }
}

impl<'a, S: Float> IntoIterator for &'a Alignment<S> {
    type Item = &'a Segment<S>;
    type IntoIter = std::slice::Iter<'a, Segment<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
