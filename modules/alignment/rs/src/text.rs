//! Character-level fuzzy diff of string slices.
//!
//! Strings are split into `char`s (no grapheme segmentation) and aligned with a `char` comparator.
//! Resulting segments borrow the matched substrings from the inputs.

use std::fmt::{Display, Formatter};
use std::ops::Range;

use derive_getters::{Dissolve, Getters};
use eyre::{ensure, Result};

use fuzzydiff_core_rs::num::Float;

use crate::pairwise::alignment::{Alignment, Op};
use crate::pairwise::fuzzy::Engine;
use crate::pairwise::scoring::Comparator;

/// A segment of the text diff: similarity and the covered substrings of both inputs.
#[derive(Clone, Copy, PartialEq, Debug, Getters, Dissolve)]
pub struct TextSegment<'a, S: Float> {
    q: S,
    a: &'a str,
    b: &'a str,
}

impl<S: Float> TextSegment<'_, S> {
    pub fn op(&self) -> Op {
        if self.a.is_empty() {
            Op::GapFirst
        } else if self.b.is_empty() {
            Op::GapSecond
        } else if self.q <= S::zero() {
            Op::Mismatch
        } else if self.q >= S::one() {
            Op::Match
        } else {
            Op::Equivalent
        }
    }
}

impl<S: Float + Display> Display for TextSegment<'_, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}|{}|{}]", self.q, self.a, self.b)
    }
}

/// Text diff: the underlying alignment plus its segments mapped back to substrings.
#[derive(Clone, PartialEq, Debug, Getters, Dissolve)]
pub struct TextAlignment<'a, S: Float> {
    alignment: Alignment<S>,
    segments: Vec<TextSegment<'a, S>>,
}

impl<'a, S: Float> TextAlignment<'a, S> {
    /// Map an alignment computed over `a.chars()` and `b.chars()` back to the strings.
    pub fn new(alignment: Alignment<S>, a: &'a str, b: &'a str) -> Result<Self> {
        let (len1, len2) = (a.chars().count(), b.chars().count());
        ensure!(
            alignment.seq1_len() == len1 && alignment.seq2_len() == len2,
            "Alignment covers {}x{} chars, but the strings have {}x{} chars",
            alignment.seq1_len(),
            alignment.seq2_len(),
            len1,
            len2
        );
        Ok(Self::new_unchecked(alignment, a, b))
    }

    fn new_unchecked(alignment: Alignment<S>, a: &'a str, b: &'a str) -> Self {
        let bounds1 = char_bounds(a);
        let bounds2 = char_bounds(b);

        let segments = alignment
            .iter()
            .map(|segment| TextSegment {
                q: *segment.q(),
                a: substr(a, &bounds1, segment.seq1()),
                b: substr(b, &bounds2, segment.seq2()),
            })
            .collect();
        Self {
            alignment,
            segments,
        }
    }

    /// Maximum accumulated similarity.
    pub fn score(&self) -> S {
        *self.alignment.score()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TextSegment<'a, S>> {
        self.segments.iter()
    }
}

impl<S: Float + Display> Display for TextAlignment<'_, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for segment in &self.segments {
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// Fuzzy diff of two strings, one `char` at a time.
pub fn diff_chars<'a, S, C>(a: &'a str, b: &'a str, comparator: C) -> TextAlignment<'a, S>
where
    S: Float,
    C: Comparator<char, S>,
{
    let seq1: Vec<char> = a.chars().collect();
    let seq2: Vec<char> = b.chars().collect();

    let alignment = Engine::new(comparator).align(&seq1, &seq2);
    TextAlignment::new_unchecked(alignment, a, b)
}

/// Byte offsets of every char plus the end of the string.
fn char_bounds(text: &str) -> Vec<usize> {
    text.char_indices()
        .map(|(ind, _)| ind)
        .chain(std::iter::once(text.len()))
        .collect()
}

fn substr<'a>(text: &'a str, bounds: &[usize], chars: &Range<usize>) -> &'a str {
    &text[bounds[chars.start]..bounds[chars.end]]
}
