//! Maximum-similarity fuzzy diff.
//!
//! Each pair of symbols gets a similarity in the [0, 1] range from a comparator. The diff is the
//! path through the score table (a DAG of match, deletion and insertion edges) that maximizes the
//! accumulated similarity. With a binary comparator it is the longest common subsequence.
//!
//! The run is split in two phases:
//! 1. [`ScoreTable::fill`] computes the best accumulated similarity for every pair of prefixes;
//! 2. [`traceback`] walks the table back from the full sequences, emitting one step per edge, and
//!    folds the steps into maximal runs of equal similarity.

use eyre::Result;

pub use config::Config;
pub use engine::Engine;
pub use table::{rolling_optimum, ScoreTable};
pub use traceback::traceback;

use fuzzydiff_core_rs::num::Float;
use fuzzydiff_core_rs::Alignable;

use crate::pairwise::alignment::Alignment;
use crate::pairwise::scoring::Comparator;

mod config;
mod engine;
mod table;
mod traceback;

/// Align two sequences with the default configuration.
///
/// Both sequences may be empty. The resulting score is in the [0, min(len(seq1), len(seq2))] range
/// for comparators bounded by [0, 1].
pub fn align<Symbol, S, C, Seq1, Seq2>(seq1: &Seq1, seq2: &Seq2, comparator: C) -> Alignment<S>
where
    S: Float,
    C: Comparator<Symbol, S>,
    Seq1: Alignable<Symbol = Symbol>,
    Seq2: Alignable<Symbol = Symbol>,
{
    Engine::new(comparator).align(seq1, seq2)
}

/// Align two sequences with a fallible comparator.
///
/// The first comparator error stops the run and is returned as is.
pub fn try_align<Symbol, S, Seq1, Seq2>(
    seq1: &Seq1,
    seq2: &Seq2,
    comparator: impl Fn(&Symbol, &Symbol) -> Result<S>,
) -> Result<Alignment<S>>
where
    S: Float,
    Seq1: Alignable<Symbol = Symbol>,
    Seq2: Alignable<Symbol = Symbol>,
{
    let min_similarity = *Config::default().min_similarity();

    let mut table = ScoreTable::new();
    table.fill(seq1, seq2, min_similarity, &comparator)?;
    traceback(&table, seq1, seq2, min_similarity, &comparator)
}

/// Maximum accumulated similarity of two sequences, without the alignment. Uses linear memory.
pub fn score<Symbol, S, C, Seq1, Seq2>(seq1: &Seq1, seq2: &Seq2, comparator: C) -> S
where
    S: Float,
    C: Comparator<Symbol, S>,
    Seq1: Alignable<Symbol = Symbol>,
    Seq2: Alignable<Symbol = Symbol>,
{
    Engine::new(comparator).score(seq1, seq2)
}
