use std::convert::Infallible;
use std::marker::PhantomData;

use fuzzydiff_core_rs::num::Float;
use fuzzydiff_core_rs::Alignable;

use super::config::Config;
use super::table::{rolling_optimum, ScoreTable};
use super::traceback::traceback;
use crate::pairwise::alignment::Alignment;
use crate::pairwise::scoring::Comparator;

/// Reusable fuzzy diff engine: a comparator, a configuration and a score table buffer that is
/// recycled between runs.
pub struct Engine<Symbol, S, C>
where
    S: Float,
    C: Comparator<Symbol, S>,
{
    comparator: C,
    config: Config<S>,
    table: ScoreTable<S>,
    _phantom: PhantomData<Symbol>,
}

impl<Symbol, S, C> Engine<Symbol, S, C>
where
    S: Float,
    C: Comparator<Symbol, S>,
{
    pub fn new(comparator: C) -> Self {
        Self {
            comparator,
            config: Config::default(),
            table: ScoreTable::new(),
            _phantom: Default::default(),
        }
    }

    /// Create an engine with a score table preallocated for the given sequence lengths.
    pub fn with_capacity(comparator: C, seq1len: usize, seq2len: usize) -> Self {
        Self {
            table: ScoreTable::with_capacity(seq1len, seq2len),
            ..Self::new(comparator)
        }
    }

    pub fn with_comparator(&mut self, comparator: C) {
        self.comparator = comparator;
    }

    pub fn with_config(&mut self, config: Config<S>) {
        self.config = config;
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    pub fn config(&self) -> &Config<S> {
        &self.config
    }

    /// Score table of the last `align` call.
    pub fn table(&self) -> &ScoreTable<S> {
        &self.table
    }

    /// Find the alignment with the maximum accumulated similarity.
    pub fn align<Seq1, Seq2>(&mut self, seq1: &Seq1, seq2: &Seq2) -> Alignment<S>
    where
        Seq1: Alignable<Symbol = Symbol>,
        Seq2: Alignable<Symbol = Symbol>,
    {
        let comparator = &self.comparator;
        let compare =
            |s1: &Symbol, s2: &Symbol| Ok::<S, Infallible>(comparator.compare(s1, s2));
        let min_similarity = *self.config.min_similarity();

        into_ok(self.table.fill(seq1, seq2, min_similarity, compare));
        let alignment = into_ok(traceback(&self.table, seq1, seq2, min_similarity, compare));

        log::trace!(
            "Aligned {}x{} symbols into {} segments, score {:?}",
            seq1.len(),
            seq2.len(),
            alignment.len(),
            alignment.score()
        );
        alignment
    }

    /// Maximum accumulated similarity without the alignment itself. Uses linear memory.
    pub fn score<Seq1, Seq2>(&self, seq1: &Seq1, seq2: &Seq2) -> S
    where
        Seq1: Alignable<Symbol = Symbol>,
        Seq2: Alignable<Symbol = Symbol>,
    {
        let comparator = &self.comparator;
        into_ok(rolling_optimum(
            seq1,
            seq2,
            *self.config.min_similarity(),
            |s1: &Symbol, s2: &Symbol| Ok::<S, Infallible>(comparator.compare(s1, s2)),
        ))
    }
}

#[inline(always)]
fn into_ok<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(x) => x,
        Err(never) => match never {},
    }
}
