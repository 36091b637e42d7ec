use itertools::Itertools;

use fuzzydiff_core_rs::num::Float;
use fuzzydiff_core_rs::Alignable;

use super::table::ScoreTable;
use crate::pairwise::alignment::{Alignment, Segment};

/// Reconstruct the optimal path from a filled score table and merge it into maximal runs.
///
/// The walk starts in the bottom-right cell and moves towards the origin. At each cell:
/// * a match is taken only if it is strictly better than both gaps;
/// * otherwise an insertion (symbol from seq2) is taken if it is strictly better than a deletion;
/// * otherwise a deletion (symbol from seq1).
///
/// The comparator is called only for match steps, i.e. at most min(len(seq1), len(seq2)) times.
///
/// Once one of the sequences is exhausted, the rest of the other one becomes a single step.
/// In the reading order this places insertions before deletions within a gap and never emits a
/// zero-similarity match.
pub fn traceback<Symbol, Seq1, Seq2, S, E>(
    table: &ScoreTable<S>,
    seq1: &Seq1,
    seq2: &Seq2,
    min_similarity: S,
    mut compare: impl FnMut(&Symbol, &Symbol) -> Result<S, E>,
) -> Result<Alignment<S>, E>
where
    S: Float,
    Seq1: Alignable<Symbol = Symbol>,
    Seq2: Alignable<Symbol = Symbol>,
{
    debug_assert_eq!(table.rows(), seq1.len() + 1);
    debug_assert_eq!(table.cols(), seq2.len() + 1);

    let (mut row, mut col) = (seq1.len(), seq2.len());
    let mut steps = Vec::with_capacity(row + col);
    while row > 0 || col > 0 {
        if row == 0 || col == 0 {
            steps.push(Segment::new_unchecked(S::zero(), 0..row, 0..col));
            break;
        }

        let (up, left) = (table.get(row - 1, col), table.get(row, col - 1));

        // The cell beats both gaps only through a match edge
        if table.get(row, col) > up.max(left) {
            let q = compare(seq1.at(row - 1), seq2.at(col - 1))?;
            debug_assert!(q > min_similarity);
            steps.push(Segment::new_unchecked(q, row - 1..row, col - 1..col));
            row -= 1;
            col -= 1;
        } else if left > up {
            steps.push(Segment::new_unchecked(S::zero(), row..row, col - 1..col));
            col -= 1;
        } else {
            steps.push(Segment::new_unchecked(S::zero(), row - 1..row, col..col));
            row -= 1;
        }
    }

    let segments = steps.into_iter().rev().coalesce(Segment::merge).collect();
    Ok(Alignment::new_unchecked(table.optimum(), segments))
}
