use fuzzydiff_core_rs::num::Float;
use fuzzydiff_core_rs::Alignable;

/// Dense (len(seq1) + 1) x (len(seq2) + 1) table of accumulated similarities.
///
/// Cell (row, col) holds the best accumulated similarity of the prefixes `seq1[..row]` and
/// `seq2[..col]`. The first row and column are zeros (one of the prefixes is empty).
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ScoreTable<S: Float> {
    cells: Vec<S>,
    rows: usize,
    cols: usize,
}

impl<S: Float> ScoreTable<S> {
    pub fn new() -> Self {
        Self {
            cells: Vec::new(),
            rows: 0,
            cols: 0,
        }
    }

    /// Preallocate a table for sequences of the given lengths.
    pub fn with_capacity(seq1len: usize, seq2len: usize) -> Self {
        Self {
            cells: Vec::with_capacity((seq1len + 1) * (seq2len + 1)),
            rows: 0,
            cols: 0,
        }
    }

    /// Resize the table for new sequences and zero all cells. The allocation is reused if possible.
    pub fn reset(&mut self, seq1len: usize, seq2len: usize) {
        self.rows = seq1len + 1;
        self.cols = seq2len + 1;

        let total = self.rows * self.cols;
        if total > self.cells.capacity() {
            log::debug!(
                "Growing score table from {} to {} cells ({}x{})",
                self.cells.capacity(),
                total,
                self.rows,
                self.cols
            );
        }

        self.cells.clear();
        self.cells.resize(total, S::zero());
    }

    /// Number of rows: len(seq1) + 1.
    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns: len(seq2) + 1.
    #[inline(always)]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> S {
        debug_assert!(row < self.rows && col < self.cols);
        self.cells[row * self.cols + col]
    }

    #[inline(always)]
    fn set(&mut self, row: usize, col: usize, score: S) {
        debug_assert!(row < self.rows && col < self.cols);
        self.cells[row * self.cols + col] = score;
    }

    /// Best accumulated similarity of the full sequences, i.e. the bottom-right cell.
    pub fn optimum(&self) -> S {
        if self.cells.is_empty() {
            S::zero()
        } else {
            self.get(self.rows - 1, self.cols - 1)
        }
    }

    /// Fill the table row by row. Every cell depends only on its top, left and top-left
    /// neighbours, so all dependencies are computed before they are read.
    ///
    /// A diagonal (match) edge exists only if the similarity is strictly above `min_similarity`.
    /// The first comparator error aborts the scan.
    pub fn fill<Symbol, Seq1, Seq2, E>(
        &mut self,
        seq1: &Seq1,
        seq2: &Seq2,
        min_similarity: S,
        mut compare: impl FnMut(&Symbol, &Symbol) -> Result<S, E>,
    ) -> Result<(), E>
    where
        Seq1: Alignable<Symbol = Symbol>,
        Seq2: Alignable<Symbol = Symbol>,
    {
        self.reset(seq1.len(), seq2.len());

        for row in 1..self.rows {
            let s1 = seq1.at(row - 1);
            for col in 1..self.cols {
                let q = compare(s1, seq2.at(col - 1))?;

                let mut best = self.get(row - 1, col).max(self.get(row, col - 1));
                if q > min_similarity {
                    best = best.max(self.get(row - 1, col - 1) + q);
                }
                self.set(row, col, best);
            }
        }
        Ok(())
    }
}

/// Best accumulated similarity computed with two rolling rows instead of the full table.
///
/// The shorter sequence is placed along the row, so the memory is O(min(len(seq1), len(seq2))).
/// The comparator always receives symbols in the (seq1, seq2) order.
pub fn rolling_optimum<Symbol, Seq1, Seq2, S, E>(
    seq1: &Seq1,
    seq2: &Seq2,
    min_similarity: S,
    mut compare: impl FnMut(&Symbol, &Symbol) -> Result<S, E>,
) -> Result<S, E>
where
    S: Float,
    Seq1: Alignable<Symbol = Symbol>,
    Seq2: Alignable<Symbol = Symbol>,
{
    let transposed = seq2.len() > seq1.len();
    let (outer, inner) = if transposed {
        (seq2.len(), seq1.len())
    } else {
        (seq1.len(), seq2.len())
    };

    let mut previous = vec![S::zero(); inner + 1];
    let mut current = vec![S::zero(); inner + 1];
    for row in 1..=outer {
        for col in 1..=inner {
            let q = if transposed {
                compare(seq1.at(col - 1), seq2.at(row - 1))?
            } else {
                compare(seq1.at(row - 1), seq2.at(col - 1))?
            };

            let mut best = previous[col].max(current[col - 1]);
            if q > min_similarity {
                best = best.max(previous[col - 1] + q);
            }
            current[col] = best;
        }
        std::mem::swap(&mut previous, &mut current);
    }
    Ok(previous[inner])
}
