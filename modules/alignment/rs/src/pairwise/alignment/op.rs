/// `Op` represents the kind of a single segment in a fuzzy alignment.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Op {
    /// Represents a gap in the first sequence, i.e. symbols present only in the second one (v)
    GapFirst,
    /// Represents a gap in the second sequence, i.e. symbols present only in the first one (^)
    GapSecond,
    /// Represents a fuzzy match with a similarity strictly between 0 and 1 (~).
    /// The interpretation depends on the comparator, e.g. case-insensitive equality of characters.
    Equivalent,
    /// Represents a perfect match between the sequences, similarity 1 (=)
    Match,
    /// Represents a zero-similarity run that consumes symbols from both sequences (X).
    /// Such runs appear when deletions and insertions are merged into a single segment.
    Mismatch,
}

impl Op {
    /// Returns `true` if the operation is represented by a diagonal movement in the score table.
    pub fn is_diagonal(&self) -> bool {
        matches!(self, Op::Match | Op::Equivalent)
    }

    /// Returns the symbol representation of the operation.
    pub fn symbol(&self) -> char {
        match self {
            Op::GapFirst => 'v',
            Op::GapSecond => '^',
            Op::Equivalent => '~',
            Op::Match => '=',
            Op::Mismatch => 'X',
        }
    }
}

impl TryFrom<char> for Op {
    type Error = ();

    /// Tries to convert a character into an `Op`.
    /// Returns an error if the character does not represent a valid operation.
    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'v' => Ok(Op::GapFirst),
            '^' => Ok(Op::GapSecond),
            '~' => Ok(Op::Equivalent),
            '=' => Ok(Op::Match),
            'X' => Ok(Op::Mismatch),
            _ => Err(()),
        }
    }
}
