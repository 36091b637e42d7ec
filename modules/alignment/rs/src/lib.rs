pub use fuzzydiff_core_rs::{num, Alignable, Reversed};

pub mod pairwise;
pub mod text;
