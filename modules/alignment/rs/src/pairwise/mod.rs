pub use alignment::{Alignment, Op, Segment};
pub use fuzzy::{align, score, try_align, Config, Engine};

pub mod alignment;
pub mod fuzzy;
pub mod scoring;
