pub use alignment::Alignment;
pub use op::Op;
pub use segment::Segment;

#[allow(clippy::module_inception)]
mod alignment;
mod op;
mod segment;
