//! Data handling: validated dataset container and mini-batch iteration.

mod batch;
mod dataset;

pub use batch::Batches;
pub use dataset::{DataError, Dataset};
