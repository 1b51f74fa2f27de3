//! Feature preprocessing: standardization and bias augmentation.
//!
//! Every feature matrix a model sees — training, test, or prediction input —
//! passes through the same pipeline: z-normalize against statistics fit once
//! from the training set, then prepend a constant 1.0 bias column. The order
//! matters; the bias column must never be standardized.

mod augment;
mod standardize;

pub use augment::prepend_bias;
pub use standardize::{fit, transform, Statistics, VarianceGuard};
