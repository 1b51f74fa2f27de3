//! regressors: parametric regression models trained with gradient descent.
//!
//! Native Rust implementations of linear regression, binary logistic
//! regression, and multinomial (softmax) logistic regression, all driven by
//! one shared mini-batch gradient descent engine with a bold-driver adaptive
//! learning-rate schedule.
//!
//! # Key Types
//!
//! - [`LinearRegression`] / [`LogisticRegression`] / [`MultinomialLogisticRegression`] -
//!   High-level models with train/test/predict
//! - [`TrainParams`] - Training configuration builder
//! - [`Dataset`] - Validated feature/label container
//! - [`FrozenModel`] - Inference over persisted artifacts
//!
//! # Training
//!
//! Build a [`Dataset`] from feature and label matrices, configure with
//! `TrainParams::builder()`, then construct a model and call `train()`.
//! Features are standardized against training-set statistics and augmented
//! with a bias column before every forward pass; the same frozen statistics
//! are reused for test and predict.
//!
//! # Persistence
//!
//! The multinomial model saves its weights and standardization statistics as
//! flat text artifacts (see the [`persist`] module); [`FrozenModel`] loads
//! them back for inference without any training state.

// Re-export approx traits for users who want to compare predictions
pub use approx;

pub mod data;
pub mod inference;
pub mod model;
pub mod persist;
pub mod preprocess;
pub mod training;

// =============================================================================
// Convenience Re-exports
// =============================================================================

// High-level model types
pub use model::{LinearRegression, LogisticRegression, MultinomialLogisticRegression};

// Training types (configuration, link strategies, schedule)
pub use training::{BoldDriver, Identity, LinkFn, Sigmoid, Softmax, TrainParams, Verbosity};

// Data types (for preparing training data)
pub use data::{Batches, DataError, Dataset};

// Preprocessing types
pub use preprocess::{Statistics, VarianceGuard};

// Inference over persisted artifacts
pub use inference::FrozenModel;
pub use persist::PersistError;
