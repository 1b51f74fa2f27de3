//! Training infrastructure: the gradient descent engine and its parts.
//!
//! ## Shared Infrastructure
//!
//! - [`GradientDescent`]: the epoch loop shared by all three model variants
//! - [`TrainParams`]: configuration builder
//! - [`gradient_step`]: the one gradient formula all variants use
//! - [`BoldDriver`]: adaptive learning-rate schedule
//! - [`TrainingLogger`], [`Verbosity`]: progress output
//!
//! ## Link/Cost Strategies
//!
//! - [`Identity`]: linear regression (mean squared error)
//! - [`Sigmoid`]: binary logistic regression (cross-entropy, threshold rule)
//! - [`Softmax`]: multinomial logistic regression (cross-entropy, argmax rule)
//!
//! ## Metrics
//!
//! - [`metrics::r_squared`], [`metrics::binary_accuracy`],
//!   [`metrics::argmax_accuracy`]: one evaluation strategy per variant

mod link;
mod logger;
pub mod metrics;
mod schedule;
mod step;
mod trainer;

pub use link::{Identity, LinkFn, Sigmoid, Softmax};
pub use logger::{TrainingLogger, Verbosity};
pub use schedule::BoldDriver;
pub use step::gradient_step;
pub use trainer::{GradientDescent, TrainParams};
