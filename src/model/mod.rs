//! High-level model variants.
//!
//! Three thin wrappers over the shared [`GradientDescent`] engine, differing
//! only in link strategy, zero-variance handling, and evaluation metric.
//!
//! [`GradientDescent`]: crate::training::GradientDescent

mod linear;
mod logistic;
mod multinomial;

pub use linear::LinearRegression;
pub use logistic::LogisticRegression;
pub use multinomial::MultinomialLogisticRegression;
