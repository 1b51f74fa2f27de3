//! End-to-end binary logistic regression training tests.

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstest::rstest;

use regressors::{Dataset, LogisticRegression, TrainParams};

/// Two linearly separable 2-D clusters; returns (train, test) datasets.
fn two_clusters(n_per_class: usize, seed: u64) -> (Dataset, Dataset) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut make = |n: usize| {
        let mut features = Array2::zeros((2 * n, 2));
        let mut labels = Array2::zeros((2 * n, 1));
        for i in 0..2 * n {
            let class = i % 2;
            let (cx, cy) = if class == 0 { (0.0, 0.0) } else { (6.0, 6.0) };
            features[[i, 0]] = cx + rng.gen_range(-1.0..1.0);
            features[[i, 1]] = cy + rng.gen_range(-1.0..1.0);
            labels[[i, 0]] = class as f32;
        }
        Dataset::new(features, labels).unwrap()
    };
    (make(n_per_class), make(n_per_class / 4))
}

#[rstest]
#[case::full_batch(None)]
#[case::mini_batch(Some(16))]
fn perfectly_separates_clusters(#[case] batch_size: Option<usize>) {
    let (train, test) = two_clusters(64, 3);

    let params = TrainParams::builder()
        .learning_rate(0.5)
        .iterations(150)
        .maybe_batch_size(batch_size)
        .build();
    let mut model = LogisticRegression::new(&train, params);
    model.train();

    let accuracy = model.test(test.features(), test.labels()).unwrap();
    assert_eq!(accuracy, 1.0, "held-out accuracy was {accuracy}");
}

#[test]
fn cross_entropy_history_is_non_negative() {
    let (train, _) = two_clusters(32, 5);
    let mut model = LogisticRegression::new(
        &train,
        TrainParams::builder().learning_rate(0.1).iterations(40).build(),
    );
    model.train();

    assert_eq!(model.cost_history().len(), 40);
    assert!(model.cost_history().iter().all(|&c| c >= 0.0));
}

#[test]
fn unguarded_zero_variance_column_produces_nan() {
    // A constant column poisons this variant: the standardizer divides by
    // sqrt(0) and the NaN propagates into every prediction.
    let features = ndarray::array![
        [0.0, 3.0],
        [1.0, 3.0],
        [6.0, 3.0],
        [7.0, 3.0],
    ];
    let labels = ndarray::array![[0.0], [0.0], [1.0], [1.0]];
    let train = Dataset::new(features, labels).unwrap();

    let mut model = LogisticRegression::new(
        &train,
        TrainParams::builder().iterations(5).build(),
    );
    model.train();

    let probabilities = model.predict_probabilities(train.features()).unwrap();
    assert!(probabilities.iter().all(|p| p.is_nan()));
}

#[test]
fn decisions_are_zero_or_one() {
    let (train, test) = two_clusters(32, 9);
    let mut model = LogisticRegression::new(
        &train,
        TrainParams::builder().learning_rate(0.5).iterations(60).build(),
    );
    model.train();

    let decisions = model.predict(test.features()).unwrap();
    assert!(decisions.iter().all(|&d| d == 0.0 || d == 1.0));
}
