//! Artifact round-trip: save a trained multinomial model, reload it as a
//! frozen inference model, and verify the two agree.

use std::fs;
use std::path::PathBuf;

use approx::assert_abs_diff_eq;
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use regressors::{Dataset, FrozenModel, MultinomialLogisticRegression, TrainParams};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "regressors-artifacts-{}-{name}",
        std::process::id()
    ));
    if dir.exists() {
        fs::remove_dir_all(&dir).unwrap();
    }
    dir
}

fn trained_model() -> (MultinomialLogisticRegression, Dataset) {
    let mut rng = StdRng::seed_from_u64(41);
    let centers = [(0.0f32, 0.0f32), (7.0, 0.0), (0.0, 7.0)];
    let total = 90;
    let mut features = Array2::zeros((total, 2));
    let mut labels = Array2::zeros((total, 3));
    for i in 0..total {
        let class = i % 3;
        let (cx, cy) = centers[class];
        features[[i, 0]] = cx + rng.gen_range(-1.0..1.0);
        features[[i, 1]] = cy + rng.gen_range(-1.0..1.0);
        labels[[i, class]] = 1.0;
    }
    let data = Dataset::new(features, labels).unwrap();

    let mut model = MultinomialLogisticRegression::new(
        &data,
        TrainParams::builder().learning_rate(0.5).iterations(80).build(),
    );
    model.train();
    (model, data)
}

#[test]
fn round_trip_preserves_parameters() {
    let (model, _) = trained_model();
    let dir = scratch_dir("params");

    model.save_artifacts(&dir).unwrap();
    let frozen = FrozenModel::load(&dir).unwrap();

    assert_eq!(frozen.n_features(), 2);
    assert_eq!(frozen.n_classes(), 3);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn frozen_model_agrees_with_trained_model() {
    let (model, data) = trained_model();
    let dir = scratch_dir("agree");

    model.save_artifacts(&dir).unwrap();
    let frozen = FrozenModel::load(&dir).unwrap();

    let trained_predictions = model.predict(data.features()).unwrap();
    for (i, row) in data.features().rows().into_iter().enumerate() {
        let observation = [row[0], row[1]];
        let frozen_class = frozen.predict(&observation).unwrap();
        assert_eq!(
            frozen_class, trained_predictions[i] as usize,
            "disagreement on row {i}"
        );
    }

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn frozen_probabilities_match_trained_probabilities() {
    let (model, data) = trained_model();
    let dir = scratch_dir("probs");

    model.save_artifacts(&dir).unwrap();
    let frozen = FrozenModel::load(&dir).unwrap();

    let observation = [data.features()[[0, 0]], data.features()[[0, 1]]];
    let trained = model
        .predict_probabilities(data.features())
        .unwrap();
    let reloaded = frozen.predict_probabilities(&observation).unwrap();

    for class in 0..3 {
        assert_abs_diff_eq!(
            reloaded[[0, class]],
            trained[[0, class]],
            epsilon = 1e-6
        );
    }

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn artifact_files_use_flat_text_format() {
    let (model, _) = trained_model();
    let dir = scratch_dir("format");

    model.save_artifacts(&dir).unwrap();

    let weights_text = fs::read_to_string(dir.join("weights.txt")).unwrap();
    // (2 features + bias) rows joined by ':', 3 classes per row.
    assert_eq!(weights_text.split(':').count(), 3);
    for row in weights_text.split(':') {
        assert_eq!(row.split(',').count(), 3);
    }

    let means_text = fs::read_to_string(dir.join("means.txt")).unwrap();
    assert_eq!(means_text.split(',').count(), 2);
    assert!(!means_text.contains(':'));

    let variances_text = fs::read_to_string(dir.join("variances.txt")).unwrap();
    assert_eq!(variances_text.split(',').count(), 2);

    fs::remove_dir_all(&dir).unwrap();
}
