//! Flat-text persistence for trained parameters.
//!
//! The format is deliberately minimal, matching the artifacts the browser
//! demo consumes: a weight matrix is rows of comma-separated floats joined by
//! a colon (`w00,w01,...:w10,w11,...`); mean and variance vectors are single
//! comma-separated lists. One artifact per file, no versioning, no checksum.
//!
//! Standard artifact names inside a directory: `weights.txt`, `means.txt`,
//! `variances.txt`.

use std::fs;
use std::path::Path;

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

/// Artifact file name for the weight matrix.
pub const WEIGHTS_FILE: &str = "weights.txt";
/// Artifact file name for the feature means.
pub const MEANS_FILE: &str = "means.txt";
/// Artifact file name for the feature variances.
pub const VARIANCES_FILE: &str = "variances.txt";

// =============================================================================
// PersistError
// =============================================================================

/// Errors that can occur reading or writing parameter artifacts.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid float {value:?} in artifact")]
    InvalidFloat { value: String },

    #[error("ragged weight rows: row {row} has {got} entries, expected {expected}")]
    RaggedRows {
        row: usize,
        got: usize,
        expected: usize,
    },

    #[error("artifact is empty")]
    Empty,

    #[error("artifacts disagree on shape: {0}")]
    Shape(#[from] crate::data::DataError),
}

fn parse_float(token: &str) -> Result<f32, PersistError> {
    token.trim().parse::<f32>().map_err(|_| PersistError::InvalidFloat {
        value: token.trim().to_string(),
    })
}

// =============================================================================
// Vectors
// =============================================================================

/// Write a vector as a single comma-separated line.
pub fn write_vector(path: &Path, values: ArrayView1<'_, f32>) -> Result<(), PersistError> {
    let line: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    fs::write(path, line.join(","))?;
    Ok(())
}

/// Read a comma-separated vector.
pub fn read_vector(path: &Path) -> Result<Array1<f32>, PersistError> {
    let text = fs::read_to_string(path)?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(PersistError::Empty);
    }
    let values: Vec<f32> = trimmed
        .split(',')
        .map(parse_float)
        .collect::<Result<_, _>>()?;
    Ok(Array1::from_vec(values))
}

// =============================================================================
// Weight matrices
// =============================================================================

/// Write a weight matrix: rows of comma-separated floats joined by `:`.
pub fn write_weights(path: &Path, weights: ArrayView2<'_, f32>) -> Result<(), PersistError> {
    let rows: Vec<String> = weights
        .rows()
        .into_iter()
        .map(|row| {
            row.iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect();
    fs::write(path, rows.join(":"))?;
    Ok(())
}

/// Read a colon/comma-delimited weight matrix.
pub fn read_weights(path: &Path) -> Result<Array2<f32>, PersistError> {
    let text = fs::read_to_string(path)?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(PersistError::Empty);
    }

    let mut rows: Vec<Vec<f32>> = Vec::new();
    for (i, row_text) in trimmed.split(':').enumerate() {
        let row: Vec<f32> = row_text
            .split(',')
            .map(parse_float)
            .collect::<Result<_, _>>()?;
        if let Some(first) = rows.first() {
            if row.len() != first.len() {
                return Err(PersistError::RaggedRows {
                    row: i,
                    got: row.len(),
                    expected: first.len(),
                });
            }
        }
        rows.push(row);
    }

    let n_rows = rows.len();
    let n_cols = rows[0].len();
    let flat: Vec<f32> = rows.into_iter().flatten().collect();
    // Shape is consistent by construction above.
    Ok(Array2::from_shape_vec((n_rows, n_cols), flat).expect("validated row lengths"))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use std::path::PathBuf;

    fn scratch_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("regressors-persist-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir.join(name)
    }

    #[test]
    fn vector_round_trip() {
        let path = scratch_path("vector.txt");
        let values = array![1.5f32, -2.25, 0.0, 1e-3];

        write_vector(&path, values.view()).unwrap();
        let loaded = read_vector(&path).unwrap();

        assert_eq!(loaded, values);
    }

    #[test]
    fn weights_round_trip() {
        let path = scratch_path("weights.txt");
        let weights = array![[0.5f32, -1.0, 2.0], [3.25, 0.0, -0.125]];

        write_weights(&path, weights.view()).unwrap();
        let loaded = read_weights(&path).unwrap();

        assert_eq!(loaded, weights);
    }

    #[test]
    fn weights_format_uses_colon_and_comma() {
        let path = scratch_path("format.txt");
        let weights = array![[1.0f32, 2.0], [3.0, 4.0]];

        write_weights(&path, weights.view()).unwrap();
        let text = fs::read_to_string(&path).unwrap();

        assert_eq!(text, "1,2:3,4");
    }

    #[test]
    fn ragged_rows_rejected() {
        let path = scratch_path("ragged.txt");
        fs::write(&path, "1,2:3").unwrap();

        assert!(matches!(
            read_weights(&path),
            Err(PersistError::RaggedRows { row: 1, got: 1, expected: 2 })
        ));
    }

    #[test]
    fn garbage_rejected() {
        let path = scratch_path("garbage.txt");
        fs::write(&path, "1.0,abc").unwrap();

        assert!(matches!(
            read_vector(&path),
            Err(PersistError::InvalidFloat { .. })
        ));
    }

    #[test]
    fn empty_artifact_rejected() {
        let path = scratch_path("empty.txt");
        fs::write(&path, "").unwrap();

        assert!(matches!(read_vector(&path), Err(PersistError::Empty)));
    }
}
