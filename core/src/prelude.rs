use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

/// Scalar-or-sequence input accepted by the metric calculators.
///
/// A bare number is treated as a length-1 series so scalar call sites need
/// no wrapping. Matrix-shaped input is representable so the dimensionality
/// contract can be checked and rejected at coercion time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeriesInput {
    Scalar(f64),
    Series(Vec<f64>),
    Nested(Vec<Vec<f64>>),
}

impl SeriesInput {
    /// Number of dimensions of the underlying value (0 for a scalar).
    pub fn ndim(&self) -> usize {
        match self {
            SeriesInput::Scalar(_) => 0,
            SeriesInput::Series(_) => 1,
            SeriesInput::Nested(_) => 2,
        }
    }

    /// Coerces the input into a uniform 1-dimensional series.
    ///
    /// Scalars become length-1 series; anything that is not exactly
    /// one-dimensional after coercion is rejected.
    pub fn into_series(self) -> MetricResult<Array1<f64>> {
        match self {
            SeriesInput::Scalar(value) => Ok(Array1::from(vec![value])),
            SeriesInput::Series(values) => Ok(Array1::from(values)),
            SeriesInput::Nested(_) => Err(MetricError::Dimensionality { ndim: 2 }),
        }
    }
}

impl From<f64> for SeriesInput {
    fn from(value: f64) -> Self {
        SeriesInput::Scalar(value)
    }
}

impl From<Vec<f64>> for SeriesInput {
    fn from(values: Vec<f64>) -> Self {
        SeriesInput::Series(values)
    }
}

impl From<&[f64]> for SeriesInput {
    fn from(values: &[f64]) -> Self {
        SeriesInput::Series(values.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for SeriesInput {
    fn from(values: [f64; N]) -> Self {
        SeriesInput::Series(values.to_vec())
    }
}

impl From<Array1<f64>> for SeriesInput {
    fn from(values: Array1<f64>) -> Self {
        SeriesInput::Series(values.to_vec())
    }
}

impl From<Array2<f64>> for SeriesInput {
    fn from(values: Array2<f64>) -> Self {
        SeriesInput::Nested(values.outer_iter().map(|row| row.to_vec()).collect())
    }
}

impl From<Vec<Vec<f64>>> for SeriesInput {
    fn from(rows: Vec<Vec<f64>>) -> Self {
        SeriesInput::Nested(rows)
    }
}

/// Common error type for metric evaluation.
#[derive(thiserror::Error, Debug)]
pub enum MetricError {
    #[error("expected a 1-dimensional series, got {ndim} dimensions")]
    Dimensionality { ndim: usize },
    #[error("series length mismatch: observed has {observed}, predicted has {predicted}")]
    ShapeMismatch { observed: usize, predicted: usize },
    #[error("empty series: at least one observation is required")]
    EmptySeries,
}

pub type MetricResult<T> = Result<T, MetricError>;
