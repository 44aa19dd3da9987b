use log::debug;

use crate::prelude::{MetricError, MetricResult, SeriesInput};

/// Decimal places kept in the reported metric.
const ROUNDED_DECIMALS: i32 = 6;

/// Computes root mean squared error between ground-truth and predicted values.
///
/// Both arguments accept a scalar or a 1-dimensional series; a scalar is
/// treated as a length-1 series. The result is rounded to 6 decimal places.
///
/// # Errors
///
/// Returns [`MetricError::Dimensionality`] for matrix-shaped input,
/// [`MetricError::ShapeMismatch`] when the coerced lengths differ, and
/// [`MetricError::EmptySeries`] when the series hold no observations.
///
/// # Examples
///
/// ```
/// use evalcore::calc_root_mean_squared_error;
///
/// let rmse = calc_root_mean_squared_error(0.0, 4.123)?;
/// assert_eq!(rmse, 4.123);
///
/// let rmse = calc_root_mean_squared_error(vec![-2.0, 0.0, 2.0], vec![-4.0, 0.0, 2.0])?;
/// assert_eq!(rmse, 1.154701);
/// # Ok::<(), evalcore::MetricError>(())
/// ```
pub fn calc_root_mean_squared_error<O, P>(observed: O, predicted: P) -> MetricResult<f64>
where
    O: Into<SeriesInput>,
    P: Into<SeriesInput>,
{
    let observed = observed.into().into_series()?;
    let predicted = predicted.into().into_series()?;

    if observed.len() != predicted.len() {
        return Err(MetricError::ShapeMismatch {
            observed: observed.len(),
            predicted: predicted.len(),
        });
    }
    if observed.is_empty() {
        return Err(MetricError::EmptySeries);
    }

    let diff = &observed - &predicted;
    let mean_squared = diff.mapv(|d| d * d).sum() / observed.len() as f64;
    let rmse = round_to_decimals(mean_squared.sqrt());

    debug!("RMSE over {} samples: {:.6}", observed.len(), rmse);
    Ok(rmse)
}

fn round_to_decimals(value: f64) -> f64 {
    let scale = 10f64.powi(ROUNDED_DECIMALS);
    (value * scale).round() / scale
}
