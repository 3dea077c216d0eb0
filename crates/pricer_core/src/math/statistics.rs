//! Descriptive statistics over price histories.
//!
//! Supports estimating volatility from observed prices instead of using a
//! supplied constant:
//! - [`standard_deviation`]: population standard deviation of the most recent points
//! - [`log_returns`]: consecutive log returns of a price series
//! - [`historical_volatility`]: annualised standard deviation of recent log returns
//!
//! All windows are taken from the end of the slice, so the input is expected
//! in chronological order (oldest first).

use crate::types::StatisticsError;

/// Returns the last `days` elements of `data`.
fn trailing_window(days: usize, data: &[f64]) -> Result<&[f64], StatisticsError> {
    if days == 0 || days > data.len() {
        return Err(StatisticsError::WindowOutOfRange {
            days,
            available: data.len(),
        });
    }
    Ok(&data[data.len() - days..])
}

/// Population variance of a non-empty window.
fn population_variance(window: &[f64]) -> f64 {
    let n = window.len() as f64;
    let mean = window.iter().sum::<f64>() / n;
    window.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n
}

/// Population standard deviation of the most recent `days` data points.
///
/// Computes `sqrt(mean((x - mean(x))²))` over the last `days` elements.
///
/// # Errors
/// `StatisticsError::WindowOutOfRange` if `days == 0` or `days > data_points.len()`.
///
/// # Examples
/// ```
/// use pricer_core::math::statistics::standard_deviation;
///
/// // Uses [3, 4, 5] only
/// let sd = standard_deviation(3, &[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// assert!((sd - 0.816_496_580_927_726).abs() < 1e-12);
///
/// assert!(standard_deviation(10, &[1.0, 2.0, 3.0, 4.0, 5.0]).is_err());
/// ```
pub fn standard_deviation(days: usize, data_points: &[f64]) -> Result<f64, StatisticsError> {
    let window = trailing_window(days, data_points)?;
    Ok(population_variance(window).sqrt())
}

/// Log returns `ln(p[i] / p[i-1])` of a chronological price series.
///
/// A series of `n` prices yields `n - 1` returns; fewer than two prices
/// yield an empty vector.
///
/// # Errors
/// `StatisticsError::NonPositivePrice` if any price is zero, negative or not finite.
pub fn log_returns(prices: &[f64]) -> Result<Vec<f64>, StatisticsError> {
    if let Some((index, &price)) = prices
        .iter()
        .enumerate()
        .find(|(_, p)| !(p.is_finite() && **p > 0.0))
    {
        return Err(StatisticsError::NonPositivePrice { index, price });
    }

    Ok(prices.windows(2).map(|w| (w[1] / w[0]).ln()).collect())
}

/// Annualised historical volatility from the most recent `days` log returns.
///
/// `σ = stdev(last `days` log returns) * sqrt(periods_per_year)`, with the
/// population standard deviation. `days` returns need `days + 1` prices.
///
/// # Arguments
/// * `days` - Number of returns in the window
/// * `prices` - Chronological price series (oldest first)
/// * `periods_per_year` - Observations per year (252 for daily trading data)
///
/// # Errors
/// - `StatisticsError::InvalidPeriods` if `periods_per_year == 0`
/// - `StatisticsError::NonPositivePrice` if a price is not strictly positive
/// - `StatisticsError::WindowOutOfRange` if fewer than `days` returns are available
///
/// # Examples
/// ```
/// use pricer_core::math::statistics::historical_volatility;
///
/// // A series growing at a constant rate has zero volatility
/// let prices: Vec<f64> = (0..30).map(|i| 100.0 * 1.01_f64.powi(i)).collect();
/// let vol = historical_volatility(20, &prices, 252).unwrap();
/// assert!(vol.abs() < 1e-12);
/// ```
pub fn historical_volatility(
    days: usize,
    prices: &[f64],
    periods_per_year: u32,
) -> Result<f64, StatisticsError> {
    if periods_per_year == 0 {
        return Err(StatisticsError::InvalidPeriods(periods_per_year));
    }
    let returns = log_returns(prices)?;
    let sd = standard_deviation(days, &returns)?;
    Ok(sd * f64::from(periods_per_year).sqrt())
}
