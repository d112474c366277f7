//! Return-series preprocessing.
//!
//! Converts aligned daily close series into a validated [`ReturnMatrix`] of
//! simple or logarithmic periodic returns. Any period with a missing close
//! for any asset is dropped row-wise before differencing, so the matrix
//! handed to the engine has no gaps.

use serde::{Deserialize, Serialize};

use crate::core::{FronteraError, Result, ReturnMatrix, Ticker};

/// How a price series is converted into periodic returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReturnKind {
    /// Fractional change: (p_t - p_{t-1}) / p_{t-1}.
    Simple,
    /// Logarithmic change: ln(p_t / p_{t-1}).
    Log,
}

/// A close-price series for a single asset, aligned by period with its peers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceSeries {
    /// Asset ticker symbol.
    pub ticker: Ticker,
    /// Daily close prices. Non-finite or non-positive entries mark missing
    /// data for that period.
    pub closes: Vec<f64>,
}

impl PriceSeries {
    /// Create a new price series.
    pub fn new(ticker: impl Into<Ticker>, closes: Vec<f64>) -> Self {
        Self {
            ticker: ticker.into(),
            closes,
        }
    }
}

/// Simple returns of a clean (positive, finite) close series.
///
/// Output length is `closes.len() - 1`; empty for fewer than 2 closes.
pub fn simple_returns(closes: &[f64]) -> Vec<f64> {
    closes
        .windows(2)
        .map(|pair| (pair[1] - pair[0]) / pair[0])
        .collect()
}

/// Logarithmic returns of a clean (positive, finite) close series.
///
/// Output length is `closes.len() - 1`; empty for fewer than 2 closes.
pub fn log_returns(closes: &[f64]) -> Vec<f64> {
    closes
        .windows(2)
        .map(|pair| (pair[1] / pair[0]).ln())
        .collect()
}

/// Build a [`ReturnMatrix`] from aligned close series.
///
/// All series must have the same length (periods are aligned by index).
/// Rows where any asset's close is non-finite or non-positive are dropped
/// across all assets, then returns are taken between consecutive surviving
/// rows.
///
/// # Errors
/// - `InsufficientAssets` if `series` is empty
/// - `LengthMismatch` if series lengths differ
/// - `InsufficientPeriods` if fewer than 3 clean rows survive (2 returns
///   are the minimum for a covariance estimate)
/// - `DuplicateAsset` via matrix validation
pub fn matrix_from_prices(series: &[PriceSeries], kind: ReturnKind) -> Result<ReturnMatrix> {
    if series.is_empty() {
        return Err(FronteraError::insufficient_assets(1, 0));
    }
    let n_rows = series[0].closes.len();
    for s in &series[1..] {
        if s.closes.len() != n_rows {
            return Err(FronteraError::length_mismatch(n_rows, s.closes.len()));
        }
    }

    // Row-wise drop: a period survives only if every asset has a usable close.
    let clean_rows: Vec<usize> = (0..n_rows)
        .filter(|&row| {
            series
                .iter()
                .all(|s| s.closes[row].is_finite() && s.closes[row] > 0.0)
        })
        .collect();
    if clean_rows.len() < 3 {
        return Err(FronteraError::insufficient_periods(3, clean_rows.len()));
    }

    let tickers: Vec<Ticker> = series.iter().map(|s| s.ticker.clone()).collect();
    let columns: Vec<Vec<f64>> = series
        .iter()
        .map(|s| {
            let closes: Vec<f64> = clean_rows.iter().map(|&row| s.closes[row]).collect();
            match kind {
                ReturnKind::Simple => simple_returns(&closes),
                ReturnKind::Log => log_returns(&closes),
            }
        })
        .collect();

    ReturnMatrix::new(tickers, columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_returns() {
        let returns = simple_returns(&[100.0, 110.0, 99.0]);
        assert_eq!(returns.len(), 2);
        assert!((returns[0] - 0.1).abs() < 1e-12);
        assert!((returns[1] + 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_log_returns() {
        let returns = log_returns(&[100.0, 110.0]);
        assert!((returns[0] - (1.1f64).ln()).abs() < 1e-12);
    }

    #[test]
    fn test_matrix_from_prices() {
        let series = vec![
            PriceSeries::new("AAA", vec![100.0, 101.0, 102.0, 103.0]),
            PriceSeries::new("BBB", vec![50.0, 49.0, 50.5, 51.0]),
        ];
        let matrix = matrix_from_prices(&series, ReturnKind::Simple).unwrap();
        assert_eq!(matrix.n_assets(), 2);
        assert_eq!(matrix.n_periods(), 3);
        assert!((matrix.column(0)[0] - 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_missing_row_dropped_across_assets() {
        let series = vec![
            PriceSeries::new("AAA", vec![100.0, 101.0, 102.0, 103.0]),
            PriceSeries::new("BBB", vec![50.0, f64::NAN, 50.5, 51.0]),
        ];
        let matrix = matrix_from_prices(&series, ReturnKind::Simple).unwrap();
        // Row 1 is gone for both assets: returns span rows 0 -> 2 -> 3.
        assert_eq!(matrix.n_periods(), 2);
        assert!((matrix.column(0)[0] - 0.02).abs() < 1e-12);
        assert!((matrix.column(1)[0] - 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_mismatched_lengths_rejected() {
        let series = vec![
            PriceSeries::new("AAA", vec![100.0, 101.0, 102.0]),
            PriceSeries::new("BBB", vec![50.0, 49.0]),
        ];
        assert!(matches!(
            matrix_from_prices(&series, ReturnKind::Log),
            Err(FronteraError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn test_too_few_clean_rows_rejected() {
        let series = vec![PriceSeries::new("AAA", vec![100.0, f64::NAN, 102.0])];
        assert!(matches!(
            matrix_from_prices(&series, ReturnKind::Simple),
            Err(FronteraError::InsufficientPeriods { .. })
        ));
    }
}
