//! Core data types for Frontera.

use serde::{Deserialize, Serialize};

use super::error::{FronteraError, Result};

/// Type alias for asset identifiers (ticker symbols).
pub type Ticker = String;

/// Tolerance for the weight-sum-to-one check.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// A validated table of periodic returns, T periods by N assets.
///
/// Columns are aligned by asset, rows by period, with no missing cells.
/// The constructor enforces the invariants once; every downstream
/// computation assumes them and performs no defensive re-validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnMatrix {
    tickers: Vec<Ticker>,
    columns: Vec<Vec<f64>>,
}

impl ReturnMatrix {
    /// Create a return matrix from per-asset return columns.
    ///
    /// # Errors
    /// - `LengthMismatch` if ticker and column counts differ, or columns
    ///   have unequal lengths
    /// - `InsufficientAssets` / `InsufficientPeriods` on empty or
    ///   single-period input (variance needs at least 2 rows)
    /// - `DuplicateAsset` if a ticker appears twice
    /// - `NonFiniteReturn` on any NaN or infinite cell
    pub fn new(tickers: Vec<Ticker>, columns: Vec<Vec<f64>>) -> Result<Self> {
        if tickers.len() != columns.len() {
            return Err(FronteraError::length_mismatch(tickers.len(), columns.len()));
        }
        if tickers.is_empty() {
            return Err(FronteraError::insufficient_assets(1, 0));
        }
        for (i, ticker) in tickers.iter().enumerate() {
            if tickers[..i].contains(ticker) {
                return Err(FronteraError::DuplicateAsset {
                    ticker: ticker.clone(),
                });
            }
        }

        let n_periods = columns[0].len();
        if n_periods < 2 {
            return Err(FronteraError::insufficient_periods(2, n_periods));
        }
        for column in &columns[1..] {
            if column.len() != n_periods {
                return Err(FronteraError::length_mismatch(n_periods, column.len()));
            }
        }
        for (ticker, column) in tickers.iter().zip(&columns) {
            for (period, value) in column.iter().enumerate() {
                if !value.is_finite() {
                    return Err(FronteraError::NonFiniteReturn {
                        ticker: ticker.clone(),
                        period,
                    });
                }
            }
        }

        Ok(Self { tickers, columns })
    }

    /// Get the number of assets (columns).
    #[inline]
    pub fn n_assets(&self) -> usize {
        self.columns.len()
    }

    /// Get the number of periods (rows).
    #[inline]
    pub fn n_periods(&self) -> usize {
        self.columns[0].len()
    }

    /// Get the asset tickers, in column order.
    #[inline]
    pub fn tickers(&self) -> &[Ticker] {
        &self.tickers
    }

    /// Get the return column for asset `index`.
    #[inline]
    pub fn column(&self, index: usize) -> &[f64] {
        &self.columns[index]
    }

    /// Per-asset mean periodic return, in column order.
    pub fn mean_returns(&self) -> Vec<f64> {
        let t = self.n_periods() as f64;
        self.columns
            .iter()
            .map(|column| column.iter().sum::<f64>() / t)
            .collect()
    }

    /// The 1/N allocation over this matrix's assets.
    pub fn equal_weights(&self) -> Vec<f64> {
        vec![1.0 / self.n_assets() as f64; self.n_assets()]
    }
}

/// Validate a weight vector against a return matrix.
///
/// Weights must match the asset count, be finite and non-negative, and sum
/// to 1 within [`WEIGHT_SUM_TOLERANCE`].
pub fn validate_weights(returns: &ReturnMatrix, weights: &[f64]) -> Result<()> {
    if weights.len() != returns.n_assets() {
        return Err(FronteraError::length_mismatch(
            returns.n_assets(),
            weights.len(),
        ));
    }
    for &w in weights {
        if !w.is_finite() {
            return Err(FronteraError::invalid_weights("non-finite weight"));
        }
        if w < 0.0 {
            return Err(FronteraError::invalid_weights(format!(
                "negative weight {w}"
            )));
        }
    }
    let sum: f64 = weights.iter().sum();
    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(FronteraError::invalid_weights(format!(
            "weights sum to {sum}, expected 1"
        )));
    }
    Ok(())
}
