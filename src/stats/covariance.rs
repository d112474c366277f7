//! Annualized covariance matrix of a return matrix.

use serde::{Deserialize, Serialize};

use crate::core::{FronteraError, Result, ReturnMatrix};

/// An N x N symmetric annualized covariance matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CovarianceMatrix {
    entries: Vec<Vec<f64>>,
}

impl CovarianceMatrix {
    /// Estimate the annualized covariance of a return matrix.
    ///
    /// Sample covariance (divisor T - 1) scaled by `periods_per_year`.
    /// Diagonal entries are clamped to 0 from below: the estimate is
    /// positive-semidefinite in exact arithmetic, but accumulation error
    /// can push a variance a hair negative.
    pub fn from_returns(returns: &ReturnMatrix, periods_per_year: u32) -> Self {
        let n = returns.n_assets();
        let t = returns.n_periods();
        let means = returns.mean_returns();
        let scale = periods_per_year as f64 / (t - 1) as f64;

        let mut entries = vec![vec![0.0; n]; n];
        for i in 0..n {
            for j in i..n {
                let col_i = returns.column(i);
                let col_j = returns.column(j);
                let mut sum = 0.0;
                for row in 0..t {
                    sum += (col_i[row] - means[i]) * (col_j[row] - means[j]);
                }
                let mut cov = sum * scale;
                if i == j {
                    cov = cov.max(0.0);
                }
                entries[i][j] = cov;
                entries[j][i] = cov;
            }
        }

        Self { entries }
    }

    /// Wrap pre-computed entries, validating squareness.
    pub fn from_entries(entries: Vec<Vec<f64>>) -> Result<Self> {
        let n = entries.len();
        if n == 0 {
            return Err(FronteraError::insufficient_assets(1, 0));
        }
        for row in &entries {
            if row.len() != n {
                return Err(FronteraError::length_mismatch(n, row.len()));
            }
        }
        Ok(Self { entries })
    }

    /// Matrix dimension (number of assets).
    #[inline]
    pub fn n_assets(&self) -> usize {
        self.entries.len()
    }

    /// Get the entry at (i, j).
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.entries[i][j]
    }

    /// Borrow the raw rows.
    #[inline]
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.entries
    }

    /// The quadratic form wT * Sigma * w (portfolio variance).
    pub fn quadratic_form(&self, weights: &[f64]) -> f64 {
        let n = self.n_assets();
        let mut total = 0.0;
        for i in 0..n {
            let row = &self.entries[i];
            let mut inner = 0.0;
            for j in 0..n {
                inner += row[j] * weights[j];
            }
            total += weights[i] * inner;
        }
        total
    }

    /// Mean over all entries, diagonal included.
    pub fn mean_entry(&self) -> f64 {
        let n = self.n_assets();
        let sum: f64 = self.entries.iter().flatten().sum();
        sum / (n * n) as f64
    }

    /// The correlation matrix derived from this covariance.
    ///
    /// A zero-variance asset has no defined correlation; its off-diagonal
    /// entries are reported as 0 rather than NaN.
    pub fn correlation(&self) -> Vec<Vec<f64>> {
        let n = self.n_assets();
        let stds: Vec<f64> = (0..n).map(|i| self.entries[i][i].sqrt()).collect();
        let mut corr = vec![vec![0.0; n]; n];
        for i in 0..n {
            for j in 0..n {
                let denom = stds[i] * stds[j];
                corr[i][j] = if denom > 0.0 {
                    self.entries[i][j] / denom
                } else if i == j {
                    1.0
                } else {
                    0.0
                };
            }
        }
        corr
    }
}
