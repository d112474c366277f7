//! Investment allocation and risk-tolerance screening.
//!
//! Turns a simulated weight vector into per-asset monetary amounts and
//! checks a portfolio's volatility against the investor's tolerance band.

use serde::{Deserialize, Serialize};

use crate::core::{FronteraError, Result, Ticker};

/// Investor risk-tolerance band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTolerance {
    /// Capital preservation first.
    Conservative,
    /// Balanced risk and return.
    Moderate,
    /// Accepts substantial volatility for higher returns.
    Aggressive,
}

impl RiskTolerance {
    /// Maximum acceptable annualized volatility for this band.
    pub fn max_volatility(self) -> f64 {
        match self {
            RiskTolerance::Conservative => 0.10,
            RiskTolerance::Moderate => 0.20,
            RiskTolerance::Aggressive => 0.30,
        }
    }

    /// Whether a portfolio with this annualized volatility fits the band.
    #[inline]
    pub fn accepts(self, volatility: f64) -> bool {
        volatility <= self.max_volatility()
    }
}

/// Monetary allocation for one asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetAllocation {
    /// Asset ticker symbol.
    pub ticker: Ticker,
    /// Allocation fraction.
    pub weight: f64,
    /// Monetary amount, `total_investment * weight`.
    pub amount: f64,
}

/// Split a total investment across assets in proportion to their weights.
///
/// # Errors
/// `LengthMismatch` if tickers and weights disagree, `InvalidParameter` for
/// a non-positive or non-finite total, `InvalidWeights` for a negative or
/// non-finite weight.
pub fn allocate_investment(
    tickers: &[Ticker],
    weights: &[f64],
    total_investment: f64,
) -> Result<Vec<AssetAllocation>> {
    if tickers.len() != weights.len() {
        return Err(FronteraError::length_mismatch(tickers.len(), weights.len()));
    }
    if !total_investment.is_finite() || total_investment <= 0.0 {
        return Err(FronteraError::invalid_parameter(format!(
            "total investment must be positive, got {total_investment}"
        )));
    }
    for &w in weights {
        if !w.is_finite() || w < 0.0 {
            return Err(FronteraError::invalid_weights(format!("bad weight {w}")));
        }
    }

    Ok(tickers
        .iter()
        .zip(weights)
        .map(|(ticker, &weight)| AssetAllocation {
            ticker: ticker.clone(),
            weight,
            amount: total_investment * weight,
        })
        .collect())
}
