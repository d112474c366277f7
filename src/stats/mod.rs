//! Portfolio statistics: annualized return, volatility, and covariance.

pub mod covariance;
pub mod diversification;

pub use covariance::CovarianceMatrix;
pub use diversification::{is_well_diversified, DIVERSIFICATION_THRESHOLD};

use serde::{Deserialize, Serialize};

use crate::core::{validate_weights, FronteraError, Result, ReturnMatrix};

/// Annualized statistics for one (return matrix, weight vector) pair.
///
/// Created fresh per call and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualizedStats {
    /// Annualized expected portfolio return.
    pub expected_return: f64,
    /// Annualized portfolio volatility, always >= 0.
    pub volatility: f64,
    /// Annualized covariance matrix of the assets.
    pub covariance: CovarianceMatrix,
}

/// Compute annualized expected return, covariance, and volatility for a
/// weight vector over a return matrix.
///
/// Annualization multiplies per-period statistics by `periods_per_year`,
/// which assumes i.i.d. periods; an approximation, not a guarantee of
/// market behavior. Volatility is sqrt(wT * Sigma * w), clamped at 0 if
/// rounding pushes the quadratic form negative.
///
/// # Errors
/// `LengthMismatch` or `InvalidWeights` on a bad weight vector,
/// `InvalidParameter` if `periods_per_year` is 0.
pub fn compute_stats(
    returns: &ReturnMatrix,
    weights: &[f64],
    periods_per_year: u32,
) -> Result<AnnualizedStats> {
    validate_weights(returns, weights)?;
    if periods_per_year == 0 {
        return Err(FronteraError::invalid_parameter(
            "periods_per_year must be at least 1",
        ));
    }

    let means = returns.mean_returns();
    let expected_return: f64 = means
        .iter()
        .zip(weights)
        .map(|(mean, w)| mean * w)
        .sum::<f64>()
        * periods_per_year as f64;

    let covariance = CovarianceMatrix::from_returns(returns, periods_per_year);
    let volatility = covariance.quadratic_form(weights).max(0.0).sqrt();

    Ok(AnnualizedStats {
        expected_return,
        volatility,
        covariance,
    })
}
