//! Diversification diagnostic over an annualized covariance matrix.

use super::covariance::CovarianceMatrix;

/// Maximum mean covariance (annualized units) for a portfolio to count as
/// well-diversified.
pub const DIVERSIFICATION_THRESHOLD: f64 = 0.05;

/// Whether the assets behind this covariance matrix are well-diversified.
///
/// The test is the mean of all matrix entries, diagonal included, against
/// [`DIVERSIFICATION_THRESHOLD`]. It is a coarse screen (not scale
/// invariant, and it mixes variances with covariances), but the
/// correlation-fallback view downstream keys off this exact semantics, so
/// the formula stays as is.
pub fn is_well_diversified(covariance: &CovarianceMatrix) -> bool {
    covariance.mean_entry() < DIVERSIFICATION_THRESHOLD
}
