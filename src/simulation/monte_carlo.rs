//! Monte Carlo frontier sampler.
//!
//! Draws random weight vectors over a shared return matrix and records the
//! annualized return, volatility, and Sharpe ratio of every trial. The best
//! trial approximates the maximum-Sharpe portfolio on the efficient
//! frontier. Trials are parallelized via Rayon over deterministic
//! xoshiro256** sub-streams.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{FronteraError, Result, ReturnMatrix};
use crate::simulation::rng::Xoshiro256StarStar;
use crate::stats::CovarianceMatrix;

/// Trials per parallel work unit. Chunk boundaries depend only on the trial
/// count, never on the thread count, so a seeded run is bit-reproducible on
/// any machine.
const TRIALS_PER_CHUNK: usize = 1024;

/// Configuration for a Monte Carlo simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of random weight vectors to draw.
    pub trials: usize,
    /// Periods per year used for annualization (252 for trading days).
    pub periods_per_year: u32,
    /// Seed for the random source.
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { trials: 10_000, periods_per_year: 252, seed: 42 }
    }
}

/// One sampled portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationTrial {
    /// Allocation fractions, one per asset, summing to 1.
    pub weights: Vec<f64>,
    /// Annualized expected return.
    pub expected_return: f64,
    /// Annualized volatility.
    pub volatility: f64,
    /// `expected_return / volatility`; `f64::NEG_INFINITY` for a
    /// zero-volatility trial (see [`simulate`]).
    pub sharpe_ratio: f64,
}

/// Result of a Monte Carlo simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Every sampled trial, in draw order.
    pub trials: Vec<SimulationTrial>,
    /// Index of the maximum-Sharpe trial (first occurrence on ties).
    pub best_index: usize,
    /// Annualized covariance matrix shared by all trials.
    pub covariance: CovarianceMatrix,
}

impl SimulationResult {
    /// The maximum-Sharpe trial.
    #[inline]
    pub fn best(&self) -> &SimulationTrial {
        &self.trials[self.best_index]
    }
}

/// Run a Monte Carlo simulation seeded from `config.seed`.
///
/// Each trial draws N independent uniforms and normalizes them by their sum
/// to form a weight vector. For N > 2 this law is not uniform over the
/// simplex (it over-samples interior allocations) and it is kept on
/// purpose: the shape of the explored frontier depends on it, so swapping
/// in an exact simplex draw would change every downstream result.
///
/// A trial whose volatility is exactly 0 has no defined Sharpe ratio; it is
/// recorded with `f64::NEG_INFINITY` so it can never win the best-trial
/// scan and the result still holds exactly `config.trials` entries. NaN
/// never enters the selection.
///
/// # Errors
/// Fails before drawing any trial: `InsufficientAssets` for fewer than 2
/// assets (a 1-asset portfolio has no weight freedom), `InvalidParameter`
/// for zero `trials` or `periods_per_year`.
pub fn simulate(returns: &ReturnMatrix, config: &SimulationConfig) -> Result<SimulationResult> {
    simulate_with_source(returns, config, Xoshiro256StarStar::new(config.seed))
}

/// Run a Monte Carlo simulation with an explicitly injected random source.
///
/// `config.seed` is ignored; the caller owns the stream. Two calls with
/// equal matrices, configs, and sources produce bit-identical results.
pub fn simulate_with_source(
    returns: &ReturnMatrix,
    config: &SimulationConfig,
    mut rng: Xoshiro256StarStar,
) -> Result<SimulationResult> {
    if returns.n_assets() < 2 {
        return Err(FronteraError::insufficient_assets(2, returns.n_assets()));
    }
    if config.trials == 0 {
        return Err(FronteraError::invalid_parameter("trials must be at least 1"));
    }
    if config.periods_per_year == 0 {
        return Err(FronteraError::invalid_parameter(
            "periods_per_year must be at least 1",
        ));
    }

    let n_assets = returns.n_assets();
    debug!(
        trials = config.trials,
        assets = n_assets,
        periods = returns.n_periods(),
        "starting Monte Carlo simulation"
    );

    // Neither the means nor the covariance depend on the weights, so both
    // are computed once; each trial pays only the O(N^2) quadratic form.
    let annualized_means: Vec<f64> = returns
        .mean_returns()
        .iter()
        .map(|mean| mean * config.periods_per_year as f64)
        .collect();
    let covariance = CovarianceMatrix::from_returns(returns, config.periods_per_year);

    // One RNG stream per fixed-size chunk, carved out by jumping.
    let n_chunks = (config.trials + TRIALS_PER_CHUNK - 1) / TRIALS_PER_CHUNK;
    let chunk_rngs: Vec<Xoshiro256StarStar> = (0..n_chunks)
        .map(|_| {
            let chunk_rng = rng.clone();
            rng.jump();
            chunk_rng
        })
        .collect();

    let chunks: Vec<Vec<SimulationTrial>> = chunk_rngs
        .into_par_iter()
        .enumerate()
        .map(|(chunk_idx, mut chunk_rng)| {
            let start = chunk_idx * TRIALS_PER_CHUNK;
            let end = (start + TRIALS_PER_CHUNK).min(config.trials);
            (start..end)
                .map(|_| {
                    run_trial(&mut chunk_rng, n_assets, &annualized_means, &covariance)
                })
                .collect()
        })
        .collect();
    let trials: Vec<SimulationTrial> = chunks.into_iter().flatten().collect();

    // Strict-maximum scan keeps the first of tied trials, so the winner is
    // a pure function of the rng sequence.
    let mut best_index = 0;
    for (index, trial) in trials.iter().enumerate() {
        if trial.sharpe_ratio > trials[best_index].sharpe_ratio {
            best_index = index;
        }
    }

    debug!(
        best_index,
        best_sharpe = trials[best_index].sharpe_ratio,
        "simulation complete"
    );

    Ok(SimulationResult { trials, best_index, covariance })
}

/// Draw one weight vector and evaluate its portfolio statistics.
fn run_trial(
    rng: &mut Xoshiro256StarStar,
    n_assets: usize,
    annualized_means: &[f64],
    covariance: &CovarianceMatrix,
) -> SimulationTrial {
    let mut weights: Vec<f64> = (0..n_assets).map(|_| rng.next_f64()).collect();
    let sum: f64 = weights.iter().sum();
    if sum > 0.0 {
        for w in &mut weights {
            *w /= sum;
        }
    } else {
        // All draws exactly zero: vanishingly rare, fall back to 1/N.
        weights.fill(1.0 / n_assets as f64);
    }

    let expected_return: f64 = weights
        .iter()
        .zip(annualized_means)
        .map(|(w, mean)| w * mean)
        .sum();
    let volatility = covariance.quadratic_form(&weights).max(0.0).sqrt();
    let sharpe_ratio = if volatility > 0.0 {
        expected_return / volatility
    } else {
        f64::NEG_INFINITY
    };

    SimulationTrial { weights, expected_return, volatility, sharpe_ratio }
}
