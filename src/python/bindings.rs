//! Python bindings for the simulation engine.

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;

use crate::allocation;
use crate::core::ReturnMatrix;
use crate::python::numpy_bridge::{numpy_to_vec_f64, vec_to_numpy_f64};
use crate::simulation::{simulate, SimulationConfig, SimulationResult};
use crate::stats::{compute_stats, is_well_diversified, CovarianceMatrix};

/// Annualized portfolio statistics.
#[pyclass(name = "AnnualizedStats")]
pub struct PyAnnualizedStats {
    #[pyo3(get)]
    pub expected_return: f64,
    #[pyo3(get)]
    pub volatility: f64,
    #[pyo3(get)]
    pub covariance: Vec<Vec<f64>>,
}

/// Monte Carlo simulation result, column-oriented for charting.
#[pyclass(name = "SimulationResult")]
pub struct PySimulationResult {
    expected_returns: Vec<f64>,
    volatilities: Vec<f64>,
    sharpe_ratios: Vec<f64>,
    #[pyo3(get)]
    best_index: usize,
    best_weights: Vec<f64>,
    #[pyo3(get)]
    covariance: Vec<Vec<f64>>,
}

#[pymethods]
impl PySimulationResult {
    /// Annualized expected return per trial.
    fn expected_returns<'py>(&self, py: Python<'py>) -> &'py PyArray1<f64> {
        vec_to_numpy_f64(py, self.expected_returns.clone())
    }

    /// Annualized volatility per trial.
    fn volatilities<'py>(&self, py: Python<'py>) -> &'py PyArray1<f64> {
        vec_to_numpy_f64(py, self.volatilities.clone())
    }

    /// Sharpe ratio per trial.
    fn sharpe_ratios<'py>(&self, py: Python<'py>) -> &'py PyArray1<f64> {
        vec_to_numpy_f64(py, self.sharpe_ratios.clone())
    }

    /// Weights of the maximum-Sharpe trial.
    fn best_weights<'py>(&self, py: Python<'py>) -> &'py PyArray1<f64> {
        vec_to_numpy_f64(py, self.best_weights.clone())
    }
}

impl PySimulationResult {
    fn from_result(result: SimulationResult) -> Self {
        Self {
            expected_returns: result.trials.iter().map(|t| t.expected_return).collect(),
            volatilities: result.trials.iter().map(|t| t.volatility).collect(),
            sharpe_ratios: result.trials.iter().map(|t| t.sharpe_ratio).collect(),
            best_index: result.best_index,
            best_weights: result.best().weights.clone(),
            covariance: result.covariance.rows().to_vec(),
        }
    }
}

fn build_matrix(
    tickers: Vec<String>,
    columns: Vec<PyReadonlyArray1<f64>>,
) -> PyResult<ReturnMatrix> {
    let columns = columns
        .into_iter()
        .map(numpy_to_vec_f64)
        .collect::<PyResult<Vec<_>>>()?;
    Ok(ReturnMatrix::new(tickers, columns)?)
}

/// Compute annualized stats for one weight vector.
#[pyfunction]
#[pyo3(signature = (tickers, columns, weights, periods_per_year = 252))]
pub fn portfolio_stats(
    tickers: Vec<String>,
    columns: Vec<PyReadonlyArray1<f64>>,
    weights: PyReadonlyArray1<f64>,
    periods_per_year: u32,
) -> PyResult<PyAnnualizedStats> {
    let matrix = build_matrix(tickers, columns)?;
    let weights = numpy_to_vec_f64(weights)?;
    let stats = compute_stats(&matrix, &weights, periods_per_year)?;
    Ok(PyAnnualizedStats {
        expected_return: stats.expected_return,
        volatility: stats.volatility,
        covariance: stats.covariance.rows().to_vec(),
    })
}

/// Run the Monte Carlo frontier simulation.
#[pyfunction]
#[pyo3(signature = (tickers, columns, trials = 10_000, periods_per_year = 252, seed = 42))]
pub fn simulate_portfolio(
    tickers: Vec<String>,
    columns: Vec<PyReadonlyArray1<f64>>,
    trials: usize,
    periods_per_year: u32,
    seed: u64,
) -> PyResult<PySimulationResult> {
    let matrix = build_matrix(tickers, columns)?;
    let config = SimulationConfig { trials, periods_per_year, seed };
    let result = simulate(&matrix, &config)?;
    Ok(PySimulationResult::from_result(result))
}

/// Mean-covariance diversification screen.
#[pyfunction]
pub fn well_diversified(covariance: Vec<Vec<f64>>) -> PyResult<bool> {
    let covariance = CovarianceMatrix::from_entries(covariance)?;
    Ok(is_well_diversified(&covariance))
}

/// Correlation matrix fallback for a poorly diversified covariance.
#[pyfunction]
pub fn correlation_matrix(covariance: Vec<Vec<f64>>) -> PyResult<Vec<Vec<f64>>> {
    let covariance = CovarianceMatrix::from_entries(covariance)?;
    Ok(covariance.correlation())
}

/// Split a total investment across assets by weight.
#[pyfunction]
pub fn investment_breakdown(
    tickers: Vec<String>,
    weights: PyReadonlyArray1<f64>,
    total_investment: f64,
) -> PyResult<Vec<(String, f64)>> {
    let weights = numpy_to_vec_f64(weights)?;
    let allocations = allocation::allocate_investment(&tickers, &weights, total_investment)?;
    Ok(allocations
        .into_iter()
        .map(|a| (a.ticker, a.amount))
        .collect())
}
