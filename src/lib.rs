// Suppress warning from PyO3 macro expansion (fixed in newer PyO3 versions)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

//! Frontera - Monte Carlo efficient-frontier approximation engine.
//!
//! This crate provides the numerical core of a portfolio builder:
//! - Return-series preprocessing (simple and logarithmic returns)
//! - Annualized portfolio statistics (expected return, volatility, covariance)
//! - Monte Carlo search for the maximum-Sharpe allocation
//! - Mean-covariance diversification screen with a correlation fallback
//! - Risk-tolerance bands and per-asset investment breakdown
//!
//! The engine is a pure computation library with no I/O and no global
//! state. All randomness is injected through a seedable source, so every
//! simulation is reproducible bit for bit.

pub mod allocation;
pub mod core;
pub mod returns;
pub mod simulation;
pub mod stats;

#[cfg(feature = "python")]
pub mod python;

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Python module entry point
#[cfg(feature = "python")]
#[pymodule]
fn _frontera(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add_class::<python::bindings::PyAnnualizedStats>()?;
    m.add_class::<python::bindings::PySimulationResult>()?;

    m.add_function(wrap_pyfunction!(python::bindings::portfolio_stats, m)?)?;
    m.add_function(wrap_pyfunction!(python::bindings::simulate_portfolio, m)?)?;
    m.add_function(wrap_pyfunction!(python::bindings::well_diversified, m)?)?;
    m.add_function(wrap_pyfunction!(python::bindings::correlation_matrix, m)?)?;
    m.add_function(wrap_pyfunction!(python::bindings::investment_breakdown, m)?)?;

    Ok(())
}
