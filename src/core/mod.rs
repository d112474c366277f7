//! Core types and utilities for Frontera.

pub mod error;
pub mod types;

pub use error::{FronteraError, Result};
pub use types::{validate_weights, ReturnMatrix, Ticker, WEIGHT_SUM_TOLERANCE};
