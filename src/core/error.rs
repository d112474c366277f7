//! Error types for Frontera.

use thiserror::Error;

/// Result type alias for Frontera operations.
pub type Result<T> = std::result::Result<T, FronteraError>;

/// Error types for the simulation engine.
#[derive(Error, Debug)]
pub enum FronteraError {
    /// Weight vector length does not match the asset count.
    #[error("Length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Too few assets for the requested operation.
    #[error("Insufficient assets: need at least {required}, got {available}")]
    InsufficientAssets { required: usize, available: usize },

    /// Too few return periods for the requested operation.
    #[error("Insufficient periods: need at least {required}, got {available}")]
    InsufficientPeriods { required: usize, available: usize },

    /// A return cell is NaN or infinite.
    #[error("Non-finite return for {ticker} at period {period}")]
    NonFiniteReturn { ticker: String, period: usize },

    /// The same ticker appears more than once.
    #[error("Duplicate asset: {ticker}")]
    DuplicateAsset { ticker: String },

    /// Weight vector violates the allocation invariants.
    #[error("Invalid weights: {message}")]
    InvalidWeights { message: String },

    /// Invalid parameter value.
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },
}

impl FronteraError {
    /// Create a length mismatch error.
    pub fn length_mismatch(expected: usize, actual: usize) -> Self {
        Self::LengthMismatch { expected, actual }
    }

    /// Create an insufficient assets error.
    pub fn insufficient_assets(required: usize, available: usize) -> Self {
        Self::InsufficientAssets {
            required,
            available,
        }
    }

    /// Create an insufficient periods error.
    pub fn insufficient_periods(required: usize, available: usize) -> Self {
        Self::InsufficientPeriods {
            required,
            available,
        }
    }

    /// Create an invalid weights error.
    pub fn invalid_weights(message: impl Into<String>) -> Self {
        Self::InvalidWeights {
            message: message.into(),
        }
    }

    /// Create an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }
}

#[cfg(feature = "python")]
impl From<FronteraError> for pyo3::PyErr {
    fn from(err: FronteraError) -> pyo3::PyErr {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}
