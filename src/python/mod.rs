//! PyO3 surface for the presentation layer.

pub mod bindings;
pub mod numpy_bridge;
