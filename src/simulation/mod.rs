//! Monte Carlo simulation of the efficient frontier.

pub mod monte_carlo;
pub mod rng;

pub use monte_carlo::{
    simulate, simulate_with_source, SimulationConfig, SimulationResult, SimulationTrial,
};
pub use rng::Xoshiro256StarStar;
