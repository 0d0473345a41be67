//! Pricing engine implementations.

pub mod analytic;
pub mod explicit_fd;
pub mod greeks;
pub mod monte_carlo;

pub use explicit_fd::{ExplicitFdEngine, PriceCurve};
pub use greeks::GreeksEstimator;
pub use monte_carlo::MonteCarloEngine;
