//! Asset price evolution models and their capability traits.
//!
//! [`AssetModel`] is the minimal contract every model satisfies. The extra
//! capabilities some engines need (antithetic pair generation for variance
//! reduction, initial-price perturbation for bump-and-reprice Greeks) are
//! separate traits that concrete models opt into, so an engine that requires
//! a capability states it as a compile-time bound instead of downcasting and
//! failing at runtime.

pub mod gbm;

pub use gbm::Gbm;

use crate::core::{Path, PricingError};
use crate::math::NormalSource;

/// Contract for simulating one price trajectory.
pub trait AssetModel {
    /// Initial asset price `S_0`.
    fn s0(&self) -> f64;

    /// Number of discrete time steps per generated path.
    fn steps(&self) -> usize;

    /// Simulates one trajectory of `steps() + 1` prices out to `maturity`.
    ///
    /// The first element of the returned path is exactly `s0()`. A zero or
    /// negative maturity is a caller contract violation; pricing engines
    /// validate it upstream.
    fn generate_path(&self, source: &mut NormalSource, maturity: f64) -> Path;
}

/// Models that can generate antithetic path pairs.
///
/// The two paths of a pair share one sequence of standard-normal draws, with
/// the mirror path negating every draw. Negating at every step (rather than
/// only at the terminal one) keeps the negative correlation intact for
/// payoffs that read intermediate prices, such as average-price or lookback
/// payoffs.
pub trait AntitheticModel: AssetModel {
    /// Simulates an antithetic pair of trajectories out to `maturity`.
    fn generate_antithetic_pair(&self, source: &mut NormalSource, maturity: f64) -> (Path, Path);
}

/// Models whose initial price can be bumped while every other parameter is
/// held fixed.
///
/// Bump-and-reprice Greeks estimators rebuild the model at `S_0 ± ε`; the
/// trait guarantees drift, volatility, and step count survive the bump.
pub trait PerturbableModel: AssetModel + Sized {
    /// Returns a copy of this model with the initial price replaced.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidInput`] if `s0` is not a positive
    /// finite price.
    fn with_initial_price(&self, s0: f64) -> Result<Self, PricingError>;
}
