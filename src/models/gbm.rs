//! Geometric Brownian Motion path generation.
//!
//! Prices follow `dS/S = mu dt + sigma dW`, discretized with the exact
//! lognormal step `S_{k+1} = S_k exp[(mu - sigma^2/2) dt + sigma sqrt(dt) Z_k]`
//! so the terminal distribution is exact for any step count.
//! Reference: Glasserman (2004), Ch. 3.

use crate::core::{Path, PricingError};
use crate::math::NormalSource;
use crate::models::{AntitheticModel, AssetModel, PerturbableModel};

/// Geometric Brownian Motion model.
///
/// Parameters are validated at construction and immutable afterwards. The
/// maturity is a per-call argument of the generation methods, so one model
/// instance can price options of several maturities.
///
/// # Examples
/// ```
/// use pathwise::math::NormalSource;
/// use pathwise::models::{AssetModel, Gbm};
///
/// let model = Gbm::new(100.0, 252, 0.05, 0.20).unwrap();
/// let mut source = NormalSource::with_seed(42);
/// let path = model.generate_path(&mut source, 1.0);
/// assert_eq!(path.len(), 253);
/// assert_eq!(path.at(0), 100.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Gbm {
    s0: f64,
    steps: usize,
    mu: f64,
    sigma: f64,
}

impl Gbm {
    /// Builds a GBM model.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidInput`] when `s0 <= 0`, `steps == 0`,
    /// `sigma <= 0`, or any parameter is non-finite.
    pub fn new(s0: f64, steps: usize, mu: f64, sigma: f64) -> Result<Self, PricingError> {
        if !s0.is_finite() || s0 <= 0.0 {
            return Err(PricingError::InvalidInput(
                "gbm initial price must be finite and > 0".to_string(),
            ));
        }
        if steps == 0 {
            return Err(PricingError::InvalidInput(
                "gbm step count must be > 0".to_string(),
            ));
        }
        if !mu.is_finite() {
            return Err(PricingError::InvalidInput(
                "gbm drift must be finite".to_string(),
            ));
        }
        if !sigma.is_finite() || sigma < 0.0 {
            return Err(PricingError::InvalidInput(
                "gbm volatility must be finite and >= 0".to_string(),
            ));
        }
        Ok(Self {
            s0,
            steps,
            mu,
            sigma,
        })
    }

    /// Drift parameter; equals the risk-free rate under the pricing measure.
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Volatility parameter.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    fn step_terms(&self, maturity: f64) -> (f64, f64) {
        let dt = maturity / self.steps as f64;
        let drift = (self.mu - 0.5 * self.sigma * self.sigma) * dt;
        let diffusion = self.sigma * dt.sqrt();
        (drift, diffusion)
    }
}

impl AssetModel for Gbm {
    fn s0(&self) -> f64 {
        self.s0
    }

    fn steps(&self) -> usize {
        self.steps
    }

    fn generate_path(&self, source: &mut NormalSource, maturity: f64) -> Path {
        let (drift, diffusion) = self.step_terms(maturity);

        let mut prices = Vec::with_capacity(self.steps + 1);
        prices.push(self.s0);

        let mut current = self.s0;
        for _ in 0..self.steps {
            let z = source.next_standard_normal();
            current *= diffusion.mul_add(z, drift).exp();
            prices.push(current);
        }

        Path::new(prices)
    }
}

impl AntitheticModel for Gbm {
    fn generate_antithetic_pair(&self, source: &mut NormalSource, maturity: f64) -> (Path, Path) {
        let (drift, diffusion) = self.step_terms(maturity);

        let mut prices = Vec::with_capacity(self.steps + 1);
        let mut mirror_prices = Vec::with_capacity(self.steps + 1);
        prices.push(self.s0);
        mirror_prices.push(self.s0);

        let mut current = self.s0;
        let mut mirror = self.s0;
        for _ in 0..self.steps {
            // One draw drives both legs; the mirror leg negates it at every
            // step so intermediate prices stay negatively correlated too.
            let z = source.next_standard_normal();
            current *= diffusion.mul_add(z, drift).exp();
            mirror *= diffusion.mul_add(-z, drift).exp();
            prices.push(current);
            mirror_prices.push(mirror);
        }

        (Path::new(prices), Path::new(mirror_prices))
    }
}

impl PerturbableModel for Gbm {
    fn with_initial_price(&self, s0: f64) -> Result<Self, PricingError> {
        Self::new(s0, self.steps, self.mu, self.sigma)
    }
}
