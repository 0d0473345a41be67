//! Long call butterfly contract.

use crate::core::{Path, PricingError};
use crate::instruments::{validate_common, validate_strike, Instrument};

/// Long call butterfly: long calls at `k1` and `k3`, short two calls at `k2`.
///
/// Pays `max(S_T - K1, 0) - 2 max(S_T - K2, 0) + max(S_T - K3, 0)`, which is
/// non-negative everywhere and peaks at `S_T = K2`. Strikes must satisfy
/// `K1 < K2 < K3`.
#[derive(Debug, Clone, PartialEq)]
pub struct ButterflyOption {
    /// Time to maturity in years.
    pub maturity: f64,
    /// Continuously compounded risk-free rate.
    pub rate: f64,
    /// Lower strike.
    pub k1: f64,
    /// Middle strike, typically `(K1 + K3) / 2`.
    pub k2: f64,
    /// Upper strike.
    pub k3: f64,
}

impl ButterflyOption {
    /// Builds a long call butterfly.
    pub fn new(maturity: f64, rate: f64, k1: f64, k2: f64, k3: f64) -> Self {
        Self {
            maturity,
            rate,
            k1,
            k2,
            k3,
        }
    }
}

impl Instrument for ButterflyOption {
    fn maturity(&self) -> f64 {
        self.maturity
    }

    fn rate(&self) -> f64 {
        self.rate
    }

    fn payoff(&self, path: &Path) -> f64 {
        let terminal = path.final_price();
        (terminal - self.k1).max(0.0) - 2.0 * (terminal - self.k2).max(0.0)
            + (terminal - self.k3).max(0.0)
    }

    fn validate(&self) -> Result<(), PricingError> {
        validate_common(self.maturity, self.rate)?;
        validate_strike(self.k1)?;
        validate_strike(self.k2)?;
        validate_strike(self.k3)?;
        if !(self.k1 < self.k2 && self.k2 < self.k3) {
            return Err(PricingError::InvalidInput(
                "butterfly requires strictly increasing strikes K1 < K2 < K3".to_string(),
            ));
        }
        Ok(())
    }
}
