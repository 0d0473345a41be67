//! Arithmetic-average Asian call contract.

use crate::core::{Path, PricingError};
use crate::instruments::{validate_common, validate_strike, Instrument};

/// Fixed-strike arithmetic-average Asian call.
///
/// Pays `max(mean(S_0..S_n) - K, 0)` where the mean runs over every price
/// point stored in the path, including the initial price. Averaging damps the
/// terminal-price noise, so Asian payoffs benefit strongly from antithetic
/// pairs whose shocks are negated at every step.
#[derive(Debug, Clone, PartialEq)]
pub struct AsianOption {
    /// Time to maturity in years.
    pub maturity: f64,
    /// Continuously compounded risk-free rate.
    pub rate: f64,
    /// Strike level.
    pub strike: f64,
}

impl AsianOption {
    /// Builds a fixed-strike Asian call.
    pub fn new(maturity: f64, rate: f64, strike: f64) -> Self {
        Self {
            maturity,
            rate,
            strike,
        }
    }
}

impl Instrument for AsianOption {
    fn maturity(&self) -> f64 {
        self.maturity
    }

    fn rate(&self) -> f64 {
        self.rate
    }

    fn payoff(&self, path: &Path) -> f64 {
        (path.average_price() - self.strike).max(0.0)
    }

    fn validate(&self) -> Result<(), PricingError> {
        validate_common(self.maturity, self.rate)?;
        validate_strike(self.strike)
    }
}
