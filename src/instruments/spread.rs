//! Bull call spread contract.

use crate::core::{Path, PricingError};
use crate::instruments::{validate_common, validate_strike, Instrument};

/// Bull call spread: long a call at `k_low`, short a call at `k_high`.
///
/// Pays `max(S_T - K1, 0) - max(S_T - K2, 0)`, bounded in `[0, K2 - K1]`.
/// `k_low < k_high` is a contract invariant checked by [`Instrument::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct CallSpread {
    /// Time to maturity in years.
    pub maturity: f64,
    /// Continuously compounded risk-free rate.
    pub rate: f64,
    /// Strike of the bought call.
    pub k_low: f64,
    /// Strike of the sold call.
    pub k_high: f64,
}

impl CallSpread {
    /// Builds a bull call spread.
    pub fn new(maturity: f64, rate: f64, k_low: f64, k_high: f64) -> Self {
        Self {
            maturity,
            rate,
            k_low,
            k_high,
        }
    }
}

impl Instrument for CallSpread {
    fn maturity(&self) -> f64 {
        self.maturity
    }

    fn rate(&self) -> f64 {
        self.rate
    }

    fn payoff(&self, path: &Path) -> f64 {
        let terminal = path.final_price();
        (terminal - self.k_low).max(0.0) - (terminal - self.k_high).max(0.0)
    }

    fn validate(&self) -> Result<(), PricingError> {
        validate_common(self.maturity, self.rate)?;
        validate_strike(self.k_low)?;
        validate_strike(self.k_high)?;
        if self.k_low >= self.k_high {
            return Err(PricingError::InvalidInput(
                "call spread requires bought strike K1 < sold strike K2".to_string(),
            ));
        }
        Ok(())
    }
}
