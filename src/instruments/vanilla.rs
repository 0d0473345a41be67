//! European vanilla call and put contracts.

use crate::core::{Path, PricingError};
use crate::instruments::{validate_common, validate_strike, Instrument};

/// European call: pays `max(S_T - K, 0)` at maturity.
///
/// # Examples
/// ```
/// use pathwise::core::Path;
/// use pathwise::instruments::{EuropeanCall, Instrument};
///
/// let call = EuropeanCall::new(1.0, 0.05, 100.0);
/// assert_eq!(call.payoff(&Path::single(112.0)), 12.0);
/// assert_eq!(call.payoff(&Path::single(90.0)), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EuropeanCall {
    /// Time to maturity in years.
    pub maturity: f64,
    /// Continuously compounded risk-free rate.
    pub rate: f64,
    /// Strike level.
    pub strike: f64,
}

impl EuropeanCall {
    /// Builds a European call.
    pub fn new(maturity: f64, rate: f64, strike: f64) -> Self {
        Self {
            maturity,
            rate,
            strike,
        }
    }
}

impl Instrument for EuropeanCall {
    fn maturity(&self) -> f64 {
        self.maturity
    }

    fn rate(&self) -> f64 {
        self.rate
    }

    fn payoff(&self, path: &Path) -> f64 {
        (path.final_price() - self.strike).max(0.0)
    }

    fn validate(&self) -> Result<(), PricingError> {
        validate_common(self.maturity, self.rate)?;
        validate_strike(self.strike)
    }
}

/// European put: pays `max(K - S_T, 0)` at maturity.
#[derive(Debug, Clone, PartialEq)]
pub struct EuropeanPut {
    /// Time to maturity in years.
    pub maturity: f64,
    /// Continuously compounded risk-free rate.
    pub rate: f64,
    /// Strike level.
    pub strike: f64,
}

impl EuropeanPut {
    /// Builds a European put.
    pub fn new(maturity: f64, rate: f64, strike: f64) -> Self {
        Self {
            maturity,
            rate,
            strike,
        }
    }
}

impl Instrument for EuropeanPut {
    fn maturity(&self) -> f64 {
        self.maturity
    }

    fn rate(&self) -> f64 {
        self.rate
    }

    fn payoff(&self, path: &Path) -> f64 {
        (self.strike - path.final_price()).max(0.0)
    }

    fn validate(&self) -> Result<(), PricingError> {
        validate_common(self.maturity, self.rate)?;
        validate_strike(self.strike)
    }

    /// A put at `S = 0` is worth the discounted strike.
    fn lower_boundary(&self, tau: f64) -> f64 {
        self.strike * (-self.rate * tau).exp()
    }
}
