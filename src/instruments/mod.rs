//! Instrument contracts and concrete payoff definitions.
//!
//! Every instrument carries its maturity and risk-free rate, computes its own
//! discount factor, and evaluates a pure payoff over a simulated [`Path`].
//! Payoffs must tolerate a degenerate single-point path: grid-based engines
//! evaluate the terminal condition by treating each spatial node as if it
//! were the terminal price.

pub mod asian;
pub mod butterfly;
pub mod spread;
pub mod vanilla;

pub use asian::AsianOption;
pub use butterfly::ButterflyOption;
pub use spread::CallSpread;
pub use vanilla::{EuropeanCall, EuropeanPut};

use crate::core::{Path, PricingError};

/// Common contract implemented by every priceable instrument.
pub trait Instrument {
    /// Time to maturity in years, strictly positive for a valid instrument.
    fn maturity(&self) -> f64;

    /// Continuously compounded risk-free rate.
    fn rate(&self) -> f64;

    /// Discount factor `exp(-r T)` from maturity back to today.
    fn discount_factor(&self) -> f64 {
        (-self.rate() * self.maturity()).exp()
    }

    /// Raw (undiscounted) payoff at maturity for one simulated path.
    ///
    /// Pure and idempotent: evaluating the same path twice returns the
    /// identical value. Must accept a single-point path.
    fn payoff(&self, path: &Path) -> f64;

    /// Validates contract parameters.
    ///
    /// Engines call this before pricing so violations surface as explicit
    /// errors at the operation boundary.
    fn validate(&self) -> Result<(), PricingError>;

    /// Boundary value of the pricing PDE at `S = 0` with `tau` years left to
    /// maturity.
    ///
    /// Zero is correct for call-type payoffs (a worthless asset makes the
    /// option worthless); put-type instruments override this with their
    /// discounted intrinsic value at zero.
    fn lower_boundary(&self, _tau: f64) -> f64 {
        0.0
    }
}

pub(crate) fn validate_common(maturity: f64, rate: f64) -> Result<(), PricingError> {
    if !maturity.is_finite() || maturity <= 0.0 {
        return Err(PricingError::InvalidInput(
            "instrument maturity must be finite and > 0".to_string(),
        ));
    }
    if !rate.is_finite() {
        return Err(PricingError::InvalidInput(
            "instrument rate must be finite".to_string(),
        ));
    }
    Ok(())
}

pub(crate) fn validate_strike(strike: f64) -> Result<(), PricingError> {
    if !strike.is_finite() || strike <= 0.0 {
        return Err(PricingError::InvalidInput(
            "strike must be finite and > 0".to_string(),
        ));
    }
    Ok(())
}
