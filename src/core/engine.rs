//! Library-wide error and result structures shared by every pricing engine.

/// Plain-vanilla option side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionType {
    /// Call option payoff profile.
    Call,
    /// Put option payoff profile.
    Put,
}

impl OptionType {
    /// Returns +1.0 for calls and -1.0 for puts.
    pub fn sign(self) -> f64 {
        match self {
            Self::Call => 1.0,
            Self::Put => -1.0,
        }
    }
}

/// Engine and model errors surfaced by the API.
///
/// Contract violations are rejected with [`PricingError::InvalidInput`] at
/// the boundary of the offending operation; engines never hand back zeroed
/// placeholder results in place of an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Input validation error.
    InvalidInput(String),
    /// A numerical scheme cannot run within its stability or convergence bounds.
    ConvergenceFailure(String),
    /// Numerical issue (overflow, invalid state, etc.).
    NumericalError(String),
}

impl std::fmt::Display for PricingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::ConvergenceFailure(msg) => write!(f, "convergence failure: {msg}"),
            Self::NumericalError(msg) => write!(f, "numerical error: {msg}"),
        }
    }
}

impl std::error::Error for PricingError {}

/// Monte Carlo estimate with its sampling error.
///
/// `standard_error` is the standard error of the discounted mean; the 95%
/// confidence helpers place `price` within `±1.96` standard errors.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingResult {
    /// Discounted price estimate.
    pub price: f64,
    /// Standard error of the price estimate, always non-negative.
    pub standard_error: f64,
    /// Realized undiscounted payoffs, retained by the standard estimator for
    /// diagnostics. `None` for the antithetic estimator, whose per-path
    /// payoffs are correlated within a pair and carry no per-sample meaning.
    pub payoffs: Option<Vec<f64>>,
}

impl PricingResult {
    /// Half-width of the 95% confidence interval.
    pub fn confidence_radius_95(&self) -> f64 {
        1.96 * self.standard_error
    }

    /// Lower and upper bounds of the 95% confidence interval.
    pub fn confidence_interval_95(&self) -> (f64, f64) {
        let radius = self.confidence_radius_95();
        (self.price - radius, self.price + radius)
    }
}

/// Closed-form Black-Scholes sensitivities for a vanilla option.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Greeks {
    /// First derivative to spot.
    pub delta: f64,
    /// Second derivative to spot.
    pub gamma: f64,
    /// First derivative to volatility.
    pub vega: f64,
}
