//! Explicit finite-difference solver for the Black-Scholes PDE.
//!
//! Marches the option value backward from the payoff at maturity on a
//! uniform price/time grid. The forward-Euler update is simple but only
//! conditionally stable: `dt` must stay below a bound set by `dS` and the
//! diffusion coefficient, and the engine checks that bound before marching.

use crate::core::{Path, PricingError};
use crate::instruments::Instrument;
use crate::models::{AssetModel, Gbm};

/// Price curve produced by one backward solve: parallel vectors of spatial
/// price levels `S_i = i dS` and option values `V_i` at `t = 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceCurve {
    /// Grid price levels, length `space_steps + 1`.
    pub spots: Vec<f64>,
    /// Option values at each grid level, same length as `spots`.
    pub values: Vec<f64>,
}

/// Explicit (forward-Euler) finite-difference engine for the Black-Scholes
/// PDE.
///
/// The instrument's payoff supplies the terminal condition, evaluated at
/// each grid level through a degenerate single-point path, so any payoff
/// that only reads the terminal price can be solved on the grid. The lower
/// boundary value comes from [`Instrument::lower_boundary`]; the upper
/// boundary holds its previous value, a zero-Gamma assumption at the
/// truncated edge of the domain.
#[derive(Debug, Clone)]
pub struct ExplicitFdEngine {
    /// Upper price bound of the truncated domain, typically 2-3x the strike.
    pub s_max: f64,
    /// Number of spatial intervals; the grid has `space_steps + 1` nodes.
    pub space_steps: usize,
    /// Number of time steps.
    pub time_steps: usize,
    /// If `true`, solving fails when `dt` violates the stability bound.
    pub enforce_stability: bool,
    /// Safety factor applied to the computed stability limit.
    pub stability_safety_factor: f64,
}

impl ExplicitFdEngine {
    /// Creates an engine on an `s_max x maturity` grid with the given
    /// resolution. Stability enforcement is on by default.
    pub fn new(s_max: f64, space_steps: usize, time_steps: usize) -> Self {
        Self {
            s_max,
            space_steps,
            time_steps,
            enforce_stability: true,
            stability_safety_factor: 0.95,
        }
    }

    /// Enables or disables the pre-march stability check.
    ///
    /// With enforcement off an unstable configuration runs anyway and the
    /// scheme diverges; this is the documented failure mode of the explicit
    /// method, left observable for diagnostics.
    pub fn with_enforce_stability(mut self, enforce_stability: bool) -> Self {
        self.enforce_stability = enforce_stability;
        self
    }

    /// Sets the safety factor applied to the stability limit.
    pub fn with_stability_safety_factor(mut self, factor: f64) -> Self {
        self.stability_safety_factor = factor;
        self
    }

    fn validate(&self, instrument: &impl Instrument) -> Result<(), PricingError> {
        instrument.validate()?;
        if !self.s_max.is_finite() || self.s_max <= 0.0 {
            return Err(PricingError::InvalidInput(
                "s_max must be finite and > 0".to_string(),
            ));
        }
        if self.space_steps < 2 || self.time_steps == 0 {
            return Err(PricingError::InvalidInput(
                "grid requires space_steps >= 2 and time_steps >= 1".to_string(),
            ));
        }
        if !self.stability_safety_factor.is_finite() || self.stability_safety_factor <= 0.0 {
            return Err(PricingError::InvalidInput(
                "stability_safety_factor must be finite and > 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Largest stable time step for the current grid and model.
    ///
    /// The explicit update multiplies `V_i` by `1 - dt (sigma^2 S_i^2 / dS^2
    /// + r)`; the march stays stable while that factor keeps its sign at
    /// every interior node, which bounds `dt` by the reciprocal of the worst
    /// coefficient.
    fn stable_dt_limit(&self, model: &Gbm) -> f64 {
        let ds = self.s_max / self.space_steps as f64;
        let sigma = model.sigma();
        let rate_floor = model.mu().max(0.0);

        let mut dt_max = f64::INFINITY;
        for i in 1..self.space_steps {
            let s = i as f64 * ds;
            let coeff = sigma * sigma * s * s / (ds * ds) + rate_floor;
            if coeff > 1.0e-14 {
                dt_max = dt_max.min(self.stability_safety_factor / coeff);
            }
        }
        dt_max
    }

    /// Solves the PDE and returns the full price curve at `t = 0`.
    ///
    /// The model supplies the risk-neutral rate (its drift) and volatility.
    ///
    /// # Errors
    /// - [`PricingError::InvalidInput`] on bad grid parameters or an invalid
    ///   instrument.
    /// - [`PricingError::ConvergenceFailure`] when stability enforcement is
    ///   on and `dt` exceeds the stability limit.
    pub fn calculate_curve<I: Instrument>(
        &self,
        instrument: &I,
        model: &Gbm,
    ) -> Result<PriceCurve, PricingError> {
        self.validate(instrument)?;

        let maturity = instrument.maturity();
        let rate = model.mu();
        let sigma = model.sigma();
        let m = self.space_steps;
        let n = self.time_steps;
        let ds = self.s_max / m as f64;
        let dt = maturity / n as f64;

        let dt_max = self.stable_dt_limit(model);
        if self.enforce_stability && dt > dt_max {
            let min_steps = (maturity / dt_max).ceil() as usize;
            return Err(PricingError::ConvergenceFailure(format!(
                "explicit scheme unstable: dt={dt:.6e} > dt_max={dt_max:.6e}; \
                 increase time_steps to at least {min_steps}",
            )));
        }

        // Terminal condition: the payoff evaluated as if each grid level were
        // the terminal price, through the same contract Monte Carlo uses.
        let mut spots = vec![0.0_f64; m + 1];
        let mut values = vec![0.0_f64; m + 1];
        for i in 0..=m {
            spots[i] = i as f64 * ds;
            values[i] = instrument.payoff(&Path::single(spots[i]));
        }

        // Backward march from maturity to t = 0.
        for j in (0..n).rev() {
            let tau = maturity - j as f64 * dt;
            let mut next = vec![0.0_f64; m + 1];

            for i in 1..m {
                let s = spots[i];
                let delta = (values[i + 1] - values[i - 1]) / (2.0 * ds);
                let gamma = (values[i + 1] - 2.0 * values[i] + values[i - 1]) / (ds * ds);
                let theta = rate * s * delta + 0.5 * sigma * sigma * s * s * gamma
                    - rate * values[i];
                next[i] = dt.mul_add(theta, values[i]);
            }

            next[0] = instrument.lower_boundary(tau);
            next[m] = values[m];
            values = next;
        }

        Ok(PriceCurve { spots, values })
    }

    /// Solves the PDE and reads off the price at the model's initial spot.
    ///
    /// The read-off picks the grid node nearest `S_0` (no interpolation);
    /// with `dS = s_max / space_steps`, that nearest-neighbor snap is the
    /// method's main discretization bias alongside the scheme's own.
    pub fn solve<I: Instrument>(&self, instrument: &I, model: &Gbm) -> Result<f64, PricingError> {
        let curve = self.calculate_curve(instrument, model)?;
        let ds = self.s_max / self.space_steps as f64;
        let index = ((model.s0() / ds).round() as usize).min(self.space_steps);
        Ok(curve.values[index])
    }
}
