//! Closed-form Black-Scholes prices and Greeks for European vanilla options.
//!
//! These formulas are the ground truth the numerical engines are
//! cross-checked against. Reference: Hull (11th ed.), Ch. 15 and 19.

use crate::core::{Greeks, OptionType};
use crate::math::{normal_cdf, normal_pdf};

fn d1_d2(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> (f64, f64) {
    let sig_sqrt_t = sigma * t.sqrt();
    let d1 = ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / sig_sqrt_t;
    (d1, d1 - sig_sqrt_t)
}

/// Black-Scholes price of a European vanilla option.
///
/// Degenerate inputs (`t <= 0` or `sigma <= 0`) price at intrinsic value.
///
/// # Examples
/// ```
/// use pathwise::core::OptionType;
/// use pathwise::engines::analytic::black_scholes_price;
///
/// let call = black_scholes_price(OptionType::Call, 100.0, 100.0, 0.05, 0.20, 1.0);
/// assert!(call > 10.0 && call < 11.0);
/// ```
pub fn black_scholes_price(
    option_type: OptionType,
    s: f64,
    k: f64,
    r: f64,
    sigma: f64,
    t: f64,
) -> f64 {
    if t <= 0.0 || sigma <= 0.0 {
        return match option_type {
            OptionType::Call => (s - k).max(0.0),
            OptionType::Put => (k - s).max(0.0),
        };
    }

    let (d1, d2) = d1_d2(s, k, r, sigma, t);
    let df = (-r * t).exp();

    match option_type {
        OptionType::Call => s * normal_cdf(d1) - k * df * normal_cdf(d2),
        OptionType::Put => k * df * normal_cdf(-d2) - s * normal_cdf(-d1),
    }
}

/// Closed-form Delta, Gamma, and Vega of a European vanilla option.
///
/// Gamma and Vega are identical for calls and puts. Degenerate inputs return
/// zeroed sensitivities.
pub fn black_scholes_greeks(
    option_type: OptionType,
    s: f64,
    k: f64,
    r: f64,
    sigma: f64,
    t: f64,
) -> Greeks {
    if s <= 0.0 || k <= 0.0 || t <= 0.0 || sigma <= 0.0 {
        return Greeks {
            delta: 0.0,
            gamma: 0.0,
            vega: 0.0,
        };
    }

    let (d1, _) = d1_d2(s, k, r, sigma, t);
    let sqrt_t = t.sqrt();

    let delta = match option_type {
        OptionType::Call => normal_cdf(d1),
        OptionType::Put => normal_cdf(d1) - 1.0,
    };
    let gamma = normal_pdf(d1) / (s * sigma * sqrt_t);
    let vega = s * sqrt_t * normal_pdf(d1);

    Greeks { delta, gamma, vega }
}
