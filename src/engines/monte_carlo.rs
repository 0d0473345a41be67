//! Monte Carlo pricing engine.
//!
//! Prices an instrument by repeated path simulation, with a standard
//! estimator and an antithetic-variates estimator. Reference: Glasserman
//! (2004), Ch. 4 for estimator variance and the paired antithetic design.
//!
//! Every sample draws from its own seeded substream, so a given
//! configuration prices identically whether the per-path loop runs
//! sequentially or, with the `parallel` feature, fanned out across rayon
//! workers. An antithetic pair always lives on one substream: both legs must
//! consume the same normal draws.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::{PricingError, PricingResult};
use crate::instruments::Instrument;
use crate::math::{stream_seed, NormalSource};
use crate::models::{AntitheticModel, AssetModel};

/// Monte Carlo pricing engine configuration.
///
/// # Examples
/// ```
/// use pathwise::engines::MonteCarloEngine;
/// use pathwise::instruments::EuropeanCall;
/// use pathwise::models::Gbm;
///
/// let call = EuropeanCall::new(1.0, 0.05, 100.0);
/// let model = Gbm::new(100.0, 50, 0.05, 0.20).unwrap();
/// let result = MonteCarloEngine::new(20_000, 42).price(&call, &model).unwrap();
/// assert!(result.standard_error > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct MonteCarloEngine {
    /// Number of simulated paths.
    pub num_paths: usize,
    /// Base seed for the per-sample substreams.
    pub seed: u64,
}

impl MonteCarloEngine {
    /// Creates an engine pricing with `num_paths` simulations.
    pub fn new(num_paths: usize, seed: u64) -> Self {
        Self { num_paths, seed }
    }

    /// Replaces the base seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Standard estimator.
    ///
    /// Simulates `num_paths` independent paths, averages the payoffs, and
    /// discounts. The standard error uses the unbiased (N-1) sample variance
    /// computed in two passes (mean first, then squared deviations) so large
    /// payoff sums do not cancel catastrophically. The realized payoff vector
    /// is retained in the result for diagnostics.
    ///
    /// # Errors
    /// - [`PricingError::InvalidInput`] when `num_paths < 2` (the sample
    ///   variance is undefined at N = 1) or the instrument is invalid.
    pub fn price<I, M>(&self, instrument: &I, model: &M) -> Result<PricingResult, PricingError>
    where
        I: Instrument + Sync,
        M: AssetModel + Sync,
    {
        instrument.validate()?;
        if self.num_paths < 2 {
            return Err(PricingError::InvalidInput(
                "standard estimator requires num_paths >= 2".to_string(),
            ));
        }

        let maturity = instrument.maturity();
        let base_seed = self.seed;
        let simulate = |i: usize| {
            let mut source = NormalSource::with_seed(stream_seed(base_seed, i));
            let path = model.generate_path(&mut source, maturity);
            instrument.payoff(&path)
        };

        #[cfg(feature = "parallel")]
        let payoffs: Vec<f64> = (0..self.num_paths).into_par_iter().map(simulate).collect();
        #[cfg(not(feature = "parallel"))]
        let payoffs: Vec<f64> = (0..self.num_paths).map(simulate).collect();

        let (price, standard_error) =
            discounted_mean_and_error(&payoffs, instrument.discount_factor());

        Ok(PricingResult {
            price,
            standard_error,
            payoffs: Some(payoffs),
        })
    }

    /// Antithetic-variates estimator.
    ///
    /// Simulates `num_paths / 2` antithetic pairs and treats each pair
    /// average as one sample. The standard error comes from the variance of
    /// the pair averages with the (P-1) denominator: the raw payoffs are
    /// negatively correlated within a pair, so treating them as N independent
    /// samples would misstate the interval.
    ///
    /// # Errors
    /// - [`PricingError::InvalidInput`] when `num_paths` is odd (rounding to
    ///   even is the caller's responsibility), when fewer than two pairs are
    ///   requested, or the instrument is invalid.
    pub fn price_antithetic<I, M>(
        &self,
        instrument: &I,
        model: &M,
    ) -> Result<PricingResult, PricingError>
    where
        I: Instrument + Sync,
        M: AntitheticModel + Sync,
    {
        instrument.validate()?;
        if self.num_paths % 2 != 0 {
            return Err(PricingError::InvalidInput(format!(
                "antithetic estimator requires an even num_paths, got {}",
                self.num_paths
            )));
        }
        let num_pairs = self.num_paths / 2;
        if num_pairs < 2 {
            return Err(PricingError::InvalidInput(
                "antithetic estimator requires at least two pairs (num_paths >= 4)".to_string(),
            ));
        }

        let maturity = instrument.maturity();
        let base_seed = self.seed;
        let simulate_pair = |j: usize| {
            let mut source = NormalSource::with_seed(stream_seed(base_seed, j));
            let (path, mirror) = model.generate_antithetic_pair(&mut source, maturity);
            0.5 * (instrument.payoff(&path) + instrument.payoff(&mirror))
        };

        #[cfg(feature = "parallel")]
        let pair_averages: Vec<f64> = (0..num_pairs).into_par_iter().map(simulate_pair).collect();
        #[cfg(not(feature = "parallel"))]
        let pair_averages: Vec<f64> = (0..num_pairs).map(simulate_pair).collect();

        let (price, standard_error) =
            discounted_mean_and_error(&pair_averages, instrument.discount_factor());

        Ok(PricingResult {
            price,
            standard_error,
            payoffs: None,
        })
    }
}

/// Discounted sample mean and standard error of the mean over `samples`.
///
/// Two-pass variance with the unbiased (n-1) denominator; `samples.len() >= 2`
/// is the caller's contract.
fn discounted_mean_and_error(samples: &[f64], discount_factor: f64) -> (f64, f64) {
    let n = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / n;
    let sum_sq_dev = samples
        .iter()
        .map(|x| {
            let dev = x - mean;
            dev * dev
        })
        .sum::<f64>();
    let variance = sum_sq_dev / (n - 1.0);

    (
        discount_factor * mean,
        discount_factor * (variance / n).sqrt(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Path;
    use crate::instruments::EuropeanCall;
    use crate::models::Gbm;
    use approx::assert_relative_eq;

    /// Contract paying the terminal log-price; linear in the accumulated
    /// normal shocks, so every antithetic pair average is the same constant.
    #[derive(Debug)]
    struct LogContract {
        maturity: f64,
        rate: f64,
    }

    impl Instrument for LogContract {
        fn maturity(&self) -> f64 {
            self.maturity
        }

        fn rate(&self) -> f64 {
            self.rate
        }

        fn payoff(&self, path: &Path) -> f64 {
            path.final_price().ln()
        }

        fn validate(&self) -> Result<(), PricingError> {
            Ok(())
        }
    }

    fn setup() -> (EuropeanCall, Gbm) {
        let call = EuropeanCall::new(1.0, 0.05, 100.0);
        let model = Gbm::new(100.0, 50, 0.05, 0.20).unwrap();
        (call, model)
    }

    #[test]
    fn same_seed_reproduces_the_result() {
        let (call, model) = setup();
        let a = MonteCarloEngine::new(5_000, 42).price(&call, &model).unwrap();
        let b = MonteCarloEngine::new(5_000, 42).price(&call, &model).unwrap();
        assert_eq!(a.price, b.price);
        assert_eq!(a.standard_error, b.standard_error);
    }

    #[test]
    fn single_path_is_rejected() {
        let (call, model) = setup();
        let err = MonteCarloEngine::new(1, 42).price(&call, &model).unwrap_err();
        assert!(matches!(err, PricingError::InvalidInput(_)));
    }

    #[test]
    fn odd_path_count_is_rejected_for_antithetic() {
        let (call, model) = setup();
        let err = MonteCarloEngine::new(10_001, 42)
            .price_antithetic(&call, &model)
            .unwrap_err();
        assert!(matches!(err, PricingError::InvalidInput(_)));
    }

    #[test]
    fn standard_result_retains_payoffs_antithetic_does_not() {
        let (call, model) = setup();
        let standard = MonteCarloEngine::new(2_000, 42).price(&call, &model).unwrap();
        let antithetic = MonteCarloEngine::new(2_000, 42)
            .price_antithetic(&call, &model)
            .unwrap();

        assert_eq!(standard.payoffs.as_ref().map(Vec::len), Some(2_000));
        assert!(antithetic.payoffs.is_none());
        assert!(standard.standard_error >= 0.0);
        assert!(antithetic.standard_error >= 0.0);
    }

    #[test]
    fn pair_average_of_a_log_linear_payoff_has_zero_variance() {
        let contract = LogContract {
            maturity: 1.0,
            rate: 0.05,
        };
        let model = Gbm::new(100.0, 16, 0.05, 0.20).unwrap();
        let result = MonteCarloEngine::new(200, 42)
            .price_antithetic(&contract, &model)
            .unwrap();

        // Each pair average collapses to ln(S0) + (mu - sigma^2/2) T exactly.
        let expected = (-0.05_f64).exp() * (100.0_f64.ln() + (0.05 - 0.5 * 0.04));
        assert_relative_eq!(result.price, expected, epsilon = 1e-10);
        assert!(result.standard_error < 1e-12);
    }

    #[test]
    fn estimators_agree_within_joint_error() {
        let (call, model) = setup();
        let standard = MonteCarloEngine::new(40_000, 7).price(&call, &model).unwrap();
        let antithetic = MonteCarloEngine::new(40_000, 11)
            .price_antithetic(&call, &model)
            .unwrap();

        let joint = standard.standard_error.hypot(antithetic.standard_error);
        assert!((standard.price - antithetic.price).abs() < 5.0 * joint);
    }
}
