//! Cohen's d effect size
//!
//! Cohen's d is a standardized effect size measure that expresses the
//! difference between two group means in terms of the pooled standard
//! deviation. It is the pivot every other measure is converted through.

use crate::convert::convert;
use crate::EffectSize;
use effect_core::{EffectSizeKind, Error, Result, TwoSamples};
use tracing::{debug, instrument};

/// Cohen's d effect size estimator
///
/// The unbiased Cohen's d is calculated as:
/// d = (x̄ - ȳ) / s_pooled
///
/// where s_pooled² = ((nx - 1)·s²x + (ny - 1)·s²y) / (nx + ny - 2) and the
/// sample variances use the n - 1 denominator.
#[derive(Debug, Clone, Copy, Default)]
pub struct CohenD;

impl CohenD {
    /// Create a new Cohen's d estimator
    pub fn new() -> Self {
        Self
    }

    /// Compute Cohen's d from two samples
    ///
    /// # Errors
    ///
    /// Fails when the pooled standard deviation is zero or not finite,
    /// as d is undefined in that case.
    pub fn compute(&self, samples: &TwoSamples) -> Result<EffectSize> {
        let pooled_sd = samples.pooled_variance().sqrt();
        if !pooled_sd.is_finite() || pooled_sd <= 0.0 {
            return Err(Error::invalid_argument(format!(
                "pooled standard deviation must be positive, got {pooled_sd}"
            )));
        }

        let d = samples.mean_difference() / pooled_sd;

        Ok(EffectSize::new(
            d,
            EffectSizeKind::Cohen,
            Some(samples.sizes()),
        ))
    }

    /// Recover Cohen's d from an independent two-sample T-statistic
    ///
    /// d = T·(nx + ny) / √((nx + ny - 2)·nx·ny)
    pub fn from_t_statistic(&self, t: f64, nx: usize, ny: usize) -> Result<EffectSize> {
        if !t.is_finite() {
            return Err(Error::invalid_argument(format!(
                "T-value must be finite, got {t}"
            )));
        }
        if nx == 0 || ny == 0 {
            return Err(Error::invalid_argument(format!(
                "nx and ny must be positive, got nx={nx}, ny={ny}"
            )));
        }
        let total = nx.checked_add(ny).ok_or_else(|| {
            Error::invalid_argument(format!("nx + ny overflows, got nx={nx}, ny={ny}"))
        })?;
        if total <= 2 {
            return Err(Error::insufficient_dof(nx, ny));
        }

        let n = total as f64;
        let d = t * n / ((n - 2.0) * (nx as f64) * (ny as f64)).sqrt();

        Ok(EffectSize::new(d, EffectSizeKind::Cohen, Some((nx, ny))))
    }
}

/// Compute an effect size of kind `output` from two samples
#[instrument(level = "debug", skip(samples), fields(nx = samples.nx(), ny = samples.ny()))]
pub fn compute_effsize(samples: &TwoSamples, output: EffectSizeKind) -> Result<EffectSize> {
    let d = CohenD::new().compute(samples)?;
    debug!(d = d.magnitude, "computed Cohen's d");

    if output == EffectSizeKind::Cohen {
        return Ok(d);
    }
    convert(d.magnitude, EffectSizeKind::Cohen, output, d.sample_sizes)
}

/// Compute an effect size of kind `output` from a T-statistic
#[instrument(level = "debug")]
pub fn compute_effsize_from_t(
    t: f64,
    nx: usize,
    ny: usize,
    output: EffectSizeKind,
) -> Result<EffectSize> {
    let d = CohenD::new().from_t_statistic(t, nx, ny)?;
    debug!(d = d.magnitude, "computed Cohen's d from T");

    convert(d.magnitude, EffectSizeKind::Cohen, output, d.sample_sizes)
}
