//! Effect size computation and conversion for two-group comparisons
//!
//! This crate is the public face of the effect-stats workspace. It offers
//! three entry points:
//!
//! - [`convert_effsize`]: convert an effect size between kinds
//! - [`compute_effsize`]: compute an effect size from a DataFrame or from two
//!   raw vectors
//! - [`compute_effsize_from_t`]: compute an effect size from a T-statistic
//!
//! Effect size kinds may be passed as [`EffectSizeKind`] values or as their
//! labels (`"hedges"`, `"cohen"`, `"r"`, `"eta-square"`, `"odds-ratio"`,
//! `"AUC"`); an unrecognized label is rejected with
//! [`Error::InvalidArgument`].
//!
//! # Example
//!
//! ```rust
//! use effect_stats::{compute_effsize, compute_effsize_from_t, convert_effsize, SampleInput};
//!
//! let x = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = [2.0, 3.0, 4.0, 5.0, 6.0];
//! let d = compute_effsize(SampleInput::vectors(&x, &y), "cohen").unwrap();
//!
//! let r = convert_effsize(d.magnitude, "cohen", "r", Some((5, 5))).unwrap();
//! let from_t = compute_effsize_from_t(2.0, 10, 10, "AUC").unwrap();
//! println!("{d}, {r}, {from_t}");
//! ```

use polars::prelude::DataFrame;
use tracing::instrument;

pub use effect_core::{EffectSizeKind, Error, IntoKind, Numeric, Result, TwoSamples};
pub use effect_polars::EffectSizeExt;
pub use effect_size::{CohenD, EffectSize, EffectSizeInterpretation, Fallback};

/// Where the two samples of a comparison come from
#[derive(Debug, Clone, Copy)]
pub enum SampleInput<'a, X: Numeric = f64, Y: Numeric = f64> {
    /// A dependent-variable column split by a two-valued group column
    Table {
        dv: &'a str,
        group: &'a str,
        data: &'a DataFrame,
    },
    /// Two raw numeric sequences
    Vectors { x: &'a [X], y: &'a [Y] },
}

impl<'a> SampleInput<'a> {
    /// Read the samples from columns of a DataFrame
    pub fn table(dv: &'a str, group: &'a str, data: &'a DataFrame) -> Self {
        Self::Table { dv, group, data }
    }
}

impl<'a, X: Numeric, Y: Numeric> SampleInput<'a, X, Y> {
    /// Use two raw numeric sequences
    pub fn vectors(x: &'a [X], y: &'a [Y]) -> Self {
        Self::Vectors { x, y }
    }

    /// Extract the two samples with their sizes and degrees of freedom
    pub fn two_samples(&self) -> Result<TwoSamples> {
        match *self {
            Self::Table { dv, group, data } => data.two_samples(dv, group),
            Self::Vectors { x, y } => TwoSamples::from_slices(x, y),
        }
    }
}

/// Convert an effect size between kinds
///
/// `sample_sizes` holds `(nx, ny)`. They are needed to produce or read
/// Hedges' g and refine the point-biserial r. Requesting Hedges' g without
/// them returns Cohen's d with [`EffectSize::fallback`] set.
pub fn convert_effsize<I: IntoKind, O: IntoKind>(
    ef: f64,
    input_type: I,
    output_type: O,
    sample_sizes: Option<(usize, usize)>,
) -> Result<EffectSize> {
    let input = input_type.into_kind()?;
    let output = output_type.into_kind()?;
    effect_size::convert(ef, input, output, sample_sizes)
}

/// Compute an effect size from a DataFrame or from two raw vectors
///
/// The unbiased Cohen's d is computed from the pooled sample variance and
/// converted to `eftype`.
#[instrument(level = "debug", skip(input, eftype))]
pub fn compute_effsize<X: Numeric, Y: Numeric, K: IntoKind>(
    input: SampleInput<'_, X, Y>,
    eftype: K,
) -> Result<EffectSize> {
    let eftype = eftype.into_kind()?;
    let samples = input.two_samples()?;
    effect_size::compute_effsize(&samples, eftype)
}

/// Compute an effect size from a two-sample T-statistic and the group sizes
pub fn compute_effsize_from_t<K: IntoKind>(
    t: f64,
    nx: usize,
    ny: usize,
    eftype: K,
) -> Result<EffectSize> {
    let eftype = eftype.into_kind()?;
    effect_size::compute_effsize_from_t(t, nx, ny, eftype)
}
