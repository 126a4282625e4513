//! Extension trait for effect sizes on Polars DataFrames

use crate::extract;
use effect_core::{IntoKind, Result, TwoSamples};
use effect_size::EffectSize;
use polars::prelude::*;

/// Extension trait for between-group effect sizes on Polars DataFrames
pub trait EffectSizeExt {
    /// The two group values, in order of first appearance
    ///
    /// # Arguments
    /// * `group` - Column containing group labels
    fn group_labels(&self, group: &str) -> Result<(String, String)>;

    /// Split a value column into two samples by a two-valued group column
    ///
    /// # Arguments
    /// * `dv` - Column containing the dependent variable
    /// * `group` - Column containing group labels
    ///
    /// # Returns
    /// The samples for the first and second group value to appear
    fn two_samples(&self, dv: &str, group: &str) -> Result<TwoSamples>;

    /// Compute an effect size between the two groups
    ///
    /// # Arguments
    /// * `dv` - Column containing values to compare
    /// * `group` - Column containing group labels
    /// * `kind` - Desired effect size kind, typed or as a label
    fn effect_size<K: IntoKind>(&self, dv: &str, group: &str, kind: K) -> Result<EffectSize>;
}

impl EffectSizeExt for DataFrame {
    fn group_labels(&self, group: &str) -> Result<(String, String)> {
        extract::group_labels(self, group)
    }

    fn two_samples(&self, dv: &str, group: &str) -> Result<TwoSamples> {
        extract::two_samples(self, dv, group)
    }

    fn effect_size<K: IntoKind>(&self, dv: &str, group: &str, kind: K) -> Result<EffectSize> {
        let kind = kind.into_kind()?;
        let samples = extract::two_samples(self, dv, group)?;
        ::effect_size::compute_effsize(&samples, kind)
    }
}
