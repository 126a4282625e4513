//! Recognized effect size kinds

use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// The six effect size measures that can be computed or converted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectSizeKind {
    /// Hedges' g, bias-corrected Cohen's d
    Hedges,
    /// Cohen's d, standardized mean difference
    Cohen,
    /// Point-biserial correlation
    R,
    /// Proportion of variance explained
    EtaSquare,
    /// Odds ratio
    OddsRatio,
    /// Area under the ROC curve
    Auc,
}

impl EffectSizeKind {
    /// All recognized kinds, in label order
    pub const ALL: [EffectSizeKind; 6] = [
        Self::Hedges,
        Self::Cohen,
        Self::R,
        Self::EtaSquare,
        Self::OddsRatio,
        Self::Auc,
    ];

    /// Canonical label of the kind
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hedges => "hedges",
            Self::Cohen => "cohen",
            Self::R => "r",
            Self::EtaSquare => "eta-square",
            Self::OddsRatio => "odds-ratio",
            Self::Auc => "AUC",
        }
    }

    /// Human readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hedges => "Hedges' g",
            Self::Cohen => "Cohen's d",
            Self::R => "Point-biserial r",
            Self::EtaSquare => "Eta-square",
            Self::OddsRatio => "Odds ratio",
            Self::Auc => "AUC",
        }
    }

    /// Check whether `label` names a recognized effect size kind.
    ///
    /// Labels are case-sensitive.
    pub fn is_valid(label: &str) -> bool {
        Self::ALL.iter().any(|kind| kind.label() == label)
    }
}

impl FromStr for EffectSizeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.label() == s)
            .ok_or_else(|| Error::unknown_kind(s))
    }
}

impl fmt::Display for EffectSizeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Anything that can name an effect size kind
///
/// Lets public entry points take either a typed [`EffectSizeKind`] or a
/// label, validating labels at the call boundary.
pub trait IntoKind {
    fn into_kind(self) -> Result<EffectSizeKind>;
}

impl IntoKind for EffectSizeKind {
    fn into_kind(self) -> Result<EffectSizeKind> {
        Ok(self)
    }
}

impl IntoKind for &str {
    fn into_kind(self) -> Result<EffectSizeKind> {
        self.parse()
    }
}

impl IntoKind for String {
    fn into_kind(self) -> Result<EffectSizeKind> {
        self.parse()
    }
}

impl IntoKind for &String {
    fn into_kind(self) -> Result<EffectSizeKind> {
        self.parse()
    }
}
