//! Types for effect size representation

use effect_core::EffectSizeKind;
use std::f64::consts::PI;
use std::fmt;

/// Reason a result was delivered in a different kind than requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Hedges' g was requested without sample sizes; Cohen's d was returned
    HedgesWithoutSampleSizes,
}

impl Fallback {
    /// The kind that was requested but could not be delivered
    pub fn requested(&self) -> EffectSizeKind {
        match self {
            Self::HedgesWithoutSampleSizes => EffectSizeKind::Hedges,
        }
    }
}

impl fmt::Display for Fallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HedgesWithoutSampleSizes => write!(
                f,
                "nx and ny are required to compute Hedges' g; returning Cohen's d instead"
            ),
        }
    }
}

/// An effect size measurement with magnitude and interpretation
#[derive(Debug, Clone, PartialEq)]
pub struct EffectSize {
    /// The effect size magnitude
    pub magnitude: f64,
    /// The kind `magnitude` is expressed in
    pub kind: EffectSizeKind,
    /// Interpretation of the magnitude
    pub interpretation: EffectSizeInterpretation,
    /// Sample sizes (group1, group2)
    pub sample_sizes: Option<(usize, usize)>,
    /// Set when the requested kind could not be delivered
    pub fallback: Option<Fallback>,
}

impl EffectSize {
    /// Create a new effect size
    pub fn new(magnitude: f64, kind: EffectSizeKind, sample_sizes: Option<(usize, usize)>) -> Self {
        let interpretation = EffectSizeInterpretation::from_magnitude(magnitude, kind);

        Self {
            magnitude,
            kind,
            interpretation,
            sample_sizes,
            fallback: None,
        }
    }

    /// Mark this result as a degraded fallback
    pub fn with_fallback(mut self, fallback: Fallback) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Whether the requested kind was replaced by a fallback
    pub fn is_fallback(&self) -> bool {
        self.fallback.is_some()
    }
}

impl fmt::Display for EffectSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {:.3} ({})",
            self.kind.name(),
            self.magnitude,
            self.interpretation
        )?;
        if let Some(fallback) = self.fallback {
            write!(f, " [{fallback}]")?;
        }
        Ok(())
    }
}

/// Interpretation of effect size magnitude following Cohen's conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectSizeInterpretation {
    /// Negligible effect (very small)
    Negligible,
    /// Small effect
    Small,
    /// Medium effect
    Medium,
    /// Large effect
    Large,
}

impl EffectSizeInterpretation {
    /// Get interpretation from magnitude based on effect size kind
    pub fn from_magnitude(magnitude: f64, kind: EffectSizeKind) -> Self {
        match kind {
            EffectSizeKind::Cohen | EffectSizeKind::Hedges => {
                Self::classify(magnitude.abs(), [0.2, 0.5, 0.8])
            }
            EffectSizeKind::R => Self::classify(magnitude.abs(), [0.1, 0.3, 0.5]),
            EffectSizeKind::EtaSquare => Self::classify(magnitude.abs(), [0.01, 0.06, 0.14]),
            EffectSizeKind::OddsRatio => {
                // Judge on the Cohen's d scale
                let d = magnitude.ln().abs() * 3f64.sqrt() / PI;
                Self::classify(d, [0.2, 0.5, 0.8])
            }
            EffectSizeKind::Auc => Self::classify((magnitude - 0.5).abs(), [0.06, 0.14, 0.21]),
        }
    }

    fn classify(value: f64, [small, medium, large]: [f64; 3]) -> Self {
        if value < small {
            Self::Negligible
        } else if value < medium {
            Self::Small
        } else if value < large {
            Self::Medium
        } else {
            Self::Large
        }
    }
}

impl fmt::Display for EffectSizeInterpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Negligible => "negligible",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        };
        write!(f, "{}", s)
    }
}
