//! Two-sample data extracted for a between-group comparison

use crate::numeric::{mean, sample_variance, Numeric};
use crate::{Error, Result};

/// Two independent samples ready for an effect size computation
///
/// Construction guarantees both samples are non-empty and that the pooled
/// degrees of freedom are positive.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoSamples {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl TwoSamples {
    /// Build from two raw numeric sequences
    ///
    /// Accepts slices of any [`Numeric`] type, so arrays and vectors of
    /// floats or integers can be passed directly.
    pub fn from_slices<X: Numeric, Y: Numeric>(x: &[X], y: &[Y]) -> Result<Self> {
        Self::new(
            x.iter().map(|&v| v.to_float()).collect(),
            y.iter().map(|&v| v.to_float()).collect(),
        )
    }

    /// Build from owned `f64` samples
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        if x.is_empty() {
            return Err(Error::empty_sample("x"));
        }
        if y.is_empty() {
            return Err(Error::empty_sample("y"));
        }
        if x.len() + y.len() <= 2 {
            return Err(Error::insufficient_dof(x.len(), y.len()));
        }
        Ok(Self { x, y })
    }

    /// First sample
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Second sample
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Size of the first sample
    pub fn nx(&self) -> usize {
        self.x.len()
    }

    /// Size of the second sample
    pub fn ny(&self) -> usize {
        self.y.len()
    }

    /// Both sample sizes as `(nx, ny)`
    pub fn sizes(&self) -> (usize, usize) {
        (self.nx(), self.ny())
    }

    /// Combined degrees of freedom, `nx + ny - 2`
    pub fn dof(&self) -> usize {
        self.nx() + self.ny() - 2
    }

    /// Difference of the sample means, `mean(x) - mean(y)`
    pub fn mean_difference(&self) -> f64 {
        mean(&self.x) - mean(&self.y)
    }

    /// Pooled variance `((nx-1)·var(x) + (ny-1)·var(y)) / dof`
    ///
    /// A sample with a single observation contributes nothing to the pooled
    /// sum of squares.
    pub fn pooled_variance(&self) -> f64 {
        let ss = |values: &[f64]| {
            if values.len() < 2 {
                0.0
            } else {
                (values.len() - 1) as f64 * sample_variance(values)
            }
        };
        (ss(&self.x) + ss(&self.y)) / self.dof() as f64
    }
}
