//! Numeric element types accepted as sample data
//!
//! Samples may be stored as any primitive numeric type; all arithmetic is
//! done in `f64`.

use num_traits::AsPrimitive;
use std::fmt::Debug;

/// A primitive numeric type that can be used as a sample element
pub trait Numeric: Copy + Debug + Send + Sync + AsPrimitive<f64> + 'static {
    /// Convert to the `f64` used for computation
    fn to_float(self) -> f64 {
        self.as_()
    }
}

macro_rules! impl_numeric {
    ($($t:ty),*) => {
        $(impl Numeric for $t {})*
    };
}

impl_numeric!(f64, f32, i64, i32, i16, i8, u64, u32, u16, u8);

/// Arithmetic mean of a non-empty slice
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Unbiased sample variance (n - 1 denominator)
///
/// Returns `NaN` for fewer than two observations.
pub fn sample_variance(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return f64::NAN;
    }
    let m = mean(values);
    values.iter().map(|&x| (x - m).powi(2)).sum::<f64>() / (n - 1) as f64
}
