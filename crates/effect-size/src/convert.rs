//! Conversion between effect size measures
//!
//! Every conversion pivots through Cohen's d: the input value is first
//! normalized to d, then d is expressed in the requested kind.
//!
//! | kind         | from d                             | to d                        |
//! |--------------|------------------------------------|-----------------------------|
//! | `cohen`      | d                                  | d                           |
//! | `hedges`     | d · (1 − 3 / (4(nx + ny) − 9))     | g / (1 − 3 / (4(nx+ny)−9))  |
//! | `r`          | d / √(d² + a)                      | 2r / √(1 − r²)              |
//! | `eta-square` | (d/2)² / (1 + (d/2)²)              | 2 √(η² / (1 − η²))          |
//! | `odds-ratio` | exp(d π / √3)                      | ln(OR) √3 / π               |
//! | `AUC`        | Φ(d / √2)                          | √2 Φ⁻¹(AUC)                 |
//!
//! where `a = (nx + ny)² / (nx ny)` when sample sizes are known and `4`
//! otherwise.

use crate::types::{EffectSize, Fallback};
use effect_core::{EffectSizeKind, Error, Result};
use statrs::distribution::{ContinuousCDF, Normal};
use std::f64::consts::{PI, SQRT_2};
use tracing::{debug, instrument, warn};

/// Convert an effect size from one kind to another
///
/// `sample_sizes` are the two group sizes `(nx, ny)`. They are required to
/// read or produce Hedges' g and refine the point-biserial r; other kinds
/// ignore them.
///
/// Requesting Hedges' g without sample sizes does not fail: the result holds
/// Cohen's d, its `kind` is [`EffectSizeKind::Cohen`] and its `fallback` is
/// set to [`Fallback::HedgesWithoutSampleSizes`].
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `ef` is not finite, lies outside
/// the domain of `input`, a sample size is zero, or Hedges' g is given as
/// input without sample sizes.
#[instrument(level = "debug")]
pub fn convert(
    ef: f64,
    input: EffectSizeKind,
    output: EffectSizeKind,
    sample_sizes: Option<(usize, usize)>,
) -> Result<EffectSize> {
    if let Some((nx, ny)) = sample_sizes {
        if nx == 0 || ny == 0 {
            return Err(Error::invalid_argument(format!(
                "nx and ny must be positive, got nx={nx}, ny={ny}"
            )));
        }
    }

    let d = to_cohen_d(ef, input, sample_sizes)?;
    debug!(d, "normalized to Cohen's d");
    from_cohen_d(d, output, sample_sizes)
}

/// Normalize an effect size of kind `input` to Cohen's d
pub fn to_cohen_d(
    ef: f64,
    input: EffectSizeKind,
    sample_sizes: Option<(usize, usize)>,
) -> Result<f64> {
    if !ef.is_finite() {
        return Err(Error::invalid_argument(format!(
            "effect size must be finite, got {ef}"
        )));
    }

    let d = match input {
        EffectSizeKind::Cohen => ef,
        EffectSizeKind::Hedges => {
            let (nx, ny) = sample_sizes.ok_or_else(|| {
                Error::invalid_argument("nx and ny are required to convert from Hedges' g")
            })?;
            let j = hedges_correction(nx, ny);
            if j == 0.0 {
                return Err(Error::invalid_argument(format!(
                    "Hedges' correction is zero for nx={nx}, ny={ny}"
                )));
            }
            ef / j
        }
        EffectSizeKind::R => {
            if ef.abs() >= 1.0 {
                return Err(Error::out_of_domain("r", ef, "(-1, 1)"));
            }
            2.0 * ef / (1.0 - ef * ef).sqrt()
        }
        EffectSizeKind::EtaSquare => {
            // The sign of d is lost when squaring
            if !(0.0..1.0).contains(&ef) {
                return Err(Error::out_of_domain("eta-square", ef, "[0, 1)"));
            }
            2.0 * (ef / (1.0 - ef)).sqrt()
        }
        EffectSizeKind::OddsRatio => {
            if ef <= 0.0 {
                return Err(Error::out_of_domain("odds-ratio", ef, "(0, inf)"));
            }
            ef.ln() * 3f64.sqrt() / PI
        }
        EffectSizeKind::Auc => {
            if ef <= 0.0 || ef >= 1.0 {
                return Err(Error::out_of_domain("AUC", ef, "(0, 1)"));
            }
            SQRT_2 * standard_normal()?.inverse_cdf(ef)
        }
    };

    Ok(d)
}

/// Express Cohen's d as an effect size of kind `output`
///
/// Hedges' g is 0 whenever nx + ny = 3, where the correction factor vanishes.
pub fn from_cohen_d(
    d: f64,
    output: EffectSizeKind,
    sample_sizes: Option<(usize, usize)>,
) -> Result<EffectSize> {
    let magnitude = match output {
        EffectSizeKind::Cohen => d,
        EffectSizeKind::Hedges => match sample_sizes {
            Some((nx, ny)) => d * hedges_correction(nx, ny),
            None => {
                let fallback = Fallback::HedgesWithoutSampleSizes;
                warn!("{fallback}");
                return Ok(EffectSize::new(d, EffectSizeKind::Cohen, None).with_fallback(fallback));
            }
        },
        EffectSizeKind::R => {
            let a = match sample_sizes {
                Some((nx, ny)) => {
                    let (nx, ny) = (nx as f64, ny as f64);
                    (nx + ny).powi(2) / (nx * ny)
                }
                None => 4.0,
            };
            d / (d * d + a).sqrt()
        }
        EffectSizeKind::EtaSquare => {
            let half_sq = (d / 2.0).powi(2);
            half_sq / (1.0 + half_sq)
        }
        EffectSizeKind::OddsRatio => (d * PI / 3f64.sqrt()).exp(),
        EffectSizeKind::Auc => standard_normal()?.cdf(d / SQRT_2),
    };

    Ok(EffectSize::new(magnitude, output, sample_sizes))
}

/// Hedges' small-sample bias correction factor `1 - 3 / (4(nx + ny) - 9)`
///
/// The factor is exactly 0 for nx + ny = 3.
pub fn hedges_correction(nx: usize, ny: usize) -> f64 {
    let n = nx as f64 + ny as f64;
    1.0 - 3.0 / (4.0 * n - 9.0)
}

fn standard_normal() -> Result<Normal> {
    Normal::new(0.0, 1.0).map_err(|e| {
        Error::invalid_argument(format!("Failed to create normal distribution: {}", e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    #[test]
    fn test_cohen_to_eta_square() {
        let eta = convert(0.5, EffectSizeKind::Cohen, EffectSizeKind::EtaSquare, None).unwrap();
        // (d/2)^2 / (1 + (d/2)^2) with d/2 = 0.25
        assert_abs_diff_eq!(eta.magnitude, 0.0625 / 1.0625, epsilon = 1e-12);
        assert_eq!(eta.kind, EffectSizeKind::EtaSquare);
    }

    #[test]
    fn test_cohen_to_hedges_with_sizes() {
        let g = convert(0.8, EffectSizeKind::Cohen, EffectSizeKind::Hedges, Some((10, 12))).unwrap();
        assert_abs_diff_eq!(g.magnitude, 0.8 * (1.0 - 3.0 / (4.0 * 22.0 - 9.0)), epsilon = 1e-12);
        assert_eq!(g.kind, EffectSizeKind::Hedges);
        assert!(!g.is_fallback());
    }

    #[test]
    fn test_hedges_without_sizes_falls_back() {
        let g = convert(0.8, EffectSizeKind::Cohen, EffectSizeKind::Hedges, None).unwrap();
        assert_eq!(g.magnitude, 0.8);
        assert_eq!(g.kind, EffectSizeKind::Cohen);
        assert_eq!(g.fallback, Some(Fallback::HedgesWithoutSampleSizes));
    }

    #[test]
    fn test_cohen_to_r() {
        let r = convert(1.0, EffectSizeKind::Cohen, EffectSizeKind::R, None).unwrap();
        assert_abs_diff_eq!(r.magnitude, 1.0 / 5f64.sqrt(), epsilon = 1e-12);

        // Unequal sizes change a
        let r = convert(1.0, EffectSizeKind::Cohen, EffectSizeKind::R, Some((10, 30))).unwrap();
        let a = 40.0f64.powi(2) / 300.0;
        assert_abs_diff_eq!(r.magnitude, 1.0 / (1.0 + a).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_equal_sizes_match_default_r() {
        let with_sizes = convert(0.7, EffectSizeKind::Cohen, EffectSizeKind::R, Some((15, 15))).unwrap();
        let without = convert(0.7, EffectSizeKind::Cohen, EffectSizeKind::R, None).unwrap();
        assert_abs_diff_eq!(with_sizes.magnitude, without.magnitude, epsilon = 1e-12);
    }

    #[test]
    fn test_r_to_cohen() {
        let d = convert(0.5, EffectSizeKind::R, EffectSizeKind::Cohen, None).unwrap();
        assert_abs_diff_eq!(d.magnitude, 1.0 / 0.75f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_cohen_to_odds_ratio() {
        let or = convert(0.5, EffectSizeKind::Cohen, EffectSizeKind::OddsRatio, None).unwrap();
        assert_abs_diff_eq!(or.magnitude, (0.5 * PI / 3f64.sqrt()).exp(), epsilon = 1e-12);

        let or = convert(0.0, EffectSizeKind::Cohen, EffectSizeKind::OddsRatio, None).unwrap();
        assert_abs_diff_eq!(or.magnitude, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_cohen_to_auc() {
        let auc = convert(0.0, EffectSizeKind::Cohen, EffectSizeKind::Auc, None).unwrap();
        assert_abs_diff_eq!(auc.magnitude, 0.5, epsilon = 1e-12);

        // Phi(1) for d = sqrt(2)
        let auc = convert(SQRT_2, EffectSizeKind::Cohen, EffectSizeKind::Auc, None).unwrap();
        assert_abs_diff_eq!(auc.magnitude, 0.841_344_746_068_542_9, epsilon = 1e-9);
    }

    #[test]
    fn test_domain_errors() {
        assert!(convert(1.0, EffectSizeKind::R, EffectSizeKind::Cohen, None).is_err());
        assert!(convert(-1.5, EffectSizeKind::R, EffectSizeKind::Cohen, None).is_err());
        assert!(convert(1.0, EffectSizeKind::EtaSquare, EffectSizeKind::Cohen, None).is_err());
        assert!(convert(-0.1, EffectSizeKind::EtaSquare, EffectSizeKind::Cohen, None).is_err());
        assert!(convert(0.0, EffectSizeKind::OddsRatio, EffectSizeKind::Cohen, None).is_err());
        assert!(convert(1.0, EffectSizeKind::Auc, EffectSizeKind::Cohen, None).is_err());
        assert!(convert(f64::NAN, EffectSizeKind::Cohen, EffectSizeKind::R, None).is_err());
    }

    #[test]
    fn test_hedges_input_requires_sizes() {
        let err = convert(0.5, EffectSizeKind::Hedges, EffectSizeKind::Cohen, None).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("Hedges"));
    }

    #[test]
    fn test_zero_sample_size_rejected() {
        assert!(convert(0.5, EffectSizeKind::Cohen, EffectSizeKind::R, Some((0, 10))).is_err());
    }

    #[test]
    fn test_eta_square_loses_sign() {
        let eta = convert(-0.8, EffectSizeKind::Cohen, EffectSizeKind::EtaSquare, None).unwrap();
        let d = convert(eta.magnitude, EffectSizeKind::EtaSquare, EffectSizeKind::Cohen, None).unwrap();
        assert_relative_eq!(d.magnitude, 0.8, epsilon = 1e-10);
    }

    #[test]
    fn test_hedges_correction() {
        assert!(hedges_correction(5, 5) < 1.0);
        assert!(hedges_correction(5, 5) > 0.9);
        assert!(hedges_correction(50, 50) > 0.99);
        assert_eq!(hedges_correction(1, 2), 0.0);
    }

    #[test]
    fn test_hedges_output_is_zero_for_three_observations() {
        let g = convert(0.8, EffectSizeKind::Cohen, EffectSizeKind::Hedges, Some((1, 2))).unwrap();
        assert_eq!(g.magnitude, 0.0);
        assert!(!g.is_fallback());

        // The inverse direction cannot divide by the vanishing factor
        assert!(convert(0.8, EffectSizeKind::Hedges, EffectSizeKind::Cohen, Some((1, 2))).is_err());
    }

    #[test]
    fn test_huge_sample_sizes_do_not_overflow() {
        let sizes = Some((usize::MAX, usize::MAX));
        let g = convert(0.5, EffectSizeKind::Cohen, EffectSizeKind::Hedges, sizes).unwrap();
        assert!(g.magnitude.is_finite());
        assert_abs_diff_eq!(g.magnitude, 0.5, epsilon = 1e-12);

        let d = convert(0.5, EffectSizeKind::Hedges, EffectSizeKind::Cohen, sizes).unwrap();
        assert_abs_diff_eq!(d.magnitude, 0.5, epsilon = 1e-12);
    }

    proptest! {
        #[test]
        fn prop_cohen_identity(d in -10.0f64..10.0) {
            let out = convert(d, EffectSizeKind::Cohen, EffectSizeKind::Cohen, None).unwrap();
            prop_assert_eq!(out.magnitude, d);
        }

        #[test]
        fn prop_r_round_trip(r in -0.99f64..0.99) {
            let d = convert(r, EffectSizeKind::R, EffectSizeKind::Cohen, None).unwrap();
            let back = convert(d.magnitude, EffectSizeKind::Cohen, EffectSizeKind::R, None).unwrap();
            prop_assert!((back.magnitude - r).abs() < 1e-9);
        }

        #[test]
        fn prop_kind_round_trip(
            d in -3.0f64..3.0,
            nx in 2usize..50,
            ny in 2usize..50,
        ) {
            for kind in EffectSizeKind::ALL {
                // Eta-square drops the sign of d
                let d = if kind == EffectSizeKind::EtaSquare { d.abs() } else { d };
                let sizes = Some((nx, ny));
                let there = convert(d, EffectSizeKind::Cohen, kind, sizes).unwrap();
                let back = convert(there.magnitude, kind, EffectSizeKind::Cohen, sizes).unwrap();
                // r is read back with the fixed a = 4 form
                if kind != EffectSizeKind::R || nx == ny {
                    prop_assert!((back.magnitude - d).abs() < 1e-6, "{} failed: {} vs {}", kind, back.magnitude, d);
                }
            }
        }
    }
}
