//! Effect size computation and conversion
//!
//! This crate computes effect sizes for two-group comparisons and converts
//! between six common measures. Cohen's d is the pivot: every measure is
//! derived from d, and every supported input is normalized to d first.
//!
//! # Supported Effect Sizes
//!
//! - **Cohen's d** (`cohen`): Standardized mean difference
//! - **Hedges' g** (`hedges`): Bias-corrected Cohen's d
//! - **Point-biserial correlation** (`r`)
//! - **Eta-squared** (`eta-square`): Proportion of variance explained
//! - **Odds ratio** (`odds-ratio`)
//! - **Area under the ROC curve** (`AUC`)
//!
//! # Examples
//!
//! ## Cohen's d from two samples
//!
//! ```rust
//! use effect_core::{EffectSizeKind, TwoSamples};
//! use effect_size::compute_effsize;
//!
//! let samples = TwoSamples::from_slices(&[1.0, 2.0, 3.0, 4.0, 5.0], &[3.0, 4.0, 5.0, 6.0, 7.0]).unwrap();
//! let d = compute_effsize(&samples, EffectSizeKind::Cohen).unwrap();
//! println!("Cohen's d: {:.3}", d.magnitude);
//! ```
//!
//! ## Converting between measures
//!
//! ```rust
//! use effect_core::EffectSizeKind;
//! use effect_size::convert;
//!
//! let eta = convert(0.5, EffectSizeKind::Cohen, EffectSizeKind::EtaSquare, None).unwrap();
//! assert!((eta.magnitude - 0.0625 / 1.0625).abs() < 1e-12);
//!
//! // Hedges' g needs the sample sizes; without them Cohen's d comes back flagged
//! let g = convert(0.5, EffectSizeKind::Cohen, EffectSizeKind::Hedges, None).unwrap();
//! assert!(g.is_fallback());
//! ```

mod cohen_d;
mod convert;
mod types;

// Re-exports
pub use cohen_d::{compute_effsize, compute_effsize_from_t, CohenD};
pub use convert::{convert, from_cohen_d, hedges_correction, to_cohen_d};
pub use types::{EffectSize, EffectSizeInterpretation, Fallback};
