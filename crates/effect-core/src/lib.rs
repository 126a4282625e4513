//! Core types for effect size analysis
//!
//! This crate provides the pieces shared by every effect-stats crate:
//!
//! - [`Error`] / [`Result`]: the single error kind, an invalid argument
//! - [`EffectSizeKind`]: the six recognized effect size measures and the
//!   label check used to validate user input
//! - [`TwoSamples`]: two validated samples with sizes and degrees of freedom
//! - [`Numeric`]: primitive element types accepted as sample data
//!
//! # Example
//!
//! ```rust
//! use effect_core::{EffectSizeKind, TwoSamples};
//!
//! assert!(EffectSizeKind::is_valid("eta-square"));
//! assert!(!EffectSizeKind::is_valid("bogus"));
//!
//! let samples = TwoSamples::from_slices(&[1.0, 2.0, 3.0], &[2, 3, 4]).unwrap();
//! assert_eq!(samples.dof(), 4);
//! ```

pub mod error;
pub mod kind;
pub mod numeric;
pub mod samples;

pub use error::{Error, Result};
pub use kind::{EffectSizeKind, IntoKind};
pub use numeric::Numeric;
pub use samples::TwoSamples;
