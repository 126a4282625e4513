//! Polars integration for effect size analysis
//!
//! This crate reads two-group comparisons out of Polars DataFrames through a
//! single extension trait. A dependent-variable column is split into two
//! samples by a grouping column that must hold exactly two distinct values.
//!
//! # Example
//!
//! ```rust
//! use polars::prelude::*;
//! use effect_polars::EffectSizeExt;
//!
//! let df = df![
//!     "height" => [172.0, 168.0, 181.0, 175.0, 160.0, 165.0],
//!     "country" => ["fr", "fr", "fr", "nl", "nl", "nl"],
//! ]
//! .unwrap();
//!
//! let d = df.effect_size("height", "country", "cohen").unwrap();
//! println!("{d}");
//! ```

mod extract;
mod traits;

pub use traits::*;

pub use effect_core::{Error, Result};
