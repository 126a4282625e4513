//! Common test utilities for effect-polars tests

#![allow(dead_code)]

use polars::prelude::*;

/// DataFrame with a `score` column split by a two-valued `group` column
pub fn two_group_df() -> DataFrame {
    df![
        "score" => [1.0, 2.0, 3.0, 4.0, 5.0, 2.0, 3.0, 4.0, 5.0, 6.0],
        "group" => ["a", "a", "a", "a", "a", "b", "b", "b", "b", "b"],
    ]
    .unwrap()
}

/// Pooled-variance Cohen's d computed directly
pub fn pooled_d(x: &[f64], y: &[f64]) -> f64 {
    let (nx, ny) = (x.len() as f64, y.len() as f64);
    let mx = x.iter().sum::<f64>() / nx;
    let my = y.iter().sum::<f64>() / ny;
    let vx = x.iter().map(|v| (v - mx).powi(2)).sum::<f64>() / (nx - 1.0);
    let vy = y.iter().map(|v| (v - my).powi(2)).sum::<f64>() / (ny - 1.0);
    (mx - my) / (((nx - 1.0) * vx + (ny - 1.0) * vy) / (nx + ny - 2.0)).sqrt()
}
