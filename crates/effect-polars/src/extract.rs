//! Two-sample extraction from a DataFrame

use effect_core::{Error, Result, TwoSamples};
use polars::prelude::*;
use tracing::debug;

/// Distinct non-null values of the group column, in order of first appearance
///
/// Fails unless there are exactly two.
pub(crate) fn group_labels(df: &DataFrame, group: &str) -> Result<(String, String)> {
    let keys = group_keys(df, group)?;
    let keys = keys
        .str()
        .map_err(|e| Error::invalid_column(group, e))?;

    let [first, second] = two_distinct(group, keys.into_iter().flatten())?;
    Ok((first.to_string(), second.to_string()))
}

/// Split the `dv` column into two samples according to the `group` column
///
/// The first sample holds the rows of the first group value to appear, the
/// second those of the other. Rows with a null group or null `dv` are
/// skipped.
pub(crate) fn two_samples(df: &DataFrame, dv: &str, group: &str) -> Result<TwoSamples> {
    let dv_column = df
        .column(dv)
        .map_err(|_| Error::invalid_column(dv, "not found"))?;

    // Process based on data type
    let values = match dv_column.dtype() {
        DataType::Float64
        | DataType::Float32
        | DataType::Int64
        | DataType::Int32
        | DataType::Int16
        | DataType::Int8
        | DataType::UInt64
        | DataType::UInt32
        | DataType::UInt16
        | DataType::UInt8 => dv_column
            .cast(&DataType::Float64)
            .map_err(|e| Error::invalid_column(dv, e))?,
        dt => {
            return Err(Error::invalid_column(
                dv,
                format!("expected a numeric column, got {:?}", dt),
            ));
        }
    };
    let values = values.f64().map_err(|e| Error::invalid_column(dv, e))?;

    let keys = group_keys(df, group)?;
    let keys = keys
        .str()
        .map_err(|e| Error::invalid_column(group, e))?;

    let [first, second] = two_distinct(group, keys.into_iter().flatten())?;

    let mut x = Vec::new();
    let mut y = Vec::new();
    for (key, value) in keys.into_iter().zip(values.into_iter()) {
        let (Some(key), Some(value)) = (key, value) else {
            continue;
        };
        if key == first {
            x.push(value);
        } else if key == second {
            y.push(value);
        }
    }

    for (label, sample) in [(first, &x), (second, &y)] {
        if sample.is_empty() {
            return Err(Error::invalid_column(
                dv,
                format!("no non-null values for group '{label}'"),
            ));
        }
    }

    debug!(
        dv,
        group,
        first,
        second,
        nx = x.len(),
        ny = y.len(),
        "extracted two samples"
    );
    TwoSamples::new(x, y)
}

fn group_keys(df: &DataFrame, group: &str) -> Result<Column> {
    df.column(group)
        .map_err(|_| Error::invalid_column(group, "not found"))?
        .cast(&DataType::String)
        .map_err(|e| Error::invalid_column(group, e))
}

fn two_distinct<'a>(group: &str, keys: impl Iterator<Item = &'a str>) -> Result<[&'a str; 2]> {
    let mut labels: Vec<&str> = Vec::with_capacity(2);
    for key in keys {
        if !labels.contains(&key) {
            labels.push(key);
            if labels.len() > 2 {
                break;
            }
        }
    }

    match labels.as_slice() {
        [first, second] => Ok([*first, *second]),
        [] | [_] => Err(Error::invalid_column(
            group,
            format!(
                "group must have exactly two unique values, got {}",
                labels.len()
            ),
        )),
        _ => Err(Error::invalid_column(
            group,
            "group must have exactly two unique values, got more than two",
        )),
    }
}
