//! Tabular comparison oracle built on polars.
//!
//! Rounds each coordinate column, casts it to text, concatenates `"x y"`
//! and joins per class value. Rounding and text conversion are separate
//! steps, so trailing zeros are lost (`1.0` instead of `1.00`), and grouping
//! is by value, so non-adjacent runs of one class merge. Both differences
//! from the core encoder are expected; callers only count them.

use polars::prelude::*;

/// Tabular encoding; groups appear in first-occurrence order.
pub fn tabular(x: &[f64], y: &[f64], classes: &[i64], precision: u32) -> PolarsResult<Vec<String>> {
    let df = df![
        "x" => x,
        "y" => y,
        "classes" => classes,
    ]?;
    let out = df
        .lazy()
        .with_column(
            concat_str(
                [
                    col("x").round(precision).cast(DataType::String),
                    col("y").round(precision).cast(DataType::String),
                ],
                " ",
                false,
            )
            .alias("element"),
        )
        .group_by_stable([col("classes")])
        .agg([col("element").str().join(", ", false)])
        .select([concat_str([lit("LINESTRING ("), col("element"), lit(")")], "", false).alias("wkt")])
        .collect()?;
    let wkt = out.column("wkt")?.str()?;
    Ok(wkt
        .into_iter()
        .map(|s| s.unwrap_or_default().to_string())
        .collect())
}

/// Position-wise differences between two encodings (plus any length gap).
pub fn count_mismatches(expected: &[String], actual: &[String]) -> usize {
    let paired = expected
        .iter()
        .zip(actual)
        .filter(|(e, a)| e != a)
        .count();
    paired + expected.len().abs_diff(actual.len())
}
