//! Point table input (CSV) and WKT output (text lines or Parquet).

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Column names to read `x`, `y`, `classes` from.
#[derive(Clone, Debug)]
pub struct Columns {
    pub x: String,
    pub y: String,
    pub classes: String,
}

impl Default for Columns {
    fn default() -> Self {
        Self {
            x: "x".into(),
            y: "y".into(),
            classes: "classes".into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointTable {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub classes: Vec<i64>,
}

/// Read the three columns from a headed CSV file, in file order.
pub fn read_points(path: &Path, cols: &Columns) -> Result<PointTable> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col(cols.x.as_str()).cast(DataType::Float64),
            col(cols.y.as_str()).cast(DataType::Float64),
            col(cols.classes.as_str()).cast(DataType::Int64),
        ])
        .collect()
        .with_context(|| format!("reading columns from {}", path.display()))?;
    tracing::info!(rows = df.height(), path = %path.display(), "read_points");
    Ok(PointTable {
        x: f64_column(&df, &cols.x)?,
        y: f64_column(&df, &cols.y)?,
        classes: i64_column(&df, &cols.classes)?,
    })
}

fn f64_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let ca = df.column(name)?.f64()?;
    if ca.null_count() > 0 {
        bail!("column {name} has {} null values", ca.null_count());
    }
    Ok(ca.into_no_null_iter().collect())
}

fn i64_column(df: &DataFrame, name: &str) -> Result<Vec<i64>> {
    let ca = df.column(name)?.i64()?;
    if ca.null_count() > 0 {
        bail!("column {name} has {} null values", ca.null_count());
    }
    Ok(ca.into_no_null_iter().collect())
}

/// Write one WKT per line, or a single `wkt` column for `.parquet` paths.
pub fn write_wkt(path: &Path, wkt: &[String]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    if path.extension().is_some_and(|ext| ext == "parquet") {
        let mut df = df!["wkt" => wkt]?;
        ParquetWriter::new(file).finish(&mut df)?;
    } else {
        let mut w = BufWriter::new(file);
        for line in wkt {
            writeln!(w, "{line}")?;
        }
        w.flush()?;
    }
    Ok(())
}
