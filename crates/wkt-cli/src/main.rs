mod provenance;
mod table;
mod tabular;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use linestring_runs::reference::naive;
use linestring_runs::synth::{synth_exact, synth_set};
use linestring_runs::{count_runs, encode, EncodeOptions, Encoder, NonFinite};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::fmt::SubscriberBuilder;

use crate::provenance::{document, write_sidecar, Payload};
use crate::table::{read_points, write_wkt, Columns};
use crate::tabular::{count_mismatches, tabular};

#[derive(Parser)]
#[command(name = "wkt-cli")]
#[command(about = "Encode labelled point streams as WKT linestrings")]
struct Cmd {
    /// Optional run tag; propagated to provenance and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Encode a CSV point table and write one WKT per run
    Encode {
        #[arg(long)]
        input: PathBuf,
        /// Output path; `.parquet` writes a `wkt` column, anything else text lines
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 2, allow_negative_numbers = true)]
        precision: i64,
        #[arg(long, default_value = "x")]
        x_col: String,
        #[arg(long, default_value = "y")]
        y_col: String,
        #[arg(long, default_value = "classes")]
        class_col: String,
        /// Render NaN/inf coordinates instead of failing
        #[arg(long)]
        allow_non_finite: bool,
    },
    /// Check the encoder against the reference implementations on seeded sets
    Compare {
        #[arg(long, default_value_t = 20)]
        seeds: u64,
        #[arg(long, default_value_t = 1)]
        precision: u32,
        #[arg(long, default_value_t = 5)]
        min_points: usize,
        #[arg(long, default_value_t = 200)]
        max_points: usize,
    },
    /// Time one implementation on a synthetic set
    Trial {
        #[arg(long = "impl", value_enum, default_value_t = Impl::Core)]
        implementation: Impl,
        #[arg(long, default_value_t = 2_000_000)]
        count: usize,
        #[arg(long, default_value_t = 2)]
        precision: u32,
        #[arg(long, default_value_t = 451)]
        seed: u64,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Impl {
    Core,
    Naive,
    Tabular,
}

#[derive(Debug, Serialize)]
struct CompareSummary {
    seeds: u64,
    precision: u32,
    points: usize,
    runs: usize,
    naive_mismatches: usize,
    tabular_mismatches: usize,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Encode {
            input,
            out,
            precision,
            x_col,
            y_col,
            class_col,
            allow_non_finite,
        } => {
            let cols = Columns {
                x: x_col,
                y: y_col,
                classes: class_col,
            };
            run_encode(input, out, precision, cols, allow_non_finite, cmd.tag)
        }
        Action::Compare {
            seeds,
            precision,
            min_points,
            max_points,
        } => compare(seeds, precision, min_points, max_points),
        Action::Trial {
            implementation,
            count,
            precision,
            seed,
        } => trial(implementation, count, precision, seed),
        Action::Report => report(cmd.tag),
    }
}

fn run_encode(
    input: PathBuf,
    out: PathBuf,
    precision: i64,
    cols: Columns,
    allow_non_finite: bool,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), precision, tag = ?tag, "encode");
    let non_finite = if allow_non_finite {
        NonFinite::PassThrough
    } else {
        NonFinite::Reject
    };
    let options = EncodeOptions::new(precision)?.with_non_finite(non_finite);
    let points = read_points(&input, &cols)?;
    let start = Instant::now();
    let wkt = Encoder::new(options)
        .encode(&points.x, &points.y, &points.classes)
        .with_context(|| format!("encoding {}", input.display()))?;
    tracing::info!(
        points = points.classes.len(),
        runs = wkt.len(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1e3,
        "encoded"
    );
    write_wkt(&out, &wkt)?;

    let payload = Payload::new(serde_json::json!({
        "input": input.to_string_lossy(),
        "precision": precision,
        "columns": [cols.x, cols.y, cols.classes],
        "non_finite": format!("{non_finite:?}"),
        "points": points.classes.len(),
        "runs": wkt.len(),
    }))
    .with_tag(tag);
    let prov = write_sidecar(&out, payload)?;
    tracing::info!(provenance = %prov.display(), "wrote provenance");
    Ok(())
}

fn compare(seeds: u64, precision: u32, min_points: usize, max_points: usize) -> Result<()> {
    let p = i64::from(precision);
    let mut summary = CompareSummary {
        seeds,
        precision,
        points: 0,
        runs: 0,
        naive_mismatches: 0,
        tabular_mismatches: 0,
    };
    for seed in 0..seeds {
        let s = synth_set(seed, min_points, max_points);
        let core = encode(&s.x, &s.y, &s.classes, p)?;
        let reference = naive(&s.x, &s.y, &s.classes, p)?;
        let table = tabular(&s.x, &s.y, &s.classes, precision)?;
        summary.points += s.len();
        summary.runs += core.len();
        summary.naive_mismatches += count_mismatches(&reference, &core);
        summary.tabular_mismatches += count_mismatches(&table, &core);
    }
    println!("{}", serde_json::to_string_pretty(&summary)?);
    if summary.naive_mismatches > 0 {
        bail!(
            "encoder disagrees with naive reference on {} runs",
            summary.naive_mismatches
        );
    }
    if summary.tabular_mismatches > 0 {
        tracing::warn!(
            runs = summary.tabular_mismatches,
            "tabular reference differs (trailing zeros); expected"
        );
    }
    Ok(())
}

fn trial(implementation: Impl, count: usize, precision: u32, seed: u64) -> Result<()> {
    let s = synth_exact(seed, count);
    let p = i64::from(precision);
    tracing::info!(?implementation, points = s.len(), runs = count_runs(&s.classes), "trial");
    let start = Instant::now();
    let out = match implementation {
        Impl::Core => encode(&s.x, &s.y, &s.classes, p)?,
        Impl::Naive => naive(&s.x, &s.y, &s.classes, p)?,
        Impl::Tabular => tabular(&s.x, &s.y, &s.classes, precision)?,
    };
    let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;
    tracing::info!(?implementation, elapsed_ms, "trial_done");
    println!("Finished with {}", out.len());
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let doc = document(&Payload::new(serde_json::json!({})).with_tag(tag), &[]);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
