use anyhow::{bail, Context, Result};
use graham_scan::Point;
use polars::prelude::*;
use std::path::Path;

/// Load points from `.csv`/`.parquet` (columns `x`, `y`) or `.json` (`[[x, y], ..]`).
pub fn read_points(input: &str) -> Result<Vec<Point>> {
    let ext = Path::new(input)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    let points = match ext.as_str() {
        "csv" => {
            let lf = LazyCsvReader::new(input)
                .with_has_header(true)
                .with_infer_schema_length(Some(100))
                .finish()
                .with_context(|| format!("opening {input}"))?;
            points_from_frame(lf)?
        }
        "parquet" => {
            let lf = LazyFrame::scan_parquet(input, ScanArgsParquet::default())
                .with_context(|| format!("opening {input}"))?;
            points_from_frame(lf)?
        }
        "json" => {
            let bytes = std::fs::read(input).with_context(|| format!("reading {input}"))?;
            points_from_json(&bytes)?
        }
        other => bail!("unsupported input extension {other:?} (expected csv, parquet, json)"),
    };
    tracing::info!(input, points = points.len(), "read_points");
    Ok(points)
}

fn points_from_frame(lf: LazyFrame) -> Result<Vec<Point>> {
    let df = lf
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .context("selecting x/y columns")?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) => Ok(Point::new(x, y)),
            _ => bail!("row {row}: missing x or y"),
        })
        .collect()
}

pub fn points_from_json(bytes: &[u8]) -> Result<Vec<Point>> {
    let pairs: Vec<[f64; 2]> =
        serde_json::from_slice(bytes).context("expected a JSON array of [x, y] pairs")?;
    Ok(pairs.into_iter().map(|[x, y]| Point::new(x, y)).collect())
}
