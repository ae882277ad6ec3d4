use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use graham_scan::demo::demo_points;
use graham_scan::geom2::rand::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
use graham_scan::{CollinearPolicy, HullCfg, Point};
use serde_json::json;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;
mod report;

use provenance::{write_sidecar, Provenance};
use report::HullReport;

#[derive(Parser)]
#[command(name = "graham-cli")]
#[command(about = "Convex hulls of planar point sets (Graham scan)")]
struct Cmd {
    /// Behavior when every point lies on one line
    #[arg(long, value_enum, default_value_t = Collinear::Reject, global = true)]
    collinear: Collinear,

    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Collinear {
    /// Fail with a degenerate-input error
    Reject,
    /// Report the two extreme points
    Segment,
}

impl From<Collinear> for HullCfg {
    fn from(c: Collinear) -> Self {
        let collinear = match c {
            Collinear::Reject => CollinearPolicy::Reject,
            Collinear::Segment => CollinearPolicy::Segment,
        };
        HullCfg { collinear }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Hull of points read from a csv/parquet (columns x,y) or json ([[x,y],..]) file
    Hull {
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
    },
    /// Hull of the built-in 19-point demo set
    Demo {
        #[arg(long)]
        out: Option<String>,
    },
    /// Hull of a replayable random cloud
    Random {
        #[arg(long, default_value_t = 64)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        /// Sample integer points in [-half, half]² instead of the unit disk
        #[arg(long)]
        lattice: Option<i32>,
        #[arg(long)]
        out: Option<String>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let cfg = HullCfg::from(cmd.collinear);
    match cmd.action {
        Action::Hull { input, out } => hull(input, out, cfg),
        Action::Demo { out } => demo(out, cfg),
        Action::Random {
            count,
            seed,
            index,
            lattice,
            out,
        } => random(count, ReplayToken::new(seed, index), lattice, out, cfg),
        Action::Report => report(),
    }
}

fn hull(input: String, out: String, cfg: HullCfg) -> Result<()> {
    tracing::info!(input, out, "hull");
    let points = input::read_points(&input)?;
    let report = HullReport::compute(&points, cfg)?;
    let params = json!({
        "input": input,
        "collinear": format!("{:?}", cfg.collinear),
    });
    emit(&report, Some(&out), "hull", params)
}

fn demo(out: Option<String>, cfg: HullCfg) -> Result<()> {
    let report = HullReport::compute(&demo_points(), cfg)?;
    emit(&report, out.as_deref(), "demo", json!({}))
}

fn random(
    count: usize,
    tok: ReplayToken,
    lattice: Option<i32>,
    out: Option<String>,
    cfg: HullCfg,
) -> Result<()> {
    let shape = match lattice {
        Some(half) => CloudShape::Lattice { half },
        None => CloudShape::Disk { radius: 1.0 },
    };
    let cloud = CloudCfg {
        count,
        shape,
        center: Point::zeros(),
    };
    tracing::info!(count, seed = tok.seed, index = tok.index, ?shape, "random");
    let points = draw_cloud(cloud, tok);
    let report = HullReport::compute(&points, cfg)?;
    emit(
        &report,
        out.as_deref(),
        "random",
        json!({ "count": count, "seed": tok.seed, "index": tok.index, "lattice": lattice }),
    )
}

/// Write `report` (plus sidecar) to `out`, or print it when no path is given.
fn emit(
    report: &HullReport,
    out: Option<&str>,
    command: &str,
    params: serde_json::Value,
) -> Result<()> {
    tracing::info!(
        points = report.input_points,
        vertices = report.vertices,
        area = report.area,
        "hull_done"
    );
    match out {
        Some(out) => {
            report.write(out)?;
            write_sidecar(out, Provenance::new(command, params))?;
        }
        None => println!("{}", serde_json::to_string_pretty(report)?),
    }
    Ok(())
}

fn report() -> Result<()> {
    let prov = Provenance::new("report", json!({}));
    println!("{}", serde_json::to_string_pretty(&prov)?);
    Ok(())
}
