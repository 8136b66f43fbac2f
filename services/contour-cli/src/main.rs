//! Isocontour tracing CLI.
//!
//! Reads a gridded scalar field and writes the closed polygons where it
//! crosses one or more thresholds:
//! - JSON or CSV grid input from a file or stdin
//! - Explicit thresholds or evenly spaced levels over the value range
//! - Border padding, winding reversal and area selection
//! - JSON output to stdout or a file

mod input;
mod output;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use contour_core::{contour_levels, trace_contour_levels, AreaWindow, Grid, TraceOptions};
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

use input::{read_grid, GridInput, InputFormat};
use output::{write_levels, LevelOutput};

#[derive(Parser, Debug)]
#[command(name = "contour-trace")]
#[command(about = "Trace closed isocontours of a gridded scalar field")]
struct Args {
    /// Grid file (JSON or CSV); reads stdin when omitted or `-`
    input: Option<PathBuf>,

    /// Input format (default: guessed from the file extension)
    #[arg(long, value_enum)]
    format: Option<InputFormat>,

    /// Threshold(s) to trace, comma separated
    #[arg(short, long, value_delimiter = ',', allow_negative_numbers = true)]
    threshold: Vec<f64>,

    /// Trace every multiple of this interval inside the data range
    #[arg(long, conflicts_with = "threshold")]
    interval: Option<f64>,

    /// Keep only contours with an area above this
    #[arg(long, allow_negative_numbers = true)]
    min_area: Option<f64>,

    /// Keep only contours with an area below this
    #[arg(long, allow_negative_numbers = true)]
    max_area: Option<f64>,

    /// Emit contours in the opposite winding
    #[arg(long)]
    reverse: bool,

    /// Trace the grid as given, without a padding ring
    #[arg(long)]
    no_pad: bool,

    /// Value of the padding ring
    #[arg(long, allow_negative_numbers = true)]
    pad_value: Option<f64>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Log level
    #[arg(long, default_value = "warn", env = "RUST_LOG")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

/// Apply command-line overrides on top of `base`.
fn apply_overrides(mut options: TraceOptions, args: &Args) -> TraceOptions {
    if args.reverse {
        options.reverse = true;
    }
    if args.no_pad {
        options.pad_border = false;
    }
    if let Some(pad_value) = args.pad_value {
        options.pad_value = pad_value;
    }
    if args.min_area.is_some() || args.max_area.is_some() {
        let current = options.area;
        let min = args
            .min_area
            .or(current.map(|w| w.min))
            .unwrap_or(f64::NEG_INFINITY);
        let max = args
            .max_area
            .or(current.map(|w| w.max))
            .unwrap_or(f64::INFINITY);
        options.area = Some(AreaWindow::new(min, max));
    }
    options
}

/// Levels to trace: explicit thresholds, or multiples of the interval.
fn resolve_levels(args: &Args, grid: &GridInput) -> Result<Vec<f64>> {
    if !args.threshold.is_empty() {
        return Ok(args.threshold.clone());
    }

    let Some(interval) = args.interval else {
        bail!("Either --threshold or --interval is required");
    };

    let field = Grid::from_vec(grid.width, grid.height, grid.values.clone())?;
    let Some((min, max)) = field.value_range() else {
        bail!("Grid has no finite values to derive levels from");
    };

    let levels = contour_levels(min, max, interval);
    if levels.is_empty() {
        bail!("No multiple of {interval} lies within the data range [{min}, {max}]");
    }
    Ok(levels)
}

fn init_tracing(args: &Args) {
    let filter = EnvFilter::try_new(&args.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    if args.log_json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run(args: &Args, base: TraceOptions) -> Result<Vec<LevelOutput>> {
    let options = apply_overrides(base, args);
    debug!(?options, "Resolved trace options");

    let grid = read_grid(args.input.as_deref(), args.format)?;
    let levels = resolve_levels(args, &grid)?;

    info!(
        width = grid.width,
        height = grid.height,
        levels = levels.len(),
        "Tracing grid"
    );

    let traced = trace_contour_levels(&grid.values, grid.width, grid.height, &levels, &options)
        .with_context(|| format!("Failed to trace levels {levels:?}"))?;

    Ok(traced
        .iter()
        .map(|traced| {
            debug!(level = traced.level, contours = traced.contours.len(), "Traced level");
            LevelOutput::new(traced.level, traced.contours.contours())
        })
        .collect())
}

fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(&args);

    let levels = run(&args, TraceOptions::from_env())?;
    write_levels(&levels, args.output.as_deref(), args.pretty)?;

    info!(
        levels = levels.len(),
        contours = levels.iter().map(|l| l.contours.len()).sum::<usize>(),
        "Wrote contours"
    );
    Ok(())
}
