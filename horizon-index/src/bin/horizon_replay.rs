//! Replays an index build from pre-normalized inputs.
//!
//! Usage:
//!   horizon-replay <inputs.json> [config.toml] [--smooth <window>] [--breakdown <YYYY-MM-DD>]
//!
//! Prints the index report as JSON. With `--smooth` the data points are
//! printed as a smoothed chart series instead. With `--breakdown` only the
//! binary-market reweighting of that day is printed.

use std::path::PathBuf;
use std::process;

use anyhow::{anyhow, bail, Context, Result};
use chrono::NaiveDate;
use horizon_core::tracing::init_tracing;
use horizon_core::{ChartPoint, HorizonConfig, IIndexEngine, IndexInputs};
use horizon_index::{smooth, IndexEngine};
use tracing::info;

fn main() {
    if let Err(err) = run() {
        eprintln!("horizon-replay failed: {err:#}");
        process::exit(1);
    }
}

struct CliArgs {
    inputs: PathBuf,
    config: Option<PathBuf>,
    smooth: Option<usize>,
    breakdown: Option<NaiveDate>,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut inputs = None;
        let mut config = None;
        let mut smooth = None;
        let mut breakdown = None;

        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--smooth" => {
                    let value = args.next().ok_or_else(|| anyhow!("--smooth needs a window"))?;
                    smooth = Some(value.parse().with_context(|| format!("bad window {value:?}"))?);
                }
                "--breakdown" => {
                    let value = args.next().ok_or_else(|| anyhow!("--breakdown needs a date"))?;
                    let date = NaiveDate::parse_from_str(&value, "%Y-%m-%d")
                        .with_context(|| format!("bad date {value:?}"))?;
                    breakdown = Some(date);
                }
                flag if flag.starts_with("--") => bail!("unknown flag {flag}"),
                _ if inputs.is_none() => inputs = Some(PathBuf::from(&arg)),
                _ if config.is_none() => config = Some(PathBuf::from(&arg)),
                _ => bail!("unexpected argument {arg}"),
            }
        }

        Ok(Self {
            inputs: inputs.ok_or_else(|| {
                anyhow!("usage: horizon-replay <inputs.json> [config.toml] [--smooth <window>] [--breakdown <YYYY-MM-DD>]")
            })?,
            config,
            smooth,
            breakdown,
        })
    }
}

fn run() -> Result<()> {
    let args = CliArgs::parse()?;
    let config = HorizonConfig::load(args.config.as_deref()).context("loading config")?;
    init_tracing(&config.observability.log_level);

    let raw = std::fs::read_to_string(&args.inputs)
        .with_context(|| format!("reading {}", args.inputs.display()))?;
    let inputs = IndexInputs::from_json(&raw)
        .with_context(|| format!("parsing {}", args.inputs.display()))?;
    info!(
        weak = inputs.weak.len(),
        full = inputs.full.len(),
        aux = inputs.aux.len(),
        market = inputs.market.len(),
        binary = inputs.binary_market.len(),
        "inputs loaded"
    );

    let engine = IndexEngine::new(config.index);

    if let Some(day) = args.breakdown {
        let breakdown = engine
            .breakdown_on(&inputs, day)
            .ok_or_else(|| anyhow!("no source or binary-market price on {day}"))?;
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
        return Ok(());
    }

    let report = engine.build(&inputs)?;
    match args.smooth {
        Some(window) => {
            let chart: Vec<ChartPoint> = report.data.iter().map(ChartPoint::from).collect();
            println!("{}", serde_json::to_string_pretty(&smooth(&chart, window))?);
        }
        None => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}
