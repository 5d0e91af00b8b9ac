//! chart-layout - compute chart geometry from a JSON configuration
//!
//! Reads a chart configuration document from a file (or stdin), validates it,
//! and prints the resulting layout as JSON. Validation errors go to stderr and
//! the process exits with status 1.

use anyhow::{bail, Context, Result};
use chart_layout::{compute_layout, prepare, ChartConfig, ChartDefaults};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str =
    "usage: chart-layout [CONFIG.json|-] [--width PX] [--id ID] [--defaults DEFAULTS.json]";

#[derive(Debug)]
struct Args {
    input: Option<PathBuf>,
    width: f64,
    instance_id: String,
    defaults: Option<PathBuf>,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            input: None,
            width: 600.0,
            instance_id: "chart".to_string(),
            defaults: None,
        }
    }
}

fn parse_args(mut argv: impl Iterator<Item = String>) -> Result<Args> {
    let mut args = Args::default();
    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "--width" => {
                let value = argv.next().context("--width requires a value")?;
                args.width = value
                    .parse()
                    .with_context(|| format!("invalid --width value: {value}"))?;
            }
            "--id" => {
                args.instance_id = argv.next().context("--id requires a value")?;
            }
            "--defaults" => {
                let path = argv.next().context("--defaults requires a path")?;
                args.defaults = Some(PathBuf::from(path));
            }
            "-h" | "--help" => bail!(USAGE),
            "-" => args.input = None,
            other if other.starts_with("--") => bail!("unknown option {other}\n{USAGE}"),
            other => args.input = Some(PathBuf::from(other)),
        }
    }
    Ok(args)
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn load_defaults(path: Option<&PathBuf>) -> Result<ChartDefaults> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Ok(ChartDefaults::from_json_or_default(&text))
        }
        None => Ok(ChartDefaults::default()),
    }
}

fn run() -> Result<ExitCode> {
    let args = parse_args(std::env::args().skip(1))?;
    tracing::debug!(?args, "parsed arguments");

    let defaults = load_defaults(args.defaults.as_ref())?;
    let text = read_input(args.input.as_ref())?;
    let config = ChartConfig::from_json(&text).context("configuration is not valid JSON")?;

    let options = match prepare(Some(&config), &defaults) {
        Ok(options) => options,
        Err(errors) => {
            for error in &errors {
                eprintln!("error: {error}");
            }
            return Ok(ExitCode::FAILURE);
        }
    };

    let layout = compute_layout(&options, args.width, &args.instance_id);
    println!("{}", serde_json::to_string_pretty(&layout)?);
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::from(2)
        }
    }
}
