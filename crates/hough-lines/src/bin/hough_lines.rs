use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgGroup, Parser};
use hough_lines::detect::detect_line_gray;
use hough_lines::io::{HoughDetectConfig, HoughDetectReport};
use log::LevelFilter;

/// Find the strongest straight line in an edge image.
#[derive(Parser, Debug)]
#[command(name = "hough-lines", version, about)]
#[command(group(ArgGroup::new("input").required(true).multiple(true).args(["config", "image"])))]
struct Cli {
    /// JSON config file (`image_path`, `angle_step_deg`, `edge_threshold`, `output_path`).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Edge image; overrides `image_path` from the config.
    #[arg(long)]
    image: Option<PathBuf>,
    /// Angular resolution in degrees.
    #[arg(long)]
    angle_step: Option<f64>,
    /// Gray values strictly above this count as edges.
    #[arg(long)]
    edge_threshold: Option<u8>,
    /// Write the JSON report here instead of stdout.
    #[arg(long, short)]
    output: Option<PathBuf>,
    /// Log level for stderr output.
    #[arg(long, default_value = "warn")]
    #[cfg_attr(feature = "tracing", allow(dead_code))]
    log_level: LevelFilter,
    /// Emit JSON-formatted tracing events (`RUST_LOG` selects the filter).
    #[cfg(feature = "tracing")]
    #[arg(long)]
    json_logs: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing")]
    hough_lines::core::init_tracing(cli.json_logs);
    #[cfg(not(feature = "tracing"))]
    hough_lines::core::init_with_level(cli.log_level)?;

    // clap guarantees at least one of --config / --image
    let mut cfg = match &cli.config {
        Some(path) => HoughDetectConfig::load_json(path)?,
        None => HoughDetectConfig::for_image(String::new()),
    };
    if let Some(image) = &cli.image {
        cfg.image_path = image.to_string_lossy().into_owned();
    }
    if let Some(step) = cli.angle_step {
        cfg.angle_step_deg = step;
    }
    if let Some(threshold) = cli.edge_threshold {
        cfg.edge_threshold = threshold;
    }

    let params = cfg.params();
    params.validate()?;

    let img = cfg.load_image()?;
    log::info!(
        "loaded {} ({}x{})",
        cfg.image_path,
        img.width(),
        img.height()
    );

    let mut report = HoughDetectReport::new(&cfg, cli.config.as_deref());
    match detect_line_gray(&img, cfg.edge_threshold, &params) {
        Ok(found) => report.set_detection(found),
        Err(err) => {
            log::warn!("detection failed: {err}");
            report.set_error(err);
        }
    }

    match cli.output.or_else(|| cfg.output_path()) {
        Some(path) => {
            report.write_json(&path)?;
            println!("wrote line report to {}", path.display());
        }
        None => println!("{}", report.to_json()?),
    }

    Ok(())
}
