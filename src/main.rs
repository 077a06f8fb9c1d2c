use std::path::PathBuf;
use std::process::ExitCode;

use chess_eye::{Backend, ChessEye, Config, OnnxClassifier, Orientation, Report};
use clap::Parser;
use log::{LevelFilter, error};

/// Read the piece placement of a photographed chessboard.
#[derive(Parser, Debug)]
#[command(name = "chess-eye", version, about)]
struct Cli {
    /// PNG or JPEG photograph of the board, cropped to the playing area.
    image: PathBuf,

    /// Side nearest the camera: white or black.
    color: String,

    /// ONNX export of the square classifier.
    #[arg(short, long, default_value = "chess_model.onnx")]
    model: PathBuf,

    /// JSON file overriding pipeline settings.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Inference backend: tract or candle.
    #[arg(long, default_value = "tract")]
    backend: Backend,

    /// Print a JSON payload instead of the bare placement string.
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let result = run(&cli);
    let failed = result.is_err();
    let report = match result {
        Ok(fen) => Report::Position { fen },
        Err(err) => {
            error!("{err}");
            Report::Error {
                error: format!("Unable to detect position: {err}"),
            }
        }
    };

    if cli.json {
        match serde_json::to_string(&report) {
            Ok(json) => println!("{json}"),
            Err(err) => error!("failed to serialize report: {err}"),
        }
    } else if let Report::Position { fen } = &report {
        println!("{fen}");
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn run(cli: &Cli) -> Result<String, Box<dyn std::error::Error>> {
    let orientation: Orientation = cli.color.parse()?;
    let config = match &cli.config {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };

    let model = cli.model.to_string_lossy();
    let classifier = OnnxClassifier::from_file(&model, cli.backend)?;
    let mut eye = ChessEye::with_config(classifier, config)?;

    let bytes = std::fs::read(&cli.image)?;
    Ok(eye.fen(&bytes, orientation)?)
}
