// grimace: headless demo harness for the expression-driven runner core.
//
// Drives the game session from a scripted expression detector; rendering
// and real video capture live in the host, not here.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Result, bail};
use clap::Parser;
use tracing::info;

use grimace::classifier::{Expression, ExpressionFeed, ExpressionScores};
use grimace::config::GameConfig;
use grimace::game::{GamePhase, GameSession};
use grimace::traits::{CountingFrames, ScriptedDetector};
use grimace::util::logging::init_logging;

#[derive(Parser, Debug)]
#[command(name = "grimace", about = "Expression-driven obstacle runner (headless demo)")]
struct Args {
    /// Path to game config JSON file.
    #[arg(long, default_value = "config.json")]
    config: PathBuf,

    /// Seed for deterministic obstacle spawning.
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum number of simulation ticks to run.
    #[arg(long, default_value_t = 3600)]
    ticks: u64,

    /// Comma-separated expression labels fed to the demo detector
    /// ("none" = no face in frame).
    #[arg(long, default_value = "neutral,happy,neutral,sad,neutral,surprised")]
    script: String,

    /// Enable debug logging.
    #[arg(long)]
    verbose: bool,

    /// Directory for rolling log files.
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn parse_script(raw: &str) -> Result<Vec<Option<ExpressionScores>>> {
    let mut script = Vec::new();
    for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if token == "none" {
            script.push(None);
            continue;
        }
        if Expression::from_label(token).is_none() {
            bail!("unknown expression label: {}", token);
        }
        script.push(Some(ExpressionScores::from_iter([(token, 1.0f32)])));
    }
    if script.is_empty() {
        bail!("expression script is empty");
    }
    Ok(script)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_dir.as_deref(), args.verbose)?;
    info!("grimace starting");

    let config = GameConfig::load_from(&args.config)?;
    let script = parse_script(&args.script)?;

    let mut feed = ExpressionFeed::spawn(ScriptedDetector::cycling(script), CountingFrames::new());

    let mut session = match args.seed {
        Some(seed) => GameSession::with_seed(config, seed),
        None => GameSession::new(config),
    };
    session.start();

    // Nominal display refresh: ~60 ticks per second.
    let mut interval = tokio::time::interval(Duration::from_micros(16_667));
    for _ in 0..args.ticks {
        interval.tick().await;
        session.set_expression(feed.latest());
        session.tick();
        if session.phase() == GamePhase::GameOver {
            break;
        }
    }
    feed.stop();

    info!(
        score = session.score(),
        ticks = session.tick_count(),
        phase = ?session.phase(),
        "simulation finished"
    );
    Ok(())
}
