use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use skirmish_core::{ScenarioConfig, Transcript};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Run one round of the skirmish demo")]
struct Cli {
    /// TOML roster to use instead of Arthur, Robin and Merlin.
    #[arg(long)]
    scenario: Option<PathBuf>,
    /// Have every unit defend after the round.
    #[arg(long)]
    defend: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
        .ok();
    let cli = Cli::parse();

    let config = match cli.scenario.as_deref() {
        Some(path) => ScenarioConfig::from_path(path)
            .with_context(|| format!("failed to load scenario {}", path.display()))?,
        None => ScenarioConfig::default(),
    };
    let mut roster = config.build_roster()?;

    let mut transcript = Transcript::new();
    roster.run_round(&mut transcript);
    if cli.defend {
        roster.defend_all(&mut transcript);
    }
    tracing::info!(target: "skirmish", lines = transcript.len(), "round finished");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in transcript.lines() {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}
