use clap::Parser;
use keycalc::application::engine::CalculatorEngine;
use keycalc::config::EngineConfig;
use keycalc::interfaces::terminal::{TerminalRenderer, run_session};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File of keystroke lines (reads stdin when omitted)
    input: Option<PathBuf>,

    /// JSON engine configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Let `=` with nothing pending repeat the last operation
    #[arg(long)]
    repeat: bool,

    /// Print the final calculator state as JSON
    #[arg(long)]
    json: bool,

    /// Do not print the display after each line
    #[arg(long, short)]
    quiet: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => EngineConfig::from_path(path).into_diagnostic()?,
        None => EngineConfig::default(),
    };
    if cli.repeat {
        config.repeat_last_operation = true;
    }
    tracing::debug!(?config, "engine configured");

    let mut engine = CalculatorEngine::new(config);
    let input: Box<dyn BufRead> = match cli.input {
        Some(path) => Box::new(BufReader::new(File::open(path).into_diagnostic()?)),
        None => Box::new(io::stdin().lock()),
    };

    let stdout = io::stdout();
    let mut renderer = TerminalRenderer::new(stdout.lock(), io::stderr()).quiet(cli.quiet);
    run_session(&mut engine, input, &mut renderer).into_diagnostic()?;

    if cli.json {
        let (mut out, _) = renderer.into_inner();
        serde_json::to_writer(&mut out, engine.state()).into_diagnostic()?;
        writeln!(out).into_diagnostic()?;
    }

    Ok(())
}
