// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use gendo::config::{load_settings, RuntimeBuilder, Settings};
use gendo::engine::{NodeDispatcher, PipelineExecutor};
use gendo::errors::FailureStrategy;
use gendo::script::Script;

#[derive(Parser)]
#[command(name = "gendo")]
#[command(about = "Run a gendo script over its queued inputs or piped stdin", long_about = None)]
struct Cli {
    /// Script file to run
    script: PathBuf,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,

    /// Model to use for prompt nodes (overrides settings file and GENDO_MODEL)
    #[arg(short, long)]
    model: Option<String>,

    /// Settings file (.yaml, .yml or .toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Keep processing input lines after one fails
    #[arg(long)]
    keep_going: bool,
}

fn init_telemetry(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_telemetry(cli.verbose);
    tracing::debug!("Verbose logging enabled");

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("Failed to run script: {:#}", error);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let Script {
        nodes,
        inputs,
        defaults,
    } = Script::from_file(&cli.script)?;

    let settings = match &cli.config {
        Some(path) => load_settings(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };
    let model = settings.llm.resolve(cli.model.as_deref());
    let (tools, models, configured_strategy) = RuntimeBuilder::from_settings(&settings, &model);

    let strategy = if cli.keep_going {
        FailureStrategy::ContinueOnError
    } else {
        configured_strategy
    };

    let executor = PipelineExecutor::new(nodes, defaults, NodeDispatcher::new(tools, models));
    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();

    let summary = if std::io::stdin().is_terminal() {
        executor
            .run_inputs(&inputs, strategy, &mut stdout, &mut stderr)
            .await?
    } else {
        let reader = tokio::io::BufReader::new(tokio::io::stdin());
        executor
            .run_reader(reader, strategy, &mut stdout, &mut stderr)
            .await?
    };

    if summary.failed > 0 {
        anyhow::bail!(
            "{} of {} input lines failed",
            summary.failed,
            summary.processed
        );
    }
    Ok(())
}
