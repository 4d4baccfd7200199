//! `fabula` — verify backstories against their source narratives.
//!
//! One batch pass: scan and chunk the novels, build the embedding
//! index, then evaluate every case sequentially and write the results
//! file at the very end.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use fabula_core::config::PipelineConfig;
use fabula_embeddings::{ChunkIndex, EmbeddingEngine};
use fabula_pipeline::{load_cases, write_verdicts, Orchestrator};
use fabula_reasoning::KeywordDetector;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "fabula",
    about = "Check free-text backstories for consistency against a corpus of novels"
)]
struct Cli {
    /// Directory of plain-text novels; file stems become story ids
    #[arg(long, default_value = "data/novels")]
    novels: PathBuf,

    /// CSV of evaluation cases with story_id and backstory columns
    #[arg(long, default_value = "test.csv")]
    cases: PathBuf,

    /// Destination CSV for verdicts
    #[arg(long, default_value = "results.csv")]
    output: PathBuf,

    /// Optional TOML config file; missing keys fall back to defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override: evidence chunks retrieved per backstory
    #[arg(long)]
    top_k: Option<usize>,

    /// Override: words per narrative chunk
    #[arg(long)]
    window_size: Option<usize>,

    /// Override: inclusive mean-similarity threshold for consistency
    #[arg(long)]
    threshold: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    info!(
        novels = %cli.novels.display(),
        cases = %cli.cases.display(),
        window_size = config.window_size,
        top_k = config.top_k,
        "starting narrative consistency pipeline"
    );

    // Full ingestion and embedding pass before any evaluation.
    let novels = fabula_ingest::scan_novels(&cli.novels).context("narrative ingestion failed")?;

    let mut chunks = Vec::new();
    for (story_id, text) in &novels {
        chunks.extend(fabula_ingest::chunk(story_id, text, config.window_size));
    }
    info!(stories = novels.len(), chunks = chunks.len(), "narratives chunked");

    let mut engine = EmbeddingEngine::new(&config.embedding);
    let index = ChunkIndex::build(chunks, &mut engine, config.embedding.batch_size)
        .context("narrative index construction failed")?;

    let cases = load_cases(&cli.cases).context("loading evaluation cases failed")?;

    let detector = KeywordDetector::new();
    let mut orchestrator = Orchestrator::new(&index, &mut engine, &detector, &config);
    let verdicts = orchestrator.run(&cases).context("evaluation failed")?;

    // Written only once everything has been evaluated; a mid-run
    // failure leaves no partial results file.
    write_verdicts(&cli.output, &verdicts).context("writing results failed")?;

    info!(
        output = %cli.output.display(),
        rows = verdicts.len(),
        "pipeline complete"
    );

    Ok(())
}

/// Load config (file or defaults) and apply CLI overrides.
fn resolve_config(cli: &Cli) -> anyhow::Result<PipelineConfig> {
    let mut config = match &cli.config {
        Some(path) => PipelineConfig::from_toml_file(path)
            .with_context(|| format!("loading config from '{}'", path.display()))?,
        None => PipelineConfig::default(),
    };

    if let Some(top_k) = cli.top_k {
        config.top_k = top_k;
    }
    if let Some(window_size) = cli.window_size {
        config.window_size = window_size;
    }
    if let Some(threshold) = cli.threshold {
        config.similarity_threshold = threshold;
    }

    config.validate().context("invalid configuration")?;
    Ok(config)
}
