use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use facesearch_core::store::{decode_candidates, StoredPhotoRecord};
use facesearch_core::{Embedding, MatchEngine, TracingObserver};

mod config;

#[derive(Parser)]
#[command(name = "facesearch", about = "Face embedding search CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank stored photos against query face embeddings
    Search {
        /// JSON file holding an array of query face embeddings
        #[arg(long)]
        queries: PathBuf,
        /// JSON file holding an array of stored photo records
        #[arg(long)]
        photos: PathBuf,
        /// Minimum confidence for a photo to be reported
        /// (overrides FACESEARCH_THRESHOLD)
        #[arg(long)]
        threshold: Option<f32>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            queries,
            photos,
            threshold,
        } => run_search(&queries, &photos, threshold),
    }
}

fn run_search(queries_path: &Path, photos_path: &Path, threshold: Option<f32>) -> Result<()> {
    let threshold = threshold.unwrap_or_else(|| config::Config::from_env().threshold);

    let raw = fs::read_to_string(queries_path)
        .with_context(|| format!("reading {}", queries_path.display()))?;
    let queries: Vec<Embedding> =
        serde_json::from_str(&raw).context("queries file must be a JSON array of embeddings")?;
    if queries.is_empty() {
        bail!("no face embeddings in queries file");
    }

    let raw = fs::read_to_string(photos_path)
        .with_context(|| format!("reading {}", photos_path.display()))?;
    let records: Vec<StoredPhotoRecord> = serde_json::from_str(&raw)
        .context("photos file must be a JSON array of stored photo records")?;

    tracing::info!(
        faces = queries.len(),
        photos = records.len(),
        threshold,
        "searching"
    );

    let observer = TracingObserver;
    let candidates = decode_candidates(&records, &observer);
    let report =
        MatchEngine::new(threshold).search_with_observer(&queries, &candidates, &observer);

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
