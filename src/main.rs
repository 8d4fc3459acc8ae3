//! `scholar` command-line entrypoint.
//!
//! ```text
//! scholar rank <profile.json> [--semantic]
//! scholar sync
//! ```
//!
//! Paths and the embeddings endpoint come from `SCHOLAR_*` environment variables.
//! JSON goes to stdout, logs to stderr.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, bail};

use scholar::cache::ProfileEmbeddingCacheHandle;
use scholar::catalog::{Catalog, JsonFileCatalog};
use scholar::config::Config;
use scholar::embedding::{EmbeddingProvider, HashEmbeddingProvider, HttpEmbeddingProvider};
use scholar::lifecycle::EmbeddingLifecycleManager;
use scholar::profile::ProfileInput;
use scholar::ranking::{HybridRanker, RankingRequest, Recommender};
use scholar::store::{EmbeddingStore, JsonFileEmbeddingStore};

const USAGE: &str = "usage: scholar rank <profile.json> [--semantic] | scholar sync";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Rank { profile_path: PathBuf, semantic: bool },
    Sync,
}

impl Command {
    fn parse(args: &[String]) -> anyhow::Result<Self> {
        match args.first().map(String::as_str) {
            Some("rank") => {
                let mut profile_path = None;
                let mut semantic = false;
                for arg in &args[1..] {
                    match arg.as_str() {
                        "--semantic" => semantic = true,
                        flag if flag.starts_with("--") => bail!("unknown flag '{flag}'\n{USAGE}"),
                        path if profile_path.is_none() => profile_path = Some(PathBuf::from(path)),
                        extra => bail!("unexpected argument '{extra}'\n{USAGE}"),
                    }
                }
                let Some(profile_path) = profile_path else {
                    bail!("missing profile path\n{USAGE}");
                };
                Ok(Self::Rank {
                    profile_path,
                    semantic,
                })
            }
            Some("sync") if args.len() == 1 => Ok(Self::Sync),
            _ => bail!("{USAGE}"),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = Command::parse(&args)?;

    let config = Config::from_env()?;
    config.validate()?;

    tracing::info!(
        catalog = %config.catalog_path.display(),
        embeddings = %config.embeddings_path.display(),
        stub_mode = config.is_stub_mode(),
        "Scholar starting"
    );

    let provider = build_provider(&config)?;
    let store: Arc<dyn EmbeddingStore> =
        Arc::new(JsonFileEmbeddingStore::new(&config.embeddings_path));
    let catalog = Arc::new(JsonFileCatalog::new(&config.catalog_path));

    match command {
        Command::Rank {
            profile_path,
            semantic,
        } => {
            let bytes = tokio::fs::read(&profile_path)
                .await
                .with_context(|| format!("reading profile {}", profile_path.display()))?;
            let profile: ProfileInput = serde_json::from_slice(&bytes)
                .with_context(|| format!("parsing profile {}", profile_path.display()))?;

            let ranker = HybridRanker::new(
                ProfileEmbeddingCacheHandle::new(provider),
                store,
                config.ranking_config(),
            );
            let recommender = Recommender::new(catalog as Arc<dyn Catalog>, ranker);
            let response = recommender
                .recommend(RankingRequest {
                    profile,
                    use_semantic_matching: semantic,
                })
                .await?;

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Command::Sync => {
            let entities = catalog.load_all().await?;
            let manager =
                EmbeddingLifecycleManager::with_config(provider, store, config.lifecycle_config());
            let report = manager.sync(&entities).await?;

            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

fn build_provider(config: &Config) -> anyhow::Result<Arc<dyn EmbeddingProvider>> {
    match config.embedding_config() {
        Some(http) => Ok(Arc::new(HttpEmbeddingProvider::new(http)?)),
        None => {
            tracing::warn!("No SCHOLAR_EMBEDDING_URL configured, running embedder in stub mode");
            Ok(Arc::new(HashEmbeddingProvider::default()))
        }
    }
}
