//! Attire CLI: catalog + prompt in, ranked outfit lines out.
//!
//! Output format: one `<role> <image>` line per populated role in fixed
//! role order, results separated by a blank line. Exit status is non-zero
//! when the catalog cannot be loaded or no result can be constructed.

use std::path::PathBuf;

use anyhow::Context;
use attire_core::catalog::load_catalog;
use attire_core::config::EngineConfig;
use attire_core::traits::IIntentOracle;
use attire_core::vocab::TargetGender;
use attire_engine::RecommendEngine;
use attire_intent::{HttpOracle, IntentResolver};
use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "attire", about = "Outfit recommendations from a tagged catalog")]
struct Args {
    /// Free-text style prompt.
    prompt: String,

    /// Path to the catalog JSON array.
    #[arg(long)]
    catalog: PathBuf,

    /// Gender preference overriding the parsed intent.
    #[arg(long, value_enum, default_value_t = GenderArg::Any)]
    gender: GenderArg,

    /// Number of results [default: 6].
    #[arg(long)]
    results: Option<usize>,

    /// Candidate shortlist length per role [default: 12].
    #[arg(long)]
    per_role_limit: Option<usize>,

    /// Diversity factor, clamped to [0, 0.5] [default: 0.15].
    #[arg(long)]
    epsilon: Option<f64>,

    /// Tie-breaking jitter magnitude [default: 0.15].
    #[arg(long)]
    jitter: Option<f64>,

    /// Seed for reproducible output; defaults to system entropy.
    #[arg(long)]
    seed: Option<u64>,

    /// Optional TOML file with engine-config overrides.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip the intent oracle and use the heuristic parser only.
    #[arg(long)]
    offline: bool,

    /// Verbose diagnostics on stderr.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum GenderArg {
    Any,
    Men,
    Women,
}

impl From<GenderArg> for TargetGender {
    fn from(g: GenderArg) -> Self {
        match g {
            GenderArg::Any => TargetGender::Any,
            GenderArg::Men => TargetGender::Men,
            GenderArg::Women => TargetGender::Women,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut config = match &args.config {
        Some(path) => EngineConfig::from_toml_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if let Some(n) = args.results {
        config.result_count = n;
    }
    if let Some(limit) = args.per_role_limit {
        config.per_role_limit = limit;
    }
    if let Some(epsilon) = args.epsilon {
        config.epsilon = epsilon;
    }
    if let Some(jitter) = args.jitter {
        config.jitter = jitter;
    }
    config.clamp();

    let catalog = load_catalog(&args.catalog)
        .with_context(|| format!("loading catalog {}", args.catalog.display()))?;

    let oracle = if args.offline { None } else { HttpOracle::from_env() };
    let resolver = IntentResolver::new(oracle.as_ref().map(|o| o as &dyn IIntentOracle));
    let mut intent = resolver.resolve(&args.prompt);
    if !matches!(args.gender, GenderArg::Any) {
        intent.target_gender = args.gender.into();
    }
    debug!(?intent, "resolved intent");

    let mut rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let engine = RecommendEngine::new(config);
    let results = engine
        .recommend(&catalog, &intent, &mut rng)
        .context("no recommendations could be constructed")?;

    for (i, result) in results.iter().enumerate() {
        if i > 0 {
            println!();
        }
        for (role, item) in result.outfit.iter() {
            println!("{role} {}", item.image);
        }
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
