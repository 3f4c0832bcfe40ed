use std::path::Path;
use std::time::Instant;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use truckdiag::repository::read_json;
use truckdiag::{
    is_searchable, open_source, FieldWeights, GuideSource, ManifestDirSource, SearchEngine,
    SEARCH_HINT,
};

mod cli;
use cli::inspect::CorpusStats;
use cli::{display, Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let outcome = match cli.command {
        Commands::Search {
            input,
            query,
            limit,
            json,
            weights,
            parallel,
        } => run_search(&input, &query, limit, json, weights.as_deref(), parallel),
        Commands::Inspect { input } => run_inspect(&input),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so `--json` output stays clean. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Directories get a progress bar when stderr is a terminal.
fn open_input(input: &str) -> truckdiag::Result<Box<dyn GuideSource + Send + Sync>> {
    let path = Path::new(input);
    if path.is_dir() && path.join("manifest.json").is_file() {
        let progress = atty::is(atty::Stream::Stderr);
        return Ok(Box::new(ManifestDirSource::new(path).with_progress(progress)));
    }
    open_source(path)
}

fn run_search(
    input: &str,
    query: &str,
    limit: usize,
    json: bool,
    weights: Option<&str>,
    parallel: bool,
) -> truckdiag::Result<()> {
    if !is_searchable(query) {
        if json {
            println!("[]");
        } else {
            display::print_hint(SEARCH_HINT);
        }
        return Ok(());
    }

    let weights = match weights {
        Some(path) => read_json::<FieldWeights>(Path::new(path))?,
        None => FieldWeights::default(),
    };
    debug!(?weights, "field weights");

    let guides = open_input(input)?.load()?;
    let engine = SearchEngine::with_weights(weights);

    let start = Instant::now();
    #[cfg(feature = "parallel")]
    let mut results = if parallel {
        engine.search_parallel(&guides, query)
    } else {
        engine.search(&guides, query)
    };
    #[cfg(not(feature = "parallel"))]
    let mut results = {
        if parallel {
            tracing::warn!("built without the `parallel` feature, searching sequentially");
        }
        engine.search(&guides, query)
    };
    let elapsed = start.elapsed();

    let total = results.len();
    if limit > 0 {
        results.truncate(limit);
    }

    if json {
        let out = serde_json::to_string_pretty(&results).map_err(truckdiag::Error::Output)?;
        println!("{}", out);
    } else {
        display::print_results(query, &results, total, elapsed);
    }

    if total == 0 {
        debug!(query, guides = guides.len(), "no guide matched");
    }
    Ok(())
}

fn run_inspect(input: &str) -> truckdiag::Result<()> {
    let guides = open_input(input)?.load()?;
    display::print_stats(input, &CorpusStats::collect(&guides));
    Ok(())
}
