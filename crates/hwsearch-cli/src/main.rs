use clap::Parser;

mod run;

#[derive(Debug, Parser)]
#[command(name = "hwsearch")]
#[command(about = "Hardware store product search (synthesized listings)")]
struct Cli {
    /// Product to search for.
    query: Option<String>,

    /// Searcher's location (city/state or postal code). Recognized areas
    /// get fixed store addresses and distances.
    location: Option<String>,

    /// Restrict the search to one store slug
    /// (homedepot, lowes, aceharware).
    #[arg(long)]
    store: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // load_app_config() loads `.env` itself before reading the environment.
    let config = hwsearch_core::load_app_config()?;
    init_tracing(&config.log_level);

    let stdout = std::io::stdout();
    run::run(
        cli.query.as_deref(),
        cli.location.as_deref(),
        cli.store.as_deref(),
        &mut stdout.lock(),
    )
}

/// Diagnostics go to stderr so stdout carries nothing but the JSON document.
/// `RUST_LOG` overrides the configured default level.
fn init_tracing(default_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
