use anyhow::Result;
use hourbank::commands::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Messages route through tracing when debug output is requested.
    if std::env::var("HOURBANK_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
            .init();
    }

    Cli::menu()
}
