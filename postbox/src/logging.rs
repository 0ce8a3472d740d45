use tracing_subscriber::EnvFilter;

/// Load `.env` if present, then install the fmt subscriber; `RUST_LOG` overrides `default_filter`
pub fn init(default_filter: &str) {
    // read before building the filter so RUST_LOG may come from .env too
    let dotenv = dotenvy::dotenv();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // try_init so tests can call this more than once
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();

    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded environment file"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("Could not read .env file: {}", e),
    }
}
