use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `promptly_themes=debug`.
pub const LOG_ENV: &str = "PROMPTLY_LOG";

/// Sends tracing output to stderr so stdout only carries command output.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
