use tracing_subscriber::EnvFilter;

/// Level used when neither `RUST_LOG` nor `-v` is given.
pub const DEFAULT_LEVEL: &str = "info";

pub fn filter_for(verbose: u8) -> EnvFilter {
    match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL)),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

/// Installs the global subscriber writing to stderr. Reports stay on disk,
/// so stdout is left alone. A second call is a no-op.
pub fn init_logging(verbose: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_for(verbose))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
