use tracing_subscriber::EnvFilter;

/// Install the global subscriber
///
/// With `verbose` the level defaults to `debug` and `RUST_LOG` may override
/// it. Otherwise output is fixed at `info`.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("info")
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
