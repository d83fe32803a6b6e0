use tracing_subscriber::EnvFilter;

/// Initialise logging to stderr. Without `verbose` only warnings are shown so
/// the picker screen stays clean; with it the level is `debug` and can be
/// overridden through `RUST_LOG`.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("warn")
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
