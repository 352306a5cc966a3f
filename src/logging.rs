use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Installs the stderr subscriber. `RUST_LOG` is honoured; `verbose` raises
/// the floor to DEBUG.
pub fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
