use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static LOGGER: OnceCell<()> = OnceCell::new();

/// Initializes the global tracing subscriber once
///
/// Reads the filter from `RUST_LOG`, defaulting to `info`. Safe to call from
/// multiple tests; only the first call installs the subscriber.
pub fn setup_logger() {
    LOGGER.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
