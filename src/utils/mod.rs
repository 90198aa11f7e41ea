pub mod persistence;

const DEFAULT_DIRECTIVE: &str = "spendwise=warn";

/// Installs the global tracing subscriber. `RUST_LOG` overrides the default filter.
///
/// Logs go to stderr so command output on stdout stays scriptable. Callers go
/// through [`crate::init`], which runs this at most once per process.
pub(crate) fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
