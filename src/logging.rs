use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber. Filter comes from `AGENCY_LOG`
/// (`debug`, `agency=trace`, ...), `warn` when unset or unparsable.
pub fn init() {
    let filter = EnvFilter::try_from_env("AGENCY_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
