//! Logging setup for embedders and the CLI.

/// Initialize tracing subscriber for logging.
///
/// Safe to call more than once; later calls keep the first subscriber.
pub fn init_logging() {
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(tracing::Level::INFO)
            .finish(),
    )
    .ok();
}
