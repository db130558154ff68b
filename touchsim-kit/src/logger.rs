use tracing::Level;
use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    filter::filter_fn,
    fmt::{self, time::UtcTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Console-only tracing: step announcements on stdout, failure diagnostics
/// on stderr. No file appender, the tool must not leave artifacts behind.
pub fn init_tracing() {
    let stdout_layer = fmt::layer()
        .with_ansi(false)
        .with_timer(UtcTime::rfc_3339())
        .with_writer(std::io::stdout)
        .with_filter(filter_fn(|meta| *meta.level() == Level::INFO));

    let stderr_layer = fmt::layer()
        .with_ansi(false)
        .with_timer(UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::new("warn"));

    Registry::default()
        .with(stdout_layer)
        .with(stderr_layer)
        .init();
}
