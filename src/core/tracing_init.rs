use crate::core::config::LoggingConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
///
/// Console output is for running the admin locally. JSON output writes one
/// flat object per event; the only spans are the per-request ones from
/// `TraceLayer`, so span context is left out.
pub fn init_tracing(config: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let console = config.console || config.format == "console";

    let console_layer = console.then(|| {
        tracing_subscriber::fmt::layer()
            .compact()
            .with_target(false)
    });

    let json_layer = (!console).then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(false)
            .with_span_list(false)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(json_layer)
        .init();
}
