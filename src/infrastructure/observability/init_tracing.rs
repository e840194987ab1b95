use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

use super::TracingConfig;

pub const DEFAULT_FILTER: &str = "info,taxdoc_analyzer=debug,tower_http=debug";

/// Installs the global subscriber. `RUST_LOG` overrides [`DEFAULT_FILTER`].
/// A second call leaves the first subscriber in place.
pub fn init_tracing(config: &TracingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let output = if config.json_format {
        fmt::layer()
            .json()
            .with_current_span(true)
            .with_target(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };

    if tracing_subscriber::registry()
        .with(output)
        .with(filter)
        .try_init()
        .is_err()
    {
        return;
    }

    tracing::info!(
        environment = %config.environment,
        json_format = config.json_format,
        "Tracing initialized"
    );
}
