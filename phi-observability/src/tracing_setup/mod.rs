//! Tracing setup: `PHI_LOG` filtering with human or JSON output.

pub mod spans;

use std::sync::Once;

use phi_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive string.
pub const LOG_ENV_VAR: &str = "PHI_LOG";

static INIT: Once = Once::new();

/// Install the global subscriber.
///
/// `PHI_LOG` wins over `config.log_level` when set and valid. Only the first
/// call has any effect; a subscriber installed elsewhere is left in place.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
        install(filter, config.json);
    });
}

/// Install the global subscriber with an explicit filter string.
pub fn init_tracing_with_filter(filter: &str, json: bool) {
    INIT.call_once(|| install(EnvFilter::new(filter), json));
}

fn install(filter: EnvFilter, json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);
    // try_init: another subscriber may already be installed (tests, embedders).
    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
