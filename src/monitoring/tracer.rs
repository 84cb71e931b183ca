/*!
 * Tracing Setup
 * Structured logging for simulator operations using the tracing crate
 */

use crate::core::limits::ENV_TRACE_JSON;
use tracing::{debug, span, Level, Span};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize structured tracing on stderr
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - SCHED_SIM_TRACE_JSON: Enable JSON output (default: false)
///
/// Calling this more than once is harmless; later calls keep the first subscriber.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var(ENV_TRACE_JSON)
        .map(|v| is_enabled(&v))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .with_current_span(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    };

    match result {
        Ok(()) => debug!(json = use_json, "Structured tracing initialized"),
        Err(_) => debug!("Tracing subscriber already installed"),
    }
}

/// Span covering one scheduler run
pub fn span_run(algorithm: &str, quantum: u32) -> Span {
    span!(Level::DEBUG, "run", algorithm = algorithm, quantum = quantum)
}

fn is_enabled(value: &str) -> bool {
    matches!(value.trim(), "1" | "true" | "TRUE" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_values() {
        assert!(is_enabled("1"));
        assert!(is_enabled("true"));
        assert!(!is_enabled("0"));
        assert!(!is_enabled(""));
    }

    #[test]
    fn test_init_twice() {
        init_tracing();
        init_tracing();
    }
}
