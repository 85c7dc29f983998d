//! Diagnostic logging setup for the binary.
//!
//! Filter precedence: `--verbose` (debug), then `RUST_LOG`, then
//! [`DEFAULT_LOG_LEVEL`](crate::constants::DEFAULT_LOG_LEVEL). Logs go to
//! stderr so stdout stays clean for `show` and `template`.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::constants::DEFAULT_LOG_LEVEL;

/// Build the filter for the given verbosity and `RUST_LOG` value.
pub fn env_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    match rust_log {
        Some(directives) => EnvFilter::try_new(directives)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL)),
        None => EnvFilter::new(DEFAULT_LOG_LEVEL),
    }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(verbose: bool) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let _ = tracing_subscriber::registry()
        .with(env_filter(verbose, rust_log.as_deref()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(filter: EnvFilter) -> String {
        filter.to_string().to_lowercase()
    }

    #[test]
    fn verbose_wins_over_rust_log() {
        let filter = rendered(env_filter(true, Some("error")));
        assert!(filter.contains("debug"), "got: {filter}");
        assert!(!filter.contains("error"), "got: {filter}");
    }

    #[test]
    fn rust_log_used_when_not_verbose() {
        let filter = rendered(env_filter(false, Some("siteconf=trace")));
        assert!(filter.contains("siteconf=trace"), "got: {filter}");
    }

    #[test]
    fn falls_back_to_default_level() {
        assert!(rendered(env_filter(false, None)).contains(DEFAULT_LOG_LEVEL));
        let invalid = rendered(env_filter(false, Some("siteconf=notalevel")));
        assert!(invalid.contains(DEFAULT_LOG_LEVEL), "got: {invalid}");
    }
}
