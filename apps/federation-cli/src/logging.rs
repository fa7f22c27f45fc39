//! Tracing subscriber setup for the host.

use anyhow::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LoggingConfig;

/// Install the global subscriber. `RUST_LOG` takes precedence over `cfg.level`.
///
/// Logs go to stderr so command output on stdout stays clean.
///
/// # Errors
///
/// Returns an error if `RUST_LOG` or the level directive is invalid, or a
/// global subscriber is already installed.
pub fn init(cfg: &LoggingConfig) -> anyhow::Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(rust_log.as_deref(), &cfg.level)?;

    let registry = tracing_subscriber::registry().with(filter);
    if cfg.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?;
    } else {
        registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .try_init()?;
    }

    Ok(())
}

/// A blank `RUST_LOG` counts as unset.
fn build_filter(rust_log: Option<&str>, level: &str) -> anyhow::Result<EnvFilter> {
    let Some(directive) = rust_log.filter(|d| !d.trim().is_empty()) else {
        return EnvFilter::try_new(level)
            .with_context(|| format!("invalid log level `{level}`"));
    };
    EnvFilter::try_new(directive)
        .with_context(|| format!("invalid RUST_LOG directive `{directive}`"))
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use tracing_subscriber::filter::LevelFilter;

    use super::*;

    #[test]
    fn configured_level_applies_without_rust_log() {
        let filter = build_filter(None, "debug").unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));

        let filter = build_filter(Some("  "), "debug").unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn rust_log_overrides_configured_level() {
        let filter = build_filter(Some("warn"), "debug").unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn invalid_rust_log_is_an_error() {
        let err = build_filter(Some("connect=loud"), "info").unwrap_err();
        assert!(err.to_string().contains("RUST_LOG"), "{err}");
    }

    #[test]
    fn invalid_configured_level_is_an_error() {
        assert!(build_filter(None, "connect=loud").is_err());
    }
}
