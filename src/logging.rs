//! Logging setup for the driver
//!
//! The `-l` option selects a `tracing` level; `RUST_LOG` can still override
//! it with a finer-grained directive.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::errors::{NvmcError, Result};

/// Map an `-l` level name to a tracing level filter.
///
/// `fatal` maps to `ERROR` since tracing has no fatal level.
pub fn level_filter(level: &str) -> Result<LevelFilter> {
    match level {
        "trace" => Ok(LevelFilter::TRACE),
        "debug" => Ok(LevelFilter::DEBUG),
        "info" => Ok(LevelFilter::INFO),
        "warn" => Ok(LevelFilter::WARN),
        "error" | "fatal" => Ok(LevelFilter::ERROR),
        other => Err(NvmcError::Config(format!("invalid log level: {other}"))),
    }
}

/// Install the global subscriber. Call once at startup, before any spans
/// or events are emitted.
pub fn init(level: &str) -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(level_filter(level)?.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_levels_map() {
        assert_eq!(level_filter("trace").unwrap(), LevelFilter::TRACE);
        assert_eq!(level_filter("debug").unwrap(), LevelFilter::DEBUG);
        assert_eq!(level_filter("info").unwrap(), LevelFilter::INFO);
        assert_eq!(level_filter("warn").unwrap(), LevelFilter::WARN);
        assert_eq!(level_filter("error").unwrap(), LevelFilter::ERROR);
        assert_eq!(level_filter("fatal").unwrap(), LevelFilter::ERROR);
    }

    #[test]
    fn test_unknown_level_rejected() {
        let err = level_filter("loud").unwrap_err();
        assert!(err.to_string().contains("invalid log level: loud"));
    }
}
