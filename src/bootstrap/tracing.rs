//! Tracing configuration for ParcelMap
//!
//! This module provides the tracing-subscriber initialization for structured
//! logging with spans.
//!
//! ## Architecture / 架构
//!
//! - **Environment-aware**: debug builds log at debug, release builds at info
//! - **RUST_LOG wins**: an explicit filter overrides the defaults

use std::io;

use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry};

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
///
/// ## Behavior / 行为
/// - **Development**: debug level for the workspace crates
/// - **Production**: info level for the workspace crates
/// - HTTP client internals stay at warn in both
pub(crate) fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let level = if is_dev { "debug" } else { "info" };
    vec![
        level.to_string(),
        "hyper=warn".to_string(),
        "hyper_util=warn".to_string(),
        "reqwest=warn".to_string(),
        "rustls=warn".to_string(),
        format!("pm_app={level}"),
        format!("pm_infra={level}"),
    ]
}

/// Initialize the tracing subscriber with appropriate configuration
///
/// ## Behavior / 行为
///
/// - Creates an env-filter for level control (respects `RUST_LOG`)
/// - Sets up a stdout fmt layer:
///   "2025-01-15 10:30:45.123 INFO [file.rs:42] [target] message"
/// - Registers the global subscriber
///
/// ## Errors / 错误
///
/// Returns `Err` if a subscriber is already registered (should only call once).
pub fn init_tracing_subscriber() -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives.join(",")));

    let stdout_writer: BoxMakeWriter = BoxMakeWriter::new(io::stdout);
    let stdout_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(stdout_writer);

    registry().with(env_filter).with(stdout_layer).try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dev_directives_default_to_debug() {
        let directives = build_filter_directives(true);

        assert_eq!(directives[0], "debug");
        assert!(directives.contains(&"pm_app=debug".to_string()));
        assert!(directives.contains(&"reqwest=warn".to_string()));
    }

    #[test]
    fn test_prod_directives_default_to_info() {
        let directives = build_filter_directives(false);

        assert_eq!(directives[0], "info");
        assert!(directives.contains(&"pm_infra=info".to_string()));
    }

    #[test]
    fn test_directives_parse_as_env_filter() {
        let joined = build_filter_directives(true).join(",");

        assert!(tracing_subscriber::EnvFilter::try_new(joined).is_ok());
    }
}
