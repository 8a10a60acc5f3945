//! Tracing subscriber setup
//!
//! `RUST_LOG` always wins. Without it the filter comes from
//! [`TracingConfig::directives`], which keeps dependency noise at `warn`
//! while the reaction crates log at the configured level.

use tracing::Level;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::Environment;

/// Crates whose spans and events follow the configured level
const WORKSPACE_TARGETS: [&str; 5] = [
    "reactions_core",
    "reactions_common",
    "reactions_db",
    "reactions_service",
    "reactions_api",
];

/// Subscriber options
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Level for the reaction crates and `tower_http`
    pub level: Level,
    /// One JSON object per line instead of human-readable output
    pub json: bool,
    /// Emit span open/close events
    pub span_events: bool,
    pub file_line: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            json: false,
            span_events: false,
            file_line: true,
        }
    }
}

impl TracingConfig {
    /// Options suited to a deployment environment
    ///
    /// Production logs JSON at `info`; development logs text at `debug`
    /// with span timings.
    #[must_use]
    pub fn for_environment(env: Environment) -> Self {
        match env {
            Environment::Production => Self {
                json: true,
                file_line: false,
                ..Self::default()
            },
            Environment::Staging => Self::default(),
            Environment::Development => Self {
                level: Level::DEBUG,
                span_events: true,
                ..Self::default()
            },
        }
    }

    /// Filter directives used when `RUST_LOG` is unset
    #[must_use]
    pub fn directives(&self) -> String {
        let level = self.level.to_string().to_lowercase();
        let mut directives = vec!["warn".to_string(), format!("tower_http={level}")];
        directives.extend(WORKSPACE_TARGETS.iter().map(|t| format!("{t}={level}")));
        directives.join(",")
    }

    fn span_events(&self) -> FmtSpan {
        if self.span_events {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }
}

/// Install the global subscriber
///
/// # Errors
/// Fails if a global subscriber is already installed.
pub fn try_init_tracing_with_config(config: TracingConfig) -> Result<(), TracingError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.directives()));

    let fmt_layer = fmt::layer()
        .with_file(config.file_line)
        .with_line_number(config.file_line)
        .with_span_events(config.span_events());

    let installed = if config.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.json())
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .try_init()
    };

    installed.map_err(|_| TracingError::AlreadyInitialized)
}

/// Install the global subscriber with default options
///
/// # Errors
/// Fails if a global subscriber is already installed.
pub fn try_init_tracing() -> Result<(), TracingError> {
    try_init_tracing_with_config(TracingConfig::default())
}

#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("Tracing subscriber already initialized")]
    AlreadyInitialized,
}
