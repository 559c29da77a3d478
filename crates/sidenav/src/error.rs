//! CLI error types.

use sidenav_analytics::AnalyticsError;
use sidenav_config::ConfigError;
use sidenav_tree::SidebarError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Sidebar(#[from] SidebarError),

    #[error("{0}")]
    Analytics(#[from] AnalyticsError),

    #[error("{0}")]
    Validation(String),
}
