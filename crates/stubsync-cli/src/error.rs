//! Error types for stubsync-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from stubsync-core
    #[error(transparent)]
    Core(#[from] stubsync_core::Error),
}
