//! Error types for sysrun-platform

use thiserror::Error;

/// Errors that can occur in platform operations
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("embedded NUL in exec argument: {0}")]
    EmbeddedNul(String),

    #[error("failed to replace process image with '{path}': {source}")]
    Exec {
        path: String,
        #[source]
        source: nix::errno::Errno,
    },
}
