//! Error types for sysrun-core

use thiserror::Error;

/// Errors that can occur while preparing or handing off the launch
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("platform error: {0}")]
    Platform(#[from] sysrun_platform::PlatformError),

    #[error("environment variable '{0}' holds a non-unicode value")]
    NonUnicodeEnv(String),
}
