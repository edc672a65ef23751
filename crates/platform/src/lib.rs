//! Platform facts and the process-replacement primitive for sysrun
//!
//! This crate provides:
//! - OS and architecture detection
//! - The name of the dynamic-library search path variable
//! - Process-image replacement (`execv`)

// Process-image replacement does not exist everywhere; where it is missing
// the build tree is entered directly and this runner has no job to do.
#[cfg(not(unix))]
compile_error!("sysrun requires a unix process-replacement primitive");

mod error;
mod exec;
mod platform;

pub use error::PlatformError;
pub use exec::replace_process;
pub use platform::{Arch, Os, Platform};

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;
