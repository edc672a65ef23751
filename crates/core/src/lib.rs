//! sysrun-core: launching the uninstalled `sys` binary from its build tree
//!
//! This crate composes the child's execution environment (library search
//! path, module search path, package paths), rewrites argv[0] so the child
//! reports its real name, and hands the process over to the target
//! executable.

mod error;
mod launch;
mod pathset;

pub use error::CoreError;
pub use launch::{LaunchConfig, prepare_environment, rewrite_arg0, run};
pub use launch::{MODULE_PATH_ENV, PKG_HOME_ENV, PKG_PATH_ENV};
pub use pathset::{Direction, PATH_LIST_DELIM, compose, insert_env_path, set_env_default};

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
