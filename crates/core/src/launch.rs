//! Launch sequencing: environment preparation, argv[0] rewriting, and the
//! final process-image handoff.

use std::convert::Infallible;
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use tracing::info;

use sysrun_platform::{Os, Platform, replace_process};

use crate::Result;
use crate::pathset::{Direction, PATH_LIST_DELIM, insert_env_path, set_env_default};

/// Module search path consumed by the interpreter's loader.
pub const MODULE_PATH_ENV: &str = "SYS_LUA_PATH";
/// Package bundle search path, populated only when entirely unset.
pub const PKG_PATH_ENV: &str = "SYS_PKG_PATH";
/// Package installation root. A scalar, not a path list.
pub const PKG_HOME_ENV: &str = "SYS_PKG_HOME";

/// Extension-output directory under the build tree.
const EXT_OUT_DIR: &str = "ext";
/// Subdirectory of architecture-independent extension output.
const EXT_COMMON_DIR: &str = "common";
/// Package bundle directory under both the source and the build tree.
const PKG_BUNDLE_DIR: &str = ".pkg";

/// Build-tree facts the runner is compiled with.
#[derive(Debug, Clone)]
pub struct LaunchConfig {
    /// Build output directory holding the uninstalled binaries.
    pub build_dir: PathBuf,
    /// Absolute source directory of the checkout.
    pub src_dir: PathBuf,
    /// Installation name of the target executable.
    pub program: String,
}

impl LaunchConfig {
    /// Full path of the target executable inside the build tree.
    pub fn target_path(&self) -> PathBuf {
        self.build_dir.join(&self.program)
    }
}

/// Compose the child's environment in place.
///
/// - The build directory goes to the front of the library search path so
///   uninstalled shared objects win over system-installed copies.
/// - The module search paths go to the back of [`MODULE_PATH_ENV`] so
///   user-specified paths keep precedence.
/// - The package variables are only populated when [`PKG_PATH_ENV`] is
///   entirely unset; a user-managed package setup is never touched.
pub fn prepare_environment(config: &LaunchConfig) -> Result<()> {
    let build = config.build_dir.display().to_string();
    let src = config.src_dir.display().to_string();

    insert_env_path(Os::current().lib_path_env(), &build, Direction::Prepend)?;

    insert_env_path(MODULE_PATH_ENV, &module_search_paths(config), Direction::Append)?;

    if env::var_os(PKG_PATH_ENV).is_none() {
        insert_env_path(
            PKG_PATH_ENV,
            &format!("{src}/{PKG_BUNDLE_DIR}"),
            Direction::Prepend,
        )?;
        insert_env_path(
            PKG_PATH_ENV,
            &format!("{build}/{PKG_BUNDLE_DIR}"),
            Direction::Prepend,
        )?;
        set_env_default(PKG_HOME_ENV, &format!("{build}/{PKG_BUNDLE_DIR}"));
    }

    Ok(())
}

/// The three fixed module search fragments, joined in search order: the
/// source tree's library directory, then the architecture-independent and
/// the architecture-tagged extension outputs.
fn module_search_paths(config: &LaunchConfig) -> String {
    let build = config.build_dir.display();
    let src = config.src_dir.display();
    let arch = Platform::current().as_string();

    [
        format!("{src}/lib"),
        format!("{build}/{EXT_OUT_DIR}/{EXT_COMMON_DIR}"),
        format!("{build}/{EXT_OUT_DIR}/{arch}"),
    ]
    .join(&PATH_LIST_DELIM.to_string())
}

/// Rewrite the runner's own argv[0] so the child reports the real program
/// name while keeping the directory it was invoked from.
///
/// `/a/b/sysrun` becomes `/a/b/sys`; a bare `sysrun` becomes `sys` with no
/// spurious separator.
pub fn rewrite_arg0(arg0: &str, program: &str) -> String {
    match arg0.rfind('/') {
        Some(last_sep) => format!("{}{program}", &arg0[..=last_sep]),
        None => program.to_owned(),
    }
}

/// Prepare the environment, rewrite argv[0], and hand the process over.
///
/// On success this never returns; the build-tree executable has taken over
/// the process. Returning at all means the replacement failed and the
/// caller must exit with a failure status.
pub fn run(config: &LaunchConfig, args: &[OsString]) -> Result<Infallible> {
    prepare_environment(config)?;

    let arg0 = args
        .first()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut argv = Vec::with_capacity(args.len().max(1));
    argv.push(OsString::from(rewrite_arg0(&arg0, &config.program)));
    argv.extend(args.iter().skip(1).cloned());

    let target = config.target_path();
    info!(target = %target.display(), "handing off to the build-tree executable");
    Ok(replace_process(&target, &argv)?)
}
