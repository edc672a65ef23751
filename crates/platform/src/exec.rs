//! Process-image replacement

use std::convert::Infallible;
use std::ffi::{CString, OsString};
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use tracing::debug;

use crate::error::PlatformError;

/// Replace the current process image with `path`, passing `args` as the new
/// argument vector. The current environment is inherited unchanged.
///
/// On success nothing after this call runs; the process identity stays the
/// same but its code, data, and stack belong to the new executable. The
/// only way out is the error case, where the underlying `execv` returned.
pub fn replace_process(path: &Path, args: &[OsString]) -> Result<Infallible, PlatformError> {
    let c_path = to_cstring(path.as_os_str().as_bytes())?;
    let c_args = args
        .iter()
        .map(|arg| to_cstring(arg.as_bytes()))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(path = %path.display(), argc = c_args.len(), "replacing process image");

    match nix::unistd::execv(&c_path, &c_args) {
        Ok(infallible) => match infallible {},
        Err(errno) => Err(PlatformError::Exec {
            path: path.display().to_string(),
            source: errno,
        }),
    }
}

fn to_cstring(bytes: &[u8]) -> Result<CString, PlatformError> {
    CString::new(bytes)
        .map_err(|_| PlatformError::EmbeddedNul(String::from_utf8_lossy(bytes).into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn exec_of_missing_target_reports_path_and_errno() {
        let path = PathBuf::from("/nonexistent/sysrun-target");
        let err = replace_process(&path, &[OsString::from("sys")]).unwrap_err();
        match err {
            PlatformError::Exec { path, source } => {
                assert_eq!(path, "/nonexistent/sysrun-target");
                assert_eq!(source, nix::errno::Errno::ENOENT);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn embedded_nul_is_rejected_before_exec() {
        let path = PathBuf::from("/bin/true");
        let arg = OsString::from("a\0b");
        let err = replace_process(&path, &[arg]).unwrap_err();
        assert!(matches!(err, PlatformError::EmbeddedNul(_)));
    }
}
