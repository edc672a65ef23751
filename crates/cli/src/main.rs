use std::env;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use sysrun_core::{LaunchConfig, run};
use tracing_subscriber::EnvFilter;

/// Exit status when the target could not be started. Starting the target is
/// the runner's whole job, so any return from the handoff is final.
const EXIT_EXEC_FAILED: u8 = 255;

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .without_time()
        .init();

    let config = LaunchConfig {
        build_dir: PathBuf::from(env!("SYSRUN_BUILD_DIR")),
        src_dir: PathBuf::from(env!("SYSRUN_SRC_DIR")),
        program: env!("SYSRUN_PROGRAM").to_string(),
    };

    // Everything after argv[0] passes through to the target verbatim; the
    // runner takes no options of its own.
    let args: Vec<OsString> = env::args_os().collect();

    let err = match run(&config, &args) {
        Ok(never) => match never {},
        Err(err) => err,
    };
    eprintln!("sysrun: {:#}", anyhow::Error::new(err));
    ExitCode::from(EXIT_EXEC_FAILED)
}
