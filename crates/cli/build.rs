//! Bakes the build-tree facts into the binary.
//!
//! Each constant can be pinned from the outside through an environment
//! variable of the same name; otherwise a default derived from the Cargo
//! layout is used.

use std::env;
use std::path::{Path, PathBuf};

fn main() {
    let root = workspace_root();
    let profile = env::var("PROFILE").unwrap_or_else(|_| "debug".to_string());

    emit(
        "SYSRUN_BUILD_DIR",
        root.join("target").join(&profile).display().to_string(),
    );
    emit("SYSRUN_SRC_DIR", root.display().to_string());
    emit("SYSRUN_PROGRAM", "sys".to_string());
}

fn emit(key: &str, default: String) {
    println!("cargo:rerun-if-env-changed={key}");
    let value = match env::var(key) {
        Ok(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => default,
    };
    println!("cargo:rustc-env={key}={value}");
}

fn workspace_root() -> PathBuf {
    let manifest = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR"));
    // crates/cli sits two levels below the workspace root.
    manifest
        .ancestors()
        .nth(2)
        .map(Path::to_path_buf)
        .unwrap_or(manifest)
}
