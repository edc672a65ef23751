//! Integration tests for the sysrun binary.
//!
//! The runner is compiled with its build directory pointing at the Cargo
//! target directory, so the tests can plant (or remove) a fake `sys`
//! executable there and observe both terminal states of the launch.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serial_test::serial;

use sysrun_core::{MODULE_PATH_ENV, PKG_HOME_ENV, PKG_PATH_ENV};
use sysrun_platform::{Os, Platform};

/// Get a Command for the sysrun binary with the launcher variables cleared.
fn sysrun_cmd() -> Command {
  let mut cmd = cargo_bin_cmd!("sysrun");
  for var in [
    Os::current().lib_path_env(),
    MODULE_PATH_ENV,
    PKG_PATH_ENV,
    PKG_HOME_ENV,
  ] {
    cmd.env_remove(var);
  }
  cmd
}

/// The build directory baked into the binary by `build.rs`.
fn build_dir() -> PathBuf {
  let profile = if cfg!(debug_assertions) { "debug" } else { "release" };
  workspace_root().join("target").join(profile)
}

fn workspace_root() -> PathBuf {
  Path::new(env!("CARGO_MANIFEST_DIR"))
    .ancestors()
    .nth(2)
    .expect("workspace root")
    .to_path_buf()
}

fn target_path() -> PathBuf {
  build_dir().join("sys")
}

/// Plant a shim `sys` in the build directory that prints its identity and
/// the composed environment.
fn plant_target() {
  let script = "#!/bin/sh\n\
    echo \"arg0=$0\"\n\
    echo \"args=$*\"\n\
    echo \"lib=${LD_LIBRARY_PATH:-}${DYLD_LIBRARY_PATH:-}\"\n\
    echo \"modules=${SYS_LUA_PATH:-}\"\n\
    echo \"pkg=${SYS_PKG_PATH:-}\"\n\
    echo \"pkg_home=${SYS_PKG_HOME:-}\"\n";
  let path = target_path();
  fs::write(&path, script).unwrap();
  fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
}

fn remove_target() {
  let _ = fs::remove_file(target_path());
}

#[test]
#[serial]
fn missing_target_is_reported_and_fatal() {
  remove_target();

  sysrun_cmd()
    .assert()
    .code(255)
    .stderr(predicate::str::contains(target_path().display().to_string()));
}

#[test]
#[serial]
fn handoff_reaches_the_target_under_its_real_name() {
  plant_target();

  let assert = sysrun_cmd().args(["hello", "world"]).assert().success();
  remove_target();

  assert
    .stdout(predicate::str::contains(format!(
      "arg0={}",
      target_path().display()
    )))
    .stdout(predicate::str::contains("args=hello world"));
}

#[test]
#[serial]
fn handoff_composes_the_full_environment() {
  plant_target();

  let build = build_dir().display().to_string();
  let src = workspace_root().display().to_string();
  let arch = Platform::current().as_string();

  let assert = sysrun_cmd().assert().success();
  remove_target();

  assert
    .stdout(predicate::str::contains(format!("lib={build}")))
    .stdout(predicate::str::contains(format!(
      "modules={src}/lib:{build}/ext/common:{build}/ext/{arch}"
    )))
    .stdout(predicate::str::contains(format!(
      "pkg={build}/.pkg:{src}/.pkg"
    )))
    .stdout(predicate::str::contains(format!("pkg_home={build}/.pkg")));
}

#[test]
#[serial]
fn user_environment_keeps_precedence_through_the_handoff() {
  plant_target();

  let assert = sysrun_cmd()
    .env(MODULE_PATH_ENV, "/custom/path")
    .env(PKG_PATH_ENV, "/home/user/.pkg")
    .assert()
    .success();
  remove_target();

  assert
    .stdout(predicate::str::contains("modules=/custom/path:"))
    .stdout(predicate::str::contains("pkg=/home/user/.pkg\n"))
    .stdout(predicate::str::contains("pkg_home=\n"));
}
