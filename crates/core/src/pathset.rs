//! Path-list merging for environment variables
//!
//! A variable value is an ordered, delimiter-separated list of path
//! segments. The merger injects one fragment (itself possibly a
//! multi-segment list) at one end of the existing value, suppressing the
//! insertion when the fragment already sits at that end. Composed values
//! carry exactly one delimiter between the two parts, never zero, never two.

use std::env;

use tracing::debug;

use crate::{CoreError, Result};

/// Delimiter between entries of a path-list variable.
pub const PATH_LIST_DELIM: char = ':';

/// Which end of the existing value a fragment is merged into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prepend,
    Append,
}

/// Compose the new value for a path-list variable.
///
/// Returns `None` when the variable must be left untouched because the
/// fragment is already present at the end `direction` points at. An unset,
/// empty, or all-delimiter existing value composes to the fragment alone.
///
/// Stray delimiters at either end of the existing value are dropped, so the
/// result never starts or ends with one.
pub fn compose(existing: Option<&str>, fragment: &str, direction: Direction) -> Option<String> {
    let current = existing
        .map(|value| value.trim_matches(PATH_LIST_DELIM))
        .filter(|value| !value.is_empty());

    let Some(current) = current else {
        return Some(fragment.to_owned());
    };

    if already_at_end(current, fragment, direction) {
        return None;
    }

    let mut value = String::with_capacity(current.len() + fragment.len() + 1);
    match direction {
        Direction::Prepend => {
            value.push_str(fragment);
            value.push(PATH_LIST_DELIM);
            value.push_str(current);
        }
        Direction::Append => {
            value.push_str(current);
            value.push(PATH_LIST_DELIM);
            value.push_str(fragment);
        }
    }
    Some(value)
}

/// Duplicate check against one end of the trimmed existing value.
///
/// The fragment counts as present only when it spans the whole value or is
/// flush against a delimiter; a fragment that is a strict prefix or suffix
/// of a longer segment (`/a/b` against `/a/bc`) is not a duplicate.
fn already_at_end(current: &str, fragment: &str, direction: Direction) -> bool {
    if current.len() == fragment.len() {
        return current == fragment;
    }
    if current.len() < fragment.len() || fragment.is_empty() {
        return false;
    }
    match direction {
        Direction::Prepend => {
            current.starts_with(fragment) && current[fragment.len()..].starts_with(PATH_LIST_DELIM)
        }
        Direction::Append => {
            current.ends_with(fragment)
                && current[..current.len() - fragment.len()].ends_with(PATH_LIST_DELIM)
        }
    }
}

/// Merge `fragment` into the environment variable `name`.
///
/// Reads the current value, composes the result per [`compose`], and
/// installs it. When the fragment is already present at the relevant end
/// the variable is left exactly as it was.
pub fn insert_env_path(name: &str, fragment: &str, direction: Direction) -> Result<()> {
    let current = read_env(name)?;
    match compose(current.as_deref(), fragment, direction) {
        Some(value) => {
            debug!(var = name, %value, "setting path-list variable");
            // Single-threaded until the exec handoff, so mutating the
            // process environment is sound here.
            unsafe { env::set_var(name, &value) };
        }
        None => {
            debug!(var = name, fragment, "fragment already present, leaving unchanged");
        }
    }
    Ok(())
}

/// Set `name` to `value` only when it is entirely absent.
///
/// This is not a merge: the target is a scalar variable, so no duplicate
/// detection or joining applies. Any existing value wins, including an
/// empty string.
pub fn set_env_default(name: &str, value: &str) {
    if env::var_os(name).is_none() {
        debug!(var = name, value, "setting unset variable to its default");
        // Single-threaded until the exec handoff, so mutating the
        // process environment is sound here.
        unsafe { env::set_var(name, value) };
    }
}

fn read_env(name: &str) -> Result<Option<String>> {
    match env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(CoreError::NonUnicodeEnv(name.to_owned())),
    }
}
