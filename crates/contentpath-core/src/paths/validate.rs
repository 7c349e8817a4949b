//! Validation of user-supplied content paths.
//!
//! Validation runs in a fixed order and stops at the first failure:
//! expansion, character check, absoluteness, normalization, existence probe.
//! A missing directory is only ever a warning.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use super::expand::expand_env_vars;
use super::platform::home_dir;
use crate::error::ContentPathError;

/// Longest single path component accepted, in bytes.
pub const MAX_COMPONENT_LEN: usize = 255;

/// Longest normalized path accepted, in bytes.
#[cfg(windows)]
pub const MAX_PATH_LEN: usize = 32_767;
#[cfg(not(windows))]
pub const MAX_PATH_LEN: usize = 4096;

const WINDOWS_INVALID_CHARS: &[char] = &['<', '>', '"', '|', '?', '*'];

/// A path that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedPath {
    /// Expanded, normalized absolute path.
    pub path: PathBuf,
    /// Non-fatal note about the path, e.g. that it does not exist yet.
    pub warning: Option<String>,
}

/// Validate a raw path as typed by the user.
///
/// On success the returned path is absolute and normalized. The filesystem
/// is only queried for metadata.
pub fn validate_path(raw: &str) -> Result<ValidatedPath, ContentPathError> {
    if raw.trim().is_empty() {
        return Err(invalid_format(raw, "path cannot be empty"));
    }

    let expanded = expand_env_vars(raw).map_err(|e| invalid_format(raw, e))?;
    let expanded = expand_home(&expanded);

    if has_invalid_chars(&expanded, cfg!(windows)) {
        return Err(ContentPathError::InvalidCharacters {
            path: raw.to_string(),
        });
    }

    let candidate = Path::new(&expanded);
    if !candidate.is_absolute() {
        return Err(ContentPathError::RelativePathNotAllowed {
            path: raw.to_string(),
        });
    }

    if let Some(reason) = unsupported_reason(&expanded, cfg!(windows)) {
        return Err(ContentPathError::NotSupported {
            path: raw.to_string(),
            reason: reason.to_string(),
        });
    }

    let normalized = normalize(candidate);
    check_components(raw, &normalized, cfg!(windows))?;
    check_length(raw, &normalized)?;

    let warning = probe_directory(raw, &normalized)?;
    Ok(ValidatedPath {
        path: normalized,
        warning,
    })
}

/// Lexically normalize an absolute path: drop `.`, resolve `..` without
/// climbing above the root, collapse separators and trailing slashes.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            Component::Normal(name) => out.push(name),
        }
    }
    out
}

fn expand_home(expanded: &str) -> String {
    let rest = if expanded == "~" {
        Some("")
    } else {
        expanded
            .strip_prefix("~/")
            .or_else(|| expanded.strip_prefix("~\\"))
    };

    match (rest, home_dir()) {
        (Some(rest), Ok(home)) if rest.is_empty() => home.to_string_lossy().into_owned(),
        (Some(rest), Ok(home)) => home.join(rest).to_string_lossy().into_owned(),
        _ => expanded.to_string(),
    }
}

fn device_prefix(s: &str) -> Option<&'static str> {
    ["\\\\?\\", "\\\\.\\", "//?/", "//./"]
        .into_iter()
        .find(|prefix| s.starts_with(prefix))
}

fn has_invalid_chars(s: &str, windows: bool) -> bool {
    if s.contains('\0') {
        return true;
    }
    if !windows {
        return false;
    }
    let body = device_prefix(s).map_or(s, |prefix| &s[prefix.len()..]);
    body.chars()
        .any(|c| WINDOWS_INVALID_CHARS.contains(&c) || ('\u{1}'..='\u{1f}').contains(&c))
}

fn unsupported_reason(s: &str, windows: bool) -> Option<&'static str> {
    if !windows {
        return None;
    }
    if device_prefix(s).is_some() {
        return Some("device namespace paths are not supported");
    }

    let bytes = s.as_bytes();
    let has_drive = bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':';
    let body = if has_drive { &s[2..] } else { s };
    body.contains(':')
        .then_some("':' is only allowed after a drive letter")
}

fn check_components(raw: &str, path: &Path, windows: bool) -> Result<(), ContentPathError> {
    for component in path.components() {
        let Component::Normal(name) = component else {
            continue;
        };
        let len = name.len();
        if len > MAX_COMPONENT_LEN {
            return Err(ContentPathError::TooLong {
                path: raw.to_string(),
                reason: format!("a path component is {len} bytes (limit {MAX_COMPONENT_LEN})"),
            });
        }
        if windows {
            let name = name.to_string_lossy();
            if name.ends_with(' ') || name.ends_with('.') {
                return Err(invalid_format(
                    raw,
                    format!("component '{name}' ends with a space or dot"),
                ));
            }
        }
    }
    Ok(())
}

fn check_length(raw: &str, path: &Path) -> Result<(), ContentPathError> {
    let len = path.as_os_str().len();
    if len > MAX_PATH_LEN {
        return Err(ContentPathError::TooLong {
            path: raw.to_string(),
            reason: format!("the full path is {len} bytes (limit {MAX_PATH_LEN})"),
        });
    }
    Ok(())
}

fn probe_directory(raw: &str, path: &Path) -> Result<Option<String>, ContentPathError> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(None),
        Ok(_) => Ok(Some(format!(
            "The path '{}' exists but is not a directory.",
            path.display()
        ))),
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            Err(ContentPathError::AccessDenied {
                path: raw.to_string(),
                reason: e.to_string(),
            })
        }
        Err(_) => Ok(Some(format!(
            "The directory '{}' does not exist. It will be created when needed.",
            path.display()
        ))),
    }
}

fn invalid_format(raw: &str, reason: impl ToString) -> ContentPathError {
    ContentPathError::InvalidFormat {
        path: raw.to_string(),
        reason: reason.to_string(),
    }
}
