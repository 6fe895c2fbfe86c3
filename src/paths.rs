//! Normalization of user-supplied directory arguments.
//!
//! Manifest entries are absolute paths, so arguments are expanded and made
//! absolute the same way before they are compared as plain strings.
use crate::error::ManifestError;
use std::path::{Component, Path, PathBuf};

/// Expand `~`, make `raw` absolute against `cwd`, and fold `.`/`..` lexically.
///
/// Symlinks are not resolved, so the result matches what was written into the
/// manifest by tools that do the same.
pub fn absolutize(raw: &str, cwd: &Path, home: Option<&Path>) -> PathBuf {
    let expanded = expand_home(raw, home);
    let joined = if expanded.is_absolute() {
        expanded
    } else {
        cwd.join(expanded)
    };
    normalize_lexically(&joined)
}

fn expand_home(raw: &str, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return PathBuf::from(raw);
    };
    if raw == "~" {
        return home.to_path_buf();
    }
    let rest = raw
        .strip_prefix("~/")
        .or_else(|| raw.strip_prefix("~\\").filter(|_| cfg!(windows)));
    match rest {
        Some(rest) => home.join(rest),
        None => PathBuf::from(raw),
    }
}

fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root.
                if !matches!(
                    out.components().next_back(),
                    None | Some(Component::RootDir) | Some(Component::Prefix(_))
                ) {
                    out.pop();
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Normalize every argument and require it to exist, failing on the first that doesn't.
pub fn absolute_dirs<S: AsRef<str>>(
    raw: &[S],
    cwd: &Path,
    home: Option<&Path>,
) -> Result<Vec<String>, ManifestError> {
    let mut resolved = Vec::with_capacity(raw.len());
    for arg in raw {
        let path = absolutize(arg.as_ref(), cwd, home);
        if !path.exists() {
            return Err(ManifestError::PathNotFound(path));
        }
        let text = path
            .to_str()
            .ok_or_else(|| ManifestError::NonUtf8Path(path.clone()))?
            .to_string();
        tracing::debug!(arg = arg.as_ref(), resolved = %text, "resolved directory argument");
        resolved.push(text);
    }
    Ok(resolved)
}
