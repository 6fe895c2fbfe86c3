//! Settings gathered from flags, the environment, and platform defaults.
//!
//! Precedence for the manifest location: explicit flag, then
//! `REORDER_EDITABLE_PTH`, then the user-site locator.
use crate::error::ManifestError;
use crate::locate::{default_user_bases, ManifestLocator, UserSiteLocator};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Overrides the manifest location.
pub const LOCATION_ENV: &str = "REORDER_EDITABLE_PTH";
/// Overrides the interpreter asked for its user site directory.
pub const PYTHON_ENV: &str = "REORDER_EDITABLE_PYTHON";
/// Python's own user base override, honored by the fallback scan.
pub const USER_BASE_ENV: &str = "PYTHONUSERBASE";

const PYTHON_CANDIDATES: [&str; 2] = ["python3", "python"];

#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Manifest location from the flag or environment.
    pub location: Option<PathBuf>,
    pub python: Option<PathBuf>,
    pub user_bases: Vec<PathBuf>,
}

impl Settings {
    /// Build settings from the process environment.
    pub fn from_env(explicit_location: Option<&Path>) -> Self {
        Self::from_lookup(
            explicit_location,
            env_var,
            dirs::home_dir().as_deref(),
            find_python,
        )
    }

    /// Build settings from an arbitrary variable lookup.
    pub fn from_lookup<F, P>(
        explicit_location: Option<&Path>,
        lookup: F,
        home: Option<&Path>,
        search_path: P,
    ) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
        P: FnOnce() -> Option<PathBuf>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());
        let location = explicit_location
            .map(Path::to_path_buf)
            .or_else(|| non_empty(LOCATION_ENV).map(PathBuf::from));
        let python = non_empty(PYTHON_ENV)
            .map(PathBuf::from)
            .or_else(search_path);
        let user_bases = match non_empty(USER_BASE_ENV) {
            Some(base) => vec![PathBuf::from(base)],
            None => home.map(default_user_bases).unwrap_or_default(),
        };
        Self {
            location,
            python,
            user_bases,
        }
    }

    pub fn locator(&self) -> UserSiteLocator {
        UserSiteLocator {
            python: self.python.clone(),
            user_bases: self.user_bases.clone(),
        }
    }
}

fn env_var(key: &str) -> Option<OsString> {
    std::env::var_os(key)
}

/// First interpreter found on `PATH`.
fn find_python() -> Option<PathBuf> {
    PYTHON_CANDIDATES
        .iter()
        .find_map(|name| which::which(name).ok())
}

/// Resolve the manifest location, consulting `locator` only when none was configured.
pub fn resolve_location(
    settings: &Settings,
    locator: &dyn ManifestLocator,
) -> Result<PathBuf, ManifestError> {
    if let Some(location) = &settings.location {
        tracing::debug!(path = %location.display(), "using configured manifest location");
        return Ok(location.clone());
    }
    locator
        .locate()
        .ok_or(ManifestError::LocationNotFound)
}
