//! Finding `easy-install.pth` in the user site-packages directory.
//!
//! The interpreter is asked first since it knows its own layout; when none
//! answers, known user-base layouts are scanned, newest Python first.
use crate::manifest::PTH_FILE_NAME;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

const USER_SITE_QUERY: &str = "import site; print(site.getusersitepackages())";

/// Resolves the manifest location when none was given explicitly.
pub trait ManifestLocator {
    fn locate(&self) -> Option<PathBuf>;
}

impl ManifestLocator for Option<PathBuf> {
    fn locate(&self) -> Option<PathBuf> {
        self.clone()
    }
}

/// Locator over the current user's site-packages.
#[derive(Debug, Clone, Default)]
pub struct UserSiteLocator {
    /// Interpreter to ask for `site.getusersitepackages()`.
    pub python: Option<PathBuf>,
    /// Base directories to scan when the interpreter gives no answer.
    pub user_bases: Vec<PathBuf>,
}

impl ManifestLocator for UserSiteLocator {
    fn locate(&self) -> Option<PathBuf> {
        if let Some(python) = &self.python {
            if let Some(site_dir) = query_user_site(python) {
                let candidate = site_dir.join(PTH_FILE_NAME);
                tracing::debug!(
                    python = %python.display(),
                    candidate = %candidate.display(),
                    "interpreter reported user site"
                );
                // The interpreter's answer is authoritative.
                return candidate.is_file().then_some(candidate);
            }
        }
        let mut site_dirs: Vec<SiteDir> = self
            .user_bases
            .iter()
            .flat_map(|base| site_dirs_under(base))
            .collect();
        site_dirs.sort_by(|a, b| b.version.cmp(&a.version));
        site_dirs
            .into_iter()
            .map(|site| site.path.join(PTH_FILE_NAME))
            .inspect(|candidate| tracing::debug!(candidate = %candidate.display(), "checking"))
            .find(|candidate| candidate.is_file())
    }
}

/// Ask `python` for its user site-packages directory.
pub fn query_user_site(python: &Path) -> Option<PathBuf> {
    let output = match Command::new(python).args(["-c", USER_SITE_QUERY]).output() {
        Ok(output) => output,
        Err(err) => {
            tracing::warn!(python = %python.display(), %err, "could not run interpreter");
            return None;
        }
    };
    if !output.status.success() {
        tracing::debug!(python = %python.display(), status = ?output.status.code(), "user site query failed");
        return None;
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    let line = stdout.lines().map(str::trim).find(|line| !line.is_empty())?;
    Some(PathBuf::from(line))
}

/// Default user bases for the running platform, given the home directory.
pub fn default_user_bases(home: &Path) -> Vec<PathBuf> {
    let mut bases = Vec::new();
    if cfg!(target_os = "macos") {
        // Framework builds use ~/Library/Python/<version> as the user base.
        bases.extend(list_dirs(&home.join("Library").join("Python")));
    }
    if cfg!(windows) {
        if let Some(appdata) = dirs::data_dir() {
            bases.push(appdata.join("Python"));
        }
    } else {
        bases.push(home.join(".local"));
    }
    bases
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SiteDir {
    version: Option<(u32, u32)>,
    path: PathBuf,
}

/// Existing site-packages directories below a user base, in any known layout.
fn site_dirs_under(base: &Path) -> Vec<SiteDir> {
    let mut found = Vec::new();
    // Posix: <base>/lib/python3.X/site-packages
    for dir in list_dirs(&base.join("lib")) {
        let version = file_name(&dir)
            .and_then(|name| name.strip_prefix("python"))
            .and_then(parse_dotted_version);
        if version.is_some() {
            found.push(SiteDir {
                version,
                path: dir.join("site-packages"),
            });
        }
    }
    // macOS framework: <base = ~/Library/Python/3.X>/lib/python/site-packages
    let framework = base.join("lib").join("python").join("site-packages");
    if framework.is_dir() {
        found.push(SiteDir {
            version: file_name(base).and_then(parse_dotted_version),
            path: framework,
        });
    }
    // Windows: <base>/Python3X/site-packages
    for dir in list_dirs(base) {
        let version = file_name(&dir)
            .and_then(|name| name.strip_prefix("Python"))
            .and_then(parse_compact_version);
        if version.is_some() {
            found.push(SiteDir {
                version,
                path: dir.join("site-packages"),
            });
        }
    }
    found.retain(|site| site.path.is_dir());
    found
}

fn list_dirs(path: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(path) else {
        return Vec::new();
    };
    let mut dirs: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    dirs.sort();
    dirs
}

fn file_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(|name| name.to_str())
}

/// Parse `3.11` into `(3, 11)`.
fn parse_dotted_version(text: &str) -> Option<(u32, u32)> {
    let (major, minor) = text.split_once('.')?;
    Some((major.parse().ok()?, minor.parse().ok()?))
}

/// Parse `311` into `(3, 11)`.
fn parse_compact_version(text: &str) -> Option<(u32, u32)> {
    if text.len() < 2 || !text.is_ascii() {
        return None;
    }
    let (major, minor) = text.split_at(1);
    Some((major.parse().ok()?, minor.parse().ok()?))
}
