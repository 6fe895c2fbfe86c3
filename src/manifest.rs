//! The `easy-install.pth` file: load, check, reorder, persist.
//!
//! Ordering decisions live in `order`; this type only owns the location and the
//! lines loaded from it, and writes back when a reorder produced new lines.
use crate::error::ManifestError;
use crate::order::{self, OrderError, Reorder};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// File name of the manifest inside a site-packages directory.
pub const PTH_FILE_NAME: &str = "easy-install.pth";

/// A loaded manifest and the path it was read from.
#[derive(Debug, Clone)]
pub struct PthFile {
    location: PathBuf,
    lines: Vec<String>,
}

impl PthFile {
    /// Read the manifest at `location`.
    pub fn open(location: PathBuf) -> Result<Self, ManifestError> {
        if !location.is_file() {
            return Err(ManifestError::ManifestMissing { path: location });
        }
        let text = read_text(&location)?;
        let lines = parse_lines(&text);
        tracing::debug!(path = %location.display(), lines = lines.len(), "loaded manifest");
        Ok(Self { location, lines })
    }

    pub fn location(&self) -> &Path {
        &self.location
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Expected entries not encountered in order by the end of the manifest.
    pub fn find_unordered<'a>(&self, expected: &'a [String]) -> &'a [String] {
        order::find_unordered(&self.lines, expected)
    }

    pub fn assert_ordered(&self, expected: &[String]) -> Result<(), OrderError> {
        order::check_order(&self.lines, expected)
    }

    /// Reorder the manifest if needed and write it back.
    ///
    /// Returns `true` when the file was rewritten. Nothing is written when the
    /// lines are already ordered or when an expected entry is missing.
    pub fn reorder(&mut self, expected: &[String]) -> Result<bool, ManifestError> {
        match order::reorder(&self.lines, expected)? {
            Reorder::Unchanged => Ok(false),
            Reorder::Reordered(new_lines) => {
                self.persist(new_lines)?;
                Ok(true)
            }
        }
    }

    /// Replace the file contents with `new_lines`, one newline-terminated entry each.
    ///
    /// The text is written to a temp file next to the real manifest and renamed
    /// over it, so a symlinked location keeps pointing at the updated file.
    pub fn persist(&mut self, new_lines: Vec<String>) -> Result<(), ManifestError> {
        let text = render_lines(&new_lines);
        let write_err = |source| ManifestError::Write {
            path: self.location.clone(),
            source,
        };
        let target = fs::canonicalize(&self.location).map_err(write_err)?;
        let dir = target.parent().unwrap_or_else(|| Path::new("/"));
        let mut staged = NamedTempFile::new_in(dir).map_err(write_err)?;
        // Temp files are created 0600; keep the manifest's own mode.
        let permissions = fs::metadata(&target).map_err(write_err)?.permissions();
        staged
            .as_file()
            .set_permissions(permissions)
            .map_err(write_err)?;
        staged.write_all(text.as_bytes()).map_err(write_err)?;
        staged.as_file().sync_all().map_err(write_err)?;
        staged
            .persist(&target)
            .map_err(|err| write_err(err.error))?;
        tracing::info!(
            path = %target.display(),
            lines = new_lines.len(),
            "rewrote manifest"
        );
        self.lines = new_lines;
        Ok(())
    }
}

/// Read the raw manifest text.
pub fn read_text(path: &Path) -> Result<String, ManifestError> {
    fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Split manifest text into entries; line terminators are dropped.
pub fn parse_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

/// Render entries back to text with a trailing newline per entry.
pub fn render_lines(lines: &[String]) -> String {
    let mut out = String::with_capacity(lines.iter().map(|line| line.len() + 1).sum());
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}
