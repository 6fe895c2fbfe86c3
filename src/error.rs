//! Errors raised around the manifest file: resolution, I/O, and arguments.
use crate::order::OrderError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    /// No location was supplied and the locator found nothing.
    #[error("Could not locate easy-install.pth")]
    LocationNotFound,

    /// A location was supplied but there is no file there.
    #[error("the easy-install.pth file at '{}' doesn't exist", .path.display())]
    ManifestMissing { path: PathBuf },

    /// A directory argument that does not exist on disk.
    #[error("{} does not exist", .0.display())]
    PathNotFound(PathBuf),

    /// Manifest entries are compared as text, so paths must be valid UTF-8.
    #[error("{} is not valid UTF-8", .0.display())]
    NonUtf8Path(PathBuf),

    #[error("read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Order(#[from] OrderError),
}
