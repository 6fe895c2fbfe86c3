//! Shared test infrastructure for CLI integration tests.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Placeholder in fixture files replaced with the sandbox root.
const ROOT_PLACEHOLDER: &str = "{root}";

/// An isolated HOME/working directory with its own `easy-install.pth`.
pub struct Sandbox {
    temp: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            temp: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    /// Absolute path of `rel` inside the sandbox, as the manifest would list it.
    pub fn abs(&self, rel: &str) -> String {
        self.root().join(rel).display().to_string()
    }

    pub fn mkdirs(&self, rels: &[&str]) {
        for rel in rels {
            fs::create_dir_all(self.root().join(rel)).expect("create dir");
        }
    }

    pub fn pth_path(&self) -> PathBuf {
        self.root().join("easy-install.pth")
    }

    pub fn write_pth(&self, text: &str) -> PathBuf {
        let path = self.pth_path();
        fs::write(&path, text).expect("write manifest");
        path
    }

    pub fn read_pth(&self) -> String {
        fs::read_to_string(self.pth_path()).expect("read manifest")
    }

    /// Load `tests/fixtures/<name>` with sandbox paths substituted.
    pub fn fixture(&self, name: &str) -> String {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join(name);
        let raw = fs::read_to_string(&path).expect("read fixture");
        raw.replace(ROOT_PLACEHOLDER, &self.root().display().to_string())
    }

    /// The binary with a scrubbed environment rooted in the sandbox.
    pub fn command(&self) -> Command {
        let mut command = Command::new(env!("CARGO_BIN_EXE_reorder-editable"));
        command
            .env_clear()
            .env("HOME", self.root())
            .current_dir(self.root());
        command
    }

    /// Run with an explicit `-e` pointing at the sandbox manifest.
    pub fn run(&self, subcommand: &str, args: &[&str]) -> Output {
        self.command()
            .arg(subcommand)
            .arg("-e")
            .arg(self.pth_path())
            .args(args)
            .output()
            .expect("run reorder-editable")
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
