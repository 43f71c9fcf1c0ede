//! Common test utilities and helpers

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary directory standing in for the user's key storage directory.
pub struct MockSshDir {
    pub temp_dir: TempDir,
    pub ssh_dir: PathBuf,
}

impl MockSshDir {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let ssh_dir = temp_dir.path().join(".ssh");
        std::fs::create_dir_all(&ssh_dir).expect("Failed to create .ssh dir");
        Self { temp_dir, ssh_dir }
    }

    pub fn path(&self) -> &Path {
        &self.ssh_dir
    }

    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.ssh_dir.join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Write a roster file next to (not inside) the key directory.
    pub fn write_roster(&self, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join("config.yaml");
        std::fs::write(&path, content).expect("Failed to write roster file");
        path
    }
}

/// Roster with two well-formed accounts.
pub const SAMPLE_ROSTER: &str = r#"accounts:
  - name: work
    email: work@example.com
  - name: personal
    email: personal@example.com
"#;

/// Roster whose second entry is missing the email field.
pub const ROSTER_WITH_MALFORMED_ENTRY: &str = r#"accounts:
  - name: work
    email: work@example.com
  - name: broken
  - name: personal
    email: personal@example.com
"#;

/// Roster without the accounts section.
pub const ROSTER_WITHOUT_ACCOUNTS: &str = r#"users:
  - name: work
    email: work@example.com
"#;
