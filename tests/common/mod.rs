// tests/common/mod.rs
//! 共通テストユーティリティ

use std::{fs, path::PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Temporary directory holding input files for one test.
pub struct Fixture {
    dir: TempDir,
}

#[allow(dead_code)]
impl Fixture {
    pub fn new() -> Self {
        Self { dir: tempfile::tempdir().unwrap() }
    }

    pub fn write(&self, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// `wc` running inside the fixture directory, with logging silenced.
    pub fn wc(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_wc"));
        cmd.current_dir(self.dir.path()).env_remove("WC_JOBS").env("WC_LOG", "off");
        cmd
    }
}
