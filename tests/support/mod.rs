#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_file(&self, rel_path: &str, contents: &str) -> std::io::Result<PathBuf> {
        let path = self.dir.path().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, contents)?;
        Ok(path)
    }

    pub fn write_config(&self, contents: &str) -> std::io::Result<PathBuf> {
        self.write_file(".taskr.toml", contents)
    }

    pub fn task_file(&self) -> PathBuf {
        self.dir.path().join("tasks.json")
    }

    pub fn read_tasks(&self) -> Result<Vec<serde_json::Value>, Box<dyn std::error::Error>> {
        self.read_tasks_at(&self.task_file())
    }

    pub fn read_tasks_at(
        &self,
        path: &Path,
    ) -> Result<Vec<serde_json::Value>, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

pub fn taskr_cmd(dir: &TestDir) -> Command {
    let mut cmd = Command::cargo_bin("taskr").expect("binary");
    cmd.current_dir(dir.path());
    cmd.env_remove("TASKR_FILE");
    cmd.env_remove("RUST_LOG");
    cmd
}
