use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

pub fn fixture(name: &str) -> String {
    let path = fixture_path(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()))
}

/// Scratch directory laid out the way the batch command expects: collections
/// under `collections/`, the environment file next to that directory.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        fs::create_dir(dir.path().join("collections")).expect("failed to create collections dir");
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn collections(&self) -> PathBuf {
        self.root().join("collections")
    }

    pub fn environment(&self) -> PathBuf {
        self.root().join("postman_environment.json")
    }

    /// Copies a fixture into `collections/` under `as_name`.
    pub fn add_collection(&self, fixture_name: &str, as_name: &str) -> PathBuf {
        let target = self.collections().join(as_name);
        fs::write(&target, fixture(fixture_name)).expect("failed to copy fixture");
        target
    }

    pub fn add_environment(&self, fixture_name: &str) -> PathBuf {
        let target = self.environment();
        fs::write(&target, fixture(fixture_name)).expect("failed to copy environment");
        target
    }

    pub fn read(&self, path: &Path) -> String {
        fs::read_to_string(path).expect("failed to read workspace file")
    }

    pub fn read_json(&self, path: &Path) -> serde_json::Value {
        serde_json::from_str(&self.read(path)).expect("workspace file is not JSON")
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}
