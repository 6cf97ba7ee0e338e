//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use pkg_release::error::PublishError;
use pkg_release::publish::PublishExecutor;

/// Create a package directory holding the given `package.json` content.
pub fn package_dir(manifest: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    std::fs::write(dir.path().join("package.json"), manifest).expect("Failed to write manifest");
    dir
}

/// Create a package directory with a minimal manifest at `version`.
pub fn package_at(version: &str) -> tempfile::TempDir {
    package_dir(&format!(
        "{{\n  \"name\": \"luna-vdb\",\n  \"version\": \"{}\",\n  \"main\": \"index.js\"\n}}\n",
        version
    ))
}

/// Read the raw manifest text.
pub fn read_manifest(dir: &Path) -> String {
    std::fs::read_to_string(dir.join("package.json"))
        .unwrap_or_else(|e| panic!("Failed to read manifest in {:?}: {}", dir, e))
}

/// Read the version field from the manifest.
pub fn manifest_version(dir: &Path) -> String {
    let json: serde_json::Value =
        serde_json::from_str(&read_manifest(dir)).expect("Manifest is not valid JSON");
    json["version"]
        .as_str()
        .expect("Manifest has no version string")
        .to_string()
}

/// A publish executor that records calls and returns a fixed result.
pub struct RecordingExecutor {
    fail_with: Option<i32>,
    calls: Mutex<Vec<(PathBuf, String)>>,
}

impl RecordingExecutor {
    pub fn succeeding() -> Self {
        Self {
            fail_with: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(code: i32) -> Self {
        Self {
            fail_with: Some(code),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(PathBuf, String)> {
        self.calls.lock().expect("calls lock poisoned").clone()
    }
}

#[async_trait]
impl PublishExecutor for RecordingExecutor {
    async fn publish(&self, dir: &Path, otp: &str) -> Result<(), PublishError> {
        self.calls
            .lock()
            .expect("calls lock poisoned")
            .push((dir.to_path_buf(), otp.to_string()));

        match self.fail_with {
            Some(code) => Err(PublishError::NonZeroExit { code: Some(code) }),
            None => Ok(()),
        }
    }
}
