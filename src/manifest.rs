//! `package.json` loading and in-place version updates.
//!
//! The manifest is kept as a raw JSON object so fields this crate does not
//! know about survive a rewrite untouched and in their original order. The
//! fields the release tools read go through a typed [`PackageInfo`] view.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use tempfile::NamedTempFile;

use crate::error::ManifestError;

/// File name of the manifest inside a package directory.
pub const MANIFEST_FILE: &str = "package.json";

/// The `package.json` fields the release tools care about.
///
/// A field that is absent or not a string reads as `None`; npm tolerates odd
/// manifests and so does the bumper until it actually needs the value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PackageInfo {
    #[serde(default, deserialize_with = "string_or_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub version: Option<String>,
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// A loaded package manifest.
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    fields: Map<String, Value>,
    info: PackageInfo,
}

impl Manifest {
    /// Load `package.json` from the given package directory.
    pub fn load(dir: &Path) -> Result<Self, ManifestError> {
        Self::load_path(&dir.join(MANIFEST_FILE))
    }

    /// Load a manifest from an explicit file path.
    pub fn load_path(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path).map_err(|source| ManifestError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;

        let value: Value =
            serde_json::from_str(&content).map_err(|source| ManifestError::InvalidJson {
                path: path.to_path_buf(),
                source,
            })?;

        let Value::Object(fields) = value else {
            return Err(ManifestError::NotAnObject {
                path: path.to_path_buf(),
            });
        };

        let info: PackageInfo = serde_json::from_value(Value::Object(fields.clone()))
            .map_err(|source| ManifestError::InvalidJson {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self {
            path: path.to_path_buf(),
            fields,
            info,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn info(&self) -> &PackageInfo {
        &self.info
    }

    /// The package name. Must be a non-empty string.
    pub fn name(&self) -> Result<&str, ManifestError> {
        self.required(self.info.name.as_deref(), "name")
    }

    /// The raw version string, unparsed.
    pub fn version(&self) -> Result<&str, ManifestError> {
        self.required(self.info.version.as_deref(), "version")
    }

    /// Replace the version field. Other fields keep their position.
    pub fn set_version(&mut self, version: &str) {
        self.fields
            .insert("version".to_string(), Value::String(version.to_string()));
        self.info.version = Some(version.to_string());
    }

    /// Write the manifest back to where it was loaded from.
    ///
    /// Output is pretty-printed with 2-space indentation and a trailing
    /// newline. The file is replaced atomically through a temp file in the
    /// same directory.
    pub fn save(&self) -> Result<(), ManifestError> {
        let output =
            serde_json::to_string_pretty(&self.fields).map_err(ManifestError::SerializeFailed)?;

        let write_err = |source| ManifestError::WriteFailed {
            path: self.path.clone(),
            source,
        };

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut file = NamedTempFile::new_in(dir).map_err(write_err)?;
        file.write_all(output.as_bytes()).map_err(write_err)?;
        file.write_all(b"\n").map_err(write_err)?;
        file.as_file().sync_all().map_err(write_err)?;
        file.persist(&self.path).map_err(|e| write_err(e.error))?;

        Ok(())
    }

    fn required<'a>(
        &self,
        value: Option<&'a str>,
        field: &'static str,
    ) -> Result<&'a str, ManifestError> {
        value
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ManifestError::MissingField {
                path: self.path.clone(),
                field,
            })
    }
}
