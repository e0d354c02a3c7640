//! Validated version registry.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::error::ManifestError;

/// Suffix that marks the latest version in navigation.
///
/// Labels may not end with it, so the marker stays unique.
pub const LATEST_MARKER: &str = " (latest)";

/// Serialization format of a manifest file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ManifestFormat {
    /// JSON (`versions.json`).
    #[default]
    Json,
    /// YAML (`.yaml` / `.yml`).
    Yaml,
    /// TOML (`.toml`).
    Toml,
}

impl ManifestFormat {
    /// Pick the format from a file extension, falling back to JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => Self::Yaml,
            Some("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

/// Manifest document as written on disk.
///
/// Both fields are optional here so that a missing field surfaces as a
/// schema error naming the field rather than a generic parse failure.
#[derive(Deserialize)]
struct RawManifest {
    versions: Option<Vec<String>>,
    latest: Option<String>,
}

/// Ordered, read-only set of published versions with a designated latest.
///
/// Invariants (checked on construction):
/// - at least one version
/// - labels are non-empty and unique
/// - no label ends with [`LATEST_MARKER`]
/// - `latest` is one of the versions
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VersionRegistry {
    versions: Vec<String>,
    latest: String,
}

impl VersionRegistry {
    /// Build a registry from version labels and the latest label.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Schema`] for an empty list, an empty,
    /// duplicate or marker-suffixed label, or an empty `latest`, and
    /// [`ManifestError::LatestNotInVersions`] when `latest` is not listed.
    pub fn new(versions: Vec<String>, latest: String) -> Result<Self, ManifestError> {
        if versions.is_empty() {
            return Err(ManifestError::schema("versions must not be empty"));
        }
        if latest.is_empty() {
            return Err(ManifestError::schema("latest must not be empty"));
        }

        let mut seen = HashSet::with_capacity(versions.len());
        for (idx, version) in versions.iter().enumerate() {
            if version.is_empty() {
                return Err(ManifestError::schema(format!(
                    "versions[{idx}] must not be empty"
                )));
            }
            if version.ends_with(LATEST_MARKER) {
                return Err(ManifestError::schema(format!(
                    "version \"{version}\" must not end with \"{LATEST_MARKER}\""
                )));
            }
            if !seen.insert(version.as_str()) {
                return Err(ManifestError::schema(format!(
                    "duplicate version \"{version}\""
                )));
            }
        }

        if !seen.contains(latest.as_str()) {
            return Err(ManifestError::LatestNotInVersions { latest, versions });
        }

        Ok(Self { versions, latest })
    }

    /// Load a manifest file, picking the format from its extension.
    ///
    /// The file is read once and no handle is kept afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Load`] if the file cannot be read, otherwise
    /// any error from [`VersionRegistry::parse`].
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        let registry = Self::parse(&content, ManifestFormat::from_path(path))?;
        tracing::info!(
            path = %path.display(),
            versions = registry.len(),
            latest = %registry.latest,
            "Loaded version manifest"
        );
        Ok(registry)
    }

    /// Parse manifest content in the given format.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Schema`] for malformed documents or missing
    /// fields, plus anything [`VersionRegistry::new`] rejects.
    pub fn parse(content: &str, format: ManifestFormat) -> Result<Self, ManifestError> {
        let raw: RawManifest = match format {
            ManifestFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            ManifestFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            ManifestFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        }
        .map_err(ManifestError::Schema)?;

        let versions = raw
            .versions
            .ok_or_else(|| ManifestError::schema("missing required field `versions`"))?;
        let latest = raw
            .latest
            .ok_or_else(|| ManifestError::schema("missing required field `latest`"))?;

        Self::new(versions, latest)
    }

    /// Version labels in display order.
    #[must_use]
    pub fn versions(&self) -> &[String] {
        &self.versions
    }

    /// The designated latest version.
    #[must_use]
    pub fn latest(&self) -> &str {
        &self.latest
    }

    /// Number of versions (never zero).
    #[must_use]
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    /// Always `false`; a registry holds at least one version.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    #[must_use]
    pub fn contains(&self, version: &str) -> bool {
        self.versions.iter().any(|v| v == version)
    }

    #[must_use]
    pub fn is_latest(&self, version: &str) -> bool {
        self.latest == version
    }

    /// Iterate over version labels in display order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.versions.iter().map(String::as_str)
    }
}
