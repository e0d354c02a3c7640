//! Manifest error types.

use std::path::PathBuf;

/// Error returned while loading or validating a version manifest.
///
/// Every variant is fatal to the build.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// Manifest source is missing or unreadable.
    #[error("Failed to read version manifest {}: {source}", .path.display())]
    Load {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Required fields are absent or malformed.
    #[error("Invalid version manifest: {0}")]
    Schema(String),
    /// The designated latest version is not one of the listed versions.
    #[error(
        "Latest version \"{latest}\" is not listed in versions [{}]",
        .versions.join(", ")
    )]
    LatestNotInVersions {
        /// Declared latest label.
        latest: String,
        /// Declared version labels.
        versions: Vec<String>,
    },
}

impl ManifestError {
    pub(crate) fn schema(message: impl Into<String>) -> Self {
        Self::Schema(message.into())
    }
}
