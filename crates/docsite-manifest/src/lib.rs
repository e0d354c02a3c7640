//! Version manifest loading for docsite.
//!
//! The manifest lists the published documentation versions in display order
//! and names the one that is current:
//!
//! ```json
//! { "versions": ["v1", "v2"], "latest": "v2" }
//! ```
//!
//! [`VersionRegistry`] is the validated, read-only view of that manifest.
//! It is loaded once per build and shared by every locale.
//!
//! # Example
//!
//! ```
//! use docsite_manifest::{ManifestFormat, VersionRegistry};
//!
//! let registry = VersionRegistry::parse(
//!     r#"{"versions": ["v1", "v2"], "latest": "v2"}"#,
//!     ManifestFormat::Json,
//! )
//! .unwrap();
//!
//! assert_eq!(registry.versions(), ["v1", "v2"]);
//! assert_eq!(registry.latest(), "v2");
//! ```

mod error;
mod registry;

pub use error::ManifestError;
pub use registry::{LATEST_MARKER, ManifestFormat, VersionRegistry};
