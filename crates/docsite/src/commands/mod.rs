//! CLI command implementations.

mod build;
mod check;
mod nav;

use std::path::PathBuf;

use clap::Args;
use docsite_config::{CliSettings, Config};
use docsite_manifest::VersionRegistry;
use docsite_site::{SiteConfig, assemble_site_config};

use crate::error::CliError;

pub(crate) use build::BuildArgs;
pub(crate) use check::CheckArgs;
pub(crate) use nav::NavArgs;

/// Input arguments shared by every command.
#[derive(Args)]
pub(crate) struct SourceArgs {
    /// Path to configuration file (default: auto-discover docsite.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Version manifest (overrides config).
    #[arg(short, long)]
    manifest: Option<PathBuf>,
}

/// Configuration and version registry loaded for one invocation.
pub(crate) struct Inputs {
    pub(crate) config: Config,
    pub(crate) registry: VersionRegistry,
}

impl SourceArgs {
    /// Load configuration, then the version manifest it points to.
    pub(crate) fn load(&self, mut settings: CliSettings) -> Result<Inputs, CliError> {
        settings.manifest.clone_from(&self.manifest);
        let config = Config::load(self.config.as_deref(), Some(&settings))?;
        let registry = VersionRegistry::load(&config.paths.manifest)?;
        Ok(Inputs { config, registry })
    }
}

impl Inputs {
    /// Assemble the site configuration from the loaded inputs.
    pub(crate) fn assemble(&self) -> Result<SiteConfig, CliError> {
        let locales = self.config.locale_descriptors();
        let settings = self.config.site.global_settings();
        Ok(assemble_site_config(&self.registry, &locales, &settings)?)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use pretty_assertions::assert_eq;

    use super::*;

    pub(crate) fn write_project(dir: &Path, manifest: &str) -> PathBuf {
        std::fs::write(dir.join("versions.json"), manifest).unwrap();
        let config = dir.join("docsite.toml");
        std::fs::write(
            &config,
            "[site]\ntitle = \"Docsite\"\nhostname = \"https://docs.example.com\"\n",
        )
        .unwrap();
        config
    }

    #[test]
    fn test_load_and_assemble() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_project(dir.path(), r#"{"versions": ["v1", "v2"], "latest": "v2"}"#);
        let args = SourceArgs {
            config: Some(config),
            manifest: None,
        };

        let inputs = args.load(CliSettings::default()).unwrap();
        let site = inputs.assemble().unwrap();

        assert_eq!(inputs.registry.latest(), "v2");
        assert_eq!(site.locales["en"].nav[1].text(), "v2 (latest)");
    }

    #[test]
    fn test_manifest_flag_overrides_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_project(dir.path(), r#"{"versions": ["v1"], "latest": "v1"}"#);
        let other = dir.path().join("other.yaml");
        std::fs::write(&other, "versions: [a, b]\nlatest: a\n").unwrap();
        let args = SourceArgs {
            config: Some(config),
            manifest: Some(other),
        };

        let inputs = args.load(CliSettings::default()).unwrap();

        assert_eq!(inputs.registry.versions(), ["a", "b"]);
    }

    #[test]
    fn test_invalid_manifest_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_project(dir.path(), r#"{"versions": ["v1"], "latest": "v2"}"#);
        let args = SourceArgs {
            config: Some(config),
            manifest: None,
        };

        let Err(err) = args.load(CliSettings::default()) else {
            panic!("expected manifest error");
        };

        assert!(matches!(err, CliError::Manifest(_)));
        assert!(err.to_string().contains("\"v2\""));
    }
}
