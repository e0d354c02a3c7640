//! `docsite build` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use docsite_config::{CliSettings, STDOUT_PATH};
use docsite_site::SiteConfig;

use super::SourceArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Output file, or `-` for stdout (default: .docsite/site-config.json).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Sitemap hostname (overrides config).
    #[arg(long)]
    hostname: Option<String>,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            output: self.output,
            hostname: self.hostname,
            ..CliSettings::default()
        };
        let inputs = self.source.load(cli_settings)?;

        output.info(&format!(
            "Manifest: {}",
            inputs.config.paths.manifest.display()
        ));

        let site = inputs.assemble()?;
        let json = render_json(&site)?;

        let target = &inputs.config.paths.output;
        if target.as_os_str() == STDOUT_PATH {
            output.data(&json)?;
            return Ok(());
        }

        write_output(target, &json)?;
        output.success(&format!(
            "Site config for {} locale(s) written to {}",
            site.locales.len(),
            target.display()
        ));
        Ok(())
    }
}

/// Serialize the site config as pretty-printed JSON.
fn render_json(site: &SiteConfig) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(site)?)
}

/// Write `json` to `path`, creating parent directories as needed.
fn write_output(path: &Path, json: &str) -> Result<(), CliError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, format!("{json}\n"))?;
    tracing::info!(path = %path.display(), bytes = json.len(), "Wrote site config");
    Ok(())
}
