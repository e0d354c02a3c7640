//! `docsite check` command implementation.

use clap::Args;
use docsite_config::CliSettings;

use super::SourceArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    source: SourceArgs,
}

impl CheckArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let inputs = self.source.load(CliSettings::default())?;
        let site = inputs.assemble()?;

        output.highlight(&format!(
            "Manifest: {}",
            inputs.config.paths.manifest.display()
        ));
        output.info(&format!(
            "Versions: {} (latest: {})",
            inputs.registry.versions().join(", "),
            inputs.registry.latest()
        ));
        for (code, locale) in &site.locales {
            output.info(&format!(
                "Locale {code} ({}): {} nav items, {} sidebar tree(s)",
                locale.label,
                locale.nav.len(),
                locale.sidebar.len()
            ));
        }
        output.success("Configuration is valid");
        Ok(())
    }
}
