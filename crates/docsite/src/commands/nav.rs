//! `docsite nav` command implementation.

use clap::Args;
use docsite_config::CliSettings;
use docsite_site::{NavItem, build_locale_config, find_locale};

use super::{Inputs, SourceArgs};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the nav command.
#[derive(Args)]
pub(crate) struct NavArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Locale code (e.g. `en`).
    #[arg(short, long)]
    locale: String,
}

impl NavArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let inputs = self.source.load(CliSettings::default())?;
        let nav = locale_navigation(&inputs, &self.locale)?;

        output.data(&serde_json::to_string_pretty(&nav)?)?;
        Ok(())
    }
}

/// Navigation of a configured locale.
///
/// Goes through the same locale validation as `build` and `check`.
fn locale_navigation(inputs: &Inputs, code: &str) -> Result<Vec<NavItem>, CliError> {
    let locales = inputs.config.locale_descriptors();
    let locale = find_locale(&locales, code)?;
    Ok(build_locale_config(locale, &inputs.registry)?.nav)
}
