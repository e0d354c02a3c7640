//! Version navigation builder.
//!
//! Builds the top navigation menu of one locale: one entry per published
//! version in manifest order, the latest one marked, and a changelog link.

use docsite_manifest::VersionRegistry;

use crate::nav::NavItem;

/// Changelog target shared by every locale and version.
pub const CHANGELOG_URL: &str = "https://github.com/docsite-dev/docsite/blob/main/CHANGELOG.md";

/// Display text of the changelog entry.
pub const CHANGELOG_TEXT: &str = "📋 Changelog";

/// Appended to the latest version's label.
///
/// The registry rejects labels that already end with it.
pub const LATEST_SUFFIX: &str = docsite_manifest::LATEST_MARKER;

/// Build the navigation menu for `locale`.
///
/// Returns `registry.len() + 1` items: versions in registry order with links
/// `/{locale}/{version}/`, the latest version labelled `"{version} (latest)"`,
/// followed by the changelog entry.
#[must_use]
pub fn build_navigation(locale: &str, registry: &VersionRegistry) -> Vec<NavItem> {
    let mut items = Vec::with_capacity(registry.len() + 1);

    for version in registry.iter() {
        let text = if registry.is_latest(version) {
            format!("{version}{LATEST_SUFFIX}")
        } else {
            version.to_owned()
        };
        items.push(NavItem::from_parts(text, format!("/{locale}/{version}/")));
    }

    items.push(NavItem::from_parts(
        CHANGELOG_TEXT.to_owned(),
        CHANGELOG_URL.to_owned(),
    ));

    tracing::debug!(locale, items = items.len(), "Built navigation");
    items
}
