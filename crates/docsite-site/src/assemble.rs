//! Site configuration assembly.
//!
//! [`assemble_site_config`] is the single entry point of a build: it runs
//! once per invocation and produces the one [`SiteConfig`] that is handed to
//! the rendering engine.

use std::collections::{BTreeMap, HashSet};

use docsite_manifest::VersionRegistry;
use serde::Serialize;

use crate::error::SiteError;
use crate::head::{HeadTag, build_head};
use crate::locale::{LocaleConfig, LocaleDescriptor, build_locale_config};

/// Settings shared by all locales.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlobalSettings {
    pub title: String,
    pub description: String,
    /// Public origin of the site, used for the sitemap and canonical URLs.
    pub hostname: String,
    /// Favicon path.
    pub logo: String,
    /// Apple touch icon path.
    pub touch_icon: String,
    /// Social sharing image, absolute or relative to `hostname`.
    pub og_image: String,
}

impl GlobalSettings {
    /// Settings with the default icon and sharing image paths.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        hostname: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            hostname: hostname.into(),
            logo: "/logo.svg".to_owned(),
            touch_icon: "/apple-touch-icon.png".to_owned(),
            og_image: "/og-image.png".to_owned(),
        }
    }

    /// Site root URL with exactly one trailing slash.
    #[must_use]
    pub fn canonical_url(&self) -> String {
        format!("{}/", self.hostname.trim_end_matches('/'))
    }

    /// Resolve a site-relative path against `hostname`.
    ///
    /// Absolute `http(s)://` URLs are returned unchanged.
    #[must_use]
    pub fn absolute_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_owned();
        }
        format!(
            "{}/{}",
            self.hostname.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Sitemap {
    pub hostname: String,
}

/// Aggregate configuration consumed by the rendering engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SiteConfig {
    pub title: String,
    pub description: String,
    /// Locale configurations keyed by locale code.
    pub locales: BTreeMap<String, LocaleConfig>,
    pub sitemap: Sitemap,
    pub head: Vec<HeadTag>,
}

/// Assemble the site configuration from the registry, locale descriptors and
/// global settings.
///
/// Each locale is derived independently from the same registry, so the
/// result does not depend on descriptor order beyond duplicate detection.
///
/// # Errors
///
/// Returns [`SiteError::NoLocales`] for an empty descriptor list,
/// [`SiteError::DuplicateLocale`] if a code repeats, and any error from
/// [`build_locale_config`].
pub fn assemble_site_config(
    registry: &VersionRegistry,
    locales: &[LocaleDescriptor],
    settings: &GlobalSettings,
) -> Result<SiteConfig, SiteError> {
    if locales.is_empty() {
        return Err(SiteError::NoLocales);
    }

    let mut seen = HashSet::with_capacity(locales.len());
    let mut configs = BTreeMap::new();
    for descriptor in locales {
        if !seen.insert(descriptor.code.as_str()) {
            return Err(SiteError::DuplicateLocale(descriptor.code.clone()));
        }
        configs.insert(
            descriptor.code.clone(),
            build_locale_config(descriptor, registry)?,
        );
    }

    tracing::info!(
        locales = configs.len(),
        versions = registry.len(),
        latest = registry.latest(),
        "Assembled site config"
    );

    Ok(SiteConfig {
        title: settings.title.clone(),
        description: settings.description.clone(),
        locales: configs,
        sitemap: Sitemap {
            hostname: settings.hostname.clone(),
        },
        head: build_head(settings),
    })
}
