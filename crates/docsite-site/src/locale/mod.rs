//! Locale descriptors and per-locale configuration.
//!
//! A [`LocaleDescriptor`] is static data: display strings, logo, social
//! links, footer and the shape of the sidebar. [`build_locale_config`]
//! combines it with the version registry into a [`LocaleConfig`].
//!
//! Sidebar links are interpolated from page slugs against the latest
//! version only: older versions are reachable through the navigation menu
//! but are never linked from the sidebar.

mod en;
mod zh;

use std::collections::BTreeMap;

use docsite_manifest::VersionRegistry;
use serde::{Deserialize, Serialize};

use crate::error::SiteError;
use crate::nav::{NavItem, SidebarEntry, SidebarGroup};
use crate::navigation::build_navigation;

/// Site logo.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Logo {
    /// Image path, relative to the site root.
    pub src: String,
    /// Alternative text.
    pub alt: String,
}

/// Link to an external profile (GitHub, Discord, ...).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Icon name understood by the rendering engine.
    pub icon: String,
    pub link: String,
}

/// Page footer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    pub message: String,
    pub copyright: String,
}

/// Sidebar link template: display text plus a page slug under the latest
/// version (`""` for the version index).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SidebarPage {
    pub text: String,
    pub page: String,
}

/// Entry of a sidebar template group.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SidebarTemplateEntry {
    Page(SidebarPage),
    Group(SidebarTemplateGroup),
}

/// Sidebar group template.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SidebarTemplateGroup {
    pub text: String,
    #[serde(default)]
    pub collapsed: Option<bool>,
    pub items: Vec<SidebarTemplateEntry>,
}

/// Sidebar shape of a locale, independent of locale code and version.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct SidebarTemplate {
    pub groups: Vec<SidebarTemplateGroup>,
}

impl SidebarTemplate {
    /// Interpolate the template into sidebar groups under `/{locale}/{version}`.
    ///
    /// # Errors
    ///
    /// Returns a validation error if any group or link ends up empty.
    pub fn render(&self, locale: &str, version: &str) -> Result<Vec<SidebarGroup>, SiteError> {
        let base = format!("/{locale}/{version}");
        self.groups
            .iter()
            .map(|group| render_group(group, &base))
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

fn render_group(group: &SidebarTemplateGroup, base: &str) -> Result<SidebarGroup, SiteError> {
    let items = group
        .items
        .iter()
        .map(|entry| match entry {
            SidebarTemplateEntry::Page(page) => {
                NavItem::new(page.text.as_str(), page_link(base, &page.page)).map(SidebarEntry::from)
            }
            SidebarTemplateEntry::Group(nested) => render_group(nested, base).map(SidebarEntry::from),
        })
        .collect::<Result<Vec<_>, _>>()?;
    SidebarGroup::new(group.text.as_str(), group.collapsed, items)
}

fn page_link(base: &str, page: &str) -> String {
    let page = page.trim_matches('/');
    if page.is_empty() {
        format!("{base}/")
    } else {
        format!("{base}/{page}")
    }
}

/// Static per-locale data.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LocaleDescriptor {
    /// Locale code used in URLs (`en`, `zh`).
    ///
    /// Filled from the table key when declared in `docsite.toml`.
    #[serde(default)]
    pub code: String,
    /// Label shown in the language switcher.
    pub label: String,
    /// HTML `lang` attribute.
    pub lang: String,
    pub title: String,
    pub description: String,
    pub logo: Logo,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    pub footer: Footer,
    #[serde(default)]
    pub sidebar: SidebarTemplate,
}

impl LocaleDescriptor {
    /// Key of the sidebar tree: `/{locale}/{latest}`.
    #[must_use]
    pub fn sidebar_key(&self, latest: &str) -> String {
        format!("/{}/{latest}", self.code)
    }

    fn validate(&self) -> Result<(), SiteError> {
        let invalid = |message: &str| SiteError::InvalidLocale {
            code: self.code.clone(),
            message: message.to_owned(),
        };

        if self.code.is_empty() {
            return Err(invalid("code cannot be empty"));
        }
        if self.code.contains(['/', '?', '#']) || self.code.contains(char::is_whitespace) {
            return Err(invalid("code must be a single URL path segment"));
        }
        if self.lang.trim().is_empty() {
            return Err(invalid("lang cannot be empty"));
        }
        if self
            .social_links
            .iter()
            .any(|social| social.icon.trim().is_empty() || social.link.trim().is_empty())
        {
            return Err(invalid("social links need both icon and link"));
        }
        Ok(())
    }
}

/// Fully resolved configuration of one locale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleConfig {
    pub label: String,
    pub lang: String,
    pub title: String,
    pub description: String,
    pub logo: Logo,
    pub nav: Vec<NavItem>,
    /// Sidebar trees keyed by path prefix.
    pub sidebar: BTreeMap<String, Vec<SidebarGroup>>,
    pub social_links: Vec<SocialLink>,
    pub footer: Footer,
}

/// Build one locale's configuration.
///
/// Pure function of its inputs; locales can be built in any order.
///
/// # Errors
///
/// Returns [`SiteError::InvalidLocale`] for a malformed descriptor and
/// sidebar validation errors for an invalid sidebar template.
pub fn build_locale_config(
    descriptor: &LocaleDescriptor,
    registry: &VersionRegistry,
) -> Result<LocaleConfig, SiteError> {
    descriptor.validate()?;

    let latest = registry.latest();
    let mut sidebar = BTreeMap::new();
    if !descriptor.sidebar.is_empty() {
        sidebar.insert(
            descriptor.sidebar_key(latest),
            descriptor.sidebar.render(&descriptor.code, latest)?,
        );
    }

    tracing::debug!(locale = %descriptor.code, latest, "Built locale config");

    Ok(LocaleConfig {
        label: descriptor.label.clone(),
        lang: descriptor.lang.clone(),
        title: descriptor.title.clone(),
        description: descriptor.description.clone(),
        logo: descriptor.logo.clone(),
        nav: build_navigation(&descriptor.code, registry),
        sidebar,
        social_links: descriptor.social_links.clone(),
        footer: descriptor.footer.clone(),
    })
}

/// Locales shipped with docsite: English and Simplified Chinese.
#[must_use]
pub fn builtin_locales() -> Vec<LocaleDescriptor> {
    vec![en::descriptor(), zh::descriptor()]
}

/// Look up a descriptor by locale code.
///
/// # Errors
///
/// Returns [`SiteError::UnknownLocale`] if no descriptor has that code.
pub fn find_locale<'a>(
    locales: &'a [LocaleDescriptor],
    code: &str,
) -> Result<&'a LocaleDescriptor, SiteError> {
    locales
        .iter()
        .find(|locale| locale.code == code)
        .ok_or_else(|| SiteError::UnknownLocale(code.to_owned()))
}

fn page(text: &str, slug: &str) -> SidebarTemplateEntry {
    SidebarTemplateEntry::Page(SidebarPage {
        text: text.to_owned(),
        page: slug.to_owned(),
    })
}

fn group(
    text: &str,
    collapsed: Option<bool>,
    items: Vec<SidebarTemplateEntry>,
) -> SidebarTemplateGroup {
    SidebarTemplateGroup {
        text: text.to_owned(),
        collapsed,
        items,
    }
}
