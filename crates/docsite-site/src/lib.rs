//! Site configuration assembly for docsite.
//!
//! This crate turns a [`VersionRegistry`] and a set of [`LocaleDescriptor`]s
//! into the [`SiteConfig`] handed to the static-site rendering engine:
//!
//! - [`build_navigation`]: per-locale version menu with a latest marker and
//!   a trailing changelog link
//! - [`build_locale_config`]: one locale's navigation, sidebar and metadata
//! - [`assemble_site_config`]: every locale plus global settings and head tags
//!
//! Everything here is a pure function of its inputs. No I/O happens after the
//! manifest has been loaded.
//!
//! # Quick Start
//!
//! ```
//! use docsite_manifest::VersionRegistry;
//! use docsite_site::{GlobalSettings, assemble_site_config, builtin_locales};
//!
//! let registry = VersionRegistry::new(
//!     vec!["v1".to_owned(), "v2".to_owned()],
//!     "v2".to_owned(),
//! )
//! .unwrap();
//! let settings = GlobalSettings::new("Docsite", "Versioned docs", "https://docs.example.com");
//!
//! let config = assemble_site_config(&registry, &builtin_locales(), &settings).unwrap();
//! assert_eq!(config.locales["en"].nav[1].text(), "v2 (latest)");
//! ```

mod assemble;
mod error;
mod head;
mod locale;
mod nav;
mod navigation;

pub use assemble::{GlobalSettings, SiteConfig, Sitemap, assemble_site_config};
pub use error::SiteError;
pub use head::{HeadTag, build_head};
pub use locale::{
    Footer, LocaleConfig, LocaleDescriptor, Logo, SidebarPage, SidebarTemplate,
    SidebarTemplateEntry, SidebarTemplateGroup, SocialLink, build_locale_config,
    builtin_locales, find_locale,
};
pub use nav::{NavItem, SidebarEntry, SidebarGroup};
pub use navigation::{CHANGELOG_TEXT, CHANGELOG_URL, LATEST_SUFFIX, build_navigation};

pub use docsite_manifest::VersionRegistry;
