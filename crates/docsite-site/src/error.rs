//! Site assembly errors.

/// Error returned while building navigation, sidebars or the site config.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("Invalid nav item: {0}")]
    InvalidNavItem(String),

    #[error("Invalid sidebar group: {0}")]
    InvalidSidebarGroup(String),

    #[error("Invalid locale \"{code}\": {message}")]
    InvalidLocale { code: String, message: String },

    #[error("No locales configured")]
    NoLocales,

    #[error("Locale \"{0}\" is declared more than once")]
    DuplicateLocale(String),

    #[error("Unknown locale \"{0}\"")]
    UnknownLocale(String),
}
