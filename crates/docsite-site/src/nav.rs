//! Navigation and sidebar entries.
//!
//! Both types validate their fields on construction and expose read-only
//! accessors, so a malformed entry never reaches the rendering engine.

use serde::Serialize;

use crate::error::SiteError;

/// Clickable navigation entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    text: String,
    link: String,
}

impl NavItem {
    /// Create a navigation entry.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::InvalidNavItem`] if `text` or `link` is empty.
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Result<Self, SiteError> {
        let text = text.into();
        let link = link.into();
        if text.trim().is_empty() {
            return Err(SiteError::InvalidNavItem(format!(
                "text cannot be empty (link: {link})"
            )));
        }
        if link.trim().is_empty() {
            return Err(SiteError::InvalidNavItem(format!(
                "link cannot be empty (text: {text})"
            )));
        }
        Ok(Self { text, link })
    }

    /// Create an entry whose fields are already known to be non-empty.
    pub(crate) fn from_parts(text: String, link: String) -> Self {
        debug_assert!(!text.is_empty() && !link.is_empty());
        Self { text, link }
    }

    /// Display text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Link target.
    #[must_use]
    pub fn link(&self) -> &str {
        &self.link
    }
}

/// Entry inside a sidebar group: a link or a nested group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SidebarEntry {
    Link(NavItem),
    Group(SidebarGroup),
}

impl From<NavItem> for SidebarEntry {
    fn from(item: NavItem) -> Self {
        Self::Link(item)
    }
}

impl From<SidebarGroup> for SidebarEntry {
    fn from(group: SidebarGroup) -> Self {
        Self::Group(group)
    }
}

/// Named, optionally collapsible cluster of sidebar entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarGroup {
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    collapsed: Option<bool>,
    items: Vec<SidebarEntry>,
}

impl SidebarGroup {
    /// Create a sidebar group.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::InvalidSidebarGroup`] if `text` is empty or the
    /// group has no entries.
    pub fn new(
        text: impl Into<String>,
        collapsed: Option<bool>,
        items: Vec<SidebarEntry>,
    ) -> Result<Self, SiteError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(SiteError::InvalidSidebarGroup(
                "text cannot be empty".to_owned(),
            ));
        }
        if items.is_empty() {
            return Err(SiteError::InvalidSidebarGroup(format!(
                "group \"{text}\" has no items"
            )));
        }
        Ok(Self {
            text,
            collapsed,
            items,
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn collapsed(&self) -> Option<bool> {
        self.collapsed
    }

    #[must_use]
    pub fn items(&self) -> &[SidebarEntry] {
        &self.items
    }

    /// All links in this group, depth-first.
    #[must_use]
    pub fn links(&self) -> Vec<&NavItem> {
        let mut links = Vec::new();
        collect_links(&self.items, &mut links);
        links
    }
}

fn collect_links<'a>(entries: &'a [SidebarEntry], out: &mut Vec<&'a NavItem>) {
    for entry in entries {
        match entry {
            SidebarEntry::Link(item) => out.push(item),
            SidebarEntry::Group(group) => collect_links(&group.items, out),
        }
    }
}
