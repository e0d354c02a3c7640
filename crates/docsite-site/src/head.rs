//! HTML head metadata tags.

use serde::ser::{SerializeMap, SerializeTuple};
use serde::{Serialize, Serializer};

use crate::assemble::GlobalSettings;

/// One `<head>` element: tag name plus attributes in insertion order.
///
/// Serializes as `[tag, {attr: value, ...}]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadTag {
    tag: String,
    attrs: Vec<(String, String)>,
}

impl HeadTag {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
        }
    }

    /// Append an attribute.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[must_use]
    pub fn attrs(&self) -> &[(String, String)] {
        &self.attrs
    }

    /// Value of the first attribute called `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

struct Attrs<'a>(&'a [(String, String)]);

impl Serialize for Attrs<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl Serialize for HeadTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.tag)?;
        tuple.serialize_element(&Attrs(&self.attrs))?;
        tuple.end()
    }
}

/// Build the fixed list of head tags: canonical link, icons, then Open Graph
/// and Twitter card metadata.
#[must_use]
pub fn build_head(settings: &GlobalSettings) -> Vec<HeadTag> {
    let canonical = settings.canonical_url();
    let og_image = settings.absolute_url(&settings.og_image);

    vec![
        HeadTag::new("link")
            .attr("rel", "canonical")
            .attr("href", canonical.as_str()),
        HeadTag::new("link")
            .attr("rel", "icon")
            .attr("type", "image/svg+xml")
            .attr("href", settings.logo.as_str()),
        HeadTag::new("link")
            .attr("rel", "apple-touch-icon")
            .attr("href", settings.touch_icon.as_str()),
        HeadTag::new("meta")
            .attr("property", "og:type")
            .attr("content", "website"),
        HeadTag::new("meta")
            .attr("property", "og:title")
            .attr("content", settings.title.as_str()),
        HeadTag::new("meta")
            .attr("property", "og:description")
            .attr("content", settings.description.as_str()),
        HeadTag::new("meta")
            .attr("property", "og:url")
            .attr("content", canonical),
        HeadTag::new("meta")
            .attr("property", "og:image")
            .attr("content", og_image),
        HeadTag::new("meta")
            .attr("name", "twitter:card")
            .attr("content", "summary_large_image"),
    ]
}
