//! Link entity representing one hyperlink in a HAL discovery document.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Errors that can occur while constructing a [`Link`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LinkError {
    #[error("HREF must not be null")]
    MissingHref,
}

/// Details for a link in a
/// [HAL](https://tools.ietf.org/html/draft-kelly-json-hal-08)-formatted response.
///
/// The `templated` flag is derived from the href once, at construction, and
/// cannot be set independently. A `Link` never changes after it is built.
///
/// Serializes as `{"href": "...", "templated": bool}`. Deserializing
/// re-derives `templated` from `href` and rejects a missing or `null` href.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawLink")]
pub struct Link {
    href: String,
    templated: bool,
}

impl Link {
    /// Creates a new link for the given href.
    pub fn new(href: impl Into<String>) -> Self {
        let href = href.into();
        let templated = href.contains('{');
        Self { href, templated }
    }

    /// Creates a new link from an optional href.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::MissingHref`] when `href` is `None`.
    pub fn try_new(href: Option<String>) -> Result<Self, LinkError> {
        href.map(Self::new).ok_or(LinkError::MissingHref)
    }

    /// Returns the href of the link.
    pub fn href(&self) -> &str {
        &self.href
    }

    /// Returns whether the href is a URI template.
    pub fn is_templated(&self) -> bool {
        self.templated
    }
}

impl TryFrom<Option<String>> for Link {
    type Error = LinkError;

    fn try_from(href: Option<String>) -> Result<Self, Self::Error> {
        Self::try_new(href)
    }
}

impl From<String> for Link {
    fn from(href: String) -> Self {
        Self::new(href)
    }
}

impl From<&str> for Link {
    fn from(href: &str) -> Self {
        Self::new(href)
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Link[href={}]", self.href)
    }
}

impl fmt::Debug for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Link").field("href", &self.href).finish()
    }
}

/// Wire shape accepted on deserialization. Any `templated` field is ignored.
#[derive(Deserialize)]
struct RawLink {
    #[serde(default)]
    href: Option<String>,
}

impl TryFrom<RawLink> for Link {
    type Error = LinkError;

    fn try_from(raw: RawLink) -> Result<Self, Self::Error> {
        Self::try_new(raw.href)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_href_is_not_templated() {
        let link = Link::new("/actuator/health");

        assert_eq!(link.href(), "/actuator/health");
        assert!(!link.is_templated());
    }

    #[test]
    fn test_href_with_brace_is_templated() {
        let link = Link::new("/actuator/health/{component}");

        assert_eq!(link.href(), "/actuator/health/{component}");
        assert!(link.is_templated());
    }

    #[test]
    fn test_empty_href_is_valid() {
        let link = Link::new("");

        assert_eq!(link.href(), "");
        assert!(!link.is_templated());
    }

    #[test]
    fn test_single_open_brace_is_enough() {
        assert!(Link::new("http://x/{").is_templated());
        assert!(!Link::new("http://x/}").is_templated());
    }

    #[test]
    fn test_href_is_kept_verbatim() {
        for href in ["  spaced  ", "http://x/a?b=c#d", "ünïcödé", "{}", "//"] {
            assert_eq!(Link::new(href).href(), href);
        }
    }

    #[test]
    fn test_try_new_rejects_missing_href() {
        let result = Link::try_new(None);

        assert_eq!(result.unwrap_err(), LinkError::MissingHref);
        assert_eq!(LinkError::MissingHref.to_string(), "HREF must not be null");
    }

    #[test]
    fn test_try_from_some() {
        let link = Link::try_from(Some("/actuator/{id}".to_string())).unwrap();

        assert!(link.is_templated());
    }

    #[test]
    fn test_display_contains_href() {
        let link = Link::new("http://x/{id}");

        assert_eq!(link.to_string(), "Link[href=http://x/{id}]");
        assert!(format!("{:?}", link).contains("http://x/{id}"));
    }

    #[test]
    fn test_equality_follows_href() {
        assert_eq!(Link::new("/a"), Link::from("/a"));
        assert_ne!(Link::new("/a"), Link::new("/b"));
    }

    #[test]
    fn test_serialize_always_emits_templated() {
        let value = serde_json::to_value(Link::new("/actuator/info")).unwrap();

        assert_eq!(value, json!({"href": "/actuator/info", "templated": false}));
    }

    #[test]
    fn test_deserialize_rederives_templated() {
        let link: Link =
            serde_json::from_value(json!({"href": "/x/{id}", "templated": false})).unwrap();

        assert!(link.is_templated());
    }

    #[test]
    fn test_deserialize_rejects_null_href() {
        let err = serde_json::from_value::<Link>(json!({"href": null})).unwrap_err();
        assert!(err.to_string().contains("HREF must not be null"));

        let err = serde_json::from_value::<Link>(json!({})).unwrap_err();
        assert!(err.to_string().contains("HREF must not be null"));
    }
}
