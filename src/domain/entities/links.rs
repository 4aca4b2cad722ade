//! Insertion-ordered mapping of link relation names to links.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::link::Link;

/// Relation name to [`Link`] mapping that preserves insertion order.
///
/// Inserting under an existing relation replaces the link but keeps the
/// original position, so `self` stays first in a discovery document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Links {
    entries: Vec<(String, Link)>,
}

impl Links {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a link, returning the one previously stored under `rel`.
    pub fn insert(&mut self, rel: impl Into<String>, link: Link) -> Option<Link> {
        let rel = rel.into();
        match self.entries.iter_mut().find(|(name, _)| *name == rel) {
            Some((_, existing)) => Some(std::mem::replace(existing, link)),
            None => {
                self.entries.push((rel, link));
                None
            }
        }
    }

    pub fn get(&self, rel: &str) -> Option<&Link> {
        self.entries
            .iter()
            .find(|(name, _)| name == rel)
            .map(|(_, link)| link)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(relation, link)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Link)> {
        self.entries.iter().map(|(name, link)| (name.as_str(), link))
    }
}

impl Serialize for Links {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (rel, link) in &self.entries {
            map.serialize_entry(rel, link)?;
        }
        map.end()
    }
}
