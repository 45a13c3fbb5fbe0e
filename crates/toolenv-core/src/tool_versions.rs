//! Insertion-ordered tool/version map

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::ToolVersionEntry;

/// Tool name to version mapping, in manifest order.
///
/// Names are unique. Inserting a name that already exists replaces its
/// version but keeps the position of the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolVersions {
    entries: Vec<ToolVersionEntry>,
    /// Position of each name in `entries`.
    index: HashMap<String, usize>,
}

impl ToolVersions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse manifest text held in memory.
    pub fn parse_str(content: &str) -> Self {
        content.lines().map(ToolVersionEntry::parse).collect()
    }

    /// Build the map from a fallible line stream.
    ///
    /// Stops at the first error; entries read before it are discarded.
    pub fn from_lines<I, S, E>(lines: I) -> Result<Self, E>
    where
        I: IntoIterator<Item = Result<S, E>>,
        S: AsRef<str>,
    {
        let mut tools = Self::new();
        for line in lines {
            tools.insert(ToolVersionEntry::parse(line?.as_ref()));
        }
        Ok(tools)
    }

    /// Insert an entry, returning the version it replaced.
    pub fn insert(&mut self, entry: ToolVersionEntry) -> Option<Option<String>> {
        let existing = self.index.get(&entry.name).copied();
        match existing {
            Some(pos) => {
                tracing::debug!(tool = %entry.name, "duplicate tool, later version wins");
                Some(std::mem::replace(&mut self.entries[pos].version, entry.version))
            }
            None => {
                self.index.insert(entry.name.clone(), self.entries.len());
                self.entries.push(entry);
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&ToolVersionEntry> {
        self.index.get(name).map(|&pos| &self.entries[pos])
    }

    /// Version for `name`. `None` when the tool is missing or has no version.
    pub fn version(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|e| e.version.as_deref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ToolVersionEntry> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }
}

impl FromIterator<ToolVersionEntry> for ToolVersions {
    fn from_iter<T: IntoIterator<Item = ToolVersionEntry>>(iter: T) -> Self {
        let mut tools = Self::new();
        for entry in iter {
            tools.insert(entry);
        }
        tools
    }
}

impl IntoIterator for ToolVersions {
    type Item = ToolVersionEntry;
    type IntoIter = std::vec::IntoIter<ToolVersionEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a ToolVersions {
    type Item = &'a ToolVersionEntry;
    type IntoIter = std::slice::Iter<'a, ToolVersionEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Serializes as a map in manifest order; a missing version is `null`.
impl Serialize for ToolVersions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.name, &entry.version)?;
        }
        map.end()
    }
}
