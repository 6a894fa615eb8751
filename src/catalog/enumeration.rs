//! Name to value tables for genres and moods.

use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EnumerationEntry {
    pub name: String,
    pub value: u32,
}

/// Ordered, read-only mapping from a display name to a provider filter id.
///
/// Names are unique and matched case-sensitively. The first occurrence of a
/// duplicated name wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Enumeration {
    entries: Vec<EnumerationEntry>,
}

impl Enumeration {
    pub fn from_static(pairs: &[(&str, u32)]) -> Self {
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), *value))
            .collect()
    }

    /// Build from a TOML-style table. Entries come out sorted by name.
    pub fn from_map(map: BTreeMap<String, u32>) -> Self {
        map.into_iter().collect()
    }

    pub fn get(&self, name: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.name.as_str()).collect()
    }

    pub fn entries(&self) -> &[EnumerationEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, u32)> for Enumeration {
    fn from_iter<I: IntoIterator<Item = (String, u32)>>(iter: I) -> Self {
        let mut enumeration = Enumeration::default();
        for (name, value) in iter {
            let name = name.trim().to_string();
            if name.is_empty() || enumeration.contains(&name) {
                continue;
            }
            enumeration.entries.push(EnumerationEntry { name, value });
        }
        enumeration
    }
}
