use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

/// Parsed entries grouped by section name.
///
/// Backed by ordered sets, so duplicate entries within a section collapse
/// naturally. Looking up a section that was never populated yields an empty
/// set rather than an error, which keeps callers free of missing-section
/// special cases.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionMap<T: Ord> {
    sections: BTreeMap<String, BTreeSet<T>>,
    #[serde(skip)]
    empty: BTreeSet<T>,
}

impl<T: Ord> SectionMap<T> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            sections: BTreeMap::new(),
            empty: BTreeSet::new(),
        }
    }

    /// Add an entry to the named section, creating the section if needed.
    pub fn insert(&mut self, section: &str, entry: T) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(entry);
    }

    /// Names of all populated sections.
    pub fn sections(&self) -> Vec<&str> {
        self.sections.keys().map(String::as_str).collect()
    }

    /// Entries of the named section, or an empty set if it never appeared.
    pub fn section(&self, name: &str) -> &BTreeSet<T> {
        self.sections.get(name).unwrap_or(&self.empty)
    }

    /// True if no entry was ever inserted.
    pub fn is_empty(&self) -> bool {
        self.sections.values().all(BTreeSet::is_empty)
    }

    /// Total number of entries across all sections.
    pub fn total_entries(&self) -> usize {
        self.sections.values().map(BTreeSet::len).sum()
    }
}

impl<T: Ord> Default for SectionMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::SectionMap;

    #[test]
    fn insert_deduplicates_within_a_section() {
        let mut map = SectionMap::new();
        map.insert("hosts", "a.example".to_string());
        map.insert("hosts", "a.example".to_string());
        map.insert("hosts", "b.example".to_string());

        assert_eq!(map.section("hosts").len(), 2);
        assert_eq!(map.total_entries(), 2);
    }

    #[test]
    fn missing_section_is_an_empty_set_not_an_error() {
        let map: SectionMap<String> = SectionMap::new();
        assert!(map.section("never-populated").is_empty());
        assert!(map.sections().is_empty());
        assert!(map.is_empty());
    }

    #[test]
    fn sections_lists_every_populated_name() {
        let mut map = SectionMap::new();
        map.insert("b", 1u32);
        map.insert("a", 2u32);

        assert_eq!(map.sections(), vec!["a", "b"]);
    }
}
