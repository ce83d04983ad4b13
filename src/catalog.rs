// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The flat catalog model shared by the parser, merger and
//! serializers.

use std::cmp::Ordering;

/// A single translatable message.
///
/// The derived ordering compares `context` first and `id` second,
/// byte by byte. This is the order used for all serialized output.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CatalogEntry {
    /// Disambiguates identical source strings. A leading `.` marks a
    /// top-level JSON key.
    pub context: String,
    /// The source text.
    pub id: String,
    /// The translated text. Several forms are joined with `" | "`.
    pub translation: String,
}

impl CatalogEntry {
    pub fn new(
        context: impl Into<String>,
        id: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        Self {
            context: context.into(),
            id: id.into(),
            translation: translation.into(),
        }
    }

    fn cmp_key(&self, context: &str, id: &str) -> Ordering {
        (self.context.as_str(), self.id.as_str()).cmp(&(context, id))
    }
}

/// A set of entries with unique `(context, id)` keys.
///
/// Entries are kept sorted by key, so lookups are logarithmic and
/// iteration yields the serialization order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, context: &str, id: &str) -> Result<usize, usize> {
        self.entries.binary_search_by(|entry| entry.cmp_key(context, id))
    }

    /// Look up the translation stored for `(context, id)`.
    pub fn get(&self, context: &str, id: &str) -> Option<&str> {
        self.position(context, id)
            .ok()
            .map(|idx| self.entries[idx].translation.as_str())
    }

    pub fn contains(&self, context: &str, id: &str) -> bool {
        self.position(context, id).is_ok()
    }

    /// Add `entry` to the catalog.
    ///
    /// If an entry with the same key exists, its translation is
    /// replaced and the old translation is returned.
    pub fn insert(&mut self, entry: CatalogEntry) -> Option<String> {
        match self.position(&entry.context, &entry.id) {
            Ok(idx) => Some(std::mem::replace(
                &mut self.entries[idx].translation,
                entry.translation,
            )),
            Err(idx) => {
                self.entries.insert(idx, entry);
                None
            }
        }
    }

    /// All entries, sorted by `(context, id)`.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> Vec<CatalogEntry> {
        self.entries
    }
}

impl Extend<CatalogEntry> for Catalog {
    /// Add all entries at once. For repeated keys the last entry wins,
    /// as with [`Catalog::insert`].
    fn extend<I: IntoIterator<Item = CatalogEntry>>(&mut self, iter: I) {
        self.entries.extend(iter);
        // Stable, so entries with equal keys keep their insertion order.
        self.entries.sort_by(|a, b| a.cmp_key(&b.context, &b.id));
        self.entries.dedup_by(|later, earlier| {
            if later.cmp_key(&earlier.context, &earlier.id).is_ne() {
                return false;
            }
            std::mem::swap(&mut earlier.translation, &mut later.translation);
            true
        });
    }
}

impl FromIterator<CatalogEntry> for Catalog {
    fn from_iter<I: IntoIterator<Item = CatalogEntry>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        catalog.extend(iter);
        catalog
    }
}

impl IntoIterator for Catalog {
    type Item = CatalogEntry;
    type IntoIter = std::vec::IntoIter<CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_entries_are_sorted_by_context_then_id() {
        let catalog = Catalog::from_iter([
            CatalogEntry::new("b", "a", "1"),
            CatalogEntry::new("a", "z", "2"),
            CatalogEntry::new("a", "b", "3"),
            CatalogEntry::new("", "c", "4"),
        ]);
        let keys = catalog
            .iter()
            .map(|entry| (entry.context.as_str(), entry.id.as_str()))
            .collect::<Vec<_>>();
        assert_eq!(keys, vec![("", "c"), ("a", "b"), ("a", "z"), ("b", "a")]);
    }

    #[test]
    fn test_sort_is_bytewise() {
        // Uppercase ASCII sorts before lowercase, and multi-byte
        // characters sort after all ASCII.
        let catalog = Catalog::from_iter([
            CatalogEntry::new(".été", "x", ""),
            CatalogEntry::new(".b", "x", ""),
            CatalogEntry::new(".B", "x", ""),
        ]);
        let contexts = catalog
            .iter()
            .map(|entry| entry.context.as_str())
            .collect::<Vec<_>>();
        assert_eq!(contexts, vec![".B", ".b", ".été"]);
    }

    #[test]
    fn test_insert_replaces_existing_key() {
        let mut catalog = Catalog::new();
        assert_eq!(catalog.insert(CatalogEntry::new("c", "id", "first")), None);
        assert_eq!(
            catalog.insert(CatalogEntry::new("c", "id", "second")),
            Some(String::from("first"))
        );
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("c", "id"), Some("second"));
    }

    #[test]
    fn test_same_id_in_different_contexts() {
        let catalog = Catalog::from_iter([
            CatalogEntry::new(".menu.open", "Open", "Ouvrir"),
            CatalogEntry::new(".door.open", "Open", "Ouvert"),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(".menu.open", "Open"), Some("Ouvrir"));
        assert_eq!(catalog.get(".door.open", "Open"), Some("Ouvert"));
        assert!(!catalog.contains("", "Open"));
    }

    #[test]
    fn test_from_iter_last_duplicate_wins() {
        let catalog = Catalog::from_iter([
            CatalogEntry::new("c", "id", "first"),
            CatalogEntry::new("a", "other", "x"),
            CatalogEntry::new("c", "id", "second"),
            CatalogEntry::new("c", "id", "third"),
        ]);
        assert_eq!(
            catalog.into_entries(),
            vec![
                CatalogEntry::new("a", "other", "x"),
                CatalogEntry::new("c", "id", "third"),
            ]
        );
    }

    #[test]
    fn test_extend_replaces_existing_key() {
        let mut catalog = Catalog::from_iter([
            CatalogEntry::new("b", "id", "old"),
            CatalogEntry::new("d", "id", "kept"),
        ]);
        catalog.extend([
            CatalogEntry::new("b", "id", "new"),
            CatalogEntry::new("a", "id", "added"),
        ]);
        assert_eq!(
            catalog.into_entries(),
            vec![
                CatalogEntry::new("a", "id", "added"),
                CatalogEntry::new("b", "id", "new"),
                CatalogEntry::new("d", "id", "kept"),
            ]
        );
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.get("", ""), None);
        assert_eq!(catalog.into_entries(), Vec::new());
    }
}
