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

//! Merge a locale catalog against the base catalog.

use crate::catalog::{Catalog, CatalogEntry};
use crate::parse::parse_po;
use crate::po::poify;

/// Counts describing the outcome of a merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Number of entries in the merged catalog, always the base size.
    pub total: usize,
    /// Entries whose translation came from the target catalog.
    pub translated: usize,
    /// Entries which fell back to the base translation.
    pub fallback: usize,
    /// Target entries without a base counterpart, which were dropped.
    pub dropped: usize,
}

/// Merge `target` into the structure of `base`.
///
/// The result has exactly the keys of `base`. Each translation is
/// taken from `target` if it has the key, otherwise the base
/// translation is used as a placeholder. Entries only found in
/// `target` are dropped.
pub fn merge(base: &Catalog, target: &Catalog) -> Catalog {
    merge_with_stats(base, target).0
}

/// Like [`merge`], but also report how each entry was resolved.
pub fn merge_with_stats(base: &Catalog, target: &Catalog) -> (Catalog, MergeStats) {
    let mut stats = MergeStats::default();
    let mut merged = Vec::with_capacity(base.len());
    for entry in base {
        let translation = match target.get(&entry.context, &entry.id) {
            Some(translation) => {
                stats.translated += 1;
                translation
            }
            None => {
                stats.fallback += 1;
                entry.translation.as_str()
            }
        };
        merged.push(CatalogEntry {
            context: entry.context.clone(),
            id: entry.id.clone(),
            translation: translation.to_string(),
        });
    }
    stats.total = merged.len();
    stats.dropped = target.len() - stats.translated;
    (Catalog::from_iter(merged), stats)
}

/// Merge the PO content `target_po` against `base_po`.
///
/// Both inputs are parsed with [`parse_po`] and the merged catalog is
/// returned as PO content. A malformed `base_po` parses as an empty
/// catalog and therefore yields empty output.
pub fn merge_po(base_po: &[u8], target_po: &[u8]) -> Vec<u8> {
    let base = parse_po(base_po);
    let target = parse_po(target_po);
    poify(merge(&base, &target).entries())
}
