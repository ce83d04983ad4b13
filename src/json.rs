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

//! Export catalogs as flat JSON objects and import them again.
//!
//! The JSON key of an entry is derived from its context. Contexts
//! starting with `.` are the convention for keys meant to end up in
//! JSON, and the dot is removed. Importing adds the dot back.

use crate::catalog::CatalogEntry;
use crate::error::{Error, Result};
use crate::po::{poify, sorted};
use std::collections::{BTreeMap, HashMap};

/// Derive the JSON key for `context`.
///
/// Surrounding whitespace is trimmed and one leading `.` is removed.
/// Returns `None` if nothing is left.
///
/// # Examples
///
/// ```
/// use i18n_catalog_sync::json_key;
///
/// assert_eq!(json_key(".menu.open"), Some("menu.open"));
/// assert_eq!(json_key(" title "), Some("title"));
/// assert_eq!(json_key(""), None);
/// ```
pub fn json_key(context: &str) -> Option<&str> {
    let trimmed = context.trim();
    let key = trimmed.strip_prefix('.').unwrap_or(trimmed);
    (!key.is_empty()).then_some(key)
}

fn json_string(text: &str) -> String {
    serde_json::Value::from(text).to_string()
}

/// Serialize `entries` as a flat JSON object.
///
/// Entries are written in `(context, id)` order, one per line with
/// two spaces of indentation. An empty slice gives an empty string,
/// not `{}`.
///
/// Fails with [`Error::EmptyJsonKey`] if a context has no usable key,
/// see [`json_key`].
pub fn jsonify(entries: &[CatalogEntry]) -> Result<String> {
    if entries.is_empty() {
        return Ok(String::new());
    }

    let mut output = String::from("{\n");
    for (idx, entry) in sorted(entries).into_iter().enumerate() {
        let key = json_key(&entry.context).ok_or_else(|| Error::EmptyJsonKey {
            id: entry.id.clone(),
        })?;
        if idx > 0 {
            output.push_str(",\n");
        }
        output.push_str("  ");
        output.push_str(&json_string(key));
        output.push_str(": ");
        output.push_str(&json_string(&entry.translation));
    }
    output.push_str("\n}");
    Ok(output)
}

/// Wrap JSON output as a JavaScript module.
pub fn script_module(json: &str) -> String {
    format!("export default {json}")
}

/// Build PO content from a base locale JSON export and a translated
/// JSON export.
///
/// Every key `k` of `base_json` becomes an entry with context `.k`
/// and the base text as id. The translation is taken from
/// `target_json`, or left empty when the key is missing there.
///
/// Both payloads must be flat objects with string values, otherwise
/// [`Error::Json`] is returned.
pub fn json_to_po(base_json: &[u8], target_json: &[u8]) -> Result<Vec<u8>> {
    let base: BTreeMap<String, String> =
        serde_json::from_slice(base_json).map_err(|source| Error::Json {
            payload: "base",
            source,
        })?;
    let mut target: HashMap<String, String> =
        serde_json::from_slice(target_json).map_err(|source| Error::Json {
            payload: "target",
            source,
        })?;

    let entries = base
        .into_iter()
        .map(|(key, id)| CatalogEntry {
            translation: target.remove(&key).unwrap_or_default(),
            context: format!(".{key}"),
            id,
        })
        .collect::<Vec<_>>();
    Ok(poify(&entries))
}
