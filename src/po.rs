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

//! Write entries back out as a sorted PO file.

use crate::catalog::CatalogEntry;

/// Escape `text` for use inside a quoted PO string.
///
/// Newlines, carriage returns, tabs and double quotes are replaced,
/// in that order. Backslashes are left alone.
///
/// # Examples
///
/// ```
/// use i18n_catalog_sync::escape;
///
/// assert_eq!(escape("say \"hi\"\n"), "say \\\"hi\\\"\\n");
/// ```
pub fn escape(text: &str) -> String {
    text.replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
        .replace('"', "\\\"")
}

/// Sort `entries` by context and id.
///
/// The order is total on `(context, id)`. Keys are unique within a
/// catalog, but a plain slice may repeat them, so the translation is
/// compared last to keep the output independent of the input order.
pub(crate) fn sorted(entries: &[CatalogEntry]) -> Vec<&CatalogEntry> {
    let mut sorted = entries.iter().collect::<Vec<_>>();
    sorted.sort();
    sorted
}

/// Serialize `entries` as PO content.
///
/// One `msgctxt`/`msgid`/`msgstr` block is written per entry, each
/// followed by a blank line. The input order does not matter.
pub fn poify(entries: &[CatalogEntry]) -> Vec<u8> {
    let mut output = String::new();
    for entry in sorted(entries) {
        output.push_str(&format!(
            "msgctxt \"{}\"\nmsgid \"{}\"\nmsgstr \"{}\"\n\n",
            escape(&entry.context),
            escape(&entry.id),
            escape(&entry.translation),
        ));
    }
    output.into_bytes()
}
