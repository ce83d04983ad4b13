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

//! Helpers for keeping gettext catalogs of several locales in sync.
//!
//! One locale (usually `en-US`) is the base locale. Its PO file
//! defines which messages exist. Every other locale is merged against
//! it: messages the base locale no longer has are dropped, and
//! messages the locale has not translated yet fall back to the base
//! text. The merged catalogs are written back as sorted PO files and
//! exported as flat JSON objects for consumption by JavaScript
//! builds.
//!
//! ```
//! use i18n_catalog_sync::{jsonify, merge, parse_po};
//!
//! let base = parse_po(b"msgctxt \".greeting\"\nmsgid \"Hello\"\nmsgstr \"Hello\"\n");
//! let fr = parse_po(b"msgctxt \".greeting\"\nmsgid \"Hello\"\nmsgstr \"Bonjour\"\n");
//! let merged = merge(&base, &fr);
//! assert_eq!(
//!     jsonify(merged.entries()).unwrap(),
//!     "{\n  \"greeting\": \"Bonjour\"\n}"
//! );
//! ```

pub mod catalog;
mod error;
pub mod json;
pub mod merge;
pub mod parse;
pub mod pipeline;
pub mod po;

pub use catalog::{Catalog, CatalogEntry};
pub use error::{Error, Result};
pub use json::{json_key, json_to_po, jsonify, script_module};
pub use merge::{merge, merge_po, merge_with_stats, MergeStats};
pub use parse::{
    parse_po, parse_po_with, try_parse_po, try_parse_po_with, Gettext, PoGrammar, RawMessage,
};
pub use po::{escape, poify};
