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

//! Synchronize all PO files in a directory.
//!
//! This file contains the main logic used by the binary `i18n-sync`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::json::{json_to_po, jsonify, script_module};
use crate::merge::merge_with_stats;
use crate::parse::parse_po;
use crate::po::poify;
use crate::Catalog;

pub const DEFAULT_BASE_LOCALE: &str = "en-US";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOptions {
    /// Locale whose PO file defines the messages, e.g. `en-US` for
    /// `en-US.po`.
    pub base_locale: String,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            base_locale: String::from(DEFAULT_BASE_LOCALE),
        }
    }
}

/// Files written by [`sync_directory`], in the order they were
/// written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub written: Vec<PathBuf>,
}

impl SyncReport {
    fn write(&mut self, path: PathBuf, contents: impl AsRef<[u8]>) -> anyhow::Result<()> {
        fs::write(&path, contents).with_context(|| format!("Could not write {}", path.display()))?;
        tracing::info!("written to {}", path.display());
        self.written.push(path);
        Ok(())
    }

    /// Write `json` and its `.js` wrapper next to `po_path`.
    fn export(&mut self, po_path: &Path, json: &str) -> anyhow::Result<()> {
        self.write(po_path.with_extension("json"), json)?;
        self.write(po_path.with_extension("js"), script_module(json))?;
        Ok(())
    }
}

fn export_json(po_path: &Path, catalog: &Catalog) -> anyhow::Result<String> {
    jsonify(catalog.entries())
        .with_context(|| format!("Could not export {} as JSON", po_path.display()))
}

/// Returns the paths of the locale PO files in `directory`, sorted by
/// file name. The base locale file is not included.
fn locale_files(directory: &Path, base_file_name: &str) -> anyhow::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    let entries = fs::read_dir(directory)
        .with_context(|| format!("Could not read directory {}", directory.display()))?;
    for entry in entries {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            continue;
        }
        let path = entry.path();
        if path.extension().map_or(true, |ext| ext != "po") {
            continue;
        }
        if entry.file_name() == base_file_name {
            continue;
        }
        paths.push(path);
    }
    paths.sort();
    Ok(paths)
}

/// Merge every locale PO file in `directory` against the base locale
/// and export JSON for all of them.
///
/// Each `<locale>.po` is rewritten with the merged catalog, and
/// `<locale>.json` and `<locale>.js` are written next to it. The base
/// locale is exported last.
///
/// Merged catalogs have the keys of the base catalog, so the base
/// export is checked before any file is written.
pub fn sync_directory(directory: &Path, options: &SyncOptions) -> anyhow::Result<SyncReport> {
    let base_file_name = format!("{}.po", options.base_locale);
    let base_path = directory.join(&base_file_name);
    let base_po =
        fs::read(&base_path).with_context(|| format!("Could not read {}", base_path.display()))?;
    let base = parse_po(&base_po);
    if base.is_empty() {
        tracing::warn!("{} has no messages", base_path.display());
    }
    let base_json = export_json(&base_path, &base)?;

    let mut report = SyncReport::default();
    for path in locale_files(directory, &base_file_name)? {
        let target_po =
            fs::read(&path).with_context(|| format!("Could not read {}", path.display()))?;
        let (merged, stats) = merge_with_stats(&base, &parse_po(&target_po));
        tracing::debug!(
            total = stats.total,
            translated = stats.translated,
            fallback = stats.fallback,
            dropped = stats.dropped,
            "merged {}",
            path.display()
        );
        let json = export_json(&path, &merged)?;
        report.write(path.clone(), poify(merged.entries()))?;
        report.export(&path, &json)?;
    }

    report.export(&base_path, &base_json)?;
    tracing::info!("done.");
    Ok(report)
}

/// Build a PO file from a base locale JSON export and a translated
/// JSON export, see [`json_to_po`].
pub fn import_json(base_json: &Path, target_json: &Path, output: &Path) -> anyhow::Result<()> {
    let base =
        fs::read(base_json).with_context(|| format!("Could not read {}", base_json.display()))?;
    let target = fs::read(target_json)
        .with_context(|| format!("Could not read {}", target_json.display()))?;
    let po = json_to_po(&base, &target).with_context(|| {
        format!(
            "Could not convert {} and {} to PO",
            base_json.display(),
            target_json.display()
        )
    })?;
    fs::write(output, po).with_context(|| format!("Could not write {}", output.display()))?;
    tracing::info!("written to {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const EN_US: &str = "msgid \"\"\n\
                         msgstr \"\"\n\
                         \"Content-Type: text/plain; charset=UTF-8\\n\"\n\
                         \n\
                         msgctxt \".greeting\"\n\
                         msgid \"Hello\"\n\
                         msgstr \"Hello\"\n\
                         \n\
                         msgctxt \".farewell\"\n\
                         msgid \"Goodbye\"\n\
                         msgstr \"Goodbye\"\n";

    const FR: &str = "msgctxt \".greeting\"\n\
                      msgid \"Hello\"\n\
                      msgstr \"Bonjour\"\n\
                      \n\
                      msgctxt \".obsolete\"\n\
                      msgid \"Old\"\n\
                      msgstr \"Vieux\"\n";

    fn create_dir(files: &[(&str, &str)]) -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        for (name, contents) in files {
            fs::write(dir.path().join(name), contents).unwrap();
        }
        dir
    }

    fn read(dir: &TempDir, name: &str) -> String {
        fs::read_to_string(dir.path().join(name)).unwrap()
    }

    #[test]
    fn test_sync_directory() {
        let dir = create_dir(&[("en-US.po", EN_US), ("fr.po", FR)]);
        let report = sync_directory(dir.path(), &SyncOptions::default()).unwrap();

        let written = report
            .written
            .iter()
            .map(|path| path.file_name().unwrap().to_str().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(
            written,
            vec!["fr.po", "fr.json", "fr.js", "en-US.json", "en-US.js"]
        );

        assert_eq!(
            read(&dir, "fr.po"),
            "msgctxt \".farewell\"\nmsgid \"Goodbye\"\nmsgstr \"Goodbye\"\n\n\
             msgctxt \".greeting\"\nmsgid \"Hello\"\nmsgstr \"Bonjour\"\n\n"
        );
        assert_eq!(
            read(&dir, "fr.json"),
            "{\n  \"farewell\": \"Goodbye\",\n  \"greeting\": \"Bonjour\"\n}"
        );
        assert_eq!(
            read(&dir, "fr.js"),
            "export default {\n  \"farewell\": \"Goodbye\",\n  \"greeting\": \"Bonjour\"\n}"
        );
        assert_eq!(
            read(&dir, "en-US.json"),
            "{\n  \"farewell\": \"Goodbye\",\n  \"greeting\": \"Hello\"\n}"
        );
        // The base file itself is left untouched.
        assert_eq!(read(&dir, "en-US.po"), EN_US);
    }

    #[test]
    fn test_sync_directory_is_idempotent() {
        let dir = create_dir(&[("en-US.po", EN_US), ("fr.po", FR)]);
        sync_directory(dir.path(), &SyncOptions::default()).unwrap();
        let first = read(&dir, "fr.po");
        sync_directory(dir.path(), &SyncOptions::default()).unwrap();
        assert_eq!(read(&dir, "fr.po"), first);
        assert!(first.contains("msgid \"Hello\"\nmsgstr \"Bonjour\"\n"));
        assert!(read(&dir, "fr.json").contains("\"greeting\": \"Bonjour\""));
    }

    #[test]
    fn test_sync_directory_keeps_translations_of_own_output() {
        // The merged file has no header entry and must still parse.
        let dir = create_dir(&[("en-US.po", EN_US), ("fr.po", FR)]);
        sync_directory(dir.path(), &SyncOptions::default()).unwrap();
        fs::write(
            dir.path().join("en-US.po"),
            format!("{EN_US}\nmsgctxt \".new\"\nmsgid \"New\"\nmsgstr \"New\"\n"),
        )
        .unwrap();
        sync_directory(dir.path(), &SyncOptions::default()).unwrap();
        assert_eq!(
            read(&dir, "fr.po"),
            "msgctxt \".farewell\"\nmsgid \"Goodbye\"\nmsgstr \"Goodbye\"\n\n\
             msgctxt \".greeting\"\nmsgid \"Hello\"\nmsgstr \"Bonjour\"\n\n\
             msgctxt \".new\"\nmsgid \"New\"\nmsgstr \"New\"\n\n"
        );
    }

    #[test]
    fn test_sync_directory_invalid_key_writes_nothing() {
        let base = format!("{EN_US}\nmsgid \"No context\"\nmsgstr \"No context\"\n");
        let dir = create_dir(&[("en-US.po", base.as_str()), ("fr.po", FR)]);
        let err = sync_directory(dir.path(), &SyncOptions::default()).unwrap_err();
        assert!(err.to_string().contains("en-US.po"));
        assert_eq!(read(&dir, "fr.po"), FR);
        assert!(!dir.path().join("fr.json").exists());
        assert!(!dir.path().join("en-US.json").exists());
    }

    #[test]
    fn test_sync_directory_skips_other_files() {
        let dir = create_dir(&[("en-US.po", EN_US), ("notes.txt", "hello"), ("de.pot", "")]);
        fs::create_dir(dir.path().join("nested.po")).unwrap();
        let report = sync_directory(dir.path(), &SyncOptions::default()).unwrap();
        assert_eq!(report.written.len(), 2);
        assert_eq!(read(&dir, "notes.txt"), "hello");
    }

    #[test]
    fn test_sync_directory_custom_base_locale() {
        let dir = create_dir(&[("de.po", EN_US), ("fr.po", FR)]);
        let options = SyncOptions {
            base_locale: String::from("de"),
        };
        sync_directory(dir.path(), &options).unwrap();
        assert!(dir.path().join("de.json").exists());
        assert!(dir.path().join("fr.json").exists());
    }

    #[test]
    fn test_sync_directory_missing_base() {
        let dir = create_dir(&[("fr.po", FR)]);
        let err = sync_directory(dir.path(), &SyncOptions::default()).unwrap_err();
        assert!(err.to_string().contains("en-US.po"));
    }

    #[test]
    fn test_sync_directory_empty_catalog() {
        // An empty base catalog empties every locale and exports
        // empty JSON.
        let dir = create_dir(&[("en-US.po", ""), ("fr.po", FR)]);
        sync_directory(dir.path(), &SyncOptions::default()).unwrap();
        assert_eq!(read(&dir, "fr.po"), "");
        assert_eq!(read(&dir, "fr.json"), "");
        assert_eq!(read(&dir, "fr.js"), "export default ");
    }

    #[test]
    fn test_import_json() {
        let dir = create_dir(&[
            ("en-US.json", r#"{"greeting": "Hello", "farewell": "Goodbye"}"#),
            ("fr.json", r#"{"greeting": "Bonjour"}"#),
        ]);
        let output = dir.path().join("fr.po");
        import_json(
            &dir.path().join("en-US.json"),
            &dir.path().join("fr.json"),
            &output,
        )
        .unwrap();
        assert_eq!(
            read(&dir, "fr.po"),
            "msgctxt \".farewell\"\nmsgid \"Goodbye\"\nmsgstr \"\"\n\n\
             msgctxt \".greeting\"\nmsgid \"Hello\"\nmsgstr \"Bonjour\"\n\n"
        );
    }

    #[test]
    fn test_import_json_invalid() {
        let dir = create_dir(&[("en-US.json", r#"{"a": ["b"]}"#), ("fr.json", "{}")]);
        let output = dir.path().join("fr.po");
        let err = import_json(
            &dir.path().join("en-US.json"),
            &dir.path().join("fr.json"),
            &output,
        )
        .unwrap_err();
        assert!(err.downcast_ref::<crate::Error>().is_some());
        assert!(!output.exists());
    }
}
