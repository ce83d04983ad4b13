#![no_main]

use i18n_catalog_sync::{json_key, jsonify};
use i18n_catalog_sync_fuzz::{create_catalog, Entry};
use libfuzzer_sys::fuzz_target;
use pretty_assertions::assert_eq;
use std::collections::HashSet;

fuzz_target!(|entries: Vec<Entry>| {
    let catalog = create_catalog(entries);
    let keys = catalog
        .iter()
        .map(|entry| json_key(&entry.context))
        .collect::<Option<Vec<_>>>();

    match (jsonify(catalog.entries()), keys) {
        (Ok(json), Some(keys)) => {
            if keys.is_empty() {
                assert_eq!(json, "");
                return;
            }
            // Duplicated keys are written as is, only check valid
            // JSON when they are unique.
            if keys.iter().collect::<HashSet<_>>().len() == keys.len() {
                let decoded: serde_json::Map<String, serde_json::Value> =
                    serde_json::from_str(&json).expect("jsonify produced invalid JSON");
                assert_eq!(decoded.len(), keys.len());
            }
        }
        (Err(_), None) => {}
        (result, keys) => panic!("jsonify returned {result:?} for keys {keys:?}"),
    }
});
