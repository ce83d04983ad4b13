#![no_main]

use i18n_catalog_sync::{parse_po, poify};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|content: &[u8]| {
    let catalog = parse_po(content);
    // Serializing must not panic, whatever was parsed.
    let _ = poify(catalog.entries());
});
