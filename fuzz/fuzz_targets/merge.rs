#![no_main]

use i18n_catalog_sync::merge;
use i18n_catalog_sync_fuzz::{create_catalog, Entry};
use libfuzzer_sys::fuzz_target;
use pretty_assertions::assert_eq;

fuzz_target!(|inputs: (Vec<Entry>, Vec<Entry>)| {
    let (base, target) = inputs;
    let base = create_catalog(base);
    let target = create_catalog(target);
    let merged = merge(&base, &target);

    assert_eq!(merged.len(), base.len());
    for (merged, base) in merged.iter().zip(base.iter()) {
        assert_eq!((&merged.context, &merged.id), (&base.context, &base.id));
        let expected = target
            .get(&base.context, &base.id)
            .unwrap_or(&base.translation);
        assert_eq!(merged.translation, expected);
    }
});
