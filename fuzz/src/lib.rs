use arbitrary::Arbitrary;
use i18n_catalog_sync::{Catalog, CatalogEntry};

/// Wrapper struct for generating arbitrary `CatalogEntry`s.
#[derive(Arbitrary, Debug)]
pub struct Entry {
    pub context: String,
    pub id: String,
    pub translation: String,
}

impl From<Entry> for CatalogEntry {
    fn from(other: Entry) -> CatalogEntry {
        CatalogEntry::new(other.context, other.id, other.translation)
    }
}

/// Generate a random Catalog for fuzzing.
pub fn create_catalog(entries: Vec<Entry>) -> Catalog {
    entries.into_iter().map(CatalogEntry::from).collect()
}
