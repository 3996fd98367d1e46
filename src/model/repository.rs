// src/model/repository.rs

use super::ElementRecord;
use crate::io::elements::{self, DataLoadError};
use std::collections::HashSet;
use std::path::Path;

/// Immutable, ordered collection of every element loaded at startup.
#[derive(Debug, Clone, Default)]
pub struct ElementRepository {
    records: Vec<ElementRecord>,
}

impl ElementRepository {
    pub fn new(records: Vec<ElementRecord>) -> Self {
        warn_duplicate_names(&records);
        Self { records }
    }

    /// Loads the repository from a JSON data file. Any failure is fatal to the caller.
    pub fn load(path: &Path) -> Result<Self, DataLoadError> {
        let records = elements::load(path)?;
        log::info!("Loaded {} elements from {}", records.len(), path.display());
        Ok(Self::new(records))
    }

    pub fn records(&self) -> &[ElementRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find_by_name(&self, query: &str) -> Option<&ElementRecord> {
        find_by_name(&self.records, query)
    }
}

/// Case-insensitive exact name lookup, first match in stored order.
///
/// Leading/trailing whitespace in `query` is ignored. Callers are expected to reject
/// blank queries before getting here; a blank query simply matches nothing.
pub fn find_by_name<'a>(records: &'a [ElementRecord], query: &str) -> Option<&'a ElementRecord> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    records.iter().find(|rec| rec.name_matches(query))
}

fn warn_duplicate_names(records: &[ElementRecord]) {
    let mut seen: HashSet<String> = HashSet::new();
    for rec in records {
        if !seen.insert(rec.name.to_lowercase()) {
            log::warn!(
                "Duplicate element name '{}' (Z={}); lookups return the first entry",
                rec.name,
                rec.number
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ElementRepository {
        ElementRepository::new(vec![
            ElementRecord::sample("Hydrogen", "H", 1, 1.008),
            ElementRecord::sample("Helium", "He", 2, 4.0026),
            ElementRecord::sample("Lithium", "Li", 3, 6.94),
        ])
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let repo = sample();
        for q in ["HYDROGEN", "hydrogen", "Hydrogen", "hYdRoGeN"] {
            let rec = repo.find_by_name(q).expect(q);
            assert_eq!(rec.symbol, "H");
        }
    }

    #[test]
    fn test_lookup_trims_query() {
        let repo = sample();
        assert_eq!(repo.find_by_name("  helium\t\n").map(|r| r.number), Some(2));
    }

    #[test]
    fn test_no_partial_or_symbol_match() {
        let repo = sample();
        assert!(repo.find_by_name("Hydro").is_none());
        assert!(repo.find_by_name("Hydrogens").is_none());
        assert!(repo.find_by_name("He").is_none());
        assert!(repo.find_by_name("Unobtainium").is_none());
    }

    #[test]
    fn test_blank_query_matches_nothing() {
        let repo = sample();
        assert!(repo.find_by_name("").is_none());
        assert!(repo.find_by_name("   ").is_none());
    }

    #[test]
    fn test_found_iff_some_name_matches() {
        let repo = sample();
        for q in ["hydrogen", "LITHIUM", " Helium ", "Boron", "Li", "hydrogen2"] {
            let expected = repo
                .records()
                .iter()
                .any(|r| r.name.to_lowercase() == q.trim().to_lowercase());
            assert_eq!(repo.find_by_name(q).is_some(), expected, "query {q:?}");
        }
    }

    #[test]
    fn test_duplicates_return_first_in_order() {
        let repo = ElementRepository::new(vec![
            ElementRecord::sample("Carbon", "C", 6, 12.011),
            ElementRecord::sample("CARBON", "Cx", 600, 0.0),
        ]);
        assert_eq!(repo.len(), 2);
        assert_eq!(repo.find_by_name("carbon").map(|r| r.number), Some(6));
    }

    #[test]
    fn test_empty_repository() {
        let repo = ElementRepository::default();
        assert!(repo.is_empty());
        assert!(repo.find_by_name("Hydrogen").is_none());
    }

    #[test]
    fn test_bundled_dataset() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/elements.json");
        let repo = ElementRepository::load(&path).unwrap();

        assert_eq!(repo.len(), 18);
        let numbers: Vec<u32> = repo.records().iter().map(|r| r.number).collect();
        assert_eq!(numbers, (1..=18).collect::<Vec<_>>());

        let carbon = repo.find_by_name("CARBON").unwrap();
        assert_eq!(carbon.boil, None);
        assert_eq!(repo.find_by_name("sodium").unwrap().shells, Some(vec![2, 8, 1]));
    }

    #[test]
    fn test_load_failure_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "not json").unwrap();

        let err = ElementRepository::load(&path).unwrap_err();
        assert!(matches!(err, DataLoadError::Malformed { .. }));
    }
}
