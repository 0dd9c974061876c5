//! # Load Catalog
//!
//! Freight loads available for carriers to book, and the search over them.
//!
//! ## Search Semantics
//!
//! Filters are applied in a fixed order, each narrowing the previous result:
//!
//! | Filter           | Match against           | Rule                          |
//! |------------------|-------------------------|-------------------------------|
//! | `origin`         | [`Load::origin`]        | case-insensitive substring    |
//! | `destination`    | [`Load::destination`]   | case-insensitive substring    |
//! | `equipment_type` | [`Load::equipment_type`]| case-insensitive exact        |
//!
//! Absent or empty filters are skipped. Results keep catalog order. An empty
//! result is an error ([`CatalogError::NoMatchingLoads`]), not an empty list.

use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, StorageError};
use crate::store::{JsonFileStore, Repository};

/// A shippable freight job. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Load {
    /// Unique load identifier, e.g. `LID-001`.
    pub load_id: String,
    pub origin: String,
    pub destination: String,
    /// ISO-8601 timestamp, stored as given.
    pub pickup_datetime: String,
    /// ISO-8601 timestamp, stored as given.
    pub delivery_datetime: String,
    /// Trailer category, e.g. `Van`, `Reefer`, `Flatbed`.
    pub equipment_type: String,
    /// Posted rate in dollars.
    pub loadboard_rate: f64,
    pub notes: String,
    /// Weight in pounds.
    pub weight: u32,
    pub commodity_type: String,
    pub num_of_pieces: u32,
    pub miles: u32,
    pub dimensions: String,
}

/// Optional search filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadQuery {
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub equipment_type: Option<String>,
}

impl LoadQuery {
    /// Narrow `loads` by each present filter, preserving order.
    pub fn apply(&self, mut loads: Vec<Load>) -> Vec<Load> {
        if let Some(origin) = active(&self.origin) {
            loads.retain(|load| contains_ignore_case(&load.origin, &origin));
        }
        if let Some(destination) = active(&self.destination) {
            loads.retain(|load| contains_ignore_case(&load.destination, &destination));
        }
        if let Some(equipment) = active(&self.equipment_type) {
            loads.retain(|load| load.equipment_type.to_lowercase() == equipment);
        }
        loads
    }
}

/// Lowercased filter value, or `None` when the filter is absent or empty.
fn active(filter: &Option<String>) -> Option<String> {
    filter
        .as_deref()
        .filter(|value| !value.is_empty())
        .map(str::to_lowercase)
}

fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// The set of loads offered to carriers.
///
/// Cloning is cheap; clones share the underlying repository. Every search
/// re-reads the repository, so edits to a file-backed catalog are picked up
/// without a restart.
#[derive(Clone)]
pub struct LoadCatalog {
    store: Arc<dyn Repository<Load>>,
}

impl std::fmt::Debug for LoadCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadCatalog").finish_non_exhaustive()
    }
}

impl LoadCatalog {
    /// Create a catalog over any repository.
    pub fn new(store: impl Repository<Load> + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Create a catalog backed by a JSON array file.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::new(JsonFileStore::<Load>::new(path))
    }

    /// Every load in catalog order. A missing source yields an empty list.
    pub fn all(&self) -> Result<Vec<Load>, StorageError> {
        self.store.load()
    }

    /// Search the catalog.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::NoMatchingLoads`] when nothing matches.
    /// - [`CatalogError::Storage`] when the source exists but cannot be read.
    pub fn search(&self, query: &LoadQuery) -> Result<Vec<Load>, CatalogError> {
        let loads = query.apply(self.all()?);
        if loads.is_empty() {
            return Err(CatalogError::NoMatchingLoads);
        }
        Ok(loads)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use proptest::prelude::*;

    fn load(id: &str, origin: &str, destination: &str, equipment: &str) -> Load {
        Load {
            load_id: id.to_string(),
            origin: origin.to_string(),
            destination: destination.to_string(),
            pickup_datetime: "2025-08-15T09:00:00".to_string(),
            delivery_datetime: "2025-08-16T17:00:00".to_string(),
            equipment_type: equipment.to_string(),
            loadboard_rate: 1500.0,
            notes: String::new(),
            weight: 40_000,
            commodity_type: "General".to_string(),
            num_of_pieces: 10,
            miles: 800,
            dimensions: "48x40x60".to_string(),
        }
    }

    fn sample_catalog() -> LoadCatalog {
        LoadCatalog::new(MemoryStore::with_records(vec![
            load("LID-001", "Dallas, TX", "Atlanta, GA", "Van"),
            load("LID-002", "Chicago, IL", "Denver, CO", "Reefer"),
            load("LID-003", "Los Angeles, CA", "Dallas, TX", "Van"),
        ]))
    }

    fn ids(loads: &[Load]) -> Vec<&str> {
        loads.iter().map(|l| l.load_id.as_str()).collect()
    }

    fn query(origin: Option<&str>, destination: Option<&str>, equipment: Option<&str>) -> LoadQuery {
        LoadQuery {
            origin: origin.map(String::from),
            destination: destination.map(String::from),
            equipment_type: equipment.map(String::from),
        }
    }

    #[test]
    fn no_filters_returns_everything_in_order() {
        let loads = sample_catalog().search(&LoadQuery::default()).unwrap();
        assert_eq!(ids(&loads), ["LID-001", "LID-002", "LID-003"]);
    }

    #[test]
    fn equipment_type_is_case_insensitive_exact() {
        let catalog = sample_catalog();
        let loads = catalog.search(&query(None, None, Some("van"))).unwrap();
        assert_eq!(ids(&loads), ["LID-001", "LID-003"]);

        let err = catalog.search(&query(None, None, Some("Va"))).unwrap_err();
        assert!(matches!(err, CatalogError::NoMatchingLoads));
    }

    #[test]
    fn origin_is_case_insensitive_substring() {
        let loads = sample_catalog()
            .search(&query(Some("dallas"), None, None))
            .unwrap();
        assert_eq!(ids(&loads), ["LID-001"]);
    }

    #[test]
    fn destination_is_case_insensitive_substring() {
        let loads = sample_catalog()
            .search(&query(None, Some("TX"), None))
            .unwrap();
        assert_eq!(ids(&loads), ["LID-003"]);
    }

    #[test]
    fn filters_are_and_combined() {
        let catalog = sample_catalog();
        let loads = catalog
            .search(&query(Some("los angeles"), Some("dallas"), Some("VAN")))
            .unwrap();
        assert_eq!(ids(&loads), ["LID-003"]);

        let err = catalog
            .search(&query(Some("Chicago"), None, Some("Van")))
            .unwrap_err();
        assert!(matches!(err, CatalogError::NoMatchingLoads));
    }

    #[test]
    fn empty_filter_values_are_ignored() {
        let loads = sample_catalog()
            .search(&query(Some(""), Some(""), Some("")))
            .unwrap();
        assert_eq!(loads.len(), 3);
    }

    #[test]
    fn empty_catalog_reports_no_matches() {
        let catalog = LoadCatalog::new(MemoryStore::new());
        let err = catalog.search(&LoadQuery::default()).unwrap_err();
        assert!(matches!(err, CatalogError::NoMatchingLoads));
    }

    #[test]
    fn missing_catalog_file_degrades_to_no_matches() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = LoadCatalog::from_path(dir.path().join("loads.json"));
        assert!(catalog.all().unwrap().is_empty());
        assert!(matches!(
            catalog.search(&LoadQuery::default()),
            Err(CatalogError::NoMatchingLoads)
        ));
    }

    #[test]
    fn corrupt_catalog_file_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("loads.json");
        std::fs::write(&path, "[{\"load_id\": ").unwrap();
        let err = LoadCatalog::from_path(&path)
            .search(&LoadQuery::default())
            .unwrap_err();
        assert!(matches!(err, CatalogError::Storage(_)));
    }

    #[test]
    fn file_backed_catalog_reads_the_sample_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("loads.json");
        let records = vec![load("LID-010", "Miami, FL", "Tampa, FL", "Flatbed")];
        std::fs::write(&path, serde_json::to_string(&records).unwrap()).unwrap();
        let loads = LoadCatalog::from_path(&path)
            .search(&query(Some("miami"), None, Some("flatbed")))
            .unwrap();
        assert_eq!(loads, records);
    }

    const CITIES: &[&str] = &["Dallas, TX", "Atlanta, GA", "Chicago, IL", "Denver, CO"];
    const EQUIPMENT: &[&str] = &["Van", "Reefer", "Flatbed"];

    fn arb_load() -> impl Strategy<Value = Load> {
        (0..CITIES.len(), 0..CITIES.len(), 0..EQUIPMENT.len(), 0u32..1000).prop_map(
            |(o, d, e, n)| load(&format!("LID-{n:03}"), CITIES[o], CITIES[d], EQUIPMENT[e]),
        )
    }

    fn arb_filter(values: &'static [&'static str]) -> impl Strategy<Value = Option<String>> {
        prop_oneof![
            Just(None),
            (0..values.len()).prop_map(move |i| Some(values[i].to_uppercase())),
            (0..values.len()).prop_map(move |i| Some(values[i][..3].to_lowercase())),
        ]
    }

    proptest! {
        #[test]
        fn search_returns_exactly_the_matching_subsequence(
            loads in proptest::collection::vec(arb_load(), 0..20),
            origin in arb_filter(CITIES),
            destination in arb_filter(CITIES),
            equipment in arb_filter(EQUIPMENT),
        ) {
            let q = LoadQuery { origin, destination, equipment_type: equipment };
            let expected: Vec<Load> = loads
                .iter()
                .filter(|l| {
                    q.origin.as_ref().map_or(true, |o| l.origin.to_lowercase().contains(&o.to_lowercase()))
                        && q.destination.as_ref().map_or(true, |d| l.destination.to_lowercase().contains(&d.to_lowercase()))
                        && q.equipment_type.as_ref().map_or(true, |e| l.equipment_type.to_lowercase() == e.to_lowercase())
                })
                .cloned()
                .collect();

            let catalog = LoadCatalog::new(MemoryStore::with_records(loads));
            match catalog.search(&q) {
                Ok(found) => prop_assert_eq!(found, expected),
                Err(CatalogError::NoMatchingLoads) => prop_assert!(expected.is_empty()),
                Err(other) => prop_assert!(false, "unexpected error: {other}"),
            }
        }
    }
}
