// SPDX-License-Identifier: MIT

//! In-memory record store
//!
//! This module provides:
//! - `Record` - one flat key-value entry
//! - `RecordLoader` - reads record lists from JSON files
//! - `Store` - holds the records and answers `WHERE` queries by linear scan

mod loader;
mod record;

pub use loader::RecordLoader;
pub use record::{display_value, Record};

use crate::error::Result;
use crate::query;
use std::path::Path;

const DEFAULT_NAME: &str = "store";

/// Read-only record set queried with `WHERE` clauses
#[derive(Debug, Clone)]
pub struct Store {
    /// Label used in log lines
    name: String,
    records: Vec<Record>,
}

impl Store {
    pub fn new(records: Vec<Record>) -> Self {
        Self::with_name(DEFAULT_NAME, records)
    }

    /// Create a store whose log lines are tagged with `name`
    pub fn with_name(name: impl Into<String>, records: Vec<Record>) -> Self {
        let name = name.into();
        log::info!("[{}] initialized with {} records", name, records.len());
        Self { name, records }
    }

    /// Create a store from a JSON file, named after the file stem
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let records = RecordLoader::new().load_file(path)?;
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(DEFAULT_NAME);
        Ok(Self::with_name(name, records))
    }

    /// Run a query and return matching records in load order
    ///
    /// An invalid query returns an error and matches nothing.
    pub fn query(&self, query_str: &str) -> Result<Vec<&Record>> {
        let conditions = query::parse_query(query_str).map_err(|e| {
            log::error!("[{}] Query failed: {}", self.name, e);
            e
        })?;

        for condition in &conditions {
            log::debug!("[{}] condition: {}", self.name, condition);
        }

        let results: Vec<&Record> = self
            .records
            .iter()
            .filter(|record| query::evaluate_record(record, &conditions))
            .collect();

        log::debug!(
            "[{}] {} of {} records matched",
            self.name,
            results.len(),
            self.records.len()
        );
        Ok(results)
    }

    /// Total number of records
    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{QueryError, StoreError};

    fn sample_vessels() -> Vec<Record> {
        vec![
            Record::new()
                .with("Z01_CURRENT_NAME", "Vessel 1")
                .with("Z13_STATUS_CODE", 4)
                .with("BUILDER_GROUP", "Guoyu Logistics"),
            Record::new()
                .with("Z01_CURRENT_NAME", "Vessel 2")
                .with("Z13_STATUS_CODE", 3)
                .with("BUILDER_GROUP", "Other Builder"),
        ]
    }

    #[test]
    fn test_count() {
        let store = Store::new(sample_vessels());
        assert_eq!(store.count(), 2);
        assert!(!store.is_empty());
    }

    #[test]
    fn test_count_empty() {
        let store = Store::new(vec![]);
        assert_eq!(store.count(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_query_single_condition() {
        let store = Store::new(sample_vessels());
        let results = store.query("WHERE Z13_STATUS_CODE = 4").unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(
            results[0].get("Z01_CURRENT_NAME"),
            Some(&serde_json::json!("Vessel 1"))
        );
    }

    #[test]
    fn test_query_multiple_conditions() {
        let store = Store::new(sample_vessels());

        let results = store
            .query("WHERE Z13_STATUS_CODE = 4 AND BUILDER_GROUP = 'Guoyu Logistics'")
            .unwrap();
        assert_eq!(results.len(), 1);

        let results = store
            .query("WHERE Z13_STATUS_CODE = 4 AND BUILDER_GROUP = 'Other Builder'")
            .unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_query_preserves_order() {
        let store = Store::new(sample_vessels());
        let results = store.query("WHERE Z13_STATUS_CODE >= 3").unwrap();

        let names: Vec<_> = results
            .iter()
            .map(|r| display_value(r.get("Z01_CURRENT_NAME").unwrap()))
            .collect();
        assert_eq!(names, vec!["Vessel 1", "Vessel 2"]);
    }

    #[test]
    fn test_query_unknown_field() {
        let store = Store::new(sample_vessels());
        assert!(store.query("WHERE NO_SUCH_FIELD != 1").unwrap().is_empty());
    }

    #[test]
    fn test_query_not_equal_string_against_numeric_field() {
        let store = Store::new(sample_vessels());

        let results = store.query("WHERE Z13_STATUS_CODE != 'X'").unwrap();
        assert_eq!(results.len(), 2);

        let results = store.query("WHERE Z13_STATUS_CODE = 'X'").unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_query_no_results() {
        let store = Store::new(sample_vessels());
        assert!(store.query("WHERE Z13_STATUS_CODE = 999").unwrap().is_empty());
    }

    #[test]
    fn test_query_empty() {
        let store = Store::new(sample_vessels());
        assert!(matches!(
            store.query(""),
            Err(StoreError::Query(QueryError::InvalidQuery(_)))
        ));
    }

    #[test]
    fn test_query_invalid_leaves_store_unchanged() {
        let store = Store::new(sample_vessels());
        let before = store.records().to_vec();

        assert!(matches!(
            store.query("INVALID QUERY"),
            Err(StoreError::Query(QueryError::InvalidQuery(_)))
        ));
        assert_eq!(store.records(), before.as_slice());
    }

    #[test]
    fn test_query_invalid_condition() {
        let store = Store::new(sample_vessels());
        assert!(matches!(
            store.query("WHERE Z13_STATUS_CODE ~ 4"),
            Err(StoreError::Query(QueryError::InvalidCondition(_)))
        ));
    }
}
