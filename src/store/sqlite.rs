use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

use crate::catalog::{Distance, Object};
use crate::schema::{generate_create_table, generate_indexes, TableSchema, DISTANCES, OBJECTS};

/// Client for the file-backed catalog store. Holds the single connection;
/// dropping the store closes it.
pub struct CatalogStore {
    conn: Connection,
}

impl CatalogStore {
    /// Create a fresh store, removing any existing database at the path
    pub fn create(db_path: &Path) -> Result<Self> {
        if db_path.exists() {
            std::fs::remove_file(db_path).context("Failed to remove existing database")?;
        }

        let conn = Connection::open(db_path).context("Failed to create database")?;

        // Note: foreign_keys is kept off. The declared FK on
        // distances.object_id documents the linkage but the generation
        // workflow keys it by loop counter, not by assigned object id. This is
        // set explicitly because some SQLite builds (e.g. bundled with
        // SQLITE_DEFAULT_FOREIGN_KEYS=1) default enforcement on.
        conn.execute_batch(
            "PRAGMA foreign_keys = OFF;
             PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             PRAGMA cache_size = -64000;",
        )?;

        Ok(Self { conn })
    }

    /// Open an existing store without resetting it
    pub fn open(db_path: &Path) -> Result<Self> {
        let conn = Connection::open_with_flags(
            db_path,
            rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE,
        )
        .with_context(|| format!("Failed to open database: {:?}", db_path))?;

        Ok(Self { conn })
    }

    /// Create all tables for the given schemas
    pub fn create_tables(&self, schemas: &[&TableSchema]) -> Result<()> {
        for schema in schemas {
            let sql = generate_create_table(schema);
            self.conn
                .execute(&sql, [])
                .with_context(|| format!("Failed to create table: {}", schema.name))?;

            for index_sql in generate_indexes(schema) {
                self.conn
                    .execute(&index_sql, [])
                    .with_context(|| format!("Failed to create index for: {}", schema.name))?;
            }
        }

        Ok(())
    }

    /// Insert a single object, returning its store-assigned id
    pub fn insert_object(&self, ra: f64, dec: f64) -> Result<i64> {
        let sql = insert_sql(&OBJECTS);
        let mut stmt = self.conn.prepare_cached(&sql)?;
        stmt.execute(params![ra, dec])
            .context("Failed to insert object")?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Insert a single distance record, returning its store-assigned id
    pub fn insert_distance(&self, object_id: i64, distance: f64) -> Result<i64> {
        let sql = insert_sql(&DISTANCES);
        let mut stmt = self.conn.prepare_cached(&sql)?;
        stmt.execute(params![object_id, distance])
            .context("Failed to insert distance")?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Insert a batch of objects inside one transaction
    pub fn insert_objects(&mut self, rows: &[(f64, f64)]) -> Result<u64> {
        let sql = insert_sql(&OBJECTS);
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare_cached(&sql)?;
            for (ra, dec) in rows {
                stmt.execute(params![ra, dec])
                    .context("Failed to insert object")?;
            }
        }
        tx.commit()?;
        Ok(rows.len() as u64)
    }

    /// Insert a batch of distance records inside one transaction
    pub fn insert_distances(&mut self, rows: &[(i64, f64)]) -> Result<u64> {
        let sql = insert_sql(&DISTANCES);
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare_cached(&sql)?;
            for (object_id, distance) in rows {
                stmt.execute(params![object_id, distance])
                    .context("Failed to insert distance")?;
            }
        }
        tx.commit()?;
        Ok(rows.len() as u64)
    }

    /// First object in id order, or `None` on an empty table
    pub fn first_object(&self) -> Result<Option<Object>> {
        self.conn
            .query_row(
                "SELECT id, ra, dec FROM objects ORDER BY id LIMIT 1",
                [],
                |row| {
                    Ok(Object {
                        id: row.get(0)?,
                        ra: row.get(1)?,
                        dec: row.get(2)?,
                    })
                },
            )
            .optional()
            .context("Failed to query first object")
    }

    /// All stored distance values, in insertion order
    pub fn distance_values(&self) -> Result<Vec<f64>> {
        let mut stmt = self
            .conn
            .prepare("SELECT distance FROM distances ORDER BY id")?;
        let values = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<f64>>>()
            .context("Failed to scan distances")?;
        Ok(values)
    }

    /// First distance record matching the given object reference, or `None`
    pub fn distance_for_object(&self, object_id: i64) -> Result<Option<Distance>> {
        self.conn
            .query_row(
                "SELECT id, object_id, distance FROM distances WHERE object_id = ? ORDER BY id LIMIT 1",
                [object_id],
                |row| {
                    Ok(Distance {
                        id: row.get(0)?,
                        object_id: row.get(1)?,
                        distance: row.get(2)?,
                    })
                },
            )
            .optional()
            .context("Failed to query distance by object")
    }

    /// Row count for a table
    pub fn table_count(&self, schema: &TableSchema) -> Result<i64> {
        let sql = format!("SELECT COUNT(*) FROM {}", schema.name);
        self.conn
            .query_row(&sql, [], |row| row.get(0))
            .with_context(|| format!("Failed to count rows in {}", schema.name))
    }
}

fn insert_sql(schema: &TableSchema) -> String {
    let columns = schema.insert_columns();
    let placeholders: Vec<&str> = columns.iter().map(|_| "?").collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        schema.name,
        columns.join(", "),
        placeholders.join(", ")
    )
}
