//! Table schema definitions for the star catalog

use super::types::*;

pub static OBJECTS: TableSchema = TableSchema {
    name: "objects",
    columns: &[
        Column::required("id", ColumnType::Integer),
        Column::required("ra", ColumnType::Real),
        Column::required("dec", ColumnType::Real),
    ],
    foreign_keys: &[],
};

pub static DISTANCES: TableSchema = TableSchema {
    name: "distances",
    columns: &[
        Column::required("id", ColumnType::Integer),
        Column::required("object_id", ColumnType::Integer),
        Column::required("distance", ColumnType::Real),
    ],
    foreign_keys: &[ForeignKey::new("object_id", "objects")],
};

/// All catalog tables, parents before children
pub static ALL_TABLES: &[&TableSchema] = &[&OBJECTS, &DISTANCES];

/// Get a table schema by name
pub fn get_table(name: &str) -> Option<&'static TableSchema> {
    ALL_TABLES.iter().find(|t| t.name == name).copied()
}

/// List all table names in creation order
pub fn table_names() -> Vec<&'static str> {
    ALL_TABLES.iter().map(|t| t.name).collect()
}
