//! Database metadata and execution collaborators.
//!
//! The introspector and resolver only see a [`Catalog`]: table columns,
//! foreign keys and table-name lookups. Statement execution goes through
//! [`SqlExecutor`]. Both borrow the caller's handle for the duration of one
//! call; transactions stay with the caller.
//!
//! Implementations:
//! - [`MemoryCatalog`]: in-memory schemas for offline verification and tests
//! - [`PostgresCatalog`]: `information_schema` / `pg_constraint` over a
//!   `postgres` client or transaction

pub mod memory;
pub mod postgres;

pub use memory::MemoryCatalog;
pub use self::postgres::PostgresCatalog;

use serde::Serialize;

use crate::error::Result;
use crate::sql::table::{ColumnDefinition, TableDefinition};

/// One column as reported by a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnMeta {
    pub name: String,
    /// Upper-case type name, e.g. `CHAR` or `DATETIME`.
    pub type_name: String,
    pub length: u32,
    pub is_nullable: bool,
    pub decimal_precision: u32,
}

impl From<&ColumnDefinition> for ColumnMeta {
    fn from(column: &ColumnDefinition) -> Self {
        Self {
            name: column.name.clone(),
            type_name: column.data_type.as_str().to_string(),
            length: column.length,
            is_nullable: column.is_nullable,
            decimal_precision: column.decimal_precision,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForeignKeyMeta {
    pub name: String,
    /// Referencing columns, in constraint order.
    pub columns: Vec<String>,
    pub referenced_table: String,
    pub referenced_columns: Vec<String>,
}

/// Columns (in table order) and foreign keys of one table.
///
/// A table that does not exist is reported with no columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableMeta {
    pub name: String,
    pub columns: Vec<ColumnMeta>,
    pub foreign_keys: Vec<ForeignKeyMeta>,
}

impl TableMeta {
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn exists(&self) -> bool {
        !self.columns.is_empty()
    }

    pub fn column(&self, name: &str) -> Option<&ColumnMeta> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }
}

impl From<&TableDefinition> for TableMeta {
    fn from(table: &TableDefinition) -> Self {
        let foreign_keys = table
            .foreign_keys
            .iter()
            .map(|fk| ForeignKeyMeta {
                name: format!("fk_{}_{}", table.name, fk.column_name),
                columns: vec![fk.column_name.clone()],
                referenced_table: fk.reference_table_name.clone(),
                referenced_columns: vec![fk.reference_column_name.clone()],
            })
            .collect();

        Self {
            name: table.name.clone(),
            columns: table.columns.iter().map(ColumnMeta::from).collect(),
            foreign_keys,
        }
    }
}

/// Read-only schema metadata.
pub trait Catalog {
    /// Columns and foreign keys of `table`; empty columns when it does not exist.
    fn table_meta(&mut self, schema: &str, table: &str) -> Result<TableMeta>;

    /// Names of tables matching a SQL `LIKE` pattern (`%`, `_`, `\` escape), sorted.
    fn table_names(&mut self, schema: &str, like_pattern: &str) -> Result<Vec<String>>;

    /// Names of tables holding a foreign key to `table`, sorted.
    fn referencing_tables(&mut self, schema: &str, table: &str) -> Result<Vec<String>>;
}

/// Executes one SQL statement.
pub trait SqlExecutor {
    fn execute(&mut self, sql: &str) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::table::{ColumnDataType, ForeignKeyDefinition};

    #[test]
    fn test_table_meta_from_definition() {
        let table = TableDefinition {
            name: "sat_invoice_rev0".to_string(),
            columns: vec![
                ColumnDefinition::new("invoice_hash_key", ColumnDataType::Char, 32, false),
                ColumnDefinition::new("end_date", ColumnDataType::Datetime, 0, true),
            ],
            primary_key: vec!["invoice_hash_key".to_string()],
            foreign_keys: vec![ForeignKeyDefinition {
                column_name: "invoice_hash_key".to_string(),
                reference_table_name: "hub_invoice_rev0".to_string(),
                reference_column_name: "invoice_hash_key".to_string(),
            }],
            ..Default::default()
        };

        let meta = TableMeta::from(&table);
        assert!(meta.exists());
        assert_eq!(meta.columns[1].type_name, "DATETIME");
        assert!(meta.columns[1].is_nullable);
        assert_eq!(meta.column_position("end_date"), Some(1));
        assert_eq!(meta.foreign_keys[0].name, "fk_sat_invoice_rev0_invoice_hash_key");
        assert_eq!(meta.foreign_keys[0].referenced_table, "hub_invoice_rev0");
    }

    #[test]
    fn test_empty_table_meta_does_not_exist() {
        assert!(!TableMeta::empty("hub_missing_rev0").exists());
    }
}
