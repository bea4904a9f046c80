//! In-memory catalog.
//!
//! Holds [`TableMeta`] per schema. Tables are added from a
//! [`TableDefinition`] with the same checks a database would apply to the
//! generated DDL: no duplicate tables, foreign keys must target an existing
//! table and column.

use std::collections::BTreeMap;

use regex::Regex;

use crate::definition::DataVaultDefinition;
use crate::error::{Result, VaultError};
use crate::sql::table::TableDefinition;

use super::{Catalog, TableMeta};

#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    schemas: BTreeMap<String, BTreeMap<String, TableMeta>>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a table as if its `CREATE TABLE` statement had been executed.
    pub fn create_table(&mut self, schema: &str, table: &TableDefinition) -> Result<()> {
        table.validate()?;

        let tables = self.schemas.entry(schema.to_string()).or_default();
        if tables.contains_key(&table.name) {
            return Err(VaultError::CatalogFailed {
                message: format!("table '{}.{}' already exists", schema, table.name),
            });
        }

        for fk in &table.foreign_keys {
            let target_exists = tables
                .get(&fk.reference_table_name)
                .is_some_and(|target| target.column(&fk.reference_column_name).is_some());
            if !target_exists {
                return Err(VaultError::CatalogFailed {
                    message: format!(
                        "foreign key {}.{} references missing {}.{}",
                        table.name, fk.column_name, fk.reference_table_name, fk.reference_column_name
                    ),
                });
            }
        }

        log::debug!("Created {}.{}", schema, table.name);
        tables.insert(table.name.clone(), TableMeta::from(table));
        Ok(())
    }

    /// Create every table of `definition` in batch order, returning how many were created.
    ///
    /// Stops at the first failure; tables created before it remain.
    pub fn apply(&mut self, schema: &str, definition: &DataVaultDefinition) -> Result<usize> {
        let tables = definition.table_definitions()?;
        for table in &tables {
            self.create_table(schema, table)?;
        }
        Ok(tables.len())
    }

    /// Register metadata without any checks, replacing a table of the same name.
    pub fn insert_table_meta(&mut self, schema: &str, meta: TableMeta) {
        self.schemas
            .entry(schema.to_string())
            .or_default()
            .insert(meta.name.clone(), meta);
    }

    pub fn drop_table(&mut self, schema: &str, table: &str) -> Option<TableMeta> {
        self.schemas.get_mut(schema)?.remove(table)
    }

    pub fn contains_table(&self, schema: &str, table: &str) -> bool {
        self.schemas
            .get(schema)
            .is_some_and(|tables| tables.contains_key(table))
    }

    fn tables(&self, schema: &str) -> impl Iterator<Item = &TableMeta> {
        self.schemas.get(schema).into_iter().flat_map(|tables| tables.values())
    }
}

impl Catalog for MemoryCatalog {
    fn table_meta(&mut self, schema: &str, table: &str) -> Result<TableMeta> {
        Ok(self
            .schemas
            .get(schema)
            .and_then(|tables| tables.get(table))
            .cloned()
            .unwrap_or_else(|| TableMeta::empty(table)))
    }

    fn table_names(&mut self, schema: &str, like_pattern: &str) -> Result<Vec<String>> {
        let regex = like_to_regex(like_pattern)?;
        Ok(self
            .tables(schema)
            .filter(|t| regex.is_match(&t.name))
            .map(|t| t.name.clone())
            .collect())
    }

    fn referencing_tables(&mut self, schema: &str, table: &str) -> Result<Vec<String>> {
        Ok(self
            .tables(schema)
            .filter(|t| t.foreign_keys.iter().any(|fk| fk.referenced_table == table))
            .map(|t| t.name.clone())
            .collect())
    }
}

/// Translate a SQL `LIKE` pattern into an anchored regex.
pub fn like_to_regex(pattern: &str) -> Result<Regex> {
    let mut expr = String::with_capacity(pattern.len() + 8);
    expr.push('^');

    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        match c {
            '%' => expr.push_str(".*"),
            '_' => expr.push('.'),
            '\\' => {
                let escaped = chars.next().unwrap_or('\\');
                expr.push_str(&regex::escape(&escaped.to_string()));
            }
            c => expr.push_str(&regex::escape(&c.to_string())),
        }
    }
    expr.push('$');

    Regex::new(&expr).map_err(|e| VaultError::CatalogFailed {
        message: format!("invalid LIKE pattern '{}': {}", pattern, e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::{HubDefinition, HubReference, LinkDefinition};
    use rstest::rstest;

    const SCHEMA: &str = "public";

    fn catalog_with_hubs() -> MemoryCatalog {
        let mut catalog = MemoryCatalog::new();
        for name in ["Invoice", "Employee"] {
            let table = HubDefinition::new(name, 0, vec![]).table_definition().unwrap();
            catalog.create_table(SCHEMA, &table).unwrap();
        }
        catalog
    }

    #[rstest]
    #[case(r"hub\_%", "hub_invoice_rev0", true)]
    #[case(r"hub\_%", "hubxinvoice_rev0", false)]
    #[case("hub_%", "hubxinvoice_rev0", true)]
    #[case(r"%invoice%", "sat_invoice_detail_rev0", true)]
    #[case(r"sat\_%", "hub_invoice_rev0", false)]
    #[case("a.b", "axb", false)]
    #[case("100%", "100 percent", true)]
    fn test_like_to_regex(#[case] pattern: &str, #[case] input: &str, #[case] expected: bool) {
        assert_eq!(like_to_regex(pattern).unwrap().is_match(input), expected);
    }

    #[test]
    fn test_create_and_read_back() {
        let mut catalog = catalog_with_hubs();
        let meta = catalog.table_meta(SCHEMA, "hub_invoice_rev0").unwrap();
        assert_eq!(meta.columns.len(), 3);
        assert!(catalog.contains_table(SCHEMA, "hub_employee_rev0"));
    }

    #[test]
    fn test_missing_table_has_no_columns() {
        let mut catalog = MemoryCatalog::new();
        let meta = catalog.table_meta(SCHEMA, "hub_missing_rev0").unwrap();
        assert!(!meta.exists());
        assert_eq!(meta.name, "hub_missing_rev0");
    }

    #[test]
    fn test_duplicate_table_fails() {
        let mut catalog = catalog_with_hubs();
        let table = HubDefinition::new("Invoice", 0, vec![]).table_definition().unwrap();
        assert!(matches!(
            catalog.create_table(SCHEMA, &table),
            Err(VaultError::CatalogFailed { .. })
        ));
    }

    #[test]
    fn test_foreign_key_to_missing_table_fails() {
        let mut catalog = MemoryCatalog::new();
        let link = LinkDefinition::new(
            "InvPreparedBy",
            0,
            vec![HubReference::new("Invoice", 0), HubReference::new("Employee", 0)],
        )
        .unwrap();
        let err = catalog
            .create_table(SCHEMA, &link.table_definition().unwrap())
            .unwrap_err();
        assert!(err.to_string().contains("hub_invoice_rev0"));
    }

    #[test]
    fn test_referencing_tables_and_names() {
        let mut catalog = catalog_with_hubs();
        let link = LinkDefinition::new(
            "InvPreparedBy",
            0,
            vec![HubReference::new("Invoice", 0), HubReference::new("Employee", 0)],
        )
        .unwrap();
        catalog
            .create_table(SCHEMA, &link.table_definition().unwrap())
            .unwrap();

        assert_eq!(
            catalog.referencing_tables(SCHEMA, "hub_employee_rev0").unwrap(),
            vec!["link_inv_prepared_by_rev0"]
        );
        assert_eq!(
            catalog.table_names(SCHEMA, r"hub\_%").unwrap(),
            vec!["hub_employee_rev0", "hub_invoice_rev0"]
        );
        assert!(catalog.table_names("other", "%").unwrap().is_empty());
    }

    #[test]
    fn test_drop_table() {
        let mut catalog = catalog_with_hubs();
        assert!(catalog.drop_table(SCHEMA, "hub_invoice_rev0").is_some());
        assert!(!catalog.contains_table(SCHEMA, "hub_invoice_rev0"));
    }
}
