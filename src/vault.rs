//! Entry point tying definitions, records and introspection to one schema.

use crate::definition::DataVaultDefinition;
use crate::error::{Result, VaultError};
use crate::introspect::{EntityDefinition, SchemaIntrospector};
use crate::meta::SqlExecutor;
use crate::meta::memory::MemoryCatalog;
use crate::record::InsertBatch;
use crate::resolver::RelationshipResolver;
use crate::sql::compilers::Dialect;

/// A data vault living in `schema`, written in `dialect`.
///
/// Executors and catalogs are borrowed per call. Beginning, committing or
/// rolling back a transaction is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataVault {
    pub schema: String,
    pub dialect: Dialect,
}

impl DataVault {
    pub fn new(schema: impl Into<String>, dialect: Dialect) -> Self {
        Self {
            schema: schema.into(),
            dialect,
        }
    }

    /// Create every table of `definition`, returning the number of statements executed.
    ///
    /// Nothing is executed when the definition is invalid.
    pub fn create_entities(&self, executor: &mut dyn SqlExecutor, definition: &DataVaultDefinition) -> Result<usize> {
        let statements = definition.generate_sql_for(self.dialect)?;
        self.execute_all(executor, &statements)
    }

    /// Insert every record of `batch`, returning the number of statements executed.
    pub fn insert_records(&self, executor: &mut dyn SqlExecutor, batch: &InsertBatch) -> Result<usize> {
        let statements = batch.generate_sql_for(self.dialect)?;
        self.execute_all(executor, &statements)
    }

    /// Apply `definition` to an empty [`MemoryCatalog`] and check that every
    /// entity introspects back to its canonical form.
    ///
    /// Returns the number of entities checked.
    pub fn verify(&self, definition: &DataVaultDefinition) -> Result<usize> {
        let mut catalog = MemoryCatalog::new();
        catalog.apply(&self.schema, definition)?;

        let hubs = definition
            .hubs
            .iter()
            .map(|hub| (hub.table_name(), EntityDefinition::Hub(hub.canonical())));
        let satellites = definition
            .satellites
            .iter()
            .map(|sat| (sat.table_name(), EntityDefinition::Satellite(sat.canonical())));
        let links = definition
            .links
            .iter()
            .map(|link| (link.table_name(), EntityDefinition::Link(link.canonical())));

        let introspector = self.introspector();
        let mut checked = 0;
        for (table, expected) in hubs.chain(satellites).chain(links) {
            let actual = introspector.entity_definition(&mut catalog, &table)?;
            if actual != expected {
                return Err(VaultError::mismatch(
                    &table,
                    format!("introspected as {:?}, expected {:?}", actual, expected),
                ));
            }
            checked += 1;
        }

        log::info!("Verified {} entities in schema {}", checked, self.schema);
        Ok(checked)
    }

    pub fn introspector(&self) -> SchemaIntrospector {
        SchemaIntrospector::new(self.schema.clone())
    }

    pub fn resolver(&self) -> RelationshipResolver {
        RelationshipResolver::new(self.introspector())
    }

    fn execute_all(&self, executor: &mut dyn SqlExecutor, statements: &[String]) -> Result<usize> {
        for statement in statements {
            executor.execute(statement)?;
        }
        log::info!("Executed {} statements in schema {}", statements.len(), self.schema);
        Ok(statements.len())
    }
}

impl Default for DataVault {
    fn default() -> Self {
        Self::new("public", Dialect::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::{
        HubDefinition, HubReference, LinkDefinition, SatelliteAttributeDefinition, SatelliteDefinition,
    };
    use crate::error::DefinitionError;
    use crate::sql::table::ColumnDataType;

    /// Records statements; fails on the statement at `fail_at`.
    #[derive(Default)]
    struct RecordingExecutor {
        statements: Vec<String>,
        fail_at: Option<usize>,
    }

    impl SqlExecutor for RecordingExecutor {
        fn execute(&mut self, sql: &str) -> Result<()> {
            if self.fail_at == Some(self.statements.len()) {
                return Err(VaultError::ExecutionFailed {
                    message: "boom".to_string(),
                });
            }
            self.statements.push(sql.to_string());
            Ok(())
        }
    }

    fn definition() -> DataVaultDefinition {
        DataVaultDefinition {
            hubs: vec![
                HubDefinition::new("Invoice", 0, vec!["DocNo".to_string()]),
                HubDefinition::new("Employee", 0, vec!["StaffNo".to_string()]),
            ],
            satellites: vec![],
            links: vec![LinkDefinition::new(
                "InvPreparedBy",
                0,
                vec![HubReference::new("Invoice", 0), HubReference::new("Employee", 0)],
            )
            .unwrap()],
        }
    }

    #[test]
    fn test_create_entities_executes_in_order() {
        let mut executor = RecordingExecutor::default();
        let count = DataVault::default()
            .create_entities(&mut executor, &definition())
            .unwrap();
        assert_eq!(count, 3);
        assert!(executor.statements[2].starts_with("CREATE TABLE `link_"));
    }

    #[test]
    fn test_postgres_vault_runs_index_statements() {
        let mut executor = RecordingExecutor::default();
        let count = DataVault::new("public", Dialect::Postgres)
            .create_entities(&mut executor, &definition())
            .unwrap();
        assert_eq!(count, 5);
    }

    #[test]
    fn test_invalid_definition_executes_nothing() {
        let mut definition = definition();
        definition.links[0].hub_references.pop();
        let mut executor = RecordingExecutor::default();

        let err = DataVault::default()
            .create_entities(&mut executor, &definition)
            .unwrap_err();
        assert!(matches!(err, VaultError::DefinitionInvalid(_)));
        assert!(executor.statements.is_empty());
    }

    #[test]
    fn test_execution_failure_propagates() {
        let mut executor = RecordingExecutor {
            fail_at: Some(1),
            ..Default::default()
        };
        let err = DataVault::default()
            .create_entities(&mut executor, &definition())
            .unwrap_err();
        assert!(matches!(err, VaultError::ExecutionFailed { .. }));
        assert_eq!(executor.statements.len(), 1);
    }

    #[test]
    fn test_empty_batch_executes_nothing() {
        let mut executor = RecordingExecutor::default();
        let count = DataVault::default()
            .insert_records(&mut executor, &InsertBatch::default())
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_verify_round_trips_every_entity() {
        let mut definition = definition();
        definition.satellites.push(
            SatelliteDefinition::new(
                "InvoiceDetail",
                0,
                HubReference::new("Invoice", 0),
                vec![
                    SatelliteAttributeDefinition::new("Amount", ColumnDataType::Decimal, 12, false)
                        .with_precision(2),
                    SatelliteAttributeDefinition::new("Remark", ColumnDataType::Varchar, 200, true),
                ],
            )
            .unwrap(),
        );

        assert_eq!(DataVault::default().verify(&definition).unwrap(), 4);
    }

    #[test]
    fn test_verify_accepts_non_canonical_names() {
        let definition = DataVaultDefinition {
            hubs: vec![HubDefinition::new("invoice", 0, vec!["docNo".to_string()])],
            ..Default::default()
        };
        assert_eq!(DataVault::default().verify(&definition).unwrap(), 1);
    }

    #[test]
    fn test_verify_rejects_name_that_does_not_decode() {
        let definition = DataVaultDefinition {
            hubs: vec![
                HubDefinition::new("Invoice", 0, vec!["DocNo".to_string()]),
                HubDefinition::new("Q1 2024", 0, vec![]),
            ],
            satellites: vec![],
            links: vec![LinkDefinition {
                name: "InvQuarter".to_string(),
                revision: 0,
                hub_references: vec![HubReference::new("Invoice", 0), HubReference::new("Q1 2024", 0)],
            }],
        };
        let err = DataVault::default().verify(&definition).unwrap_err();
        assert!(matches!(
            err,
            VaultError::DefinitionInvalid(DefinitionError::IrreversibleName { .. })
        ));
    }

    #[test]
    fn test_verify_rejects_dangling_reference() {
        let definition = DataVaultDefinition {
            hubs: vec![HubDefinition::new("Invoice", 0, vec!["DocNo".to_string()])],
            satellites: vec![],
            links: vec![LinkDefinition::new(
                "InvPreparedBy",
                0,
                vec![HubReference::new("Invoice", 0), HubReference::new("Employee", 0)],
            )
            .unwrap()],
        };
        let err = DataVault::default().verify(&definition).unwrap_err();
        assert!(matches!(err, VaultError::CatalogFailed { .. }));
    }

    #[test]
    fn test_accessors_share_schema() {
        let vault = DataVault::new("staging", Dialect::MySql);
        assert_eq!(vault.introspector().schema(), "staging");
        assert_eq!(vault.resolver().introspector().schema(), "staging");
    }
}
