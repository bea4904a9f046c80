use serde::{Deserialize, Serialize};

use crate::error::DefinitionError;
use crate::naming::{EntityType, canonical_name, check_reversible, hash_key_column, table_name};
use crate::sql::compilers::{Dialect, MySqlCompiler};
use crate::sql::table::TableDefinition;

use super::columns;
use super::reference::HubReference;

/// A link: a relationship between two or more hubs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkDefinition {
    pub name: String,
    #[serde(default)]
    pub revision: u32,
    pub hub_references: Vec<HubReference>,
}

impl LinkDefinition {
    pub const MIN_HUB_REFERENCES: usize = 2;

    /// Build a link, rejecting fewer than two hub references.
    pub fn new(
        name: impl Into<String>,
        revision: u32,
        hub_references: Vec<HubReference>,
    ) -> Result<Self, DefinitionError> {
        let link = Self {
            name: name.into(),
            revision,
            hub_references,
        };
        link.validate()?;
        Ok(link)
    }

    pub fn table_name(&self) -> String {
        table_name(EntityType::Link, &self.name, self.revision)
    }

    pub fn hash_key_column(&self) -> String {
        hash_key_column(&self.name)
    }

    /// This link with display-cased names; reference order is kept.
    pub fn canonical(&self) -> Self {
        Self {
            name: canonical_name(&self.name),
            revision: self.revision,
            hub_references: self.hub_references.iter().map(HubReference::canonical).collect(),
        }
    }

    fn validate(&self) -> Result<(), DefinitionError> {
        if self.name.trim().is_empty() {
            return Err(DefinitionError::EmptyName { entity: "link" });
        }
        check_reversible("link", &self.name)?;
        if self.hub_references.len() < Self::MIN_HUB_REFERENCES {
            return Err(DefinitionError::TooFewHubReferences {
                link: self.name.clone(),
                found: self.hub_references.len(),
            });
        }
        self.hub_references.iter().try_for_each(HubReference::validate)
    }

    /// Own hash key (primary key), load date, record source, then per hub
    /// reference a hash key column with an index and a foreign key.
    pub fn table_definition(&self) -> Result<TableDefinition, DefinitionError> {
        self.validate()?;

        let mut table = TableDefinition::new(self.table_name());
        table.columns = vec![
            columns::hash_key(&self.name),
            columns::load_date(),
            columns::record_source(),
        ];
        table.primary_key = vec![self.hash_key_column()];

        for reference in &self.hub_references {
            let column = reference.hash_key_column();
            table.columns.push(columns::hash_key(&reference.hub_name));
            table.indices.push(columns::index(&column));
            table
                .foreign_keys
                .push(columns::foreign_key(&column, &reference.table_name()));
        }

        table.validate()?;
        Ok(table)
    }

    pub fn generate_sql(&self) -> Result<String, DefinitionError> {
        MySqlCompiler::compile_table(&self.table_definition()?)
    }

    pub fn generate_sql_for(&self, dialect: Dialect) -> Result<Vec<String>, DefinitionError> {
        dialect.create_table(&self.table_definition()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize_whitespace(s: &str) -> String {
        s.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn prepared_by() -> LinkDefinition {
        LinkDefinition::new(
            "InvPreparedBy",
            0,
            vec![HubReference::new("Invoice", 0), HubReference::new("Employee", 1)],
        )
        .unwrap()
    }

    #[test]
    fn test_generate_sql() {
        let sql = prepared_by().generate_sql().unwrap();
        let expected = "CREATE TABLE `link_inv_prepared_by_rev0` (
              `inv_prepared_by_hash_key` CHAR(32) NOT NULL,
              `load_date` DATETIME NOT NULL,
              `record_source` CHAR(100) NOT NULL,
              `invoice_hash_key` CHAR(32) NOT NULL,
              `employee_hash_key` CHAR(32) NOT NULL,
              PRIMARY KEY (`inv_prepared_by_hash_key`),
              INDEX (`invoice_hash_key`),
              INDEX (`employee_hash_key`),
              FOREIGN KEY (`invoice_hash_key`) REFERENCES `hub_invoice_rev0` (`invoice_hash_key`),
              FOREIGN KEY (`employee_hash_key`) REFERENCES `hub_employee_rev1` (`employee_hash_key`)
            )";
        assert_eq!(normalize_whitespace(&sql), normalize_whitespace(expected));
    }

    #[test]
    fn test_constructor_rejects_single_reference() {
        let err = LinkDefinition::new("Lonely", 0, vec![HubReference::new("Invoice", 0)]).unwrap_err();
        assert_eq!(
            err,
            DefinitionError::TooFewHubReferences {
                link: "Lonely".to_string(),
                found: 1
            }
        );
    }

    #[test]
    fn test_generate_revalidates_struct_literal() {
        let link = LinkDefinition {
            name: "Lonely".to_string(),
            revision: 0,
            hub_references: vec![],
        };
        assert!(matches!(
            link.generate_sql(),
            Err(DefinitionError::TooFewHubReferences { found: 0, .. })
        ));
    }

    #[test]
    fn test_same_hub_twice_collides() {
        let link = LinkDefinition::new(
            "SelfLink",
            0,
            vec![HubReference::new("Invoice", 0), HubReference::new("Invoice", 1)],
        )
        .unwrap();
        assert!(matches!(
            link.generate_sql(),
            Err(DefinitionError::DuplicateColumn { .. })
        ));
    }

    #[test]
    fn test_reference_that_does_not_decode_is_rejected() {
        let err = LinkDefinition::new(
            "InvQuarter",
            0,
            vec![HubReference::new("Invoice", 0), HubReference::new("Q1 2024", 0)],
        )
        .unwrap_err();
        assert_eq!(
            err,
            DefinitionError::IrreversibleName {
                entity: "hub reference",
                name: "Q1 2024".to_string(),
                stored: "q_1_2024".to_string(),
            }
        );
    }

    #[test]
    fn test_postgres_emits_one_index_per_reference() {
        let statements = prepared_by().generate_sql_for(Dialect::Postgres).unwrap();
        assert_eq!(statements.len(), 3);
        assert!(statements[1].contains("\"invoice_hash_key\""));
        assert!(statements[2].contains("\"employee_hash_key\""));
    }
}
