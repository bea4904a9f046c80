use serde::{Deserialize, Serialize};

use crate::error::DefinitionError;
use crate::naming::{EntityType, canonical_name, check_reversible, hash_key_column, table_name};
use crate::sql::compilers::{Dialect, MySqlCompiler};
use crate::sql::table::{TableDefinition, UniqueKeyDefinition};

use super::columns;

/// A hub: the business keys identifying one kind of business object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HubDefinition {
    pub name: String,
    #[serde(default)]
    pub revision: u32,
    #[serde(default)]
    pub business_keys: Vec<String>,
}

impl HubDefinition {
    pub fn new(name: impl Into<String>, revision: u32, business_keys: Vec<String>) -> Self {
        Self {
            name: name.into(),
            revision,
            business_keys,
        }
    }

    pub fn table_name(&self) -> String {
        table_name(EntityType::Hub, &self.name, self.revision)
    }

    pub fn hash_key_column(&self) -> String {
        hash_key_column(&self.name)
    }

    /// This hub as introspection reports it, with display-cased names.
    pub fn canonical(&self) -> Self {
        let business_keys = self.business_keys.iter().map(|k| canonical_name(k)).collect();
        Self::new(canonical_name(&self.name), self.revision, business_keys)
    }

    /// Hash key (primary key), load date, record source, then one `CHAR(100)`
    /// column per business key under a single composite unique key.
    pub fn table_definition(&self) -> Result<TableDefinition, DefinitionError> {
        if self.name.trim().is_empty() {
            return Err(DefinitionError::EmptyName { entity: "hub" });
        }
        check_reversible("hub", &self.name)?;
        for key in &self.business_keys {
            check_reversible("business key", key)?;
        }

        let mut table = TableDefinition::new(self.table_name());
        table.columns = vec![
            columns::hash_key(&self.name),
            columns::load_date(),
            columns::record_source(),
        ];
        table.primary_key = vec![self.hash_key_column()];

        if !self.business_keys.is_empty() {
            let key_columns: Vec<_> = self.business_keys.iter().map(|k| columns::business_key(k)).collect();
            table.unique_keys.push(UniqueKeyDefinition {
                column_names: key_columns.iter().map(|c| c.name.clone()).collect(),
            });
            table.columns.extend(key_columns);
        }

        table.validate()?;
        Ok(table)
    }

    /// Single MySQL `CREATE TABLE` statement for this hub.
    pub fn generate_sql(&self) -> Result<String, DefinitionError> {
        MySqlCompiler::compile_table(&self.table_definition()?)
    }

    pub fn generate_sql_for(&self, dialect: Dialect) -> Result<Vec<String>, DefinitionError> {
        dialect.create_table(&self.table_definition()?)
    }
}
