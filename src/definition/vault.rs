use serde::{Deserialize, Serialize};

use crate::error::DefinitionError;
use crate::sql::compilers::Dialect;
use crate::sql::table::TableDefinition;

use super::hub::HubDefinition;
use super::link::LinkDefinition;
use super::satellite::SatelliteDefinition;

/// A complete set of hubs, satellites and links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataVaultDefinition {
    #[serde(default)]
    pub hubs: Vec<HubDefinition>,
    #[serde(default)]
    pub satellites: Vec<SatelliteDefinition>,
    #[serde(default)]
    pub links: Vec<LinkDefinition>,
}

impl DataVaultDefinition {
    pub fn is_empty(&self) -> bool {
        self.hubs.is_empty() && self.satellites.is_empty() && self.links.is_empty()
    }

    pub fn entity_count(&self) -> usize {
        self.hubs.len() + self.satellites.len() + self.links.len()
    }

    /// Tables in creation order: hubs, then satellites, then links, so every
    /// foreign key target exists before the table pointing at it.
    pub fn table_definitions(&self) -> Result<Vec<TableDefinition>, DefinitionError> {
        let hubs = self.hubs.iter().map(HubDefinition::table_definition);
        let satellites = self.satellites.iter().map(SatelliteDefinition::table_definition);
        let links = self.links.iter().map(LinkDefinition::table_definition);

        hubs.chain(satellites).chain(links).collect()
    }

    /// MySQL batch with exactly one statement per entity.
    ///
    /// The first invalid entity aborts the batch; no statements are returned.
    pub fn generate_sql(&self) -> Result<Vec<String>, DefinitionError> {
        self.generate_sql_for(Dialect::MySql)
    }

    pub fn generate_sql_for(&self, dialect: Dialect) -> Result<Vec<String>, DefinitionError> {
        let mut statements = Vec::with_capacity(self.entity_count());
        for table in self.table_definitions()? {
            log::debug!("Compiling {} for {}", table.name, dialect.name());
            statements.extend(dialect.create_table(&table)?);
        }
        Ok(statements)
    }
}
