//! Row insertion records.
//!
//! Records render `INSERT` statements for hubs, links and satellites.
//! Attribute values are [`AttributeValue`] variants checked against the
//! attribute's declared column type.

pub mod hub;
pub mod link;
pub mod satellite;
pub mod value;

pub use hub::{BusinessKeyValue, HubInsertRecord};
pub use link::{HubHashKeyValue, LinkInsertRecord};
pub use satellite::{AttributeInsertValue, SatelliteInsertRecord};
pub use value::AttributeValue;

use serde::{Deserialize, Serialize};

use crate::definition::columns::{HASH_KEY_LENGTH, RECORD_SOURCE_LENGTH};
use crate::error::DefinitionError;
use crate::sql::compilers::Dialect;

/// Rows to insert together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InsertBatch {
    #[serde(default)]
    pub hubs: Vec<HubInsertRecord>,
    #[serde(default)]
    pub links: Vec<LinkInsertRecord>,
    #[serde(default)]
    pub satellites: Vec<SatelliteInsertRecord>,
}

impl InsertBatch {
    pub fn is_empty(&self) -> bool {
        self.hubs.is_empty() && self.links.is_empty() && self.satellites.is_empty()
    }

    pub fn generate_sql(&self) -> Result<Vec<String>, DefinitionError> {
        self.generate_sql_for(Dialect::MySql)
    }

    /// Hubs, then links, then satellites. The first invalid record aborts the batch.
    pub fn generate_sql_for(&self, dialect: Dialect) -> Result<Vec<String>, DefinitionError> {
        let hubs = self.hubs.iter().map(|r| r.generate_sql_for(dialect));
        let links = self.links.iter().map(|r| r.generate_sql_for(dialect));
        let satellites = self.satellites.iter().map(|r| r.generate_sql_for(dialect));

        hubs.chain(links).chain(satellites).collect()
    }
}

pub(crate) fn invalid_record(entity: &str, message: impl Into<String>) -> DefinitionError {
    DefinitionError::InvalidRecord {
        entity: entity.to_string(),
        message: message.into(),
    }
}

pub(crate) fn check_hash_key(entity: &str, hash_key: &str) -> Result<(), DefinitionError> {
    if hash_key.is_empty() || hash_key.chars().count() > HASH_KEY_LENGTH as usize {
        return Err(invalid_record(
            entity,
            format!("hash key must be 1 to {} characters", HASH_KEY_LENGTH),
        ));
    }
    Ok(())
}

/// Entity name, hash key and record source shared by every record.
pub(crate) fn check_bookkeeping(entity: &str, hash_key: &str, record_source: &str) -> Result<(), DefinitionError> {
    if entity.trim().is_empty() {
        return Err(DefinitionError::EmptyName { entity: "record" });
    }
    check_hash_key(entity, hash_key)?;
    if record_source.trim().is_empty() || record_source.chars().count() > RECORD_SOURCE_LENGTH as usize {
        return Err(invalid_record(
            entity,
            format!("record source must be 1 to {} characters", RECORD_SOURCE_LENGTH),
        ));
    }
    Ok(())
}
