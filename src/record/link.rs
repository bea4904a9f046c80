use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::definition::columns::{LOAD_DATE, RECORD_SOURCE};
use crate::definition::{HubReference, LinkDefinition};
use crate::error::DefinitionError;
use crate::naming::{EntityType, hash_key_column, table_name};
use crate::sql::compilers::Dialect;

use super::value::datetime_literal;
use super::{check_bookkeeping, check_hash_key, invalid_record};

/// Hash key of one hub joined by a link row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HubHashKeyValue {
    pub hub: HubReference,
    pub hash_key: String,
}

impl HubHashKeyValue {
    pub fn new(hub: HubReference, hash_key: impl Into<String>) -> Self {
        Self {
            hub,
            hash_key: hash_key.into(),
        }
    }
}

/// One row for a link table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkInsertRecord {
    pub link_name: String,
    #[serde(default)]
    pub revision: u32,
    pub hash_key: String,
    pub load_date: NaiveDateTime,
    pub record_source: String,
    pub hub_hash_keys: Vec<HubHashKeyValue>,
}

impl LinkInsertRecord {
    pub fn table_name(&self) -> String {
        table_name(EntityType::Link, &self.link_name, self.revision)
    }

    pub fn generate_sql(&self) -> Result<String, DefinitionError> {
        self.generate_sql_for(Dialect::MySql)
    }

    pub fn generate_sql_for(&self, dialect: Dialect) -> Result<String, DefinitionError> {
        check_bookkeeping(&self.link_name, &self.hash_key, &self.record_source)?;
        if self.hub_hash_keys.len() < LinkDefinition::MIN_HUB_REFERENCES {
            return Err(invalid_record(
                &self.link_name,
                format!(
                    "at least {} hub hash keys are required, found {}",
                    LinkDefinition::MIN_HUB_REFERENCES,
                    self.hub_hash_keys.len()
                ),
            ));
        }

        let mut columns = vec![
            hash_key_column(&self.link_name),
            LOAD_DATE.to_string(),
            RECORD_SOURCE.to_string(),
        ];
        let mut literals = vec![
            dialect.quote_literal(&self.hash_key),
            datetime_literal(dialect, &self.load_date),
            dialect.quote_literal(&self.record_source),
        ];

        for value in &self.hub_hash_keys {
            check_hash_key(&self.link_name, &value.hash_key)?;
            columns.push(value.hub.hash_key_column());
            literals.push(dialect.quote_literal(&value.hash_key));
        }

        Ok(dialect.insert(&self.table_name(), &columns, &literals))
    }
}
