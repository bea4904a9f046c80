use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::definition::columns::{BUSINESS_KEY_LENGTH, LOAD_DATE, RECORD_SOURCE};
use crate::error::DefinitionError;
use crate::naming::{EntityType, hash_key_column, table_name, to_storage_case};
use crate::sql::compilers::Dialect;

use super::value::datetime_literal;
use super::{check_bookkeeping, invalid_record};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessKeyValue {
    pub key: String,
    pub value: String,
}

impl BusinessKeyValue {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// One row for a hub table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HubInsertRecord {
    pub hub_name: String,
    #[serde(default)]
    pub revision: u32,
    pub hash_key: String,
    pub load_date: NaiveDateTime,
    pub record_source: String,
    pub business_keys: Vec<BusinessKeyValue>,
}

impl HubInsertRecord {
    pub fn table_name(&self) -> String {
        table_name(EntityType::Hub, &self.hub_name, self.revision)
    }

    pub fn generate_sql(&self) -> Result<String, DefinitionError> {
        self.generate_sql_for(Dialect::MySql)
    }

    pub fn generate_sql_for(&self, dialect: Dialect) -> Result<String, DefinitionError> {
        check_bookkeeping(&self.hub_name, &self.hash_key, &self.record_source)?;
        if self.business_keys.is_empty() {
            return Err(invalid_record(&self.hub_name, "at least one business key value is required"));
        }

        let mut columns = vec![
            hash_key_column(&self.hub_name),
            LOAD_DATE.to_string(),
            RECORD_SOURCE.to_string(),
        ];
        let mut literals = vec![
            dialect.quote_literal(&self.hash_key),
            datetime_literal(dialect, &self.load_date),
            dialect.quote_literal(&self.record_source),
        ];

        for business_key in &self.business_keys {
            if business_key.value.chars().count() > BUSINESS_KEY_LENGTH as usize {
                return Err(invalid_record(
                    &self.hub_name,
                    format!("business key '{}' exceeds {} characters", business_key.key, BUSINESS_KEY_LENGTH),
                ));
            }
            columns.push(to_storage_case(&business_key.key));
            literals.push(dialect.quote_literal(&business_key.value));
        }

        Ok(dialect.insert(&self.table_name(), &columns, &literals))
    }
}
