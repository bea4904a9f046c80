use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::definition::SatelliteAttributeDefinition;
use crate::definition::columns::{LOAD_DATE, RECORD_SOURCE};
use crate::error::DefinitionError;
use crate::naming::{EntityType, hash_key_column, table_name};
use crate::sql::compilers::Dialect;

use super::value::{AttributeValue, datetime_literal};
use super::{check_bookkeeping, invalid_record};

/// A value paired with the attribute definition it is written to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeInsertValue {
    pub attribute: SatelliteAttributeDefinition,
    pub value: AttributeValue,
}

impl AttributeInsertValue {
    pub fn new(attribute: SatelliteAttributeDefinition, value: AttributeValue) -> Self {
        Self { attribute, value }
    }
}

/// One row for a satellite table. `end_date` is left open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SatelliteInsertRecord {
    pub satellite_name: String,
    #[serde(default)]
    pub revision: u32,
    pub hub_name: String,
    pub hub_hash_key: String,
    pub load_date: NaiveDateTime,
    pub record_source: String,
    pub attributes: Vec<AttributeInsertValue>,
}

impl SatelliteInsertRecord {
    pub fn table_name(&self) -> String {
        table_name(EntityType::Satellite, &self.satellite_name, self.revision)
    }

    pub fn generate_sql(&self) -> Result<String, DefinitionError> {
        self.generate_sql_for(Dialect::MySql)
    }

    pub fn generate_sql_for(&self, dialect: Dialect) -> Result<String, DefinitionError> {
        check_bookkeeping(&self.satellite_name, &self.hub_hash_key, &self.record_source)?;
        if self.hub_name.trim().is_empty() {
            return Err(invalid_record(&self.satellite_name, "hub name is empty"));
        }
        if self.attributes.is_empty() {
            return Err(invalid_record(&self.satellite_name, "at least one attribute value is required"));
        }

        let mut columns = vec![
            hash_key_column(&self.hub_name),
            LOAD_DATE.to_string(),
            RECORD_SOURCE.to_string(),
        ];
        let mut literals = vec![
            dialect.quote_literal(&self.hub_hash_key),
            datetime_literal(dialect, &self.load_date),
            dialect.quote_literal(&self.record_source),
        ];

        for item in &self.attributes {
            columns.push(item.attribute.column_name());
            literals.push(item.value.to_sql_literal_for(dialect, &item.attribute)?);
        }

        Ok(dialect.insert(&self.table_name(), &columns, &literals))
    }
}
