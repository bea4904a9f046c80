use serde::{Deserialize, Serialize};

use crate::error::DefinitionError;
use crate::naming::{EntityType, canonical_name, check_reversible, table_name, to_storage_case};
use crate::sql::compilers::{Dialect, MySqlCompiler};
use crate::sql::table::{ColumnDataType, ColumnDefinition, TableDefinition};

use super::columns;
use super::reference::HubReference;

/// One descriptive column of a satellite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SatelliteAttributeDefinition {
    pub name: String,
    pub data_type: ColumnDataType,
    #[serde(default)]
    pub length: u32,
    #[serde(default)]
    pub is_nullable: bool,
    #[serde(default)]
    pub decimal_precision: u32,
}

impl SatelliteAttributeDefinition {
    pub fn new(name: impl Into<String>, data_type: ColumnDataType, length: u32, is_nullable: bool) -> Self {
        Self {
            name: name.into(),
            data_type,
            length,
            is_nullable,
            decimal_precision: 0,
        }
    }

    pub fn with_precision(mut self, decimal_precision: u32) -> Self {
        self.decimal_precision = decimal_precision;
        self
    }

    pub fn column_name(&self) -> String {
        to_storage_case(&self.name)
    }

    pub fn column_definition(&self) -> ColumnDefinition {
        ColumnDefinition {
            name: self.column_name(),
            data_type: self.data_type,
            length: self.length,
            is_nullable: self.is_nullable,
            decimal_precision: self.decimal_precision,
        }
    }
}

/// A satellite: time-variant attributes hanging off one hub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SatelliteDefinition {
    pub name: String,
    #[serde(default)]
    pub revision: u32,
    pub hub_reference: Option<HubReference>,
    pub attributes: Vec<SatelliteAttributeDefinition>,
}

impl SatelliteDefinition {
    /// Build a satellite, rejecting an empty attribute list.
    pub fn new(
        name: impl Into<String>,
        revision: u32,
        hub_reference: HubReference,
        attributes: Vec<SatelliteAttributeDefinition>,
    ) -> Result<Self, DefinitionError> {
        let satellite = Self {
            name: name.into(),
            revision,
            hub_reference: Some(hub_reference),
            attributes,
        };
        satellite.validate()?;
        Ok(satellite)
    }

    pub fn table_name(&self) -> String {
        table_name(EntityType::Satellite, &self.name, self.revision)
    }

    /// This satellite with display-cased names; attribute order is kept.
    pub fn canonical(&self) -> Self {
        Self {
            name: canonical_name(&self.name),
            revision: self.revision,
            hub_reference: self.hub_reference.as_ref().map(HubReference::canonical),
            attributes: self
                .attributes
                .iter()
                .map(|a| SatelliteAttributeDefinition {
                    name: canonical_name(&a.name),
                    ..a.clone()
                })
                .collect(),
        }
    }

    fn validate(&self) -> Result<&HubReference, DefinitionError> {
        if self.name.trim().is_empty() {
            return Err(DefinitionError::EmptyName { entity: "satellite" });
        }
        check_reversible("satellite", &self.name)?;
        let hub = self
            .hub_reference
            .as_ref()
            .ok_or_else(|| DefinitionError::MissingHubReference {
                satellite: self.name.clone(),
            })?;
        hub.validate()?;
        if self.attributes.is_empty() {
            return Err(DefinitionError::NoAttributes {
                satellite: self.name.clone(),
            });
        }
        for attribute in &self.attributes {
            check_reversible("satellite attribute", &attribute.name)?;
        }
        Ok(hub)
    }

    /// Composite primary key (hub hash key, load date) with the hub hash key
    /// indexed and referencing the hub; attributes follow in declared order.
    pub fn table_definition(&self) -> Result<TableDefinition, DefinitionError> {
        let hub = self.validate()?;
        let hub_key = hub.hash_key_column();

        let mut table = TableDefinition::new(self.table_name());
        table.columns = vec![
            columns::hash_key(&hub.hub_name),
            columns::load_date(),
            columns::end_date(),
            columns::record_source(),
        ];
        table
            .columns
            .extend(self.attributes.iter().map(SatelliteAttributeDefinition::column_definition));
        table.primary_key = vec![hub_key.clone(), columns::LOAD_DATE.to_string()];
        table.indices.push(columns::index(&hub_key));
        table.foreign_keys.push(columns::foreign_key(&hub_key, &hub.table_name()));

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

    fn invoice_detail() -> SatelliteDefinition {
        SatelliteDefinition::new(
            "InvoiceDetail",
            0,
            HubReference::new("Invoice", 0),
            vec![
                SatelliteAttributeDefinition::new("Remark", ColumnDataType::Varchar, 200, true),
                SatelliteAttributeDefinition::new("Total", ColumnDataType::Decimal, 12, false).with_precision(2),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_generate_sql() {
        let sql = invoice_detail().generate_sql().unwrap();
        let expected = "CREATE TABLE `sat_invoice_detail_rev0` (
              `invoice_hash_key` CHAR(32) NOT NULL,
              `load_date` DATETIME NOT NULL,
              `end_date` DATETIME NULL,
              `record_source` CHAR(100) NOT NULL,
              `remark` VARCHAR(200) NULL,
              `total` DECIMAL(12,2) NOT NULL,
              PRIMARY KEY (`invoice_hash_key`, `load_date`),
              INDEX (`invoice_hash_key`),
              FOREIGN KEY (`invoice_hash_key`) REFERENCES `hub_invoice_rev0` (`invoice_hash_key`)
            )";
        assert_eq!(normalize_whitespace(&sql), normalize_whitespace(expected));
    }

    #[test]
    fn test_missing_hub_reference() {
        let mut satellite = invoice_detail();
        satellite.hub_reference = None;
        assert_eq!(
            satellite.generate_sql(),
            Err(DefinitionError::MissingHubReference {
                satellite: "InvoiceDetail".to_string()
            })
        );
    }

    #[test]
    fn test_constructor_rejects_no_attributes() {
        let err = SatelliteDefinition::new("Empty", 0, HubReference::new("Invoice", 0), vec![]).unwrap_err();
        assert!(matches!(err, DefinitionError::NoAttributes { .. }));
    }

    #[test]
    fn test_irreversible_attribute_name_is_rejected() {
        let err = SatelliteDefinition::new(
            "InvoiceDetail",
            0,
            HubReference::new("Invoice", 0),
            vec![SatelliteAttributeDefinition::new("Q1 2024", ColumnDataType::Integer, 0, false)],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            DefinitionError::IrreversibleName { entity: "satellite attribute", .. }
        ));
    }

    #[test]
    fn test_irreversible_hub_reference_is_rejected() {
        let err = SatelliteDefinition::new(
            "InvoiceDetail",
            0,
            HubReference::new("A B", 0),
            vec![SatelliteAttributeDefinition::new("Remark", ColumnDataType::Text, 0, true)],
        )
        .unwrap_err();
        assert!(matches!(err, DefinitionError::IrreversibleName { entity: "hub reference", .. }));
    }

    #[test]
    fn test_attribute_type_is_copied_verbatim() {
        let table = invoice_detail().table_definition().unwrap();
        let total = table.column("total").unwrap();
        assert_eq!(total.data_type, ColumnDataType::Decimal);
        assert_eq!(total.length, 12);
        assert_eq!(total.decimal_precision, 2);
        assert!(!total.is_nullable);
    }

    #[test]
    fn test_deserialize_attribute_defaults() {
        let json = r#"{
            "name": "Contact",
            "hub_reference": {"hub_name": "Employee", "revision": 1},
            "attributes": [{"name": "Email", "data_type": "TEXT"}]
        }"#;
        let satellite: SatelliteDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(satellite.revision, 0);
        assert_eq!(
            satellite.attributes[0],
            SatelliteAttributeDefinition::new("Email", ColumnDataType::Text, 0, false)
        );
    }
}
