//! Reconstruct entity definitions from an existing schema.
//!
//! The introspector reads column and foreign-key metadata through a
//! [`Catalog`] and classifies every column by name and type. Columns that do
//! not fit the entity's shape are errors, never skipped.

use serde::Serialize;

use crate::definition::columns::{END_DATE, LOAD_DATE, RECORD_SOURCE};
use crate::definition::{
    HubDefinition, HubReference, LinkDefinition, SatelliteAttributeDefinition, SatelliteDefinition,
};
use crate::error::{Result, VaultError};
use crate::meta::{Catalog, ColumnMeta, TableMeta};
use crate::naming::{
    EntityName, EntityType, canonical_name, hash_key_column, table_name, to_display_case,
    to_storage_case,
};
use crate::sql::escape::escape_like;
use crate::sql::table::ColumnDataType;

/// A reconstructed definition of any entity type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "entity_type", rename_all = "lowercase")]
pub enum EntityDefinition {
    Hub(HubDefinition),
    Link(LinkDefinition),
    Satellite(SatelliteDefinition),
}

impl EntityDefinition {
    pub fn entity_type(&self) -> EntityType {
        match self {
            EntityDefinition::Hub(_) => EntityType::Hub,
            EntityDefinition::Link(_) => EntityType::Link,
            EntityDefinition::Satellite(_) => EntityType::Satellite,
        }
    }

    pub fn table_name(&self) -> String {
        match self {
            EntityDefinition::Hub(hub) => hub.table_name(),
            EntityDefinition::Link(link) => link.table_name(),
            EntityDefinition::Satellite(satellite) => satellite.table_name(),
        }
    }
}

/// Reads data vault entities from one schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaIntrospector {
    schema: String,
}

impl SchemaIntrospector {
    pub fn new(schema: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
        }
    }

    pub fn schema(&self) -> &str {
        &self.schema
    }

    fn read_table(&self, catalog: &mut dyn Catalog, table: &str) -> Result<TableMeta> {
        log::debug!("Introspecting {}.{}", self.schema, table);
        let meta = catalog.table_meta(&self.schema, table)?;
        if !meta.exists() {
            return Err(VaultError::NotFound {
                schema: self.schema.clone(),
                table: table.to_string(),
            });
        }
        Ok(meta)
    }

    /// Rebuild a hub: CHAR columns other than the hash key and record source are business keys.
    pub fn hub_definition(
        &self,
        catalog: &mut dyn Catalog,
        name: &str,
        revision: u32,
    ) -> Result<HubDefinition> {
        let table = table_name(EntityType::Hub, name, revision);
        let meta = self.read_table(catalog, &table)?;
        let hash_key = hash_key_column(name);

        let mut shape = Bookkeeping::default();
        let mut business_keys = Vec::new();
        for column in &meta.columns {
            match column_type(&table, column)? {
                ColumnDataType::Char if column.name == hash_key => shape.hash_key = true,
                ColumnDataType::Char if column.name == RECORD_SOURCE => shape.record_source = true,
                ColumnDataType::Char => business_keys.push(to_display_case(&column.name)),
                ColumnDataType::Datetime if column.name == LOAD_DATE => shape.load_date = true,
                other => return Err(unexpected_column(&table, column, other)),
            }
        }
        shape.require(&table, &hash_key, false)?;

        Ok(HubDefinition::new(canonical_name(name), revision, business_keys))
    }

    /// Rebuild a link from its foreign keys, ordered by the position of the
    /// referencing column.
    pub fn link_definition(
        &self,
        catalog: &mut dyn Catalog,
        name: &str,
        revision: u32,
    ) -> Result<LinkDefinition> {
        let table = table_name(EntityType::Link, name, revision);
        let meta = self.read_table(catalog, &table)?;
        let hash_key = hash_key_column(name);

        let mut shape = Bookkeeping::default();
        for column in &meta.columns {
            match column_type(&table, column)? {
                ColumnDataType::Char if column.name == hash_key => shape.hash_key = true,
                ColumnDataType::Char if column.name == RECORD_SOURCE => shape.record_source = true,
                // hub hash keys, bound by the foreign keys below
                ColumnDataType::Char => {}
                ColumnDataType::Datetime if column.name == LOAD_DATE => shape.load_date = true,
                other => return Err(unexpected_column(&table, column, other)),
            }
        }
        shape.require(&table, &hash_key, false)?;

        let mut references: Vec<(usize, HubReference)> = Vec::with_capacity(meta.foreign_keys.len());
        for fk in &meta.foreign_keys {
            let column = single_column(&table, &fk.name, &fk.columns)?;
            let hub = referenced_hub(&table, &fk.referenced_table)?;
            let position = meta.column_position(column).unwrap_or(usize::MAX);
            references.push((position, HubReference::from(&hub)));
        }
        references.sort_by_key(|(position, _)| *position);

        let mut hub_references: Vec<HubReference> = Vec::with_capacity(references.len());
        for (_, reference) in references {
            if !hub_references.contains(&reference) {
                hub_references.push(reference);
            }
        }

        if hub_references.len() < LinkDefinition::MIN_HUB_REFERENCES {
            return Err(VaultError::mismatch(
                &table,
                format!(
                    "a link needs at least {} distinct hub references, found {}",
                    LinkDefinition::MIN_HUB_REFERENCES,
                    hub_references.len()
                ),
            ));
        }

        Ok(LinkDefinition {
            name: canonical_name(name),
            revision,
            hub_references,
        })
    }

    /// Rebuild a satellite: its single foreign key names the owning hub and
    /// every non-bookkeeping column is an attribute.
    pub fn satellite_definition(
        &self,
        catalog: &mut dyn Catalog,
        name: &str,
        revision: u32,
    ) -> Result<SatelliteDefinition> {
        let table = table_name(EntityType::Satellite, name, revision);
        let meta = self.read_table(catalog, &table)?;

        let fk = match meta.foreign_keys.as_slice() {
            [fk] => fk,
            other => {
                return Err(VaultError::mismatch(
                    &table,
                    format!("expected exactly one foreign key, found {}", other.len()),
                ));
            }
        };
        single_column(&table, &fk.name, &fk.columns)?;
        let hub = referenced_hub(&table, &fk.referenced_table)?;
        let hub_key = hub.hash_key_column();

        let mut shape = Bookkeeping::default();
        let mut attributes = Vec::new();
        for column in &meta.columns {
            let data_type = column_type(&table, column)?;
            match (column.name.as_str(), data_type) {
                (n, ColumnDataType::Char) if n == hub_key => shape.hash_key = true,
                (LOAD_DATE, ColumnDataType::Datetime) => shape.load_date = true,
                (END_DATE, ColumnDataType::Datetime) => shape.end_date = true,
                (RECORD_SOURCE, ColumnDataType::Char) => shape.record_source = true,
                _ => attributes.push(SatelliteAttributeDefinition {
                    name: to_display_case(&column.name),
                    data_type,
                    length: column.length,
                    is_nullable: column.is_nullable,
                    decimal_precision: column.decimal_precision,
                }),
            }
        }
        shape.require(&table, &hub_key, true)?;

        if attributes.is_empty() {
            return Err(VaultError::mismatch(&table, "no attribute columns"));
        }

        Ok(SatelliteDefinition {
            name: canonical_name(name),
            revision,
            hub_reference: Some(HubReference::from(&hub)),
            attributes,
        })
    }

    /// Decode `table` and rebuild whichever entity it holds.
    pub fn entity_definition(&self, catalog: &mut dyn Catalog, table: &str) -> Result<EntityDefinition> {
        let entity = EntityName::parse(table)?;
        self.definition_of(catalog, &entity)
    }

    pub fn definition_of(&self, catalog: &mut dyn Catalog, entity: &EntityName) -> Result<EntityDefinition> {
        let EntityName {
            entity_type,
            name,
            revision,
        } = entity;
        Ok(match entity_type {
            EntityType::Hub => EntityDefinition::Hub(self.hub_definition(catalog, name, *revision)?),
            EntityType::Link => EntityDefinition::Link(self.link_definition(catalog, name, *revision)?),
            EntityType::Satellite => {
                EntityDefinition::Satellite(self.satellite_definition(catalog, name, *revision)?)
            }
        })
    }

    /// Every entity of one type, sorted by name then revision.
    ///
    /// Tables carrying the prefix whose name does not decode are skipped.
    pub fn list_entities(&self, catalog: &mut dyn Catalog, entity_type: EntityType) -> Result<Vec<EntityName>> {
        let pattern = format!("{}%", escape_like(entity_type.table_prefix()));
        self.matching_entities(catalog, &pattern)
    }

    /// Entities of any type whose stored name contains `keyword`.
    pub fn search_entities(&self, catalog: &mut dyn Catalog, keyword: &str) -> Result<Vec<EntityName>> {
        let needle = escape_like(&to_storage_case(keyword));
        let mut found = Vec::new();
        for entity_type in EntityType::ALL {
            let pattern = format!("{}%{}%", escape_like(entity_type.table_prefix()), needle);
            found.extend(self.matching_entities(catalog, &pattern)?);
        }
        Ok(found)
    }

    fn matching_entities(&self, catalog: &mut dyn Catalog, pattern: &str) -> Result<Vec<EntityName>> {
        let mut entities = Vec::new();
        for table in catalog.table_names(&self.schema, pattern)? {
            match EntityName::parse(&table) {
                Ok(entity) => entities.push(entity),
                Err(e) => log::warn!("Skipping table {}.{}: {}", self.schema, table, e),
            }
        }
        entities.sort();
        Ok(entities)
    }
}

/// Presence of the bookkeeping columns seen while scanning a table.
#[derive(Default)]
struct Bookkeeping {
    hash_key: bool,
    load_date: bool,
    end_date: bool,
    record_source: bool,
}

impl Bookkeeping {
    fn require(&self, table: &str, hash_key: &str, with_end_date: bool) -> Result<()> {
        let missing = if !self.hash_key {
            hash_key
        } else if !self.load_date {
            LOAD_DATE
        } else if with_end_date && !self.end_date {
            END_DATE
        } else if !self.record_source {
            RECORD_SOURCE
        } else {
            return Ok(());
        };
        Err(VaultError::mismatch(table, format!("column '{}' not found", missing)))
    }
}

fn column_type(table: &str, column: &ColumnMeta) -> Result<ColumnDataType> {
    column
        .type_name
        .parse::<ColumnDataType>()
        .map_err(|e| VaultError::mismatch(table, format!("column '{}': {}", column.name, e)))
}

fn unexpected_column(table: &str, column: &ColumnMeta, data_type: ColumnDataType) -> VaultError {
    VaultError::mismatch(
        table,
        format!("unexpected {} column '{}'", data_type, column.name),
    )
}

fn single_column<'a>(table: &str, constraint: &str, columns: &'a [String]) -> Result<&'a str> {
    match columns {
        [column] => Ok(column),
        _ => Err(VaultError::mismatch(
            table,
            format!(
                "foreign key '{}' binds {} columns, expected exactly one",
                constraint,
                columns.len()
            ),
        )),
    }
}

fn referenced_hub(table: &str, referenced_table: &str) -> Result<EntityName> {
    let entity = EntityName::parse(referenced_table)?;
    if entity.entity_type != EntityType::Hub {
        return Err(VaultError::mismatch(
            table,
            format!("foreign key references {} table '{}', expected a hub", entity.entity_type, referenced_table),
        ));
    }
    Ok(entity)
}
