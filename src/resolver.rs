//! Two-hop relationship walk around a hub.
//!
//! Starting from a hub, every table holding a foreign key to it is either a
//! satellite (collected) or a link (followed one more hop to its other hubs
//! and their satellites). The walk stops there; links of the far hubs are not
//! followed.

use serde::Serialize;

use crate::definition::{HubDefinition, LinkDefinition, SatelliteDefinition};
use crate::error::{Result, VaultError};
use crate::introspect::SchemaIntrospector;
use crate::meta::Catalog;
use crate::naming::{EntityName, EntityType};

/// A hub reached through a link, with its own satellites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedHub {
    pub hub: HubDefinition,
    pub satellites: Vec<SatelliteDefinition>,
}

/// A link of the origin hub and the other hubs it connects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkRelations {
    pub link: LinkDefinition,
    pub hubs: Vec<RelatedHub>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HubRelations {
    pub hub: HubDefinition,
    pub satellites: Vec<SatelliteDefinition>,
    pub links: Vec<LinkRelations>,
}

/// Tables pointing at one hub, split by entity type.
#[derive(Default)]
struct Dependents {
    satellites: Vec<EntityName>,
    links: Vec<EntityName>,
}

pub struct RelationshipResolver {
    introspector: SchemaIntrospector,
}

impl RelationshipResolver {
    pub fn new(introspector: SchemaIntrospector) -> Self {
        Self { introspector }
    }

    pub fn introspector(&self) -> &SchemaIntrospector {
        &self.introspector
    }

    /// Resolve the hub, its satellites and links, and for every link the
    /// other hubs with their satellites.
    ///
    /// Any failure along the way fails the whole resolution.
    pub fn resolve(&self, catalog: &mut dyn Catalog, hub_name: &str, revision: u32) -> Result<HubRelations> {
        let hub = self.introspector.hub_definition(catalog, hub_name, revision)?;
        let dependents = self.dependents(catalog, &hub.table_name())?;

        let satellites = self.satellites(catalog, &dependents.satellites)?;

        let mut links = Vec::with_capacity(dependents.links.len());
        for entity in &dependents.links {
            let link = self
                .introspector
                .link_definition(catalog, &entity.name, entity.revision)?;

            let mut hubs = Vec::new();
            for reference in &link.hub_references {
                if reference.table_name() == hub.table_name() {
                    continue;
                }
                let related = self
                    .introspector
                    .hub_definition(catalog, &reference.hub_name, reference.revision)?;
                let related_dependents = self.dependents(catalog, &related.table_name())?;
                hubs.push(RelatedHub {
                    satellites: self.satellites(catalog, &related_dependents.satellites)?,
                    hub: related,
                });
            }

            links.push(LinkRelations { link, hubs });
        }

        log::debug!(
            "Resolved {}: {} satellites, {} links",
            hub.table_name(),
            satellites.len(),
            links.len()
        );

        Ok(HubRelations {
            hub,
            satellites,
            links,
        })
    }

    /// Parse every table referencing `hub_table`, ordered by table name.
    fn dependents(&self, catalog: &mut dyn Catalog, hub_table: &str) -> Result<Dependents> {
        let mut tables = catalog.referencing_tables(self.introspector.schema(), hub_table)?;
        tables.sort();

        let mut dependents = Dependents::default();
        for table in tables {
            let entity = EntityName::parse(&table)?;
            match entity.entity_type {
                EntityType::Satellite => dependents.satellites.push(entity),
                EntityType::Link => dependents.links.push(entity),
                EntityType::Hub => {
                    return Err(VaultError::mismatch(
                        &table,
                        format!("hub table holds a foreign key to '{}'", hub_table),
                    ));
                }
            }
        }
        Ok(dependents)
    }

    fn satellites(&self, catalog: &mut dyn Catalog, entities: &[EntityName]) -> Result<Vec<SatelliteDefinition>> {
        entities
            .iter()
            .map(|e| self.introspector.satellite_definition(catalog, &e.name, e.revision))
            .collect()
    }
}
