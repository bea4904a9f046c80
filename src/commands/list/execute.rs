use std::error::Error;
use std::path::Path;

use serde::Serialize;

use super::ListCmd;
use crate::commands::Execute;
use crate::connection::with_transaction;
use crate::error::Result;
use crate::introspect::SchemaIntrospector;
use crate::meta::Catalog;
use crate::naming::{EntityName, EntityType};

/// Result of the list command execution
#[derive(Debug, Serialize)]
pub struct ListResult {
    pub schema: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<EntityType>,
    pub entities: Vec<EntityName>,
}

impl ListCmd {
    pub fn run(&self, catalog: &mut dyn Catalog, schema: &str) -> Result<ListResult> {
        let introspector = SchemaIntrospector::new(schema);
        let kind = self.kind.map(EntityType::from);

        let types: Vec<EntityType> = match kind {
            Some(entity_type) => vec![entity_type],
            None => EntityType::ALL.to_vec(),
        };

        let mut entities = Vec::new();
        for entity_type in types {
            entities.extend(introspector.list_entities(catalog, entity_type)?);
        }

        Ok(ListResult {
            schema: schema.to_string(),
            kind,
            entities,
        })
    }
}

impl Execute for ListCmd {
    type Output = ListResult;

    fn execute(self, config_path: &Path) -> std::result::Result<Self::Output, Box<dyn Error>> {
        with_transaction(config_path, |catalog, schema| self.run(catalog, schema))
    }
}
