use std::error::Error;
use std::path::Path;

use serde::Serialize;

use super::RelatedCmd;
use crate::commands::Execute;
use crate::connection::with_transaction;
use crate::error::Result;
use crate::introspect::SchemaIntrospector;
use crate::meta::Catalog;
use crate::resolver::{HubRelations, RelationshipResolver};

/// Result of the related command execution
#[derive(Debug, Serialize)]
pub struct RelatedResult {
    pub schema: String,
    pub relations: HubRelations,
}

impl RelatedCmd {
    pub fn run(&self, catalog: &mut dyn Catalog, schema: &str) -> Result<RelatedResult> {
        let resolver = RelationshipResolver::new(SchemaIntrospector::new(schema));
        let relations = resolver.resolve(catalog, &self.hub, self.revision)?;
        Ok(RelatedResult {
            schema: schema.to_string(),
            relations,
        })
    }
}

impl Execute for RelatedCmd {
    type Output = RelatedResult;

    fn execute(self, config_path: &Path) -> std::result::Result<Self::Output, Box<dyn Error>> {
        with_transaction(config_path, |catalog, schema| self.run(catalog, schema))
    }
}
