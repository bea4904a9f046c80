use std::error::Error;
use std::path::Path;

use serde::Serialize;

use super::DescribeCmd;
use crate::commands::Execute;
use crate::connection::with_transaction;
use crate::error::Result;
use crate::introspect::{EntityDefinition, SchemaIntrospector};
use crate::meta::Catalog;

/// Result of the describe command execution
#[derive(Debug, Serialize)]
pub struct DescribeResult {
    pub schema: String,
    pub table: String,
    pub definition: EntityDefinition,
}

impl DescribeCmd {
    pub fn run(&self, catalog: &mut dyn Catalog, schema: &str) -> Result<DescribeResult> {
        let definition = SchemaIntrospector::new(schema).entity_definition(catalog, &self.table)?;
        Ok(DescribeResult {
            schema: schema.to_string(),
            table: self.table.clone(),
            definition,
        })
    }
}

impl Execute for DescribeCmd {
    type Output = DescribeResult;

    fn execute(self, config_path: &Path) -> std::result::Result<Self::Output, Box<dyn Error>> {
        with_transaction(config_path, |catalog, schema| self.run(catalog, schema))
    }
}
