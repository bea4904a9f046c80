use std::error::Error;
use std::path::Path;

use serde::Serialize;

use super::CreateCmd;
use crate::commands::{Execute, read_json_file};
use crate::connection::with_transaction;
use crate::definition::DataVaultDefinition;
use crate::error::Result;
use crate::meta::SqlExecutor;
use crate::sql::Dialect;
use crate::vault::DataVault;

/// Result of the create command execution
#[derive(Debug, Serialize)]
pub struct CreateResult {
    pub schema: String,
    pub tables: Vec<String>,
    pub statements_executed: usize,
}

impl CreateCmd {
    pub fn run(
        definition: &DataVaultDefinition,
        executor: &mut dyn SqlExecutor,
        schema: &str,
    ) -> Result<CreateResult> {
        let vault = DataVault::new(schema, Dialect::Postgres);
        let statements_executed = vault.create_entities(executor, definition)?;
        let tables = definition
            .table_definitions()?
            .into_iter()
            .map(|table| table.name)
            .collect();

        Ok(CreateResult {
            schema: schema.to_string(),
            tables,
            statements_executed,
        })
    }
}

impl Execute for CreateCmd {
    type Output = CreateResult;

    fn execute(self, config_path: &Path) -> std::result::Result<Self::Output, Box<dyn Error>> {
        let definition: DataVaultDefinition = read_json_file(&self.definition)?;
        with_transaction(config_path, |catalog, schema| {
            CreateCmd::run(&definition, catalog, schema)
        })
    }
}
