use std::error::Error;
use std::path::Path;

use serde::Serialize;

use super::GenerateCmd;
use crate::commands::{Execute, read_json_file};
use crate::config::DEFAULT_SCHEMA;
use crate::definition::DataVaultDefinition;
use crate::error::Result;
use crate::sql::Dialect;
use crate::vault::DataVault;

/// Result of the generate command execution
#[derive(Debug, Serialize)]
pub struct GenerateResult {
    pub dialect: Dialect,
    pub entity_count: usize,
    pub statements: Vec<String>,
    /// Number of entities checked by `--verify`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<usize>,
}

impl GenerateCmd {
    pub fn run(&self, definition: &DataVaultDefinition) -> Result<GenerateResult> {
        let statements = definition.generate_sql_for(self.dialect)?;

        let verified = if self.verify {
            Some(DataVault::new(DEFAULT_SCHEMA, self.dialect).verify(definition)?)
        } else {
            None
        };

        Ok(GenerateResult {
            dialect: self.dialect,
            entity_count: definition.entity_count(),
            statements,
            verified,
        })
    }
}

impl Execute for GenerateCmd {
    type Output = GenerateResult;

    fn execute(self, _config_path: &Path) -> std::result::Result<Self::Output, Box<dyn Error>> {
        let definition: DataVaultDefinition = read_json_file(&self.definition)?;
        Ok(self.run(&definition)?)
    }
}
