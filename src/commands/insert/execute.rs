use std::error::Error;
use std::path::Path;

use serde::Serialize;

use super::InsertCmd;
use crate::commands::{Execute, read_json_file};
use crate::connection::with_transaction;
use crate::error::Result;
use crate::meta::SqlExecutor;
use crate::record::InsertBatch;
use crate::sql::Dialect;
use crate::vault::DataVault;

/// Result of the insert command execution
#[derive(Debug, Serialize)]
pub struct InsertResult {
    pub schema: String,
    pub hubs: usize,
    pub links: usize,
    pub satellites: usize,
}

impl InsertCmd {
    pub fn run(batch: &InsertBatch, executor: &mut dyn SqlExecutor, schema: &str) -> Result<InsertResult> {
        DataVault::new(schema, Dialect::Postgres).insert_records(executor, batch)?;
        Ok(InsertResult {
            schema: schema.to_string(),
            hubs: batch.hubs.len(),
            links: batch.links.len(),
            satellites: batch.satellites.len(),
        })
    }
}

impl Execute for InsertCmd {
    type Output = InsertResult;

    fn execute(self, config_path: &Path) -> std::result::Result<Self::Output, Box<dyn Error>> {
        let batch: InsertBatch = read_json_file(&self.records)?;
        with_transaction(config_path, |catalog, schema| InsertCmd::run(&batch, catalog, schema))
    }
}
