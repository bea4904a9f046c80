//! Database connection management.

use std::error::Error;
use std::path::Path;

use postgres::{Client, Transaction};

use crate::config::{ConfigFile, DatabaseConfigFile};
use crate::error::Result;
use crate::meta::PostgresCatalog;

/// Open a client for the configured database.
pub fn open_client(config: &ConfigFile) -> std::result::Result<Client, Box<dyn Error>> {
    match &config.database {
        DatabaseConfigFile::Postgres(pg_config) => pg_config.connect(),
    }
}

/// Run `f` against a catalog over one transaction.
///
/// Commits when `f` succeeds. On error the transaction is dropped, which
/// rolls it back.
pub fn with_transaction<T>(
    config_path: &Path,
    f: impl FnOnce(&mut PostgresCatalog<Transaction<'_>>, &str) -> Result<T>,
) -> std::result::Result<T, Box<dyn Error>> {
    let config = ConfigFile::load(config_path)?;
    let mut client = open_client(&config)?;
    let transaction = client.transaction()?;

    let mut catalog = PostgresCatalog::new(transaction);
    let result = f(&mut catalog, &config.schema)?;
    catalog.into_inner().commit()?;

    Ok(result)
}
