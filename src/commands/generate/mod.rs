mod cli_tests;
mod execute;
mod output;

use std::path::PathBuf;

use clap::Args;

use crate::commands::validate_file_exists;
use crate::sql::Dialect;

/// Print the DDL for a definition file
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  datavault generate -d vault.json                      # MySQL DDL
  datavault generate -d vault.json --dialect postgres   # PostgreSQL DDL
  datavault generate -d vault.json --verify             # Check the round trip too")]
pub struct GenerateCmd {
    /// Definition file (JSON with hubs, satellites and links)
    #[arg(short, long, value_parser = validate_file_exists)]
    pub definition: PathBuf,

    /// SQL dialect of the generated statements
    #[arg(long, value_enum, default_value_t = Dialect::MySql)]
    pub dialect: Dialect,

    /// Apply the definition to an in-memory catalog and check every entity reads back
    #[arg(long, default_value_t = false)]
    pub verify: bool,
}
