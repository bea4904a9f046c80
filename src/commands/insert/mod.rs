mod cli_tests;
mod execute;
mod output;

use std::path::PathBuf;

use clap::Args;

use crate::commands::validate_file_exists;

/// Insert the rows of a records file into the database
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  datavault insert -r records.json   # Insert hubs, then links, then satellites")]
pub struct InsertCmd {
    /// Records file (JSON with hubs, links and satellites to insert)
    #[arg(short, long, value_parser = validate_file_exists)]
    pub records: PathBuf,
}
