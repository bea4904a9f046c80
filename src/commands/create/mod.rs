mod execute;
mod output;

use std::path::PathBuf;

use clap::Args;

use crate::commands::validate_file_exists;

/// Create the tables of a definition file in the database
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  datavault create -d vault.json                # Create every table in one transaction
  datavault -c prod.json create -d vault.json   # Use another configuration file")]
pub struct CreateCmd {
    /// Definition file (JSON with hubs, satellites and links)
    #[arg(short, long, value_parser = validate_file_exists)]
    pub definition: PathBuf,
}
