//! Command definitions and implementations.
//!
//! Each command is defined in its own module with:
//! - The command struct with clap attributes for CLI parsing
//! - `execute.rs`: the result type and the [`Execute`] implementation
//! - `output.rs`: the [`Outputable`] implementation for the result
//!
//! Commands that read the database do their work in a `run` method taking a
//! [`Catalog`](crate::meta::Catalog), so tests can drive them with a
//! [`MemoryCatalog`](crate::meta::memory::MemoryCatalog).

mod create;
mod describe;
mod generate;
mod insert;
mod list;
mod related;
mod search;

pub use create::CreateCmd;
pub use describe::DescribeCmd;
pub use generate::GenerateCmd;
pub use insert::InsertCmd;
pub use list::ListCmd;
pub use related::RelatedCmd;
pub use search::SearchCmd;

use clap::Subcommand;
use serde::de::DeserializeOwned;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use crate::output::{OutputFormat, Outputable};

/// Trait for executing commands with command-specific result types.
pub trait Execute {
    type Output: Outputable;

    fn execute(self, config_path: &Path) -> Result<Self::Output, Box<dyn Error>>;
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the DDL for a definition file
    Generate(GenerateCmd),

    /// Create the tables of a definition file in the database
    Create(CreateCmd),

    /// Insert the rows of a records file into the database
    Insert(InsertCmd),

    /// Reconstruct the definition of one data vault table
    Describe(DescribeCmd),

    /// List hubs, links and satellites
    List(ListCmd),

    /// Search entities by name
    Search(SearchCmd),

    /// Show the satellites, links and linked hubs around a hub
    Related(RelatedCmd),

    /// Catch-all for unknown commands
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

impl Command {
    /// Execute the command and return formatted output
    pub fn run(self, config_path: &Path, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        match self {
            Command::Generate(cmd) => {
                let result = cmd.execute(config_path)?;
                Ok(result.format(format))
            }
            Command::Create(cmd) => {
                let result = cmd.execute(config_path)?;
                Ok(result.format(format))
            }
            Command::Insert(cmd) => {
                let result = cmd.execute(config_path)?;
                Ok(result.format(format))
            }
            Command::Describe(cmd) => {
                let result = cmd.execute(config_path)?;
                Ok(result.format(format))
            }
            Command::List(cmd) => {
                let result = cmd.execute(config_path)?;
                Ok(result.format(format))
            }
            Command::Search(cmd) => {
                let result = cmd.execute(config_path)?;
                Ok(result.format(format))
            }
            Command::Related(cmd) => {
                let result = cmd.execute(config_path)?;
                Ok(result.format(format))
            }
            Command::Unknown(args) => {
                Err(format!("Unknown command: {}", args.first().unwrap_or(&String::new())).into())
            }
        }
    }
}

/// Clap value parser accepting only paths that exist.
pub(crate) fn validate_file_exists(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);
    if path.exists() {
        Ok(path)
    } else {
        Err(format!("File not found: {}", path.display()))
    }
}

/// Read and deserialize a JSON input file.
pub(crate) fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, Box<dyn Error>> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    serde_json::from_str(&content)
        .map_err(|e| format!("Invalid JSON in {}: {}", path.display(), e).into())
}
