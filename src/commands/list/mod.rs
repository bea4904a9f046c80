mod cli_tests;
mod execute;
mod output;

use clap::{Args, ValueEnum};

use crate::naming::EntityType;

/// Which entities to list
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListKind {
    Hub,
    Link,
    Satellite,
}

impl From<ListKind> for EntityType {
    fn from(kind: ListKind) -> Self {
        match kind {
            ListKind::Hub => EntityType::Hub,
            ListKind::Link => EntityType::Link,
            ListKind::Satellite => EntityType::Satellite,
        }
    }
}

/// List hubs, links and satellites
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  datavault list               # Every entity, grouped by type
  datavault list -k hub        # Hubs only
  datavault list -k satellite -f json")]
pub struct ListCmd {
    /// Entity type to list (all types when omitted)
    #[arg(short, long, value_enum)]
    pub kind: Option<ListKind>,
}
