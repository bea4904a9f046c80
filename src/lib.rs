//! datavault library - Data Vault schema toolkit
//!
//! Generates DDL for hubs, links and satellites, reconstructs their
//! definitions from an existing schema, and walks the relationships around a
//! hub. The table-name format in [`naming`] is the contract between
//! generation and introspection.

pub mod cli;
pub mod commands;
pub mod config;
pub mod connection;
pub mod definition;
pub mod error;
pub mod introspect;
pub mod meta;
pub mod naming;
pub mod output;
pub mod record;
pub mod resolver;
pub mod sql;
pub mod vault;

#[macro_use]
pub mod test_macros;

#[cfg(test)]
pub mod test_utils;

pub use definition::{
    DataVaultDefinition, HubDefinition, HubReference, LinkDefinition, SatelliteAttributeDefinition,
    SatelliteDefinition,
};
pub use error::{DefinitionError, Result, VaultError};
pub use introspect::{EntityDefinition, SchemaIntrospector};
pub use meta::{Catalog, SqlExecutor};
pub use naming::{EntityName, EntityType};
pub use resolver::{HubRelations, RelationshipResolver};
pub use sql::{ColumnDataType, Dialect};
pub use vault::DataVault;
