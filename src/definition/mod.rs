//! Data vault entity definitions and DDL synthesis.
//!
//! Every definition turns itself into a dialect-neutral
//! [`TableDefinition`](crate::sql::TableDefinition) and compiles it through a
//! [`Dialect`](crate::sql::Dialect). `generate_sql` on each type renders the
//! canonical MySQL statement.

pub mod columns;
pub mod hub;
pub mod link;
pub mod reference;
pub mod satellite;
pub mod vault;

pub use hub::HubDefinition;
pub use link::LinkDefinition;
pub use reference::HubReference;
pub use satellite::{SatelliteAttributeDefinition, SatelliteDefinition};
pub use vault::DataVaultDefinition;
