//! Relational table model and SQL rendering.
//!
//! - [`table`]: dialect-neutral `TableDefinition` and its parts
//! - [`compilers`]: MySQL and PostgreSQL DDL compilers behind [`Dialect`]
//! - [`escape`]: identifier and literal quoting

pub mod compilers;
pub mod escape;
pub mod table;

pub use compilers::Dialect;
pub use table::{
    ColumnDataType, ColumnDefinition, ForeignKeyDefinition, IndexKeyDefinition, TableDefinition,
    UniqueKeyDefinition, UnsupportedType,
};
