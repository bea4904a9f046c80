//! Bookkeeping columns shared by every data vault table.

use crate::naming::{hash_key_column, to_storage_case};
use crate::sql::table::{ColumnDataType, ColumnDefinition, ForeignKeyDefinition, IndexKeyDefinition};

pub const LOAD_DATE: &str = "load_date";
pub const END_DATE: &str = "end_date";
pub const RECORD_SOURCE: &str = "record_source";

pub const HASH_KEY_LENGTH: u32 = 32;
pub const RECORD_SOURCE_LENGTH: u32 = 100;
pub const BUSINESS_KEY_LENGTH: u32 = 100;

/// `<name>_hash_key CHAR(32) NOT NULL`
pub fn hash_key(entity_name: &str) -> ColumnDefinition {
    ColumnDefinition::new(hash_key_column(entity_name), ColumnDataType::Char, HASH_KEY_LENGTH, false)
}

pub fn load_date() -> ColumnDefinition {
    ColumnDefinition::new(LOAD_DATE, ColumnDataType::Datetime, 0, false)
}

/// Nullable: an open satellite row has no end date yet.
pub fn end_date() -> ColumnDefinition {
    ColumnDefinition::new(END_DATE, ColumnDataType::Datetime, 0, true)
}

pub fn record_source() -> ColumnDefinition {
    ColumnDefinition::new(RECORD_SOURCE, ColumnDataType::Char, RECORD_SOURCE_LENGTH, false)
}

pub fn business_key(key: &str) -> ColumnDefinition {
    ColumnDefinition::new(to_storage_case(key), ColumnDataType::Char, BUSINESS_KEY_LENGTH, false)
}

pub fn index(column: &str) -> IndexKeyDefinition {
    IndexKeyDefinition::single(column)
}

/// Foreign key from `column` to the same-named column of `table`.
pub fn foreign_key(column: &str, table: &str) -> ForeignKeyDefinition {
    ForeignKeyDefinition {
        column_name: column.to_string(),
        reference_table_name: table.to_string(),
        reference_column_name: column.to_string(),
    }
}
