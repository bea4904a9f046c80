//! Dialect-neutral relational table model.
//!
//! Entity definitions describe themselves as a [`TableDefinition`]; the
//! compilers in [`crate::sql::compilers`] turn that into dialect-specific DDL.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DefinitionError;

/// Column data types supported by data vault tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ColumnDataType {
    Char,
    Varchar,
    Text,
    Integer,
    Decimal,
    Float,
    Boolean,
    Date,
    Datetime,
}

impl ColumnDataType {
    pub const ALL: [ColumnDataType; 9] = [
        ColumnDataType::Char,
        ColumnDataType::Varchar,
        ColumnDataType::Text,
        ColumnDataType::Integer,
        ColumnDataType::Decimal,
        ColumnDataType::Float,
        ColumnDataType::Boolean,
        ColumnDataType::Date,
        ColumnDataType::Datetime,
    ];

    /// Canonical upper-case type name, as reported by catalogs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnDataType::Char => "CHAR",
            ColumnDataType::Varchar => "VARCHAR",
            ColumnDataType::Text => "TEXT",
            ColumnDataType::Integer => "INTEGER",
            ColumnDataType::Decimal => "DECIMAL",
            ColumnDataType::Float => "FLOAT",
            ColumnDataType::Boolean => "BOOLEAN",
            ColumnDataType::Date => "DATE",
            ColumnDataType::Datetime => "DATETIME",
        }
    }
}

impl fmt::Display for ColumnDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a type name is not one of [`ColumnDataType::ALL`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedType(pub String);

impl fmt::Display for UnsupportedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported column type '{}'", self.0)
    }
}

impl std::error::Error for UnsupportedType {}

impl FromStr for ColumnDataType {
    type Err = UnsupportedType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnsupportedType(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    pub name: String,
    pub data_type: ColumnDataType,
    /// Width for character and numeric types; 0 when not applicable.
    pub length: u32,
    pub is_nullable: bool,
    /// Digits after the decimal point; only meaningful for `DECIMAL`.
    pub decimal_precision: u32,
}

impl ColumnDefinition {
    pub fn new(name: impl Into<String>, data_type: ColumnDataType, length: u32, is_nullable: bool) -> Self {
        Self {
            name: name.into(),
            data_type,
            length,
            is_nullable,
            decimal_precision: 0,
        }
    }
}

/// A composite uniqueness constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniqueKeyDefinition {
    pub column_names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexKeyDefinition {
    pub column_names: Vec<String>,
}

impl IndexKeyDefinition {
    pub fn single(column: impl Into<String>) -> Self {
        Self {
            column_names: vec![column.into()],
        }
    }
}

/// A single-column foreign key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKeyDefinition {
    pub column_name: String,
    pub reference_table_name: String,
    pub reference_column_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TableDefinition {
    pub name: String,
    pub columns: Vec<ColumnDefinition>,
    pub primary_key: Vec<String>,
    pub unique_keys: Vec<UniqueKeyDefinition>,
    pub indices: Vec<IndexKeyDefinition>,
    pub foreign_keys: Vec<ForeignKeyDefinition>,
}

impl TableDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn column(&self, name: &str) -> Option<&ColumnDefinition> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Check the table is renderable: columns exist, names are unique and
    /// every key, index and foreign key refers to a declared column.
    pub fn validate(&self) -> Result<(), DefinitionError> {
        let invalid = |message: String| DefinitionError::InvalidTable {
            table: self.name.clone(),
            message,
        };

        if self.name.is_empty() {
            return Err(invalid("table name is empty".to_string()));
        }
        if self.columns.is_empty() {
            return Err(invalid("table has no columns".to_string()));
        }

        let mut seen = HashSet::new();
        for column in &self.columns {
            if column.name.is_empty() {
                return Err(invalid("column name is empty".to_string()));
            }
            if !seen.insert(column.name.as_str()) {
                return Err(DefinitionError::DuplicateColumn {
                    table: self.name.clone(),
                    column: column.name.clone(),
                });
            }
            if column.data_type == ColumnDataType::Varchar && column.length == 0 {
                return Err(invalid(format!("VARCHAR column '{}' needs a length", column.name)));
            }
        }

        if self.primary_key.is_empty() {
            return Err(invalid("primary key is empty".to_string()));
        }

        let key_columns = self
            .primary_key
            .iter()
            .chain(self.unique_keys.iter().flat_map(|k| k.column_names.iter()))
            .chain(self.indices.iter().flat_map(|k| k.column_names.iter()))
            .chain(self.foreign_keys.iter().map(|fk| &fk.column_name));

        for name in key_columns {
            if !seen.contains(name.as_str()) {
                return Err(invalid(format!("key refers to unknown column '{}'", name)));
            }
        }

        for key in &self.unique_keys {
            if key.column_names.is_empty() {
                return Err(invalid("unique key has no columns".to_string()));
            }
        }
        for index in &self.indices {
            if index.column_names.is_empty() {
                return Err(invalid("index has no columns".to_string()));
            }
        }

        Ok(())
    }
}
