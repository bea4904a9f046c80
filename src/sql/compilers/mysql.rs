//! MySQL DDL compiler.
//!
//! Produces one statement per table:
//! ```sql
//! CREATE TABLE `sat_invoice_rev0` (
//!   `invoice_hash_key` CHAR(32) NOT NULL,
//!   `load_date` DATETIME NOT NULL,
//!   `end_date` DATETIME NULL,
//!   ...
//!   PRIMARY KEY (`invoice_hash_key`, `load_date`),
//!   INDEX (`invoice_hash_key`),
//!   FOREIGN KEY (`invoice_hash_key`) REFERENCES `hub_invoice_rev0` (`invoice_hash_key`)
//! )
//! ```

use crate::error::DefinitionError;
use crate::sql::escape::{quote_backtick, quote_literal};
use crate::sql::table::{ColumnDataType, ColumnDefinition, TableDefinition};

/// Compiler for MySQL `CREATE TABLE` statements.
pub struct MySqlCompiler;

impl MySqlCompiler {
    /// Render a validated table as a single `CREATE TABLE` statement.
    pub fn compile_table(table: &TableDefinition) -> Result<String, DefinitionError> {
        table.validate()?;

        let mut lines: Vec<String> = table
            .columns
            .iter()
            .map(|c| format!("  {}", Self::column_definition(c)))
            .collect();

        lines.push(format!("  PRIMARY KEY ({})", Self::column_list(&table.primary_key)));

        for key in &table.unique_keys {
            lines.push(format!("  UNIQUE ({})", Self::column_list(&key.column_names)));
        }

        for index in &table.indices {
            lines.push(format!("  INDEX ({})", Self::column_list(&index.column_names)));
        }

        for fk in &table.foreign_keys {
            lines.push(format!(
                "  FOREIGN KEY ({}) REFERENCES {} ({})",
                quote_backtick(&fk.column_name),
                quote_backtick(&fk.reference_table_name),
                quote_backtick(&fk.reference_column_name)
            ));
        }

        Ok(format!(
            "CREATE TABLE {} (\n{}\n)",
            quote_backtick(&table.name),
            lines.join(",\n")
        ))
    }

    /// Render one column: name, type and nullability.
    pub fn column_definition(column: &ColumnDefinition) -> String {
        let nullability = if column.is_nullable { "NULL" } else { "NOT NULL" };
        format!(
            "{} {} {}",
            quote_backtick(&column.name),
            Self::column_type(column),
            nullability
        )
    }

    pub fn column_type(column: &ColumnDefinition) -> String {
        let length = column.length;
        match column.data_type {
            ColumnDataType::Char if length > 0 => format!("CHAR({})", length),
            ColumnDataType::Char => "CHAR".to_string(),
            ColumnDataType::Varchar => format!("VARCHAR({})", length),
            ColumnDataType::Text => "TEXT".to_string(),
            ColumnDataType::Integer if length > 0 => format!("INT({})", length),
            ColumnDataType::Integer => "INT".to_string(),
            ColumnDataType::Decimal if length > 0 => {
                format!("DECIMAL({},{})", length, column.decimal_precision)
            }
            ColumnDataType::Decimal => "DECIMAL".to_string(),
            ColumnDataType::Float => "FLOAT".to_string(),
            ColumnDataType::Boolean => "BOOLEAN".to_string(),
            ColumnDataType::Date => "DATE".to_string(),
            ColumnDataType::Datetime => "DATETIME".to_string(),
        }
    }

    pub fn quote_identifier(name: &str) -> String {
        quote_backtick(name)
    }

    pub fn quote_literal(value: &str) -> String {
        quote_literal(value, true)
    }

    fn column_list(columns: &[String]) -> String {
        columns
            .iter()
            .map(|c| quote_backtick(c))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
