//! PostgreSQL DDL compiler.
//!
//! Same table layout as the MySQL compiler with double-quoted identifiers and
//! PostgreSQL type names. Indices become separate `CREATE INDEX` statements.

use crate::error::DefinitionError;
use crate::sql::escape::{quote_double, quote_literal};
use crate::sql::table::{ColumnDataType, ColumnDefinition, TableDefinition};

/// Compiler for PostgreSQL `CREATE TABLE` / `CREATE INDEX` statements.
pub struct PostgresCompiler;

impl PostgresCompiler {
    /// Render a validated table, followed by one statement per index.
    pub fn compile_table(table: &TableDefinition) -> Result<Vec<String>, DefinitionError> {
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

        for fk in &table.foreign_keys {
            lines.push(format!(
                "  FOREIGN KEY ({}) REFERENCES {} ({})",
                quote_double(&fk.column_name),
                quote_double(&fk.reference_table_name),
                quote_double(&fk.reference_column_name)
            ));
        }

        let mut statements = vec![format!(
            "CREATE TABLE {} (\n{}\n)",
            quote_double(&table.name),
            lines.join(",\n")
        )];

        // Unnamed so PostgreSQL picks a unique name per table
        for index in &table.indices {
            statements.push(format!(
                "CREATE INDEX ON {} ({})",
                quote_double(&table.name),
                Self::column_list(&index.column_names)
            ));
        }

        Ok(statements)
    }

    pub fn column_definition(column: &ColumnDefinition) -> String {
        let nullability = if column.is_nullable { "NULL" } else { "NOT NULL" };
        format!(
            "{} {} {}",
            quote_double(&column.name),
            Self::column_type(column),
            nullability
        )
    }

    /// PostgreSQL has no display width for integers, so `length` is dropped for `INTEGER`.
    pub fn column_type(column: &ColumnDefinition) -> String {
        let length = column.length;
        match column.data_type {
            ColumnDataType::Char if length > 0 => format!("CHAR({})", length),
            ColumnDataType::Char => "CHAR".to_string(),
            ColumnDataType::Varchar => format!("VARCHAR({})", length),
            ColumnDataType::Text => "TEXT".to_string(),
            ColumnDataType::Integer => "INTEGER".to_string(),
            ColumnDataType::Decimal if length > 0 => {
                format!("NUMERIC({},{})", length, column.decimal_precision)
            }
            ColumnDataType::Decimal => "NUMERIC".to_string(),
            ColumnDataType::Float => "REAL".to_string(),
            ColumnDataType::Boolean => "BOOLEAN".to_string(),
            ColumnDataType::Date => "DATE".to_string(),
            ColumnDataType::Datetime => "TIMESTAMP".to_string(),
        }
    }

    pub fn quote_identifier(name: &str) -> String {
        quote_double(name)
    }

    pub fn quote_literal(value: &str) -> String {
        quote_literal(value, false)
    }

    fn column_list(columns: &[String]) -> String {
        columns
            .iter()
            .map(|c| quote_double(c))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
