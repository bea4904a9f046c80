//! SQL dialect compilers.
//!
//! Each compiler renders a [`TableDefinition`] into the target database's DDL.
//! MySQL is the canonical dialect: it yields exactly one `CREATE TABLE`
//! statement per table, indices included. PostgreSQL cannot declare indices
//! inside `CREATE TABLE`, so its compiler appends one `CREATE INDEX` per index.

pub mod mysql;
pub mod postgres;

pub use mysql::MySqlCompiler;
pub use postgres::PostgresCompiler;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::DefinitionError;
use crate::sql::table::TableDefinition;

/// Target SQL dialect for generated statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    #[value(name = "mysql")]
    MySql,
    #[value(name = "postgres")]
    Postgres,
}

impl Dialect {
    /// Render the statements that create `table`.
    pub fn create_table(&self, table: &TableDefinition) -> Result<Vec<String>, DefinitionError> {
        match self {
            Dialect::MySql => MySqlCompiler::compile_table(table).map(|sql| vec![sql]),
            Dialect::Postgres => PostgresCompiler::compile_table(table),
        }
    }

    pub fn quote_identifier(&self, name: &str) -> String {
        match self {
            Dialect::MySql => MySqlCompiler::quote_identifier(name),
            Dialect::Postgres => PostgresCompiler::quote_identifier(name),
        }
    }

    pub fn quote_literal(&self, value: &str) -> String {
        match self {
            Dialect::MySql => MySqlCompiler::quote_literal(value),
            Dialect::Postgres => PostgresCompiler::quote_literal(value),
        }
    }

    /// Render a single-row `INSERT` of pre-rendered literals.
    pub fn insert(&self, table: &str, columns: &[String], literals: &[String]) -> String {
        let columns = columns
            .iter()
            .map(|c| self.quote_identifier(c))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "INSERT INTO {} ({})\nVALUES ({})",
            self.quote_identifier(table),
            columns,
            literals.join(", ")
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            Dialect::MySql => "mysql",
            Dialect::Postgres => "postgres",
        }
    }
}
