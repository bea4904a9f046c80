//! PostgreSQL catalog over `information_schema` and `pg_constraint`.
//!
//! Takes a `postgres::Client` or `postgres::Transaction` for the duration of an
//! operation and hands it back with [`PostgresCatalog::into_inner`], so the
//! caller decides when to commit.

use ::postgres::GenericClient;

use crate::error::{Result, VaultError};
use crate::sql::table::ColumnDataType;

use super::{Catalog, ColumnMeta, ForeignKeyMeta, SqlExecutor, TableMeta};

const COLUMNS_QUERY: &str = "\
SELECT column_name::text,
       data_type::text,
       character_maximum_length::int4,
       numeric_precision::int4,
       numeric_scale::int4,
       is_nullable::text = 'YES'
FROM information_schema.columns
WHERE table_schema::text = $1 AND table_name::text = $2
ORDER BY ordinal_position";

const FOREIGN_KEYS_QUERY: &str = "\
SELECT con.conname::text,
       ref.relname::text,
       array_agg(att.attname::text ORDER BY k.ord),
       array_agg(ratt.attname::text ORDER BY k.ord)
FROM pg_constraint con
JOIN pg_class rel ON rel.oid = con.conrelid
JOIN pg_namespace nsp ON nsp.oid = rel.relnamespace
JOIN pg_class ref ON ref.oid = con.confrelid
CROSS JOIN LATERAL unnest(con.conkey, con.confkey) WITH ORDINALITY AS k(attnum, refattnum, ord)
JOIN pg_attribute att ON att.attrelid = con.conrelid AND att.attnum = k.attnum
JOIN pg_attribute ratt ON ratt.attrelid = con.confrelid AND ratt.attnum = k.refattnum
WHERE con.contype = 'f' AND nsp.nspname::text = $1 AND rel.relname::text = $2
GROUP BY con.conname, ref.relname
ORDER BY con.conname";

const TABLE_NAMES_QUERY: &str = "\
SELECT table_name::text
FROM information_schema.tables
WHERE table_schema::text = $1
  AND table_type::text = 'BASE TABLE'
  AND table_name::text LIKE $2";

const REFERENCING_TABLES_QUERY: &str = "\
SELECT DISTINCT rel.relname::text
FROM pg_constraint con
JOIN pg_class rel ON rel.oid = con.conrelid
JOIN pg_namespace nsp ON nsp.oid = rel.relnamespace
JOIN pg_class ref ON ref.oid = con.confrelid
WHERE con.contype = 'f' AND nsp.nspname::text = $1 AND ref.relname::text = $2";

/// Catalog and executor backed by a PostgreSQL connection.
pub struct PostgresCatalog<C: GenericClient> {
    client: C,
}

impl<C: GenericClient> PostgresCatalog<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn into_inner(self) -> C {
        self.client
    }

    fn query(
        &mut self,
        sql: &str,
        params: &[&(dyn ::postgres::types::ToSql + Sync)],
    ) -> Result<Vec<::postgres::Row>> {
        self.client.query(sql, params).map_err(catalog_error)
    }
}

fn catalog_error(e: ::postgres::Error) -> VaultError {
    VaultError::CatalogFailed {
        message: e.to_string(),
    }
}

fn non_negative(value: Option<i32>) -> u32 {
    value.and_then(|v| u32::try_from(v).ok()).unwrap_or(0)
}

/// Map a PostgreSQL `information_schema` type name to a column type name.
///
/// Types without a counterpart are passed through unchanged so the
/// introspector can reject them.
pub fn map_type_name(data_type: &str) -> String {
    let mapped = match data_type {
        "character" | "bpchar" => ColumnDataType::Char,
        "character varying" => ColumnDataType::Varchar,
        "text" => ColumnDataType::Text,
        "integer" | "smallint" | "bigint" => ColumnDataType::Integer,
        "numeric" => ColumnDataType::Decimal,
        "real" | "double precision" => ColumnDataType::Float,
        "boolean" => ColumnDataType::Boolean,
        "date" => ColumnDataType::Date,
        "timestamp without time zone" => ColumnDataType::Datetime,
        other => return other.to_string(),
    };
    mapped.as_str().to_string()
}

impl<C: GenericClient> Catalog for PostgresCatalog<C> {
    fn table_meta(&mut self, schema: &str, table: &str) -> Result<TableMeta> {
        let mut columns = Vec::new();
        for row in self.query(COLUMNS_QUERY, &[&schema, &table])? {
            let name: String = row.try_get(0).map_err(catalog_error)?;
            let data_type: String = row.try_get(1).map_err(catalog_error)?;
            let char_length: Option<i32> = row.try_get(2).map_err(catalog_error)?;
            let numeric_precision: Option<i32> = row.try_get(3).map_err(catalog_error)?;
            let numeric_scale: Option<i32> = row.try_get(4).map_err(catalog_error)?;
            let is_nullable: bool = row.try_get(5).map_err(catalog_error)?;

            let type_name = map_type_name(&data_type);
            let (length, decimal_precision) = match type_name.parse::<ColumnDataType>() {
                Ok(ColumnDataType::Char | ColumnDataType::Varchar) => (non_negative(char_length), 0),
                Ok(ColumnDataType::Decimal) => (non_negative(numeric_precision), non_negative(numeric_scale)),
                _ => (0, 0),
            };

            columns.push(ColumnMeta {
                name,
                type_name,
                length,
                is_nullable,
                decimal_precision,
            });
        }

        let mut foreign_keys = Vec::new();
        for row in self.query(FOREIGN_KEYS_QUERY, &[&schema, &table])? {
            foreign_keys.push(ForeignKeyMeta {
                name: row.try_get(0).map_err(catalog_error)?,
                referenced_table: row.try_get(1).map_err(catalog_error)?,
                columns: row.try_get(2).map_err(catalog_error)?,
                referenced_columns: row.try_get(3).map_err(catalog_error)?,
            });
        }

        log::debug!(
            "Read {}.{}: {} columns, {} foreign keys",
            schema,
            table,
            columns.len(),
            foreign_keys.len()
        );

        Ok(TableMeta {
            name: table.to_string(),
            columns,
            foreign_keys,
        })
    }

    fn table_names(&mut self, schema: &str, like_pattern: &str) -> Result<Vec<String>> {
        let mut names = self
            .query(TABLE_NAMES_QUERY, &[&schema, &like_pattern])?
            .iter()
            .map(|row| row.try_get::<_, String>(0).map_err(catalog_error))
            .collect::<Result<Vec<_>>>()?;
        names.sort();
        Ok(names)
    }

    fn referencing_tables(&mut self, schema: &str, table: &str) -> Result<Vec<String>> {
        let mut names = self
            .query(REFERENCING_TABLES_QUERY, &[&schema, &table])?
            .iter()
            .map(|row| row.try_get::<_, String>(0).map_err(catalog_error))
            .collect::<Result<Vec<_>>>()?;
        names.sort();
        Ok(names)
    }
}

impl<C: GenericClient> SqlExecutor for PostgresCatalog<C> {
    fn execute(&mut self, sql: &str) -> Result<()> {
        log::debug!("Executing: {}", sql);
        self.client
            .batch_execute(sql)
            .map_err(|e| VaultError::ExecutionFailed {
                message: e.to_string(),
            })
    }
}
