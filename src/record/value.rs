//! Typed attribute values and their SQL literal form.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::definition::SatelliteAttributeDefinition;
use crate::error::DefinitionError;
use crate::sql::compilers::Dialect;
use crate::sql::table::ColumnDataType;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A value for one satellite attribute, tagged with the column type it fits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "UPPERCASE")]
pub enum AttributeValue {
    Char(String),
    Varchar(String),
    Text(String),
    Integer(i64),
    Decimal(f64),
    Float(f64),
    Boolean(bool),
    Date(NaiveDate),
    Datetime(NaiveDateTime),
    Null,
}

impl AttributeValue {
    /// Column type this value belongs to; `None` for `Null`.
    pub fn data_type(&self) -> Option<ColumnDataType> {
        match self {
            AttributeValue::Char(_) => Some(ColumnDataType::Char),
            AttributeValue::Varchar(_) => Some(ColumnDataType::Varchar),
            AttributeValue::Text(_) => Some(ColumnDataType::Text),
            AttributeValue::Integer(_) => Some(ColumnDataType::Integer),
            AttributeValue::Decimal(_) => Some(ColumnDataType::Decimal),
            AttributeValue::Float(_) => Some(ColumnDataType::Float),
            AttributeValue::Boolean(_) => Some(ColumnDataType::Boolean),
            AttributeValue::Date(_) => Some(ColumnDataType::Date),
            AttributeValue::Datetime(_) => Some(ColumnDataType::Datetime),
            AttributeValue::Null => None,
        }
    }

    /// MySQL literal for this value in `attribute`'s column.
    pub fn to_sql_literal(&self, attribute: &SatelliteAttributeDefinition) -> Result<String, DefinitionError> {
        self.to_sql_literal_for(Dialect::MySql, attribute)
    }

    /// Literal for this value in `attribute`'s column.
    ///
    /// The variant must match the declared type; `Null` is only accepted for
    /// nullable attributes.
    pub fn to_sql_literal_for(
        &self,
        dialect: Dialect,
        attribute: &SatelliteAttributeDefinition,
    ) -> Result<String, DefinitionError> {
        let invalid = |message: String| DefinitionError::InvalidRecord {
            entity: attribute.name.clone(),
            message,
        };

        use AttributeValue as V;
        use ColumnDataType as T;
        match (self, attribute.data_type) {
            (V::Null, _) if attribute.is_nullable => Ok("NULL".to_string()),
            (V::Null, _) => Err(invalid("attribute is not nullable".to_string())),
            (V::Char(s), T::Char) | (V::Varchar(s), T::Varchar) => {
                let length = s.chars().count();
                if attribute.length > 0 && length > attribute.length as usize {
                    return Err(invalid(format!(
                        "value has {} characters, column allows {}",
                        length, attribute.length
                    )));
                }
                Ok(dialect.quote_literal(s))
            }
            (V::Text(s), T::Text) => Ok(dialect.quote_literal(s)),
            (V::Integer(i), T::Integer) => Ok(i.to_string()),
            (V::Decimal(d), T::Decimal) if d.is_finite() => {
                Ok(format!("{:.*}", attribute.decimal_precision as usize, d))
            }
            (V::Float(f), T::Float) if f.is_finite() => Ok(f.to_string()),
            (V::Decimal(_), T::Decimal) | (V::Float(_), T::Float) => {
                Err(invalid("number is not finite".to_string()))
            }
            (V::Boolean(b), T::Boolean) => Ok(if *b { "TRUE" } else { "FALSE" }.to_string()),
            (V::Date(d), T::Date) => Ok(dialect.quote_literal(&d.format(DATE_FORMAT).to_string())),
            (V::Datetime(dt), T::Datetime) => {
                Ok(dialect.quote_literal(&dt.format(DATETIME_FORMAT).to_string()))
            }
            (value, expected) => Err(invalid(format!(
                "{} value does not fit {} column",
                value.data_type().map_or("NULL", |t| t.as_str()),
                expected
            ))),
        }
    }
}

/// Quote a timestamp the way bookkeeping columns expect it.
pub(crate) fn datetime_literal(dialect: Dialect, value: &NaiveDateTime) -> String {
    dialect.quote_literal(&value.format(DATETIME_FORMAT).to_string())
}
