//! Identifier codec and the table-name wire format.
//!
//! Business names are written in display case (`TaxInvoice`) and stored in
//! storage case (`tax_invoice`). Table names embed the entity type and the
//! revision: `hub_tax_invoice_rev0`, `link_invoice_order_item_rev2`,
//! `sat_invoice_rev1`. That string format is the contract between generation
//! and introspection.
//!
//! # Case conversion
//!
//! Conversion is delegated to `convert_case`. Words are split on spaces,
//! hyphens, underscores, lower-to-upper transitions and the end of an acronym.
//!
//! The codec is only invertible on canonical input:
//!
//! - a canonical display name is a sequence of capitalised words of at least two
//!   letters (`Invoice`, `TaxInvoice`), and
//!   `to_display_case(to_storage_case(x)) == x`;
//! - a canonical storage name is a sequence of lower-case words of at least two
//!   letters joined by `_` (`tax_invoice`), and
//!   `to_storage_case(to_display_case(s)) == s`.
//!
//! Anything else only comes back in its canonical form: `docNo` returns as
//! `DocNo`, `HTTPServer` as `HttpServer`, and `a_b` collapses to `ab`.

use std::fmt;
use std::str::FromStr;

use convert_case::{Case, Casing};
use serde::{Deserialize, Serialize};

use crate::error::{DefinitionError, VaultError};

/// Version of the table-name wire format produced by [`table_name`].
pub const NAMING_VERSION: u32 = 1;

pub const HUB_PREFIX: &str = "hub_";
pub const LINK_PREFIX: &str = "link_";
pub const SATELLITE_PREFIX: &str = "sat_";
pub const REVISION_DELIMITER: &str = "_rev";
pub const HASH_KEY_SUFFIX: &str = "_hash_key";

/// Convert a display name to the identifier convention used for tables and columns.
pub fn to_storage_case(name: &str) -> String {
    name.to_case(Case::Snake)
}

/// Convert a stored identifier back to display case.
pub fn to_display_case(name: &str) -> String {
    name.to_case(Case::Pascal)
}

/// Display name as it comes back from a table name: `invoiceNo` becomes `InvoiceNo`.
pub fn canonical_name(name: &str) -> String {
    to_display_case(&to_storage_case(name))
}

/// Check that `name` comes back unchanged from its storage form.
///
/// Digits and single letters lose their word boundary on the way back:
/// `Q1 2024` is stored as `q_1_2024` but decodes to `Q12024`, which stores as
/// `q_12024`. Such names are rejected before any table is built.
pub fn check_reversible(entity: &'static str, name: &str) -> Result<(), DefinitionError> {
    let stored = to_storage_case(name);
    if stored.is_empty() {
        return Err(DefinitionError::EmptyName { entity });
    }
    if to_storage_case(&to_display_case(&stored)) != stored {
        return Err(DefinitionError::IrreversibleName {
            entity,
            name: name.to_string(),
            stored,
        });
    }
    Ok(())
}

/// Hash key column owned by the entity called `name`.
pub fn hash_key_column(name: &str) -> String {
    format!("{}{}", to_storage_case(name), HASH_KEY_SUFFIX)
}

/// Table name for an entity of the given type, name and revision.
pub fn table_name(entity_type: EntityType, name: &str, revision: u32) -> String {
    format!(
        "{}{}{}{}",
        entity_type.table_prefix(),
        to_storage_case(name),
        REVISION_DELIMITER,
        revision
    )
}

/// Data vault entity category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Hub,
    Link,
    Satellite,
}

impl EntityType {
    pub const ALL: [EntityType; 3] = [EntityType::Hub, EntityType::Link, EntityType::Satellite];

    pub fn display_name(&self) -> &'static str {
        match self {
            EntityType::Hub => "hub",
            EntityType::Link => "link",
            EntityType::Satellite => "satellite",
        }
    }

    pub fn table_prefix(&self) -> &'static str {
        match self {
            EntityType::Hub => HUB_PREFIX,
            EntityType::Link => LINK_PREFIX,
            EntityType::Satellite => SATELLITE_PREFIX,
        }
    }

    /// Entity type whose prefix starts `table`, if any.
    pub fn from_table_name(table: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|entity_type| table.starts_with(entity_type.table_prefix()))
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A table name decoded into its entity type, display name and revision.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityName {
    pub entity_type: EntityType,
    pub name: String,
    pub revision: u32,
}

impl EntityName {
    pub fn new(entity_type: EntityType, name: impl Into<String>, revision: u32) -> Self {
        Self {
            entity_type,
            name: name.into(),
            revision,
        }
    }

    /// Decode a table name such as `hub_tax_invoice_rev0`.
    ///
    /// The remainder after the prefix is split at the last `_rev`, so names
    /// whose storage form contains `_rev` (`my_revenue`) still decode.
    pub fn parse(table: &str) -> Result<Self, VaultError> {
        let entity_type = EntityType::from_table_name(table)
            .ok_or_else(|| VaultError::bad_name(table, "unrecognized data vault table prefix"))?;

        let remainder = &table[entity_type.table_prefix().len()..];
        let (raw_name, raw_revision) = remainder
            .rsplit_once(REVISION_DELIMITER)
            .ok_or_else(|| VaultError::bad_name(table, "missing revision suffix"))?;

        if raw_name.is_empty() {
            return Err(VaultError::bad_name(table, "missing entity name"));
        }

        if raw_revision.is_empty() || !raw_revision.bytes().all(|b| b.is_ascii_digit()) {
            return Err(VaultError::bad_name(
                table,
                format!("invalid revision value '{}'", raw_revision),
            ));
        }

        let revision = raw_revision.parse::<u32>().map_err(|e| {
            VaultError::bad_name(table, format!("invalid revision value '{}': {}", raw_revision, e))
        })?;

        Ok(Self {
            entity_type,
            name: to_display_case(raw_name),
            revision,
        })
    }

    pub fn table_name(&self) -> String {
        table_name(self.entity_type, &self.name, self.revision)
    }

    pub fn hash_key_column(&self) -> String {
        hash_key_column(&self.name)
    }
}

impl FromStr for EntityName {
    type Err = VaultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} (rev {})", self.entity_type, self.name, self.revision)
    }
}
