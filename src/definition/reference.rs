use serde::{Deserialize, Serialize};

use crate::error::DefinitionError;
use crate::naming::{EntityName, EntityType, canonical_name, check_reversible, hash_key_column, table_name};

/// Points at a hub by name and revision.
///
/// A plain value: it never owns or borrows the hub definition it names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HubReference {
    pub hub_name: String,
    #[serde(default)]
    pub revision: u32,
}

impl HubReference {
    pub fn new(hub_name: impl Into<String>, revision: u32) -> Self {
        Self {
            hub_name: hub_name.into(),
            revision,
        }
    }

    pub fn table_name(&self) -> String {
        table_name(EntityType::Hub, &self.hub_name, self.revision)
    }

    pub fn hash_key_column(&self) -> String {
        hash_key_column(&self.hub_name)
    }

    pub fn canonical(&self) -> Self {
        Self::new(canonical_name(&self.hub_name), self.revision)
    }

    pub(crate) fn validate(&self) -> Result<(), DefinitionError> {
        if self.hub_name.trim().is_empty() {
            return Err(DefinitionError::EmptyName {
                entity: "hub reference",
            });
        }
        check_reversible("hub reference", &self.hub_name)
    }
}

impl From<&EntityName> for HubReference {
    fn from(name: &EntityName) -> Self {
        Self::new(name.name.clone(), name.revision)
    }
}
