use std::error::Error;
use std::path::Path;

use regex::Regex;
use serde::Serialize;

use super::SearchCmd;
use crate::commands::Execute;
use crate::connection::with_transaction;
use crate::error::Result;
use crate::introspect::SchemaIntrospector;
use crate::meta::Catalog;
use crate::naming::{EntityName, EntityType};

/// Result of the search command execution
#[derive(Debug, Default, Serialize)]
pub struct SearchResult {
    pub schema: String,
    pub pattern: String,
    pub regex: bool,
    /// Matches before the limit was applied
    pub total: usize,
    pub entities: Vec<EntityName>,
}

impl SearchCmd {
    /// The compiled pattern when `--regex` is set.
    pub fn compile_filter(&self) -> std::result::Result<Option<Regex>, regex::Error> {
        if self.regex {
            Regex::new(&self.pattern).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Search with a keyword, or filter every entity's display name with `filter`.
    pub fn run(&self, catalog: &mut dyn Catalog, schema: &str, filter: Option<&Regex>) -> Result<SearchResult> {
        let introspector = SchemaIntrospector::new(schema);

        let mut entities = match filter {
            Some(filter) => {
                let mut matched = Vec::new();
                for entity_type in EntityType::ALL {
                    matched.extend(
                        introspector
                            .list_entities(catalog, entity_type)?
                            .into_iter()
                            .filter(|e| filter.is_match(&e.name)),
                    );
                }
                matched
            }
            None => introspector.search_entities(catalog, &self.pattern)?,
        };

        let total = entities.len();
        entities.truncate(self.limit as usize);

        Ok(SearchResult {
            schema: schema.to_string(),
            pattern: self.pattern.clone(),
            regex: self.regex,
            total,
            entities,
        })
    }
}

impl Execute for SearchCmd {
    type Output = SearchResult;

    fn execute(self, config_path: &Path) -> std::result::Result<Self::Output, Box<dyn Error>> {
        let filter = self
            .compile_filter()
            .map_err(|e| format!("Invalid regex '{}': {}", self.pattern, e))?;
        with_transaction(config_path, |catalog, schema| {
            self.run(catalog, schema, filter.as_ref())
        })
    }
}
