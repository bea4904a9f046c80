//! Output formatting for list command results.

use super::execute::ListResult;
use crate::output::{Outputable, format_columns};

impl Outputable for ListResult {
    fn to_table(&self) -> String {
        if self.entities.is_empty() {
            return format!("No data vault entities in schema {}.", self.schema);
        }

        let rows: Vec<Vec<String>> = self
            .entities
            .iter()
            .map(|e| {
                vec![
                    e.entity_type.to_string(),
                    e.name.clone(),
                    e.revision.to_string(),
                    e.table_name(),
                ]
            })
            .collect();

        let mut lines = vec![format!("Entities in {} ({}):", self.schema, self.entities.len())];
        lines.extend(format_columns(&["TYPE", "NAME", "REV", "TABLE"], &rows));
        lines.join("\n")
    }
}
