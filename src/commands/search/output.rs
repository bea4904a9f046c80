//! Output formatting for search command results.

use super::execute::SearchResult;
use crate::output::{Outputable, format_columns};

impl Outputable for SearchResult {
    fn to_table(&self) -> String {
        let mode = if self.regex { "regex" } else { "keyword" };
        let mut lines = vec![format!("Search: {} ({})", self.pattern, mode), String::new()];

        if self.entities.is_empty() {
            lines.push("No results found.".to_string());
            return lines.join("\n");
        }

        if self.total > self.entities.len() {
            lines.push(format!("Entities ({} of {}):", self.entities.len(), self.total));
        } else {
            lines.push(format!("Entities ({}):", self.entities.len()));
        }

        let rows: Vec<Vec<String>> = self
            .entities
            .iter()
            .map(|e| vec![e.entity_type.to_string(), e.name.clone(), e.revision.to_string()])
            .collect();
        lines.extend(
            format_columns(&["TYPE", "NAME", "REV"], &rows)
                .into_iter()
                .map(|line| format!("  {}", line)),
        );

        lines.join("\n")
    }
}
