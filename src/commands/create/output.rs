//! Output formatting for create command results.

use super::execute::CreateResult;
use crate::output::Outputable;

impl Outputable for CreateResult {
    fn to_table(&self) -> String {
        let mut lines = vec![format!(
            "Created {} tables in schema {} ({} statements)",
            self.tables.len(),
            self.schema,
            self.statements_executed
        )];
        lines.extend(self.tables.iter().map(|t| format!("  {}", t)));
        lines.join("\n")
    }
}
