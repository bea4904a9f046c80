//! Output formatting for generate command results.

use super::execute::GenerateResult;
use crate::output::Outputable;

impl Outputable for GenerateResult {
    fn to_table(&self) -> String {
        if self.statements.is_empty() {
            return "-- No entities defined.".to_string();
        }

        let mut lines: Vec<String> = self.statements.iter().map(|s| format!("{};", s)).collect();
        if let Some(count) = self.verified {
            lines.push(format!("-- Verified {} entities", count));
        }
        lines.join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::Dialect;
    use rstest::{fixture, rstest};

    const VERIFIED_TABLE: &str = "\
CREATE TABLE a (x INT);

CREATE TABLE b (y INT);

-- Verified 2 entities";

    #[fixture]
    fn empty_result() -> GenerateResult {
        GenerateResult {
            dialect: Dialect::MySql,
            entity_count: 0,
            statements: vec![],
            verified: None,
        }
    }

    #[fixture]
    fn verified_result() -> GenerateResult {
        GenerateResult {
            dialect: Dialect::Postgres,
            entity_count: 2,
            statements: vec!["CREATE TABLE a (x INT)".to_string(), "CREATE TABLE b (y INT)".to_string()],
            verified: Some(2),
        }
    }

    crate::output_table_test! {
        test_name: test_to_table_empty,
        fixture: empty_result,
        fixture_type: GenerateResult,
        expected: "-- No entities defined.",
    }

    crate::output_table_test! {
        test_name: test_to_table_verified,
        fixture: verified_result,
        fixture_type: GenerateResult,
        expected: VERIFIED_TABLE,
    }

    crate::output_json_test! {
        test_name: test_format_json,
        fixture: verified_result,
        fixture_type: GenerateResult,
        assertions: {
            "dialect": "postgres",
            "entity_count": 2,
            "verified": 2,
        },
    }

    #[rstest]
    fn test_json_omits_verified_when_not_requested(empty_result: GenerateResult) {
        use crate::output::OutputFormat;
        let parsed: serde_json::Value =
            serde_json::from_str(&empty_result.format(OutputFormat::Json)).unwrap();
        assert!(parsed.get("verified").is_none());
    }
}
