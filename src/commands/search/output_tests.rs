//! Output formatting tests for search command.

#[cfg(test)]
mod tests {
    use super::super::execute::SearchResult;
    use crate::naming::{EntityName, EntityType};
    use rstest::{fixture, rstest};

    // =========================================================================
    // Expected outputs
    // =========================================================================

    const EMPTY_TABLE: &str = "\
Search: order (keyword)

No results found.";

    const KEYWORD_TABLE: &str = "\
Search: invoice (keyword)

Entities (2):
  TYPE       NAME           REV
  hub        Invoice        0
  satellite  InvoiceDetail  1";

    const TRUNCATED_TABLE: &str = "\
Search: ^Inv (regex)

Entities (1 of 3):
  TYPE  NAME           REV
  link  InvPreparedBy  0";

    // =========================================================================
    // Fixtures
    // =========================================================================

    #[fixture]
    fn empty_result() -> SearchResult {
        SearchResult {
            schema: "public".to_string(),
            pattern: "order".to_string(),
            ..Default::default()
        }
    }

    #[fixture]
    fn keyword_result() -> SearchResult {
        SearchResult {
            schema: "public".to_string(),
            pattern: "invoice".to_string(),
            regex: false,
            total: 2,
            entities: vec![
                EntityName::new(EntityType::Hub, "Invoice", 0),
                EntityName::new(EntityType::Satellite, "InvoiceDetail", 1),
            ],
        }
    }

    #[fixture]
    fn truncated_result() -> SearchResult {
        SearchResult {
            schema: "public".to_string(),
            pattern: "^Inv".to_string(),
            regex: true,
            total: 3,
            entities: vec![EntityName::new(EntityType::Link, "InvPreparedBy", 0)],
        }
    }

    // =========================================================================
    // Table format tests
    // =========================================================================

    crate::output_table_test! {
        test_name: test_to_table_empty,
        fixture: empty_result,
        fixture_type: SearchResult,
        expected: EMPTY_TABLE,
    }

    crate::output_table_test! {
        test_name: test_to_table_keyword,
        fixture: keyword_result,
        fixture_type: SearchResult,
        expected: KEYWORD_TABLE,
    }

    crate::output_table_test! {
        test_name: test_to_table_truncated,
        fixture: truncated_result,
        fixture_type: SearchResult,
        expected: TRUNCATED_TABLE,
    }

    // =========================================================================
    // JSON and toon format tests
    // =========================================================================

    crate::output_json_test! {
        test_name: test_format_json,
        fixture: keyword_result,
        fixture_type: SearchResult,
        assertions: {
            "pattern": "invoice",
            "regex": false,
            "total": 2,
        },
    }

    crate::output_toon_test! {
        test_name: test_format_toon,
        fixture: keyword_result,
        fixture_type: SearchResult,
        contains: ["pattern: invoice", "entities[2]", "InvoiceDetail"],
    }

    #[rstest]
    fn test_format_json_entities(keyword_result: SearchResult) {
        use crate::output::{OutputFormat, Outputable};
        let parsed: serde_json::Value =
            serde_json::from_str(&keyword_result.format(OutputFormat::Json)).unwrap();
        assert_eq!(parsed["entities"][0]["name"], "Invoice");
        assert_eq!(parsed["entities"][1]["entity_type"], "satellite");
    }
}
