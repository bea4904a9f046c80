//! Output formatting for insert command results.

use super::execute::InsertResult;
use crate::output::Outputable;

impl Outputable for InsertResult {
    fn to_table(&self) -> String {
        format!(
            "Inserted into schema {}: {} hubs, {} links, {} satellites",
            self.schema, self.hubs, self.links, self.satellites
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn inserted_result() -> InsertResult {
        InsertResult {
            schema: "public".to_string(),
            hubs: 2,
            links: 1,
            satellites: 0,
        }
    }

    crate::output_table_test! {
        test_name: test_to_table,
        fixture: inserted_result,
        fixture_type: InsertResult,
        expected: "Inserted into schema public: 2 hubs, 1 links, 0 satellites",
    }

    crate::output_json_test! {
        test_name: test_format_json,
        fixture: inserted_result,
        fixture_type: InsertResult,
        assertions: {
            "hubs": 2,
            "satellites": 0,
        },
    }
}
