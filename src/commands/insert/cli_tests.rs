//! CLI parsing tests for insert command using the test DSL.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use clap::Parser;
    use rstest::rstest;

    crate::cli_required_arg_test! {
        command: "insert",
        test_name: test_insert_requires_records,
        required_arg: "--records",
    }

    crate::cli_error_test! {
        command: "insert",
        test_name: test_insert_records_must_exist,
        args: ["--records", "no_such_records.json"],
    }
}
