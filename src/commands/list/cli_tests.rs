//! CLI parsing tests for list command using the test DSL.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use crate::commands::list::ListKind;
    use clap::Parser;
    use rstest::rstest;

    crate::cli_defaults_test! {
        command: "list",
        variant: List,
        required_args: [],
        defaults: {
            kind: None,
        },
    }

    crate::cli_option_test! {
        command: "list",
        variant: List,
        test_name: test_list_with_kind,
        args: ["--kind", "satellite"],
        field: kind,
        expected: Some(ListKind::Satellite),
    }

    crate::cli_error_test! {
        command: "list",
        test_name: test_list_unknown_kind_rejected,
        args: ["--kind", "table"],
    }
}
