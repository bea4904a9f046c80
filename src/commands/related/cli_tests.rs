//! CLI parsing tests for related command using the test DSL.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use clap::Parser;
    use rstest::rstest;

    crate::cli_required_arg_test! {
        command: "related",
        test_name: test_related_requires_hub,
        required_arg: "--hub",
    }

    crate::cli_defaults_test! {
        command: "related",
        variant: Related,
        required_args: ["--hub", "Invoice"],
        defaults: {
            hub: "Invoice",
            revision: 0,
        },
    }

    crate::cli_option_test! {
        command: "related",
        variant: Related,
        test_name: test_related_with_revision,
        args: ["--hub", "TaxInvoice", "--revision", "3"],
        field: revision,
        expected: 3,
    }

    crate::cli_error_test! {
        command: "related",
        test_name: test_related_negative_revision_rejected,
        args: ["--hub", "Invoice", "--revision", "-1"],
    }
}
