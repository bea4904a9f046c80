//! CLI parsing tests for search command using the test DSL.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use clap::Parser;
    use rstest::rstest;

    // =========================================================================
    // Tests using macros
    // =========================================================================

    // Required argument test
    crate::cli_required_arg_test! {
        command: "search",
        test_name: test_search_requires_pattern,
        required_arg: "--pattern",
    }

    // Option tests (all require --pattern as a prerequisite)
    crate::cli_option_test! {
        command: "search",
        variant: Search,
        test_name: test_search_with_pattern,
        args: ["--pattern", "Invoice"],
        field: pattern,
        expected: "Invoice",
    }

    crate::cli_option_test! {
        command: "search",
        variant: Search,
        test_name: test_search_with_regex,
        args: ["-p", "^Inv", "-r"],
        field: regex,
        expected: true,
    }

    crate::cli_option_test! {
        command: "search",
        variant: Search,
        test_name: test_search_with_limit,
        args: ["--pattern", "Invoice", "--limit", "50"],
        field: limit,
        expected: 50,
    }

    crate::cli_defaults_test! {
        command: "search",
        variant: Search,
        required_args: ["--pattern", "Invoice"],
        defaults: {
            regex: false,
            limit: 100,
        },
    }

    // Limit validation tests
    crate::cli_limit_tests! {
        command: "search",
        variant: Search,
        required_args: ["--pattern", "Invoice"],
        limit: {
            field: limit,
            default: 100,
            max: 1000,
        },
    }
}
