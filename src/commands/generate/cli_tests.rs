//! CLI parsing tests for generate command using the test DSL.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use crate::sql::Dialect;
    use crate::test_utils::create_temp_json_file;
    use clap::Parser;
    use rstest::rstest;

    crate::cli_required_arg_test! {
        command: "generate",
        test_name: test_generate_requires_definition,
        required_arg: "--definition",
    }

    crate::cli_error_test! {
        command: "generate",
        test_name: test_generate_definition_must_exist,
        args: ["--definition", "no_such_vault.json"],
    }

    fn parse(extra: &[&str]) -> crate::commands::GenerateCmd {
        let file = create_temp_json_file("{}");
        let path = file.path().to_str().unwrap().to_string();
        let mut argv = vec!["datavault", "generate", "--definition", path.as_str()];
        argv.extend_from_slice(extra);
        match Args::try_parse_from(argv).unwrap().command {
            crate::commands::Command::Generate(cmd) => cmd,
            _ => panic!("Expected Generate command"),
        }
    }

    #[rstest]
    fn test_generate_defaults() {
        let cmd = parse(&[]);
        assert_eq!(cmd.dialect, Dialect::MySql);
        assert!(!cmd.verify);
    }

    #[rstest]
    #[case("mysql", Dialect::MySql)]
    #[case("postgres", Dialect::Postgres)]
    fn test_generate_dialect(#[case] value: &str, #[case] expected: Dialect) {
        assert_eq!(parse(&["--dialect", value]).dialect, expected);
    }

    #[rstest]
    fn test_generate_unknown_dialect_rejected() {
        let file = create_temp_json_file("{}");
        let path = file.path().to_str().unwrap();
        let result =
            Args::try_parse_from(["datavault", "generate", "--definition", path, "--dialect", "oracle"]);
        assert!(result.is_err());
    }

    #[rstest]
    fn test_generate_verify_flag() {
        assert!(parse(&["--verify"]).verify);
    }
}
