mod cli_tests;
mod execute;
mod output;
mod output_tests;

use clap::Args;

/// Search entities by name
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  datavault search -p invoice                # Entities whose table name contains 'invoice'
  datavault search -p TaxInvoice             # Display names are converted first
  datavault search -p '^Inv.*By$' -r         # Regex over display names")]
pub struct SearchCmd {
    /// Text to search for (substring of the stored name, regex over display names with --regex)
    #[arg(short, long)]
    pub pattern: String,

    /// Treat pattern as a regular expression
    #[arg(short, long, default_value_t = false)]
    pub regex: bool,

    /// Maximum number of results to return (1-1000)
    #[arg(short, long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..=1000))]
    pub limit: u32,
}
