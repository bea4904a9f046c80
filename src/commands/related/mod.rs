mod cli_tests;
mod execute;
mod output;

use clap::Args;

/// Show the satellites, links and linked hubs around a hub
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  datavault related --hub Invoice                 # Revision 0
  datavault related --hub TaxInvoice --revision 2
  datavault related --hub Invoice -f json")]
pub struct RelatedCmd {
    /// Hub name in display case, e.g. TaxInvoice
    #[arg(long)]
    pub hub: String,

    /// Hub revision
    #[arg(long, default_value_t = 0)]
    pub revision: u32,
}
