mod execute;
mod output;

use clap::Args;

/// Reconstruct the definition of one data vault table
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  datavault describe -t hub_invoice_rev0            # Business keys of a hub
  datavault describe -t sat_invoice_detail_rev0     # Attributes and owning hub
  datavault describe -t link_inv_prepared_by_rev0 -f json")]
pub struct DescribeCmd {
    /// Table name, e.g. hub_invoice_rev0
    #[arg(short, long)]
    pub table: String,
}
