use clap::Parser;

use datavault::cli::Args;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();
    let output = args.command.run(&args.config, args.format)?;
    println!("{}", output);
    Ok(())
}
