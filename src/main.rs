use anyhow::Result;
use clap::Parser;

use lipstick::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
