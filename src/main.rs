use clap::Parser;
use exoshape_tools::Cli;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    exoshape_tools::run(cli)
}
