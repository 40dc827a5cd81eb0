// src/bin/cli.rs
use clap::Parser;
use race_plan::cli::{self, Cli};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Cli::parse();
    cli::init_logging(args.verbose);
    cli::run(args)
}
