use clap::Parser;
use miette::Result;
use zeplin_cli::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    zeplin_cli::cli::run(cli)?;
    Ok(())
}
