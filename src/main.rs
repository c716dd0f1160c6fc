use anyhow::Result;
use clap::Parser;
use fn_params::cli::{init_logging, run, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    let output = run(&cli)?;
    print!("{}", output);
    if !output.is_empty() && !output.ends_with('\n') {
        println!();
    }
    Ok(())
}
