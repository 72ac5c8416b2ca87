mod analysis;
mod generate;
mod ledger;
mod models;
mod report;
mod run;

use anyhow::Result;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        run::print_usage();
        return Ok(());
    }
    run::as_cli(&args)
}
