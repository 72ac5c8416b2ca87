use anyhow::Result;
use std::collections::HashSet;
use std::path::Path;

use crate::{analysis, generate, ledger, report};

pub(crate) fn as_cli(args: &[String]) -> Result<()> {
    match args[1].as_str() {
        "generate" | "gen" => cli_generate(&args[2..]),
        "report" | "r" => cli_report(&args[2..]),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("grandlivre {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

pub(crate) fn print_usage() {
    println!("GrandLivre — synthetic PCG general ledger generator and analyzer");
    println!();
    println!("Usage: grandlivre <command>");
    println!();
    println!("Commands:");
    println!("  generate                      Generate a synthetic ledger CSV");
    println!("    --entries <N>               Number of entries (default: 10000)");
    println!("    --output <path>             Output file (default: {})", ledger::DEFAULT_LEDGER);
    println!("  report [path]                 Analyze a ledger CSV and print the report");
    println!("                                (default input: {})", ledger::DEFAULT_LEDGER);
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
}

fn cli_generate(args: &[String]) -> Result<()> {
    let entries_count: usize = args
        .windows(2)
        .find(|w| w[0] == "--entries")
        .map(|w| w[1].parse())
        .transpose()
        .map_err(|e| anyhow::anyhow!("Invalid --entries value: {e}"))?
        .unwrap_or(10_000);

    let output = args
        .windows(2)
        .find(|w| w[0] == "--output")
        .map(|w| w[1].clone())
        .unwrap_or_else(|| ledger::DEFAULT_LEDGER.to_string());

    let mut rng = rand::thread_rng();
    let entries = generate::generate_ledger(entries_count, &mut rng);
    ledger::write(Path::new(&output), &entries)?;

    println!("Wrote {} entries to {output}", entries.len());
    Ok(())
}

fn cli_report(args: &[String]) -> Result<()> {
    let input = args
        .first()
        .filter(|a| !a.starts_with('-'))
        .map(String::as_str)
        .unwrap_or(ledger::DEFAULT_LEDGER);

    let entries = ledger::load(Path::new(input))?;

    let balances = analysis::aggregate(&entries)?;
    let income = analysis::classify_income(&balances);
    let known: HashSet<String> = balances.iter().map(|b| b.account.clone()).collect();
    let integrity = analysis::check_integrity(&entries, &known);

    print!("{}", report::render(&balances, &income, &integrity));
    Ok(())
}
