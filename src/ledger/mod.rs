use anyhow::{Context, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

use crate::models::Entry;

/// Default ledger file, looked up in the working directory.
pub(crate) const DEFAULT_LEDGER: &str = "grand_livre_10k.csv";

const COLUMNS: [&str; 6] = [
    "Date",
    "Compte_Debit",
    "Compte_Credit",
    "Montant",
    "Libelle",
    "ID_Transaction",
];

/// Load a ledger CSV. A missing file is fatal before any computation;
/// the analyzer never runs on partial data.
pub(crate) fn load(path: &Path) -> Result<Vec<Entry>> {
    if !path.exists() {
        anyhow::bail!(
            "Ledger file not found: {} (run `grandlivre generate` first)",
            path.display()
        );
    }

    let mut rdr = csv::ReaderBuilder::new()
        .from_path(path)
        .with_context(|| format!("Failed to open ledger file {}", path.display()))?;

    // Column positions are resolved by header name, not assumed.
    let headers = rdr.headers().context("Failed to read CSV header row")?;
    let index_of = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| anyhow::anyhow!("Missing column '{name}' in ledger header"))
    };
    let date_col = index_of("Date")?;
    let debit_col = index_of("Compte_Debit")?;
    let credit_col = index_of("Compte_Credit")?;
    let amount_col = index_of("Montant")?;
    let label_col = index_of("Libelle")?;
    let id_col = index_of("ID_Transaction")?;

    let mut entries = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let row = i + 2; // 1-based, after the header
        let record = result.with_context(|| format!("Row {row}: failed to read CSV record"))?;
        let field = |col: usize| record.get(col).unwrap_or("").trim();

        let date = field(date_col);
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .with_context(|| format!("Row {row}: invalid date '{date}'"))?;

        let debit_account = field(debit_col);
        let credit_account = field(credit_col);
        if debit_account.is_empty() || credit_account.is_empty() {
            anyhow::bail!("Row {row}: empty account code");
        }

        let amount = Decimal::from_str(field(amount_col))
            .with_context(|| format!("Row {row}: invalid amount '{}'", field(amount_col)))?;
        let transaction_id: u32 = field(id_col)
            .parse()
            .with_context(|| format!("Row {row}: invalid transaction id '{}'", field(id_col)))?;

        entries.push(Entry {
            date: date.to_string(),
            debit_account: debit_account.to_string(),
            credit_account: credit_account.to_string(),
            amount,
            label: field(label_col).to_string(),
            transaction_id,
        });
    }

    Ok(entries)
}

/// Write a ledger as CSV with the standard column set.
pub(crate) fn write(path: &Path, entries: &[Entry]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create ledger file {}", path.display()))?;

    wtr.write_record(COLUMNS)
        .context("Failed to write CSV header")?;
    for entry in entries {
        wtr.write_record([
            entry.date.as_str(),
            entry.debit_account.as_str(),
            entry.credit_account.as_str(),
            &entry.amount.to_string(),
            entry.label.as_str(),
            &entry.transaction_id.to_string(),
        ])
        .with_context(|| format!("Failed to write entry {}", entry.transaction_id))?;
    }
    wtr.flush().context("Failed to flush ledger file")?;

    Ok(())
}

#[cfg(test)]
mod tests;
