use rust_decimal::Decimal;
use std::fmt::Write;

use crate::models::{AccountBalance, IncomeStatement, IntegrityReport};

/// Format a decimal amount with thousand separators, 2 decimal places and
/// a euro suffix. e.g. `1234567.89` → `"1,234,567.89 €"`
pub(crate) fn format_amount(val: Decimal) -> String {
    let abs = val.abs();
    let formatted = format!("{abs:.2}");
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next().unwrap_or("00");

    let with_commas: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    if val < Decimal::ZERO {
        format!("-{with_commas}.{dec_part} €")
    } else {
        format!("{with_commas}.{dec_part} €")
    }
}

/// Render the full analysis report: the general balance table, the income
/// statement, and the integrity cross-check.
pub(crate) fn render(
    balances: &[AccountBalance],
    income: &IncomeStatement,
    integrity: &IntegrityReport,
) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "General Balance (Synthesis)");
    let _ = writeln!(out, "{}", "─".repeat(70));
    let _ = writeln!(
        out,
        "{:<10} {:>18} {:>18} {:>18}",
        "Account", "Total Debit", "Total Credit", "Balance"
    );
    for b in balances {
        let _ = writeln!(
            out,
            "{:<10} {:>18} {:>18} {:>18}",
            b.account,
            format_amount(b.total_debit),
            format_amount(b.total_credit),
            format_amount(b.final_balance),
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Net Income Calculation");
    let _ = writeln!(out, "{}", "─".repeat(70));
    let _ = writeln!(
        out,
        "  Total Products (Class 7): {}",
        format_amount(income.total_products)
    );
    let _ = writeln!(
        out,
        "  Total Charges (Class 6):  {}",
        format_amount(income.total_charges)
    );
    let _ = writeln!(
        out,
        "  Net Income:               {}",
        format_amount(income.net_income)
    );

    let _ = writeln!(out);
    let _ = writeln!(out, "Accounting Integrity Check");
    let _ = writeln!(out, "{}", "─".repeat(70));
    let _ = writeln!(
        out,
        "  Total Ledger Debits:  {}",
        format_amount(integrity.total_debits)
    );
    let _ = writeln!(
        out,
        "  Total Ledger Credits: {}",
        format_amount(integrity.total_credits)
    );
    let _ = writeln!(
        out,
        "  Difference:           {} (should be 0.00 €)",
        format_amount(integrity.difference)
    );

    out
}
