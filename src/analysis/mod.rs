use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::collections::{HashMap, HashSet};

use crate::models::{AccountBalance, Entry, IncomeStatement, IntegrityReport};

/// Compute per-account debit/credit totals and the signed balance
/// (debit minus credit) for every account touched by the ledger.
///
/// The result is sorted by the numeric value of the account code, the PCG
/// presentation order. A code that does not parse as an integer means the
/// dataset is invalid, and the whole aggregation fails.
pub(crate) fn aggregate(entries: &[Entry]) -> Result<Vec<AccountBalance>> {
    let mut debits: HashMap<&str, Decimal> = HashMap::new();
    let mut credits: HashMap<&str, Decimal> = HashMap::new();

    for entry in entries {
        *debits.entry(&entry.debit_account).or_default() += entry.amount;
        *credits.entry(&entry.credit_account).or_default() += entry.amount;
    }

    // Union of both key sets: an account on only one side still gets a row,
    // with the missing side filled as zero.
    let accounts: HashSet<&str> = debits.keys().chain(credits.keys()).copied().collect();

    let mut keyed: Vec<(u64, AccountBalance)> = Vec::with_capacity(accounts.len());
    for account in accounts {
        let code: u64 = account
            .parse()
            .with_context(|| format!("Invalid account code '{account}': not numeric"))?;
        let total_debit = debits.get(account).copied().unwrap_or(Decimal::ZERO);
        let total_credit = credits.get(account).copied().unwrap_or(Decimal::ZERO);
        keyed.push((
            code,
            AccountBalance {
                account: account.to_string(),
                total_debit,
                total_credit,
                final_balance: total_debit - total_credit,
            },
        ));
    }

    keyed.sort_by_key(|(code, _)| *code);
    Ok(keyed.into_iter().map(|(_, balance)| balance).collect())
}

/// Derive the income statement from the aggregated balances.
///
/// PCG convention: class 7 accounts carry income on their credit side,
/// class 6 accounts carry expenses on their debit side. Everything outside
/// those two classes is ignored. An empty selection yields zeros.
pub(crate) fn classify_income(balances: &[AccountBalance]) -> IncomeStatement {
    let total_products: Decimal = balances
        .iter()
        .filter(|b| b.is_product_account())
        .map(|b| b.total_credit)
        .sum();
    let total_charges: Decimal = balances
        .iter()
        .filter(|b| b.is_charge_account())
        .map(|b| b.total_debit)
        .sum();

    IncomeStatement::new(total_products, total_charges)
}

/// Re-sum the raw ledger restricted to known accounts and report the
/// debit/credit difference. For a ledger of balanced pairs whose accounts
/// all made it into the aggregation, the difference is exactly 0.00; any
/// other value points at lost volume or corrupt data and is left to the
/// reader of the report.
pub(crate) fn check_integrity(entries: &[Entry], known_accounts: &HashSet<String>) -> IntegrityReport {
    let total_debits: Decimal = entries
        .iter()
        .filter(|e| known_accounts.contains(&e.debit_account))
        .map(|e| e.amount)
        .sum();
    let total_credits: Decimal = entries
        .iter()
        .filter(|e| known_accounts.contains(&e.credit_account))
        .map(|e| e.amount)
        .sum();

    IntegrityReport {
        total_debits,
        total_credits,
        difference: total_debits - total_credits,
    }
}
