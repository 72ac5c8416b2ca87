#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

// ── AccountBalance ────────────────────────────────────────────

fn make_balance(account: &str) -> AccountBalance {
    AccountBalance {
        account: account.into(),
        total_debit: dec!(100.00),
        total_credit: dec!(40.00),
        final_balance: dec!(60.00),
    }
}

#[test]
fn test_product_account() {
    assert!(make_balance("707").is_product_account());
    assert!(make_balance("7").is_product_account());
    assert!(!make_balance("607").is_product_account());
    assert!(!make_balance("411").is_product_account());
}

#[test]
fn test_charge_account() {
    assert!(make_balance("607").is_charge_account());
    assert!(make_balance("641").is_charge_account());
    assert!(!make_balance("707").is_charge_account());
    assert!(!make_balance("512").is_charge_account());
}

#[test]
fn test_class_checked_on_leading_digit_only() {
    // "167" contains a 6 and a 7 but is class 1 (borrowings)
    let b = make_balance("167");
    assert!(!b.is_product_account());
    assert!(!b.is_charge_account());
}

// ── IncomeStatement ───────────────────────────────────────────

#[test]
fn test_income_statement_net() {
    let s = IncomeStatement::new(dec!(1500.00), dec!(600.00));
    assert_eq!(s.total_products, dec!(1500.00));
    assert_eq!(s.total_charges, dec!(600.00));
    assert_eq!(s.net_income, dec!(900.00));
}

#[test]
fn test_income_statement_negative_net() {
    let s = IncomeStatement::new(dec!(100.00), dec!(250.00));
    assert_eq!(s.net_income, dec!(-150.00));
}

#[test]
fn test_income_statement_rounds_to_two_decimals() {
    let s = IncomeStatement::new(dec!(10.005), dec!(0.001));
    assert_eq!(s.total_products.scale(), 2);
    assert_eq!(s.total_charges.scale(), 2);
    assert_eq!(s.net_income.scale(), 2);
}

#[test]
fn test_income_statement_zero() {
    let s = IncomeStatement::new(Decimal::ZERO, Decimal::ZERO);
    assert_eq!(s.net_income, Decimal::ZERO);
}
