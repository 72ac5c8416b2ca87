use chrono::{Duration, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;
use rust_decimal::Decimal;

use crate::models::Entry;

/// The closed set of transaction kinds the generator emits. Each kind maps
/// to a fixed (debit, credit) pair of PCG accounts, so every generated
/// entry is balanced by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TransactionKind {
    /// 411 Clients (receivable) / 707 Sales of goods (income)
    SalesOfGoods,
    /// 607 Purchases of goods (expense) / 401 Suppliers (payable)
    PurchaseOfGoods,
    /// 512 Bank / 411 Clients (receivable settled)
    ClientPayment,
    /// 401 Suppliers (payable settled) / 512 Bank
    SupplierPayment,
    /// 627 Bank services (expense) / 512 Bank
    BankFees,
    /// 641 Salaries (expense) / 512 Bank
    Payroll,
}

impl TransactionKind {
    pub(crate) fn all() -> &'static [TransactionKind] {
        &[
            Self::SalesOfGoods,
            Self::PurchaseOfGoods,
            Self::ClientPayment,
            Self::SupplierPayment,
            Self::BankFees,
            Self::Payroll,
        ]
    }

    /// The (debit, credit) account codes for this kind.
    pub(crate) fn accounts(&self) -> (&'static str, &'static str) {
        match self {
            Self::SalesOfGoods => ("411", "707"),
            Self::PurchaseOfGoods => ("607", "401"),
            Self::ClientPayment => ("512", "411"),
            Self::SupplierPayment => ("401", "512"),
            Self::BankFees => ("627", "512"),
            Self::Payroll => ("641", "512"),
        }
    }

    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::SalesOfGoods => "Sales of Goods",
            Self::PurchaseOfGoods => "Purchase of Goods",
            Self::ClientPayment => "Client Payment Received",
            Self::SupplierPayment => "Supplier Payment Made",
            Self::BankFees => "Bank Fees",
            Self::Payroll => "Payroll Payment",
        }
    }

    fn label(&self, seq: u32, rng: &mut impl Rng) -> String {
        match self {
            Self::SalesOfGoods => {
                format!("Facture Vente n°V{seq} {}", pick(COMPANIES, rng))
            }
            Self::PurchaseOfGoods => {
                format!("Facture Achat n°A{seq} auprès de {}", pick(COMPANIES, rng))
            }
            Self::ClientPayment => format!("Virement client {}", pick(PERSONS, rng)),
            Self::SupplierPayment => format!("Règlement fournisseur {}", pick(PERSONS, rng)),
            _ => self.as_str().to_string(),
        }
    }
}

const COMPANIES: &[&str] = &[
    "Martin et Fils",
    "Dubois SARL",
    "Lefebvre Distribution",
    "Moreau Industrie",
    "Bernard et Associés",
    "Petit Négoce",
    "Fournier SA",
    "Girard Équipement",
];

const PERSONS: &[&str] = &[
    "Claire Fontaine",
    "Julien Mercier",
    "Sophie Lambert",
    "Antoine Roche",
    "Élise Garnier",
    "Marc Chevalier",
];

fn pick<'a>(pool: &'a [&'a str], rng: &mut impl Rng) -> &'a str {
    pool.choose(rng).copied().unwrap_or("")
}

/// Amounts are drawn in whole cents between 50.00 and 5000.00 so the
/// Decimal is exact at two decimal places.
fn random_amount(rng: &mut impl Rng) -> Decimal {
    Decimal::new(rng.gen_range(5_000..=500_000), 2)
}

/// A random ISO-8601 date within 2024.
fn random_date(rng: &mut impl Rng) -> String {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();
    let date = start + Duration::days(rng.gen_range(0..=365));
    date.format("%Y-%m-%d").to_string()
}

/// Generate a synthetic general ledger of `count` balanced entries.
/// Transaction ids are sequential starting at 1. The caller supplies the
/// RNG, so seeded runs are reproducible.
pub(crate) fn generate_ledger(count: usize, rng: &mut impl Rng) -> Vec<Entry> {
    let kinds = TransactionKind::all();
    let mut entries = Vec::with_capacity(count);

    for seq in 1..=count as u32 {
        let kind = kinds.choose(rng).copied().unwrap_or(TransactionKind::SalesOfGoods);
        let (debit_account, credit_account) = kind.accounts();
        entries.push(Entry {
            date: random_date(rng),
            debit_account: debit_account.to_string(),
            credit_account: credit_account.to_string(),
            amount: random_amount(rng),
            label: kind.label(seq, rng),
            transaction_id: seq,
        });
    }

    entries
}
