use rust_decimal::Decimal;

/// One line of the general ledger: a balanced debit/credit pair.
/// The full amount is carried by both sides (double-entry bookkeeping).
#[derive(Debug, Clone)]
pub struct Entry {
    pub date: String,
    pub debit_account: String,
    pub credit_account: String,
    pub amount: Decimal,
    pub label: String,
    pub transaction_id: u32,
}
