use rust_decimal::Decimal;

/// Aggregated debit/credit totals for a single PCG account.
/// Both totals are always populated; an account seen on only one side
/// carries an explicit zero on the other.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountBalance {
    pub account: String,
    pub total_debit: Decimal,
    pub total_credit: Decimal,
    pub final_balance: Decimal,
}

impl AccountBalance {
    /// Class 7 under the PCG: income ("produits"), credit-natured.
    pub fn is_product_account(&self) -> bool {
        self.account.starts_with('7')
    }

    /// Class 6 under the PCG: expenses ("charges"), debit-natured.
    pub fn is_charge_account(&self) -> bool {
        self.account.starts_with('6')
    }
}

/// Income statement derived from the class 6/7 account balances.
#[derive(Debug, Clone, PartialEq)]
pub struct IncomeStatement {
    pub total_products: Decimal,
    pub total_charges: Decimal,
    pub net_income: Decimal,
}

impl IncomeStatement {
    /// Rounding happens here, once, at the reporting boundary. Internal
    /// sums are kept at full precision so debits and credits cancel exactly.
    pub fn new(total_products: Decimal, total_charges: Decimal) -> Self {
        Self {
            total_products: total_products.round_dp(2),
            total_charges: total_charges.round_dp(2),
            net_income: (total_products - total_charges).round_dp(2),
        }
    }
}

/// Result of the double-entry cross-check over known accounts.
/// A non-zero difference is an anomaly to surface, not an error to raise.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegrityReport {
    pub total_debits: Decimal,
    pub total_credits: Decimal,
    pub difference: Decimal,
}
