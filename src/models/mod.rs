mod balance;
mod entry;

pub use balance::{AccountBalance, IncomeStatement, IntegrityReport};
pub use entry::Entry;

#[cfg(test)]
mod tests;
