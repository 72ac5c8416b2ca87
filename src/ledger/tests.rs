#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;
use std::io::Write;

use super::*;
use crate::models::Entry;

fn make_csv_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

const HEADER: &str = "Date,Compte_Debit,Compte_Credit,Montant,Libelle,ID_Transaction\n";

// ── load ──────────────────────────────────────────────────────

#[test]
fn test_load_basic() {
    let csv = format!(
        "{HEADER}2024-03-15,411,707,1000.00,Facture Vente n°V1 Dubois SARL,1\n\
         2024-03-16,607,401,500.00,Facture Achat n°A2,2\n"
    );
    let file = make_csv_file(&csv);
    let entries = load(file.path()).unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].date, "2024-03-15");
    assert_eq!(entries[0].debit_account, "411");
    assert_eq!(entries[0].credit_account, "707");
    assert_eq!(entries[0].amount, dec!(1000.00));
    assert_eq!(entries[0].label, "Facture Vente n°V1 Dubois SARL");
    assert_eq!(entries[0].transaction_id, 1);
    assert_eq!(entries[1].transaction_id, 2);
}

#[test]
fn test_load_missing_file() {
    let err = load(Path::new("no_such_ledger.csv")).unwrap_err();
    assert!(err.to_string().contains("no_such_ledger.csv"));
    assert!(err.to_string().contains("generate"));
}

#[test]
fn test_load_resolves_columns_by_header_name() {
    // Shuffled column order must still load correctly
    let csv = "Montant,Date,ID_Transaction,Compte_Credit,Compte_Debit,Libelle\n\
               42.50,2024-06-01,7,512,627,Bank Fees\n";
    let file = make_csv_file(csv);
    let entries = load(file.path()).unwrap();
    assert_eq!(entries[0].amount, dec!(42.50));
    assert_eq!(entries[0].debit_account, "627");
    assert_eq!(entries[0].credit_account, "512");
    assert_eq!(entries[0].transaction_id, 7);
}

#[test]
fn test_load_missing_column() {
    let csv = "Date,Compte_Debit,Montant,Libelle,ID_Transaction\n\
               2024-03-15,411,1000.00,X,1\n";
    let file = make_csv_file(csv);
    let err = load(file.path()).unwrap_err();
    assert!(err.to_string().contains("Compte_Credit"));
}

#[test]
fn test_load_invalid_amount() {
    let csv = format!("{HEADER}2024-03-15,411,707,abc,X,1\n");
    let file = make_csv_file(&csv);
    let err = load(file.path()).unwrap_err();
    assert!(format!("{err:#}").contains("Row 2"));
}

#[test]
fn test_load_invalid_date() {
    let csv = format!("{HEADER}15/03/2024,411,707,100.00,X,1\n");
    let file = make_csv_file(&csv);
    assert!(load(file.path()).is_err());
}

#[test]
fn test_load_empty_account_code() {
    let csv = format!("{HEADER}2024-03-15,,707,100.00,X,1\n");
    let file = make_csv_file(&csv);
    let err = load(file.path()).unwrap_err();
    assert!(err.to_string().contains("empty account code"));
}

#[test]
fn test_load_header_only() {
    let file = make_csv_file(HEADER);
    let entries = load(file.path()).unwrap();
    assert!(entries.is_empty());
}

#[test]
fn test_load_quoted_label_with_comma() {
    let csv = format!("{HEADER}2024-03-15,411,707,100.00,\"Vente, gros\",1\n");
    let file = make_csv_file(&csv);
    let entries = load(file.path()).unwrap();
    assert_eq!(entries[0].label, "Vente, gros");
}

// ── write ─────────────────────────────────────────────────────

#[test]
fn test_write_then_load() {
    let entries = vec![Entry {
        date: "2024-07-04".into(),
        debit_account: "641".into(),
        credit_account: "512".into(),
        amount: dec!(2345.67),
        label: "Payroll Payment".into(),
        transaction_id: 12,
    }];

    let file = tempfile::NamedTempFile::new().unwrap();
    write(file.path(), &entries).unwrap();
    let loaded = load(file.path()).unwrap();

    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].date, "2024-07-04");
    assert_eq!(loaded[0].debit_account, "641");
    assert_eq!(loaded[0].amount, dec!(2345.67));
    assert_eq!(loaded[0].transaction_id, 12);
}

#[test]
fn test_write_header_row() {
    let file = tempfile::NamedTempFile::new().unwrap();
    write(file.path(), &[]).unwrap();
    let content = std::fs::read_to_string(file.path()).unwrap();
    assert!(content.starts_with("Date,Compte_Debit,Compte_Credit,Montant,Libelle,ID_Transaction"));
}
