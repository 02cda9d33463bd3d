use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::{debug, warn};
use uuid::Uuid;

use super::TransactionStore;
use crate::error::Result;
use crate::models::transaction::Transaction;

/// Store backed by a single JSON file. The file holds the entire transaction
/// list and is rewritten wholesale on every mutation; it is read exactly once
/// when the store is opened. A missing or unparseable file falls back to an
/// empty list. When a write fails the in-memory list stays authoritative for
/// the rest of the session and the error is surfaced to the caller.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    transactions: Vec<Transaction>,
}

impl JsonFileStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let transactions = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(transactions) => transactions,
                Err(e) => {
                    warn!(
                        "Could not parse {}: {}. Starting with an empty store",
                        path.display(),
                        e
                    );
                    Vec::new()
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                warn!(
                    "Could not read {}: {}. Starting with an empty store",
                    path.display(),
                    e
                );
                Vec::new()
            }
        };

        debug!(
            "Loaded {} transactions from {}",
            transactions.len(),
            path.display()
        );
        Self { path, transactions }
    }

    fn save(&self) -> Result<()> {
        let contents = serde_json::to_string_pretty(&self.transactions)?;
        fs::write(&self.path, contents)?;
        debug!(
            "Wrote {} transactions to {}",
            self.transactions.len(),
            self.path.display()
        );
        Ok(())
    }
}

impl TransactionStore for JsonFileStore {
    fn add(&mut self, transaction: Transaction) -> Result<()> {
        self.transactions.insert(0, transaction);
        self.save()
    }

    fn remove(&mut self, id: Uuid) -> Result<bool> {
        match self.transactions.iter().position(|t| t.id == id) {
            Some(pos) => {
                self.transactions.remove(pos);
                self.save()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn list(&self) -> &[Transaction] {
        &self.transactions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::transaction::{Category, ExpenseCategory, IncomeCategory};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::io::Write;
    use tempfile::TempDir;

    fn create_test_transaction(category: Category, amount: i64) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2024, 3, 10).expect("Invalid date"),
            category,
            "Test".to_string(),
            Decimal::new(amount, 2),
            false,
        )
    }

    #[test]
    fn test_open_missing_file_starts_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::open(dir.path().join("missing.json"));
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_open_unparseable_file_starts_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("slot.json");
        let mut file = fs::File::create(&path).unwrap();
        write!(file, "this is not json").unwrap();

        let store = JsonFileStore::open(&path);
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_mutations_survive_a_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("slot.json");

        let first = create_test_transaction(Category::Income(IncomeCategory::Gehalt), 200_000);
        let second = create_test_transaction(Category::Expense(ExpenseCategory::Miete), 80_000);

        {
            let mut store = JsonFileStore::open(&path);
            store.add(first.clone()).unwrap();
            store.add(second.clone()).unwrap();
        }

        let reopened = JsonFileStore::open(&path);
        assert_eq!(reopened.list().len(), 2);
        // Front insertion order: the second add comes back first.
        assert_eq!(reopened.list()[0], second);
        assert_eq!(reopened.list()[1], first);
    }

    #[test]
    fn test_remove_rewrites_the_slot() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("slot.json");

        let keep = create_test_transaction(Category::Income(IncomeCategory::Gehalt), 200_000);
        let discard = create_test_transaction(Category::Expense(ExpenseCategory::Sparen), 20_000);

        {
            let mut store = JsonFileStore::open(&path);
            store.add(keep.clone()).unwrap();
            store.add(discard.clone()).unwrap();
            assert!(store.remove(discard.id).unwrap());
        }

        let reopened = JsonFileStore::open(&path);
        assert_eq!(reopened.list().len(), 1);
        assert_eq!(reopened.list()[0].id, keep.id);
    }

    #[test]
    fn test_remove_missing_id_does_not_touch_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("slot.json");

        let mut store = JsonFileStore::open(&path);
        store
            .add(create_test_transaction(
                Category::Expense(ExpenseCategory::Freizeit),
                1_500,
            ))
            .unwrap();

        assert!(!store.remove(Uuid::new_v4()).unwrap());
        assert_eq!(store.list().len(), 1);
    }
}
