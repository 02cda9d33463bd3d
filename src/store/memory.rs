use uuid::Uuid;

use super::TransactionStore;
use crate::error::Result;
use crate::models::transaction::Transaction;

/// Store without a persistence backend. Used by tests and anywhere a
/// throwaway store is enough.
#[derive(Debug, Default)]
pub struct MemoryStore {
    transactions: Vec<Transaction>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transactions(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }
}

impl TransactionStore for MemoryStore {
    fn add(&mut self, transaction: Transaction) -> Result<()> {
        self.transactions.insert(0, transaction);
        Ok(())
    }

    fn remove(&mut self, id: Uuid) -> Result<bool> {
        match self.transactions.iter().position(|t| t.id == id) {
            Some(pos) => {
                self.transactions.remove(pos);
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
    use crate::models::transaction::{Category, ExpenseCategory};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn create_test_transaction(day: u32) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2024, 3, day).expect("Invalid date"),
            Category::Expense(ExpenseCategory::Lebensmittel),
            format!("Einkauf {}", day),
            Decimal::new(1999, 2),
            false,
        )
    }

    #[test]
    fn test_add_inserts_at_front() {
        let mut store = MemoryStore::new();
        let first = create_test_transaction(1);
        let second = create_test_transaction(2);

        store.add(first.clone()).unwrap();
        store.add(second.clone()).unwrap();

        assert_eq!(store.list().len(), 2);
        assert_eq!(store.list()[0].id, second.id);
        assert_eq!(store.list()[1].id, first.id);
    }

    #[test]
    fn test_remove_deletes_exactly_one_and_keeps_order() {
        let mut store = MemoryStore::new();
        let transactions: Vec<Transaction> = (1..=4).map(create_test_transaction).collect();
        for transaction in transactions.iter().cloned() {
            store.add(transaction).unwrap();
        }

        let removed = store.remove(transactions[2].id).unwrap();
        assert!(removed);
        assert_eq!(store.list().len(), 3);

        // Remaining entries keep their relative order (newest first).
        let remaining: Vec<Uuid> = store.list().iter().map(|t| t.id).collect();
        assert_eq!(
            remaining,
            vec![transactions[3].id, transactions[1].id, transactions[0].id]
        );
    }

    #[test]
    fn test_remove_missing_id_is_a_noop() {
        let mut store = MemoryStore::new();
        store.add(create_test_transaction(1)).unwrap();

        let removed = store.remove(Uuid::new_v4()).unwrap();
        assert!(!removed);
        assert_eq!(store.list().len(), 1);
    }
}
