use uuid::Uuid;

use crate::error::{Error, Result};
use crate::store::TransactionStore;

/// Parses the id and removes the matching transaction from the store.
/// Returns whether a record was actually removed; a missing id is reported
/// through the return value, not as an error.
pub fn remove_transaction(store: &mut dyn TransactionStore, id_input: &str) -> Result<bool> {
    let id = Uuid::parse_str(id_input.trim())
        .map_err(|_| Error::InvalidId(id_input.trim().to_string()))?;
    store.remove(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::transaction::{Category, ExpenseCategory, Transaction};
    use crate::store::MemoryStore;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn store_with_one_transaction() -> (MemoryStore, Uuid) {
        let transaction = Transaction::new(
            NaiveDate::from_ymd_opt(2024, 3, 1).expect("Invalid date"),
            Category::Expense(ExpenseCategory::Gastronomie),
            "Pizza".to_string(),
            Decimal::new(1250, 2),
            false,
        );
        let id = transaction.id;
        (MemoryStore::with_transactions(vec![transaction]), id)
    }

    #[test]
    fn test_remove_existing_transaction() {
        let (mut store, id) = store_with_one_transaction();
        let removed = remove_transaction(&mut store, &id.to_string()).unwrap();
        assert!(removed);
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_remove_unknown_id_is_soft() {
        let (mut store, _) = store_with_one_transaction();
        let removed = remove_transaction(&mut store, &Uuid::new_v4().to_string()).unwrap();
        assert!(!removed);
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn test_remove_rejects_malformed_id() {
        let (mut store, _) = store_with_one_transaction();
        let result = remove_transaction(&mut store, "not-a-uuid");
        assert!(matches!(result, Err(Error::InvalidId(_))));
    }
}
