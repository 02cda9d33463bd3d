mod json_file;
#[cfg(test)]
mod memory;

pub use json_file::JsonFileStore;
#[cfg(test)]
pub use memory::MemoryStore;

use uuid::Uuid;

use crate::error::Result;
use crate::models::transaction::Transaction;

/// Ordered collection of transactions with an injected persistence strategy.
/// The sequence is kept in insertion order with the newest entry first; it is
/// not sorted by date.
pub trait TransactionStore {
    /// Inserts at the front of the sequence. The caller-generated id is
    /// trusted to be unique.
    fn add(&mut self, transaction: Transaction) -> Result<()>;

    /// Removes the first record with a matching id. Returns `false` when no
    /// record matches; a missing id is not an error.
    fn remove(&mut self, id: Uuid) -> Result<bool>;

    /// The full sequence in insertion order.
    fn list(&self) -> &[Transaction];
}
