use std::fs::File;
use std::path::Path;

use tracing::info;

use crate::error::{Error, Result};
use crate::models::transaction::Transaction;
use crate::operations::add::{TransactionInput, create_transactions};
use crate::store::TransactionStore;

/// Imports transactions from a headerless CSV file with the columns
/// `date,description,amount,type,category`. Every row goes through the same
/// validation as a manual entry; any invalid row aborts the import with a
/// line-numbered error before anything is stored. Imported rows never spawn
/// fixed successors. Returns the number of imported transactions.
pub fn import_csv(store: &mut dyn TransactionStore, path: &Path) -> Result<usize> {
    let transactions = read_csv(path)?;
    let count = transactions.len();
    for transaction in transactions {
        store.add(transaction)?;
    }
    info!("Imported {} transactions from {}", count, path.display());
    Ok(count)
}

fn read_csv(path: &Path) -> Result<Vec<Transaction>> {
    let file = File::open(path).map_err(|e| Error::FileOpen {
        path: path.display().to_string(),
        source: e,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .has_headers(false)
        .from_reader(file);

    let mut transactions = Vec::new();
    for (line_index, result) in reader.records().enumerate() {
        let line = line_index + 1;
        let record = result.map_err(|e| Error::Csv {
            line,
            message: e.to_string(),
        })?;

        if record.len() != 5 {
            return Err(Error::Csv {
                line,
                message: format!("expected 5 columns, got {}", record.len()),
            });
        }

        let input = TransactionInput {
            date: record.get(0).unwrap_or(""),
            description: record.get(1).unwrap_or(""),
            amount: record.get(2).unwrap_or(""),
            transaction_type: record.get(3).unwrap_or(""),
            category: record.get(4).unwrap_or(""),
            is_fixed: false,
        };

        let mut created = create_transactions(&input).map_err(|e| Error::CsvRow {
            line,
            source: Box::new(e),
        })?;
        transactions.append(&mut created);
    }

    Ok(transactions)
}
