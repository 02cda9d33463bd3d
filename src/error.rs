use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::transaction::TransactionType;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid date '{0}'. Please use YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid amount '{0}'. Please provide a valid decimal number")]
    InvalidAmount(String),

    #[error("Negative amount {0} is not allowed")]
    NegativeAmount(Decimal),

    #[error("Invalid transaction type '{0}'. Use 'income' or 'expense'")]
    InvalidTransactionType(String),

    #[error("'{name}' is not a known {transaction_type} category")]
    UnknownCategory {
        transaction_type: TransactionType,
        name: String,
    },

    #[error("Description too long ({0} characters, the maximum is 255)")]
    DescriptionTooLong(usize),

    #[error("Invalid month {0}. Expected a value between 1 and 12")]
    InvalidMonth(u32),

    #[error("Invalid year {0}. Expected a four-digit calendar year")]
    InvalidYear(i32),

    #[error("Invalid transaction ID '{0}'. Please provide a valid UUID")]
    InvalidId(String),

    #[error("Failed to open '{path}': {source}")]
    FileOpen {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV parse error on line {line}: {message}")]
    Csv { line: usize, message: String },

    #[error("Line {line}: {source}")]
    CsvRow { line: usize, source: Box<Error> },

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize the transaction store: {0}")]
    Json(#[from] serde_json::Error),
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
