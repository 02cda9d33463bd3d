use std::str::FromStr;

use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::transaction::{Category, Transaction, TransactionType};

pub const MAX_DESCRIPTION_LENGTH: usize = 255;

/// Raw creation input as received from the CLI or an import row, before type
/// coercion and validation.
#[derive(Debug, Clone, Copy)]
pub struct TransactionInput<'a> {
    pub date: &'a str,
    pub transaction_type: &'a str,
    pub category: &'a str,
    pub description: &'a str,
    pub amount: &'a str,
    pub is_fixed: bool,
}

/// Validates the raw input and builds the transactions to store: one record,
/// or two for fixed entries (the original plus a clone dated one calendar
/// month later). The clone is identical except for its id and date.
pub fn create_transactions(input: &TransactionInput) -> Result<Vec<Transaction>> {
    let date = NaiveDate::parse_from_str(input.date.trim(), "%Y-%m-%d")
        .map_err(|_| Error::InvalidDate(input.date.trim().to_string()))?;

    let amount = Decimal::from_str(input.amount.trim())
        .map_err(|_| Error::InvalidAmount(input.amount.trim().to_string()))?;
    if amount < Decimal::ZERO {
        return Err(Error::NegativeAmount(amount));
    }

    let transaction_type = TransactionType::parse(input.transaction_type)?;
    let category = Category::parse(transaction_type, input.category)?;

    let description = input.description.trim();
    if description.len() > MAX_DESCRIPTION_LENGTH {
        return Err(Error::DescriptionTooLong(description.len()));
    }

    let transaction = Transaction::new(
        date,
        category,
        description.to_string(),
        amount,
        input.is_fixed,
    );

    let mut transactions = vec![transaction];
    if input.is_fixed {
        let mut successor = transactions[0].clone();
        successor.id = Uuid::new_v4();
        successor.date = next_month(date)?;
        transactions.push(successor);
    }

    Ok(transactions)
}

/// One calendar month later, with the day clamped to the length of the target
/// month (Jan 31 becomes Feb 28/29).
fn next_month(date: NaiveDate) -> Result<NaiveDate> {
    date.checked_add_months(Months::new(1))
        .ok_or_else(|| Error::InvalidDate(date.to_string()))
}
