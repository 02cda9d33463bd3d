use std::fmt;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn parse(input: &str) -> Result<Self> {
        match input.trim().to_lowercase().as_str() {
            "income" | "einnahme" => Ok(TransactionType::Income),
            "expense" | "ausgabe" => Ok(TransactionType::Expense),
            _ => Err(Error::InvalidTransactionType(input.trim().to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncomeCategory {
    Gehalt,
    Geschenke,
}

impl IncomeCategory {
    pub const ALL: [IncomeCategory; 2] = [IncomeCategory::Gehalt, IncomeCategory::Geschenke];

    pub fn as_str(self) -> &'static str {
        match self {
            IncomeCategory::Gehalt => "Gehalt",
            IncomeCategory::Geschenke => "Geschenke",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Miete,
    #[serde(rename = "Strom / Gas")]
    StromGas,
    #[serde(rename = "Internet - Handy")]
    InternetHandy,
    Versicherungen,
    #[serde(rename = "Mobilität - Auto")]
    MobilitaetAuto,
    Lebensmittel,
    #[serde(rename = "Drogerie & Beauty")]
    DrogerieBeauty,
    Shopping,
    Freizeit,
    Gastronomie,
    Sonstiges,
    Sparen,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 12] = [
        ExpenseCategory::Miete,
        ExpenseCategory::StromGas,
        ExpenseCategory::InternetHandy,
        ExpenseCategory::Versicherungen,
        ExpenseCategory::MobilitaetAuto,
        ExpenseCategory::Lebensmittel,
        ExpenseCategory::DrogerieBeauty,
        ExpenseCategory::Shopping,
        ExpenseCategory::Freizeit,
        ExpenseCategory::Gastronomie,
        ExpenseCategory::Sonstiges,
        ExpenseCategory::Sparen,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ExpenseCategory::Miete => "Miete",
            ExpenseCategory::StromGas => "Strom / Gas",
            ExpenseCategory::InternetHandy => "Internet - Handy",
            ExpenseCategory::Versicherungen => "Versicherungen",
            ExpenseCategory::MobilitaetAuto => "Mobilität - Auto",
            ExpenseCategory::Lebensmittel => "Lebensmittel",
            ExpenseCategory::DrogerieBeauty => "Drogerie & Beauty",
            ExpenseCategory::Shopping => "Shopping",
            ExpenseCategory::Freizeit => "Freizeit",
            ExpenseCategory::Gastronomie => "Gastronomie",
            ExpenseCategory::Sonstiges => "Sonstiges",
            ExpenseCategory::Sparen => "Sparen",
        }
    }
}

/// A category tagged with its transaction type. Income and expense categories
/// are disjoint closed sets, so a transaction can never carry a category that
/// does not belong to its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "category", rename_all = "lowercase")]
pub enum Category {
    Income(IncomeCategory),
    Expense(ExpenseCategory),
}

impl Category {
    pub fn transaction_type(self) -> TransactionType {
        match self {
            Category::Income(_) => TransactionType::Income,
            Category::Expense(_) => TransactionType::Expense,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Income(category) => category.as_str(),
            Category::Expense(category) => category.as_str(),
        }
    }

    /// The Sparen category is excluded from "real" spending but still counts
    /// towards raw expenses and therefore the balance.
    pub fn is_savings(self) -> bool {
        matches!(self, Category::Expense(ExpenseCategory::Sparen))
    }

    /// Looks up a category by its display name within the set matching the
    /// given transaction type. The match ignores ASCII case.
    pub fn parse(transaction_type: TransactionType, name: &str) -> Result<Self> {
        let name = name.trim();
        let category = match transaction_type {
            TransactionType::Income => IncomeCategory::ALL
                .iter()
                .find(|category| category.as_str().eq_ignore_ascii_case(name))
                .map(|&category| Category::Income(category)),
            TransactionType::Expense => ExpenseCategory::ALL
                .iter()
                .find(|category| category.as_str().eq_ignore_ascii_case(name))
                .map(|&category| Category::Expense(category)),
        };

        category.ok_or_else(|| Error::UnknownCategory {
            transaction_type,
            name: name.to_string(),
        })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub date: NaiveDate,
    #[serde(flatten)]
    pub category: Category,
    #[serde(default)]
    pub description: String,
    pub amount: Decimal,
    #[serde(default)]
    pub is_fixed: bool,
}

impl Transaction {
    pub fn new(
        date: NaiveDate,
        category: Category,
        description: String,
        amount: Decimal,
        is_fixed: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            category,
            description,
            amount,
            is_fixed,
        }
    }

    pub fn transaction_type(&self) -> TransactionType {
        self.category.transaction_type()
    }

    /// Calendar month of the transaction, recomputed from `date` rather than
    /// stored redundantly.
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }
}
