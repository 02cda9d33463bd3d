use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::models::period::Period;
use crate::models::transaction::{
    Category, ExpenseCategory, IncomeCategory, Transaction, TransactionType,
};

/// Totals over one (month, year) period.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MonthlySummary {
    pub income: Decimal,
    pub expenses: Decimal,
    /// Total of the Sparen category; a subset of `expenses` by construction
    /// of the category sets.
    pub savings: Decimal,
    /// `expenses - savings`: what was actually spent.
    pub real_expenses: Decimal,
    /// `income - expenses`. Savings still reduce the balance even though they
    /// are excluded from `real_expenses`; this mirrors the product's
    /// accounting choice and must not be "fixed".
    pub balance: Decimal,
}

/// One category's share of its set's period total.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: Category,
    pub amount: Decimal,
    /// `amount / set total × 100`; 0.0 when the set total is zero.
    pub percentage: f64,
}

/// One slice of the period chart, spanning both category sets.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSlice {
    pub label: &'static str,
    pub value: Decimal,
    pub transaction_type: TransactionType,
    /// Index of the category within its set. The renderer maps this onto its
    /// palette with a modulo, which keeps colors stable across periods.
    pub color_index: usize,
}

/// Selects the period's transactions and sorts them by date descending.
/// The sort is stable, so same-day entries keep their insertion order.
pub fn filter_by_period(transactions: &[Transaction], period: Period) -> Vec<&Transaction> {
    let mut filtered: Vec<&Transaction> = transactions
        .iter()
        .filter(|transaction| period.contains(transaction.date))
        .collect();
    filtered.sort_by(|a, b| b.date.cmp(&a.date));
    filtered
}

pub fn summarize(filtered: &[&Transaction]) -> MonthlySummary {
    let mut income = Decimal::ZERO;
    let mut expenses = Decimal::ZERO;
    let mut savings = Decimal::ZERO;

    for transaction in filtered {
        match transaction.transaction_type() {
            TransactionType::Income => income += transaction.amount,
            TransactionType::Expense => expenses += transaction.amount,
        }
        if transaction.category.is_savings() {
            savings += transaction.amount;
        }
    }

    MonthlySummary {
        income,
        expenses,
        savings,
        real_expenses: expenses - savings,
        balance: income - expenses,
    }
}

/// Per-category breakdown over the income set. Only categories with a
/// strictly positive total are reported, in the fixed set order.
pub fn income_breakdown(filtered: &[&Transaction]) -> Vec<CategoryShare> {
    breakdown(filtered, IncomeCategory::ALL.map(Category::Income))
}

/// Per-category breakdown over the expense set.
pub fn expense_breakdown(filtered: &[&Transaction]) -> Vec<CategoryShare> {
    breakdown(filtered, ExpenseCategory::ALL.map(Category::Expense))
}

/// Chart series across both sets: income categories first, then expense
/// categories, each slice carrying its index within its own set. An empty
/// series means there is nothing to chart for the period.
pub fn chart_series(filtered: &[&Transaction]) -> Vec<ChartSlice> {
    let mut slices = Vec::new();

    for (index, category) in IncomeCategory::ALL.into_iter().enumerate() {
        let value = category_total(filtered, Category::Income(category));
        if value > Decimal::ZERO {
            slices.push(ChartSlice {
                label: category.as_str(),
                value,
                transaction_type: TransactionType::Income,
                color_index: index,
            });
        }
    }

    for (index, category) in ExpenseCategory::ALL.into_iter().enumerate() {
        let value = category_total(filtered, Category::Expense(category));
        if value > Decimal::ZERO {
            slices.push(ChartSlice {
                label: category.as_str(),
                value,
                transaction_type: TransactionType::Expense,
                color_index: index,
            });
        }
    }

    slices
}

fn breakdown<I>(filtered: &[&Transaction], categories: I) -> Vec<CategoryShare>
where
    I: IntoIterator<Item = Category>,
{
    let totals: Vec<(Category, Decimal)> = categories
        .into_iter()
        .map(|category| (category, category_total(filtered, category)))
        .collect();
    let set_total: Decimal = totals.iter().map(|(_, amount)| *amount).sum();

    totals
        .into_iter()
        .filter(|(_, amount)| *amount > Decimal::ZERO)
        .map(|(category, amount)| CategoryShare {
            category,
            amount,
            percentage: percentage(amount, set_total),
        })
        .collect()
}

fn category_total(filtered: &[&Transaction], category: Category) -> Decimal {
    filtered
        .iter()
        .filter(|transaction| transaction.category == category)
        .map(|transaction| transaction.amount)
        .sum()
}

fn percentage(amount: Decimal, total: Decimal) -> f64 {
    if total <= Decimal::ZERO {
        return 0.0;
    }
    (amount / total).to_f64().unwrap_or(0.0) * 100.0
}
