mod error;
mod models;
mod operations;
mod store;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

use crate::error::Result;
use crate::models::period::Period;
use crate::models::transaction::{Transaction, TransactionType};
use crate::operations::add::{TransactionInput, create_transactions};
use crate::operations::summary::{
    expense_breakdown, filter_by_period, income_breakdown, summarize,
};
use crate::store::{JsonFileStore, TransactionStore};

#[derive(Parser)]
#[command(name = "finanz", about = "Local personal finance tracker", version)]
struct Cli {
    /// Path of the JSON storage slot
    #[arg(long, global = true, default_value = "finanz_transactions.json")]
    file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Record a transaction; a fixed one also records next month's clone
    Add {
        /// Transaction date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// income/expense (einnahme/ausgabe also accepted)
        #[arg(long = "type")]
        transaction_type: String,
        /// Category name, e.g. Gehalt, Miete, Sparen
        #[arg(long)]
        category: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Non-negative decimal amount
        #[arg(long)]
        amount: String,
        /// Recurring entry: also records a clone dated one month later
        #[arg(long)]
        fixed: bool,
    },
    /// Delete a transaction by its id
    Remove { id: String },
    /// Print the transactions of one period, newest first
    List {
        #[arg(long)]
        month: Option<u32>,
        #[arg(long)]
        year: Option<i32>,
    },
    /// Print totals and category breakdowns for one period
    Summary {
        #[arg(long)]
        month: Option<u32>,
        #[arg(long)]
        year: Option<i32>,
    },
    /// Interactive month dashboard
    View {
        #[arg(long)]
        month: Option<u32>,
        #[arg(long)]
        year: Option<i32>,
    },
    /// Import transactions from a CSV file (date,description,amount,type,category)
    Import { path: PathBuf },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut store = JsonFileStore::open(&cli.file);

    match cli.command {
        Command::Add {
            date,
            transaction_type,
            category,
            description,
            amount,
            fixed,
        } => {
            let input = TransactionInput {
                date: &date,
                transaction_type: &transaction_type,
                category: &category,
                description: &description,
                amount: &amount,
                is_fixed: fixed,
            };
            let transactions = create_transactions(&input)?;
            let count = transactions.len();
            for transaction in transactions {
                store.add(transaction)?;
            }
            if count == 2 {
                println!("Transaction added, plus next month's fixed clone.");
            } else {
                println!("Transaction added.");
            }
        }
        Command::Remove { id } => {
            if operations::remove::remove_transaction(&mut store, &id)? {
                println!("Transaction removed.");
            } else {
                println!("No transaction with ID {} found.", id.trim());
            }
        }
        Command::List { month, year } => {
            let period = resolve_period(month, year)?;
            let filtered = filter_by_period(store.list(), period);
            if filtered.is_empty() {
                println!("No entries for {}.", period);
            }
            for transaction in &filtered {
                print_transaction(transaction);
            }
        }
        Command::Summary { month, year } => {
            let period = resolve_period(month, year)?;
            print_summary(store.list(), period);
        }
        Command::View { month, year } => {
            let period = resolve_period(month, year)?;
            operations::browse::run_dashboard(store.list(), period)?;
        }
        Command::Import { path } => {
            let count = operations::import::import_csv(&mut store, &path)?;
            println!("Successfully imported {} transactions.", count);
        }
    }

    Ok(())
}

fn resolve_period(month: Option<u32>, year: Option<i32>) -> Result<Period> {
    let current = Period::current();
    Period::new(
        month.unwrap_or_else(|| current.month()),
        year.unwrap_or_else(|| current.year()),
    )
}

fn print_transaction(transaction: &Transaction) {
    let sign = match transaction.transaction_type() {
        TransactionType::Income => "+",
        TransactionType::Expense => "-",
    };
    println!(
        "{}  {}  {:>10}  {:<17}  {}{}",
        transaction.id,
        transaction.date,
        format!("{}{}", sign, transaction.amount.round_dp(2)),
        transaction.category,
        transaction.description,
        if transaction.is_fixed { "  [fix]" } else { "" },
    );
}

fn print_summary(transactions: &[Transaction], period: Period) {
    let filtered = filter_by_period(transactions, period);
    let totals = summarize(&filtered);

    let balance_sign = if totals.balance >= Decimal::ZERO { "+" } else { "" };
    println!("Summary for {}", period);
    println!("  Income:   +{}", totals.income.round_dp(2));
    println!("  Spent:    -{}", totals.real_expenses.round_dp(2));
    println!("  Savings:   {}", totals.savings.round_dp(2));
    println!(
        "  Balance:  {}{}",
        balance_sign,
        totals.balance.round_dp(2)
    );

    for (title, shares) in [
        ("Income by category", income_breakdown(&filtered)),
        ("Expenses by category", expense_breakdown(&filtered)),
    ] {
        if shares.is_empty() {
            continue;
        }
        println!("\n{}:", title);
        for share in shares {
            println!(
                "  {:<17} {:>10}  {:>5.1}%",
                share.category.as_str(),
                share.amount.round_dp(2),
                share.percentage
            );
        }
    }
}
