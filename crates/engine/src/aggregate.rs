//! Ledger aggregator.
//!
//! Pure functions from an immutable transaction snapshot to the derived
//! views: running totals, per-category expense sums, chart-ready series, and
//! the drilldown for a single category. Nothing here touches the store;
//! consistency comes from the coordinator re-listing after every mutation
//! and the aggregates being recomputed from that fresh snapshot.

use serde::{Deserialize, Serialize};

use crate::{Amount, Kind, Transaction, categories::CATEGORIES};

/// Fixed, cyclic chart palette. Colors are assigned by breakdown rank,
/// wrapping with modulo when a breakdown outgrows the palette.
pub const PALETTE: [&str; 10] = [
    "#6366F1", "#22C55E", "#F59E0B", "#EF4444", "#06B6D4", "#82CA9D", "#FFC658", "#FF7C7C",
    "#8DD1E1", "#D084D0",
];

/// Axis labels longer than this are truncated with an ellipsis.
const LABEL_MAX: usize = 12;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub income: Amount,
    pub expense: Amount,
    pub balance: Amount,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CategorySum {
    pub category: &'static str,
    pub amount: Amount,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChartSlice {
    pub category: &'static str,
    /// Truncated category name for chart axes.
    pub label: String,
    pub amount: Amount,
    pub color: &'static str,
}

/// Drilldown for one category, produced when a chart element is activated.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CategoryDetail {
    pub transactions: Vec<Transaction>,
    pub amount: Amount,
    pub count: usize,
    /// Mean expense in cents, rounded; 0 when the category has no records.
    pub average_cents: i64,
    pub percent_of_expenses: f64,
}

/// Income, expense, and balance over the full snapshot.
///
/// An empty snapshot yields all zeros. `balance` is exactly
/// `income - expense` in integer cents.
pub fn totals(records: &[Transaction]) -> Totals {
    let (income, expense) = records.iter().fold(
        (Amount::ZERO, Amount::ZERO),
        |(income, expense), tx| match tx.kind {
            Kind::Income => (income + tx.amount, expense),
            Kind::Expense => (income, expense + tx.amount),
        },
    );

    Totals {
        income,
        expense,
        balance: income - expense,
    }
}

/// Per-category expense sums, zero-sum categories dropped, sorted descending
/// by amount.
///
/// The walk follows the registry order and the sort is stable, so equal sums
/// keep registry order; the sequence is byte-identical across runs on the
/// same snapshot. Labels outside the registry are ignored.
pub fn category_breakdown(records: &[Transaction]) -> Vec<CategorySum> {
    let mut sums: Vec<CategorySum> = CATEGORIES
        .iter()
        .map(|&category| CategorySum {
            category,
            amount: records
                .iter()
                .filter(|tx| tx.kind == Kind::Expense && tx.category == category)
                .map(|tx| tx.amount)
                .sum(),
        })
        .filter(|sum| !sum.amount.is_zero())
        .collect();

    sums.sort_by(|a, b| b.amount.cmp(&a.amount));
    sums
}

/// Chart series for an already-computed breakdown.
///
/// Color is a function of rank alone, so the same ordered breakdown always
/// gets the same colors.
pub fn chart_series(breakdown: &[CategorySum]) -> Vec<ChartSlice> {
    breakdown
        .iter()
        .enumerate()
        .map(|(rank, sum)| ChartSlice {
            category: sum.category,
            label: truncate_label(sum.category),
            amount: sum.amount,
            color: PALETTE[rank % PALETTE.len()],
        })
        .collect()
}

/// Expense drilldown for one category.
pub fn category_detail(records: &[Transaction], category: &str) -> CategoryDetail {
    let transactions: Vec<Transaction> = records
        .iter()
        .filter(|tx| tx.kind == Kind::Expense && tx.category == category)
        .cloned()
        .collect();

    let amount: Amount = transactions.iter().map(|tx| tx.amount).sum();
    let count = transactions.len();
    let average_cents = if count == 0 {
        0
    } else {
        (amount.cents() as f64 / count as f64).round() as i64
    };

    let total_expense = totals(records).expense;
    let percent_of_expenses = if total_expense.is_zero() {
        0.0
    } else {
        amount.cents() as f64 / total_expense.cents() as f64 * 100.0
    };

    CategoryDetail {
        transactions,
        amount,
        count,
        average_cents,
        percent_of_expenses,
    }
}

fn truncate_label(category: &str) -> String {
    if category.chars().count() > LABEL_MAX {
        let short: String = category.chars().take(LABEL_MAX).collect();
        format!("{short}...")
    } else {
        category.to_string()
    }
}
