//! Direct/indirect cost split and BDI pricing for a project's expenses.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::models::{Expense, ExpenseCategory, PaymentStatus};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetBreakdown {
    pub direct_costs: f64,
    pub indirect_costs: f64,
    pub paid: f64,
    pub pending: f64,
    pub by_category: BTreeMap<ExpenseCategory, f64>,
    pub bdi: f64,
    /// Direct costs with the BDI margin applied.
    pub price_with_bdi: f64,
}

pub fn breakdown<'a>(expenses: impl IntoIterator<Item = &'a Expense>, bdi: f64) -> BudgetBreakdown {
    let mut direct_costs = 0.0;
    let mut indirect_costs = 0.0;
    let mut paid = 0.0;
    let mut pending = 0.0;
    let mut by_category = BTreeMap::new();

    for expense in expenses {
        if expense.category.is_direct() {
            direct_costs += expense.amount;
        } else {
            indirect_costs += expense.amount;
        }
        match expense.status {
            PaymentStatus::Paid => paid += expense.amount,
            PaymentStatus::Pending => pending += expense.amount,
        }
        *by_category.entry(expense.category).or_insert(0.0) += expense.amount;
    }

    BudgetBreakdown {
        direct_costs,
        indirect_costs,
        paid,
        pending,
        by_category,
        bdi,
        price_with_bdi: direct_costs * (1.0 + bdi / 100.0),
    }
}

/// Sum of `amount` over the given expenses.
pub fn total<'a>(expenses: impl IntoIterator<Item = &'a Expense>) -> f64 {
    expenses.into_iter().map(|expense| expense.amount).sum()
}
