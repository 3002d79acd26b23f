use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use time::Date;

use super::{iso_date, ExpenseId, ProjectId, SupplierId};
use crate::domain::validation::{self, ValidationError};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum ExpenseCategory {
    Labor,
    Material,
    Equipment,
    Permits,
    Other,
    Indirect,
}

impl ExpenseCategory {
    /// Indirect costs are covered by the BDI margin; everything else is a direct cost.
    pub fn is_direct(&self) -> bool {
        !matches!(self, ExpenseCategory::Indirect)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: ExpenseId,
    pub description: String,
    pub category: ExpenseCategory,
    pub amount: f64,
    #[serde(with = "iso_date")]
    pub date: Date,
    pub project_id: ProjectId,
    pub status: PaymentStatus,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub supplier_id: Option<SupplierId>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub description: Option<String>,
    pub category: ExpenseCategory,
    pub amount: f64,
    #[serde(default, with = "iso_date::option")]
    pub date: Option<Date>,
    pub project_id: ProjectId,
    #[serde(default = "default_payment_status")]
    pub status: PaymentStatus,
    #[serde(default)]
    pub supplier_id: Option<SupplierId>,
}

fn default_payment_status() -> PaymentStatus {
    PaymentStatus::Pending
}

impl NewExpense {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::non_negative("amount", self.amount)
    }

    pub fn into_expense(self, id: ExpenseId, today: Date) -> Expense {
        Expense {
            id,
            description: validation::or_default(self.description, "Sem descrição"),
            category: self.category,
            amount: self.amount,
            date: self.date.unwrap_or(today),
            project_id: self.project_id,
            status: self.status,
            supplier_id: self
                .supplier_id
                .filter(|supplier| !supplier.as_str().trim().is_empty()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseUpdate {
    pub status: PaymentStatus,
}

/// Expense list filter; every criterion is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseFilter {
    pub project_id: Option<ProjectId>,
    pub category: Option<ExpenseCategory>,
    /// Case-insensitive substring of the description.
    pub search: Option<String>,
}

impl ExpenseFilter {
    pub fn matches(&self, expense: &Expense) -> bool {
        if let Some(project_id) = &self.project_id {
            if &expense.project_id != project_id {
                return false;
            }
        }
        if let Some(category) = self.category {
            if expense.category != category {
                return false;
            }
        }
        match self.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => expense
                .description
                .to_lowercase()
                .contains(&term.to_lowercase()),
            _ => true,
        }
    }
}
