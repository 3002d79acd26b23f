//! HTTP response types for the dashboard endpoints.
//!
//! These types serialize to the JSON format expected by the frontend.

use serde::Serialize;

use crate::domain::{
    analysis::{
        abc::{self, AbcClass, AbcEntry, AbcSummary},
        budget::BudgetBreakdown,
        kpi::{PortfolioKpis, ProjectKpis},
    },
    models::{
        CostCurvePoint, DailyLog, Expense, ExpenseCategory, ExpenseId, Material, Project,
        ProjectId, ReportState,
    },
};

/// Number of expenses shown in the overview's ABC highlight.
const OVERVIEW_TOP_EXPENSES: usize = 5;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub kpis: PortfolioKpis,
    pub projects: Vec<Project>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseListResponse {
    pub expenses: Vec<Expense>,
    /// Sum of the listed (filtered) expenses.
    pub total: f64,
}

/// One expense as ranked by the ABC analysis.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AbcEntryResponse {
    pub id: ExpenseId,
    pub description: String,
    pub category: ExpenseCategory,
    pub project_id: ProjectId,
    pub amount: f64,
    pub class: AbcClass,
    pub cumulative_percentage: f64,
}

impl From<AbcEntry<Expense>> for AbcEntryResponse {
    fn from(entry: AbcEntry<Expense>) -> Self {
        Self {
            id: entry.item.id,
            description: entry.item.description,
            category: entry.item.category,
            project_id: entry.item.project_id,
            amount: entry.amount,
            class: entry.class,
            cumulative_percentage: entry.cumulative_percentage,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AbcAnalysisResponse {
    pub summary: AbcSummary,
    pub entries: Vec<AbcEntryResponse>,
}

impl AbcAnalysisResponse {
    pub fn from_expenses(expenses: Vec<Expense>) -> Self {
        let entries = abc::classify(expenses, |expense| expense.amount);
        Self {
            summary: AbcSummary::from_entries(&entries),
            entries: entries.into_iter().map(AbcEntryResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetBreakdownResponse {
    pub project_id: ProjectId,
    pub budget_total: f64,
    pub budget_spent: f64,
    #[serde(flatten)]
    pub breakdown: BudgetBreakdown,
}

/// A material with its stock status.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialResponse {
    #[serde(flatten)]
    pub material: Material,
    pub remaining: f64,
    pub usage_percentage: f64,
    pub low_stock: bool,
    pub critical: bool,
    pub total_cost: f64,
    pub waste_cost: f64,
}

impl From<Material> for MaterialResponse {
    fn from(material: Material) -> Self {
        Self {
            remaining: material.remaining(),
            usage_percentage: material.usage_percentage(),
            low_stock: material.is_low_stock(),
            critical: material.is_critical(),
            total_cost: material.total_cost(),
            waste_cost: material.waste_cost(),
            material,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectOverviewResponse {
    pub project: Project,
    pub kpis: ProjectKpis,
    pub top_expenses: Vec<AbcEntryResponse>,
    pub low_stock: Vec<MaterialResponse>,
    pub latest_log: Option<DailyLog>,
    pub cost_curve: Vec<CostCurvePoint>,
}

impl ProjectOverviewResponse {
    /// `daily_logs` must already be sorted newest first.
    pub fn new(
        project: Project,
        expenses: Vec<Expense>,
        materials: Vec<Material>,
        daily_logs: Vec<DailyLog>,
        cost_curve: Vec<CostCurvePoint>,
    ) -> Self {
        let entries = abc::classify(expenses, |expense| expense.amount);
        Self {
            kpis: ProjectKpis::from(&project),
            project,
            top_expenses: abc::top(&entries, OVERVIEW_TOP_EXPENSES)
                .into_iter()
                .map(AbcEntryResponse::from)
                .collect(),
            low_stock: materials
                .into_iter()
                .filter(Material::is_low_stock)
                .map(MaterialResponse::from)
                .collect(),
            latest_log: daily_logs.into_iter().next(),
            cost_curve,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportStatusResponse {
    pub project_id: ProjectId,
    #[serde(flatten)]
    pub state: ReportState,
}
