//! Portfolio KPIs over a (filtered) set of projects.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::models::{Project, ProjectStatus};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioKpis {
    pub project_count: usize,
    pub total_budget: f64,
    pub total_spent: f64,
    /// Mean progress, rounded to the nearest integer.
    pub average_progress: u8,
    pub total_area: f64,
    /// `total_spent / total_area`; the aggregate ratio, not a mean of ratios.
    pub average_cost_per_sqm: f64,
    /// `total_spent / total_budget`, in percent.
    pub budget_utilization: f64,
    pub status_counts: BTreeMap<String, usize>,
}

/// Aggregates `projects`. An empty set yields all zeros.
pub fn aggregate<'a>(projects: impl IntoIterator<Item = &'a Project>) -> PortfolioKpis {
    let mut kpis = PortfolioKpis::default();
    let mut progress_sum: u64 = 0;

    for project in projects {
        kpis.project_count += 1;
        kpis.total_budget += project.budget_total;
        kpis.total_spent += project.budget_spent;
        kpis.total_area += project.area;
        progress_sum += u64::from(project.progress);
        *kpis
            .status_counts
            .entry(project.status.to_string())
            .or_insert(0) += 1;
    }

    if kpis.project_count == 0 {
        return kpis;
    }

    kpis.average_progress = (progress_sum as f64 / kpis.project_count as f64).round() as u8;
    kpis.average_cost_per_sqm = ratio(kpis.total_spent, kpis.total_area);
    kpis.budget_utilization = ratio(kpis.total_spent, kpis.total_budget) * 100.0;
    kpis
}

/// Single-project figures shown on the overview.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectKpis {
    pub budget_total: f64,
    pub budget_spent: f64,
    pub remaining_budget: f64,
    pub budget_utilization: f64,
    pub progress: u8,
    pub cost_per_sqm: f64,
    pub status: ProjectStatus,
    pub bdi: f64,
}

impl From<&Project> for ProjectKpis {
    fn from(project: &Project) -> Self {
        Self {
            budget_total: project.budget_total,
            budget_spent: project.budget_spent,
            remaining_budget: project.remaining_budget(),
            budget_utilization: project.budget_utilization(),
            progress: project.progress,
            cost_per_sqm: project.cost_per_sqm(),
            status: project.status,
            bdi: project.bdi,
        }
    }
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}
