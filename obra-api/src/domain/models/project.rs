use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use time::Date;

use super::{iso_date, ProjectId, StageId};
use crate::domain::validation::{self, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ProjectStatus {
    Planning,
    Active,
    Completed,
    Paused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum StageStatus {
    Completed,
    InProgress,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stage {
    pub id: StageId,
    pub name: String,
    pub status: StageStatus,
    pub progress: u8,
}

impl Stage {
    pub fn new(id: impl Into<StageId>, name: impl Into<String>, status: StageStatus, progress: u8) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status,
            progress,
        }
    }
}

/// A construction project.
///
/// `budget_spent <= budget_total` is expected but not enforced, and stage
/// progress is independent of the project's own progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub client: String,
    pub status: ProjectStatus,
    pub progress: u8,
    pub budget_total: f64,
    pub budget_spent: f64,
    #[serde(with = "iso_date")]
    pub start_date: Date,
    #[serde(with = "iso_date::option")]
    pub end_date: Option<Date>,
    pub address: String,
    /// Built area in m².
    pub area: f64,
    /// Overhead and profit margin, in percent.
    pub bdi: f64,
    pub stages: Vec<Stage>,
}

impl Project {
    /// Spent budget per m², zero for projects without an area.
    pub fn cost_per_sqm(&self) -> f64 {
        if self.area > 0.0 {
            self.budget_spent / self.area
        } else {
            0.0
        }
    }

    pub fn remaining_budget(&self) -> f64 {
        self.budget_total - self.budget_spent
    }

    /// Spent share of the planned budget, in percent.
    pub fn budget_utilization(&self) -> f64 {
        if self.budget_total > 0.0 {
            self.budget_spent / self.budget_total * 100.0
        } else {
            0.0
        }
    }

    pub fn stage_mut(&mut self, stage_id: &StageId) -> Option<&mut Stage> {
        self.stages.iter_mut().find(|stage| &stage.id == stage_id)
    }
}

/// Data submitted when registering a new project.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub name: Option<String>,
    pub client: Option<String>,
    pub address: Option<String>,
    #[serde(default)]
    pub budget_total: f64,
    #[serde(default)]
    pub area: f64,
    #[serde(default)]
    pub bdi: f64,
    #[serde(default, with = "iso_date::option")]
    pub start_date: Option<Date>,
    #[serde(default, with = "iso_date::option")]
    pub end_date: Option<Date>,
}

impl NewProject {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::non_negative("budgetTotal", self.budget_total)?;
        validation::non_negative("area", self.area)?;
        validation::percentage("bdi", self.bdi)?;
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if end < start {
                return Err(ValidationError::new("endDate", "must not be before startDate"));
            }
        }
        Ok(())
    }

    /// Builds the project in `planning` state with the default stage plan.
    pub fn into_project(self, id: ProjectId, today: Date) -> Project {
        Project {
            id,
            name: validation::or_default(self.name, "Nova Obra"),
            client: validation::or_default(self.client, "Cliente não informado"),
            status: ProjectStatus::Planning,
            progress: 0,
            budget_total: self.budget_total,
            budget_spent: 0.0,
            start_date: self.start_date.unwrap_or(today),
            end_date: self.end_date,
            address: self.address.unwrap_or_default().trim().to_string(),
            area: self.area,
            bdi: self.bdi,
            stages: default_stages(),
        }
    }
}

fn default_stages() -> Vec<Stage> {
    vec![
        Stage::new("s1", "Planejamento", StageStatus::InProgress, 50),
        Stage::new("s2", "Mobilização", StageStatus::Pending, 0),
        Stage::new("s3", "Execução", StageStatus::Pending, 0),
    ]
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUpdate {
    pub status: Option<ProjectStatus>,
    pub progress: Option<u8>,
    pub budget_spent: Option<f64>,
}

impl ProjectUpdate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(progress) = self.progress {
            validation::progress("progress", progress)?;
        }
        if let Some(spent) = self.budget_spent {
            validation::non_negative("budgetSpent", spent)?;
        }
        Ok(())
    }

    pub fn apply(self, project: &mut Project) {
        if let Some(status) = self.status {
            project.status = status;
        }
        if let Some(progress) = self.progress {
            project.progress = progress;
        }
        if let Some(spent) = self.budget_spent {
            project.budget_spent = spent;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageUpdate {
    pub status: Option<StageStatus>,
    pub progress: Option<u8>,
}

impl StageUpdate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(progress) = self.progress {
            validation::progress("progress", progress)?;
        }
        Ok(())
    }

    pub fn apply(self, stage: &mut Stage) {
        if let Some(status) = self.status {
            stage.status = status;
        }
        if let Some(progress) = self.progress {
            stage.progress = progress;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use time::macros::date;

    #[test]
    fn new_project_gets_defaults_and_stage_plan() {
        let project = NewProject {
            budget_total: 100_000.0,
            area: 80.0,
            ..Default::default()
        }
        .into_project(ProjectId::new("p"), date!(2024 - 03 - 01));

        assert_eq!(project.name, "Nova Obra");
        assert_eq!(project.client, "Cliente não informado");
        assert_eq!(project.status, ProjectStatus::Planning);
        assert_eq!(project.progress, 0);
        assert_eq!(project.budget_spent, 0.0);
        assert_eq!(project.start_date, date!(2024 - 03 - 01));
        assert_eq!(project.stages.len(), 3);
        assert_eq!(project.stages[0].status, StageStatus::InProgress);
        assert_eq!(project.stages[0].progress, 50);
    }

    #[test]
    fn new_project_rejects_inverted_dates() {
        let new = NewProject {
            start_date: Some(date!(2024 - 05 - 01)),
            end_date: Some(date!(2024 - 04 - 01)),
            ..Default::default()
        };
        assert_eq!(new.validate().unwrap_err().field, "endDate");
    }

    #[test]
    fn cost_per_sqm_guards_zero_area() {
        let mut project = NewProject::default().into_project(ProjectId::new("p"), date!(2024 - 01 - 01));
        project.budget_spent = 1000.0;
        assert_eq!(project.cost_per_sqm(), 0.0);

        project.area = 50.0;
        assert_eq!(project.cost_per_sqm(), 20.0);
    }

    #[test]
    fn status_wire_format_matches_dashboard() {
        assert_eq!(serde_json::to_string(&ProjectStatus::Active).unwrap(), "\"active\"");
        assert_eq!(serde_json::to_string(&StageStatus::InProgress).unwrap(), "\"in-progress\"");
        assert_eq!(ProjectStatus::from_str("Paused").unwrap(), ProjectStatus::Paused);
    }

    #[test]
    fn dates_serialize_as_iso_strings() {
        let project = NewProject {
            start_date: Some(date!(2023 - 08 - 01)),
            ..Default::default()
        }
        .into_project(ProjectId::new("1"), date!(2024 - 01 - 01));

        let value = serde_json::to_value(&project).unwrap();
        assert_eq!(value["startDate"], "2023-08-01");
        assert!(value["endDate"].is_null());
        assert_eq!(value["budgetTotal"], 0.0);
    }

    #[test]
    fn update_applies_only_present_fields() {
        let mut project = NewProject::default().into_project(ProjectId::new("1"), date!(2024 - 01 - 01));
        ProjectUpdate {
            progress: Some(40),
            ..Default::default()
        }
        .apply(&mut project);

        assert_eq!(project.progress, 40);
        assert_eq!(project.status, ProjectStatus::Planning);
    }
}
