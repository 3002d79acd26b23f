use serde::{Deserialize, Serialize};
use strum::Display;

use super::{EquipmentId, ProjectId, WorkerId};
use crate::domain::validation::{self, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum WorkerType {
    Employee,
    Contractor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum WorkerStatus {
    Active,
    OnLeave,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Worker {
    pub id: WorkerId,
    pub name: String,
    pub role: String,
    /// Cost per period (hour or day, depending on the contract).
    pub rate: f64,
    #[serde(rename = "type")]
    pub worker_type: WorkerType,
    pub status: WorkerStatus,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorker {
    pub name: Option<String>,
    pub role: Option<String>,
    #[serde(default)]
    pub rate: f64,
    #[serde(rename = "type", default = "default_worker_type")]
    pub worker_type: WorkerType,
    #[serde(default = "default_worker_status")]
    pub status: WorkerStatus,
}

fn default_worker_type() -> WorkerType {
    WorkerType::Employee
}

fn default_worker_status() -> WorkerStatus {
    WorkerStatus::Active
}

impl NewWorker {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::non_negative("rate", self.rate)
    }

    pub fn into_worker(self, id: WorkerId) -> Worker {
        Worker {
            id,
            name: validation::or_default(self.name, "Novo Colaborador"),
            role: validation::or_default(self.role, "Geral"),
            rate: self.rate,
            worker_type: self.worker_type,
            status: self.status,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerUpdate {
    pub status: Option<WorkerStatus>,
    pub rate: Option<f64>,
}

impl WorkerUpdate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(rate) = self.rate {
            validation::non_negative("rate", rate)?;
        }
        Ok(())
    }

    pub fn apply(self, worker: &mut Worker) {
        if let Some(status) = self.status {
            worker.status = status;
        }
        if let Some(rate) = self.rate {
            worker.rate = rate;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum EquipmentStatus {
    InUse,
    Available,
    Maintenance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: EquipmentId,
    pub name: String,
    pub status: EquipmentStatus,
    pub cost_per_day: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub assigned_to: Option<ProjectId>,
}

/// Equipment in use must be assigned to a project; anything else is unassigned.
/// `requested` is the assignment sent with the request, `current` the one
/// the equipment keeps when none is sent.
fn check_assignment(
    status: EquipmentStatus,
    requested: Option<&ProjectId>,
    current: Option<&ProjectId>,
) -> Result<(), ValidationError> {
    match status {
        EquipmentStatus::InUse if requested.or(current).is_none() => Err(ValidationError::new(
            "assignedTo",
            "equipment in use must be assigned to a project",
        )),
        EquipmentStatus::Available | EquipmentStatus::Maintenance if requested.is_some() => {
            Err(ValidationError::new(
                "assignedTo",
                format!("equipment that is {status} cannot be assigned to a project"),
            ))
        }
        _ => Ok(()),
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEquipment {
    pub name: Option<String>,
    #[serde(default)]
    pub cost_per_day: f64,
    #[serde(default = "default_equipment_status")]
    pub status: EquipmentStatus,
    #[serde(default)]
    pub assigned_to: Option<ProjectId>,
}

fn default_equipment_status() -> EquipmentStatus {
    EquipmentStatus::Available
}

impl NewEquipment {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::non_negative("costPerDay", self.cost_per_day)?;
        check_assignment(self.status, self.assigned_to.as_ref(), None)
    }

    pub fn into_equipment(self, id: EquipmentId) -> Equipment {
        let assigned_to = match self.status {
            EquipmentStatus::InUse => self.assigned_to,
            _ => None,
        };
        Equipment {
            id,
            name: validation::or_default(self.name, "Novo Equipamento"),
            status: self.status,
            cost_per_day: self.cost_per_day,
            assigned_to,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentUpdate {
    pub status: Option<EquipmentStatus>,
    pub assigned_to: Option<ProjectId>,
    pub cost_per_day: Option<f64>,
}

impl EquipmentUpdate {
    /// Validates the update against the equipment's current state.
    pub fn validate_for(&self, equipment: &Equipment) -> Result<(), ValidationError> {
        if let Some(cost) = self.cost_per_day {
            validation::non_negative("costPerDay", cost)?;
        }
        let status = self.status.unwrap_or(equipment.status);
        check_assignment(
            status,
            self.assigned_to.as_ref(),
            equipment.assigned_to.as_ref(),
        )
    }

    pub fn apply(self, equipment: &mut Equipment) {
        if let Some(status) = self.status {
            equipment.status = status;
        }
        if let Some(cost) = self.cost_per_day {
            equipment.cost_per_day = cost;
        }
        if let Some(project_id) = self.assigned_to {
            equipment.assigned_to = Some(project_id);
        }
        if equipment.status != EquipmentStatus::InUse {
            equipment.assigned_to = None;
        }
    }
}
