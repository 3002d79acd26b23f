use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use time::{Date, OffsetDateTime};
use tracing::debug;

use crate::domain::{
    models::{
        CostCurvePoint, DailyLog, DailyLogId, Equipment, EquipmentId, EquipmentStatus,
        EquipmentUpdate, Expense, ExpenseFilter, ExpenseId, ExpenseUpdate, Material,
        MaterialConsumption, MaterialId, NewDailyLog, NewEquipment, NewExpense, NewMaterial,
        NewProject, NewWorker, Project, ProjectId, ProjectSnapshot, ProjectStatus, ProjectUpdate,
        StageId, StageUpdate, Supplier, SupplierId, Worker, WorkerId, WorkerUpdate,
    },
    ports::outbound::ProjectSnapshotProvider,
    validation::ValidationError,
    StoreError,
};

/// Every collection the dashboard works with.
#[derive(Debug, Clone, Default)]
pub struct SiteData {
    pub projects: Vec<Project>,
    /// Newest first.
    pub expenses: Vec<Expense>,
    pub materials: Vec<Material>,
    pub workers: Vec<Worker>,
    pub equipment: Vec<Equipment>,
    pub daily_logs: Vec<DailyLog>,
    pub suppliers: Vec<Supplier>,
    pub cost_curves: HashMap<ProjectId, Vec<CostCurvePoint>>,
}

impl SiteData {
    fn project(&self, id: &ProjectId) -> Result<&Project, StoreError> {
        self.projects
            .iter()
            .find(|project| &project.id == id)
            .ok_or_else(|| StoreError::not_found("project", id))
    }

    fn require_project(&self, field: &'static str, id: &ProjectId) -> Result<(), ValidationError> {
        if self.projects.iter().any(|project| &project.id == id) {
            Ok(())
        } else {
            Err(ValidationError::new(field, format!("unknown project {id}")))
        }
    }

    fn require_supplier(
        &self,
        field: &'static str,
        id: Option<&SupplierId>,
    ) -> Result<(), ValidationError> {
        match id {
            Some(id) if !self.suppliers.iter().any(|supplier| &supplier.id == id) => Err(
                ValidationError::new(field, format!("unknown supplier {id}")),
            ),
            _ => Ok(()),
        }
    }
}

/// In-memory store for all site records.
///
/// Each mutation validates and applies its change under a single write lock,
/// so a rejected request never leaves a partial record behind.
#[derive(Debug, Default)]
pub struct SiteStore {
    data: RwLock<SiteData>,
}

impl SiteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(data: SiteData) -> Self {
        Self {
            data: RwLock::new(data),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, SiteData> {
        self.data.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, SiteData> {
        self.data.write().unwrap_or_else(PoisonError::into_inner)
    }

    // Projects

    pub fn list_projects(&self, status: Option<ProjectStatus>) -> Vec<Project> {
        self.read()
            .projects
            .iter()
            .filter(|project| status.map_or(true, |status| project.status == status))
            .cloned()
            .collect()
    }

    pub fn get_project(&self, id: &ProjectId) -> Result<Project, StoreError> {
        self.read().project(id).cloned()
    }

    pub fn create_project(&self, new: NewProject) -> Result<Project, StoreError> {
        new.validate()?;
        let project = new.into_project(ProjectId::generate(), today());
        self.write().projects.push(project.clone());
        debug!(project_id = %project.id, "created project");
        Ok(project)
    }

    pub fn update_project(&self, id: &ProjectId, update: ProjectUpdate) -> Result<Project, StoreError> {
        update.validate()?;
        let mut data = self.write();
        let project = data
            .projects
            .iter_mut()
            .find(|project| &project.id == id)
            .ok_or_else(|| StoreError::not_found("project", id))?;
        update.apply(project);
        Ok(project.clone())
    }

    pub fn update_stage(
        &self,
        project_id: &ProjectId,
        stage_id: &StageId,
        update: StageUpdate,
    ) -> Result<Project, StoreError> {
        update.validate()?;
        let mut data = self.write();
        let project = data
            .projects
            .iter_mut()
            .find(|project| &project.id == project_id)
            .ok_or_else(|| StoreError::not_found("project", project_id))?;
        let stage = project
            .stage_mut(stage_id)
            .ok_or_else(|| StoreError::not_found("stage", stage_id))?;
        update.apply(stage);
        Ok(project.clone())
    }

    pub fn cost_curve(&self, project_id: &ProjectId) -> Result<Vec<CostCurvePoint>, StoreError> {
        let data = self.read();
        data.project(project_id)?;
        Ok(data.cost_curves.get(project_id).cloned().unwrap_or_default())
    }

    // Expenses

    pub fn list_expenses(&self, filter: &ExpenseFilter) -> Vec<Expense> {
        self.read()
            .expenses
            .iter()
            .filter(|expense| filter.matches(expense))
            .cloned()
            .collect()
    }

    pub fn get_expense(&self, id: &ExpenseId) -> Result<Expense, StoreError> {
        self.read()
            .expenses
            .iter()
            .find(|expense| &expense.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("expense", id))
    }

    pub fn create_expense(&self, new: NewExpense) -> Result<Expense, StoreError> {
        new.validate()?;
        let mut data = self.write();
        let expense = new.into_expense(ExpenseId::generate(), today());
        data.require_supplier("supplierId", expense.supplier_id.as_ref())?;
        data.expenses.insert(0, expense.clone());
        debug!(expense_id = %expense.id, amount = expense.amount, "created expense");
        Ok(expense)
    }

    pub fn update_expense(&self, id: &ExpenseId, update: ExpenseUpdate) -> Result<Expense, StoreError> {
        let mut data = self.write();
        let expense = data
            .expenses
            .iter_mut()
            .find(|expense| &expense.id == id)
            .ok_or_else(|| StoreError::not_found("expense", id))?;
        expense.status = update.status;
        Ok(expense.clone())
    }

    // Materials

    pub fn list_materials(&self, project_id: Option<&ProjectId>) -> Vec<Material> {
        self.read()
            .materials
            .iter()
            .filter(|material| project_id.map_or(true, |id| &material.project_id == id))
            .cloned()
            .collect()
    }

    pub fn get_material(&self, id: &MaterialId) -> Result<Material, StoreError> {
        self.read()
            .materials
            .iter()
            .find(|material| &material.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("material", id))
    }

    pub fn create_material(&self, new: NewMaterial) -> Result<Material, StoreError> {
        new.validate()?;
        let mut data = self.write();
        let material = new.into_material(MaterialId::generate());
        data.require_supplier("supplierId", material.supplier_id.as_ref())?;
        data.materials.push(material.clone());
        Ok(material)
    }

    pub fn record_consumption(
        &self,
        id: &MaterialId,
        consumption: MaterialConsumption,
    ) -> Result<Material, StoreError> {
        let mut data = self.write();
        let material = data
            .materials
            .iter_mut()
            .find(|material| &material.id == id)
            .ok_or_else(|| StoreError::not_found("material", id))?;
        consumption.validate_for(material)?;
        consumption.apply(material);
        debug!(
            material_id = %material.id,
            used = consumption.used,
            wasted = consumption.wasted,
            "recorded material consumption"
        );
        Ok(material.clone())
    }

    // Workers

    pub fn list_workers(&self) -> Vec<Worker> {
        self.read().workers.clone()
    }

    pub fn get_worker(&self, id: &WorkerId) -> Result<Worker, StoreError> {
        self.read()
            .workers
            .iter()
            .find(|worker| &worker.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("worker", id))
    }

    pub fn create_worker(&self, new: NewWorker) -> Result<Worker, StoreError> {
        new.validate()?;
        let worker = new.into_worker(WorkerId::generate());
        self.write().workers.push(worker.clone());
        Ok(worker)
    }

    pub fn update_worker(&self, id: &WorkerId, update: WorkerUpdate) -> Result<Worker, StoreError> {
        update.validate()?;
        let mut data = self.write();
        let worker = data
            .workers
            .iter_mut()
            .find(|worker| &worker.id == id)
            .ok_or_else(|| StoreError::not_found("worker", id))?;
        update.apply(worker);
        Ok(worker.clone())
    }

    // Equipment

    pub fn list_equipment(&self, status: Option<EquipmentStatus>) -> Vec<Equipment> {
        self.read()
            .equipment
            .iter()
            .filter(|equipment| status.map_or(true, |status| equipment.status == status))
            .cloned()
            .collect()
    }

    pub fn get_equipment(&self, id: &EquipmentId) -> Result<Equipment, StoreError> {
        self.read()
            .equipment
            .iter()
            .find(|equipment| &equipment.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("equipment", id))
    }

    pub fn create_equipment(&self, new: NewEquipment) -> Result<Equipment, StoreError> {
        new.validate()?;
        let mut data = self.write();
        if let Some(project_id) = &new.assigned_to {
            data.require_project("assignedTo", project_id)?;
        }
        let equipment = new.into_equipment(EquipmentId::generate());
        data.equipment.push(equipment.clone());
        Ok(equipment)
    }

    pub fn update_equipment(
        &self,
        id: &EquipmentId,
        update: EquipmentUpdate,
    ) -> Result<Equipment, StoreError> {
        let mut data = self.write();
        if let Some(project_id) = &update.assigned_to {
            data.require_project("assignedTo", project_id)?;
        }
        let equipment = data
            .equipment
            .iter_mut()
            .find(|equipment| &equipment.id == id)
            .ok_or_else(|| StoreError::not_found("equipment", id))?;
        update.validate_for(equipment)?;
        update.apply(equipment);
        Ok(equipment.clone())
    }

    // Daily logs

    /// Logs sorted by date, newest first; same-day logs keep insertion order.
    pub fn list_daily_logs(&self, project_id: Option<&ProjectId>) -> Vec<DailyLog> {
        let mut logs: Vec<DailyLog> = self
            .read()
            .daily_logs
            .iter()
            .filter(|log| project_id.map_or(true, |id| &log.project_id == id))
            .cloned()
            .collect();
        logs.sort_by(|a, b| b.date.cmp(&a.date));
        logs
    }

    pub fn get_daily_log(&self, id: &DailyLogId) -> Result<DailyLog, StoreError> {
        self.read()
            .daily_logs
            .iter()
            .find(|log| &log.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("daily log", id))
    }

    pub fn create_daily_log(&self, new: NewDailyLog) -> Result<DailyLog, StoreError> {
        new.validate()?;
        let mut data = self.write();
        let log = new.into_daily_log(DailyLogId::generate(), today());
        data.daily_logs.push(log.clone());
        Ok(log)
    }

    // Suppliers

    pub fn list_suppliers(&self) -> Vec<Supplier> {
        self.read().suppliers.clone()
    }

    pub fn get_supplier(&self, id: &SupplierId) -> Result<Supplier, StoreError> {
        self.read()
            .suppliers
            .iter()
            .find(|supplier| &supplier.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("supplier", id))
    }
}

impl ProjectSnapshotProvider for SiteStore {
    /// The project with its expenses and materials, taken under one read lock.
    fn snapshot(&self, project_id: &ProjectId) -> Result<ProjectSnapshot, StoreError> {
        let data = self.read();
        let project = data.project(project_id)?.clone();
        let expenses = data
            .expenses
            .iter()
            .filter(|expense| &expense.project_id == project_id)
            .cloned()
            .collect();
        let materials = data
            .materials
            .iter()
            .filter(|material| &material.project_id == project_id)
            .cloned()
            .collect();

        Ok(ProjectSnapshot {
            project,
            expenses,
            materials,
        })
    }
}

fn today() -> Date {
    OffsetDateTime::now_utc().date()
}
