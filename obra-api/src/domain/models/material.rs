use serde::{Deserialize, Serialize};

use super::{MaterialId, ProjectId, SupplierId};
use crate::domain::validation::{self, ValidationError};

/// Usage share above which a material is flagged as critical.
pub const CRITICAL_USAGE_PERCENT: f64 = 90.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: MaterialId,
    pub name: String,
    pub unit: String,
    pub quantity_total: f64,
    pub quantity_used: f64,
    pub cost_per_unit: f64,
    pub category: String,
    pub project_id: ProjectId,
    pub min_threshold: f64,
    /// Quantity lost to breakage or waste.
    pub waste: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub supplier_id: Option<SupplierId>,
}

impl Material {
    pub fn remaining(&self) -> f64 {
        self.quantity_total - self.quantity_used
    }

    pub fn usage_percentage(&self) -> f64 {
        if self.quantity_total > 0.0 {
            self.quantity_used / self.quantity_total * 100.0
        } else {
            0.0
        }
    }

    pub fn is_low_stock(&self) -> bool {
        self.remaining() <= self.min_threshold
    }

    pub fn is_critical(&self) -> bool {
        self.usage_percentage() > CRITICAL_USAGE_PERCENT
    }

    /// Value of everything purchased.
    pub fn total_cost(&self) -> f64 {
        self.quantity_total * self.cost_per_unit
    }

    pub fn waste_cost(&self) -> f64 {
        self.waste * self.cost_per_unit
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMaterial {
    pub name: String,
    pub unit: String,
    pub quantity_total: f64,
    #[serde(default)]
    pub quantity_used: f64,
    pub cost_per_unit: f64,
    #[serde(default)]
    pub category: String,
    pub project_id: ProjectId,
    #[serde(default)]
    pub min_threshold: f64,
    #[serde(default)]
    pub waste: f64,
    #[serde(default)]
    pub supplier_id: Option<SupplierId>,
}

impl NewMaterial {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::new("name", "must not be empty"));
        }
        if self.unit.trim().is_empty() {
            return Err(ValidationError::new("unit", "must not be empty"));
        }
        validation::non_negative("quantityTotal", self.quantity_total)?;
        validation::non_negative("quantityUsed", self.quantity_used)?;
        validation::non_negative("costPerUnit", self.cost_per_unit)?;
        validation::non_negative("minThreshold", self.min_threshold)?;
        validation::non_negative("waste", self.waste)?;
        if self.quantity_used > self.quantity_total {
            return Err(ValidationError::new(
                "quantityUsed",
                "must not exceed quantityTotal",
            ));
        }
        Ok(())
    }

    pub fn into_material(self, id: MaterialId) -> Material {
        Material {
            id,
            name: self.name.trim().to_string(),
            unit: self.unit.trim().to_string(),
            quantity_total: self.quantity_total,
            quantity_used: self.quantity_used,
            cost_per_unit: self.cost_per_unit,
            category: self.category.trim().to_string(),
            project_id: self.project_id,
            min_threshold: self.min_threshold,
            waste: self.waste,
            supplier_id: self
                .supplier_id
                .filter(|supplier| !supplier.as_str().trim().is_empty()),
        }
    }
}

/// Quantities consumed from stock since the last report.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialConsumption {
    #[serde(default)]
    pub used: f64,
    #[serde(default)]
    pub wasted: f64,
}

impl MaterialConsumption {
    pub fn validate_for(&self, material: &Material) -> Result<(), ValidationError> {
        validation::non_negative("used", self.used)?;
        validation::non_negative("wasted", self.wasted)?;
        if material.quantity_used + self.used > material.quantity_total {
            return Err(ValidationError::new(
                "used",
                format!(
                    "only {} {} left in stock",
                    material.remaining(),
                    material.unit
                ),
            ));
        }
        Ok(())
    }

    pub fn apply(&self, material: &mut Material) {
        material.quantity_used += self.used;
        material.waste += self.wasted;
    }
}
