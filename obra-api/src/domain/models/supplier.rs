use serde::{Deserialize, Serialize};

use super::SupplierId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
    pub category: String,
    /// 1 to 5 stars.
    pub rating: f64,
}
