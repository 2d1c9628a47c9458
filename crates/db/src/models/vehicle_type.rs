//! Vehicle type model, patch DTO, and reconciler.

use garage_core::reconcile::{ids_match, merge_text, merge_value, Reconciled};
use garage_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `vehicle_types` table.
///
/// Brands referencing this type are owned by the `brands.vehicle_type_id`
/// foreign key and are never loaded or written through this struct.
#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct VehicleType {
    #[serde(default)]
    pub id: DbId,
    pub type_name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

/// DTO for partially updating a vehicle type.
///
/// Absent, `null`, and blank string fields leave the stored value untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateVehicleType {
    pub id: Option<DbId>,
    pub type_name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

impl VehicleType {
    /// Merge `patch` into a copy of this row.
    ///
    /// The merge is refused when the patch names an id other than `self.id`.
    pub fn reconcile(&self, patch: &UpdateVehicleType) -> Reconciled<VehicleType> {
        if !ids_match(self.id, patch.id) {
            return Reconciled::rejected(self.clone());
        }

        let mut merged = self.clone();
        merge_text(&mut merged.type_name, patch.type_name.as_deref());
        merge_text(&mut merged.description, patch.description.as_deref());
        merge_value(&mut merged.is_active, patch.is_active);
        Reconciled::accepted(merged)
    }
}
