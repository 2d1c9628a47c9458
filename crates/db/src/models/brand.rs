//! Brand model, patch DTO, and reconciler.

use garage_core::reconcile::{ids_match, merge_text, merge_value, Reconciled};
use garage_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `brands` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Brand {
    #[serde(default)]
    pub id: DbId,
    /// Missing on the wire means unassigned; the store's foreign key rejects it.
    #[serde(default)]
    pub vehicle_type_id: DbId,
    pub brand_name: Option<String>,
    pub description: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

/// DTO for partially updating a brand.
///
/// `vehicle_type_id` is applied when present; callers are expected to check
/// that the referenced vehicle type exists before reconciling.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBrand {
    pub id: Option<DbId>,
    pub vehicle_type_id: Option<DbId>,
    pub brand_name: Option<String>,
    pub description: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

impl Brand {
    /// Merge `patch` into a copy of this row.
    ///
    /// The merge is refused when the patch names an id other than `self.id`.
    pub fn reconcile(&self, patch: &UpdateBrand) -> Reconciled<Brand> {
        if !ids_match(self.id, patch.id) {
            return Reconciled::rejected(self.clone());
        }

        let mut merged = self.clone();
        if let Some(vehicle_type_id) = patch.vehicle_type_id {
            merged.vehicle_type_id = vehicle_type_id;
        }
        merge_text(&mut merged.brand_name, patch.brand_name.as_deref());
        merge_text(&mut merged.description, patch.description.as_deref());
        merge_value(&mut merged.sort_order, patch.sort_order);
        merge_value(&mut merged.is_active, patch.is_active);
        Reconciled::accepted(merged)
    }
}
