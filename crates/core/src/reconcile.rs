//! Field-level merge rules for applying a client patch to a stored record.
//!
//! Entity reconcilers (see `garage_db::models`) are composed from these
//! helpers. The rules are:
//!
//! - A text field is applied only when the patch carries a non-blank string.
//!   Whitespace-only counts as blank.
//! - A numeric or boolean field is applied only when the patch carries a value.
//! - A patch id, when present, must equal the target id or the whole merge is
//!   refused.
//!
//! Nothing here performs I/O or returns an error.

use crate::types::DbId;

/// Result of reconciling a patch against an existing record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciled<T> {
    /// The merged record. Equal to the existing record when `accepted` is false.
    pub record: T,
    /// Whether the patch passed the id-match precondition.
    pub accepted: bool,
}

impl<T> Reconciled<T> {
    /// A merge that passed the precondition.
    pub fn accepted(record: T) -> Self {
        Self {
            record,
            accepted: true,
        }
    }

    /// A merge refused at entry; `record` is the untouched existing record.
    pub fn rejected(record: T) -> Self {
        Self {
            record,
            accepted: false,
        }
    }
}

/// Returns `true` for an empty or whitespace-only string.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Returns `true` unless the patch names an id different from `target_id`.
pub fn ids_match(target_id: DbId, patch_id: Option<DbId>) -> bool {
    match patch_id {
        Some(id) => id == target_id,
        None => true,
    }
}

/// Overwrite `current` with `incoming` when it is present and non-blank.
pub fn merge_text(current: &mut Option<String>, incoming: Option<&str>) {
    if let Some(value) = incoming.filter(|v| !is_blank(v)) {
        *current = Some(value.to_string());
    }
}

/// Overwrite `current` with `incoming` when it is explicitly present.
pub fn merge_value<T: Copy>(current: &mut Option<T>, incoming: Option<T>) {
    if incoming.is_some() {
        *current = incoming;
    }
}
