//! List-ownership rule.
//!
//! A list is owned by the opaque identity recorded at creation time; the
//! owner is the sole authority for reading or mutating the list and its
//! items. This predicate is the single place that comparison happens --
//! the API layer's authorization guard calls it after loading the list.

use crate::error::CoreError;

/// Verify that `caller_id` is the owner of a list.
///
/// Returns `CoreError::Forbidden` when the identities differ. The
/// comparison is an exact match on the opaque identity string; there is
/// no role hierarchy and no sharing model.
pub fn ensure_list_owner(owner_id: &str, caller_id: &str) -> Result<(), CoreError> {
    if owner_id != caller_id {
        return Err(CoreError::Forbidden(
            "You do not have permission to access this list".into(),
        ));
    }
    Ok(())
}
