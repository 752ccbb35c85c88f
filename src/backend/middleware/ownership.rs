//! Ownership checks for mutating owned resources.
//!
//! Callers resolve the resource first; a missing resource is `NotFound`
//! before ownership is ever evaluated.

use uuid::Uuid;

use crate::backend::error::ApiError;

/// Whether `user` owns a resource whose owner reference is `owner`
pub fn is_owner(owner: Uuid, user: Uuid) -> bool {
    owner == user
}

/// Reject a non-owner with `Forbidden("Not authorized to <action>")`
pub fn ensure_owner(owner: Uuid, user: Uuid, action: &str) -> Result<(), ApiError> {
    if is_owner(owner, user) {
        Ok(())
    } else {
        tracing::warn!("User {} is not the owner ({}) and may not {}", user, owner, action);
        Err(ApiError::forbidden(format!("Not authorized to {action}")))
    }
}
