use sea_orm::DatabaseConnection;

use crate::{
    data::visit::VisitRepository,
    error::{auth::AuthError, AppError},
};

/// Ownership guard for visit mutations.
///
/// Every mutating visit route runs this guard before issuing its write: the visit's
/// stored owner is fetched and compared against the caller-supplied user id. A missing
/// visit is reported before the ownership comparison, so callers cannot distinguish
/// "not yours" from "never existed" by probing deleted ids.
pub struct OwnerGuard<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OwnerGuard<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Requires that the claimed user id matches the visit's stored owner.
    ///
    /// # Arguments
    /// - `visit_id` - ID of the visit about to be mutated
    /// - `claimed_user_id` - User id supplied by the caller
    ///
    /// # Returns
    /// - `Ok(())` - The caller owns the visit
    /// - `Err(AppError::NotFound)` - No visit exists with the given ID
    /// - `Err(AppError::AuthErr)` - The visit belongs to another user
    pub async fn require(&self, visit_id: i32, claimed_user_id: i32) -> Result<(), AppError> {
        let repo = VisitRepository::new(self.db);

        let Some(owner_id) = repo.get_owner(visit_id).await? else {
            return Err(AppError::NotFound("Visit not found".to_string()));
        };

        if owner_id != claimed_user_id {
            return Err(AuthError::VisitNotOwned {
                visit_id,
                user_id: claimed_user_id,
            }
            .into());
        }

        Ok(())
    }
}
