use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::model::visit::{CreateVisitParams, UpdateVisitParams, Visit};

/// Repository providing database operations for visit management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and deleting visit records.
pub struct VisitRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VisitRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a visit by ID.
    ///
    /// # Arguments
    /// - `id` - ID of the visit to fetch
    ///
    /// # Returns
    /// - `Ok(Some(Visit))` - The visit with the given ID
    /// - `Ok(None)` - No visit exists with the given ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Visit>, DbErr> {
        let entity = entity::prelude::Visit::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Visit::from_entity))
    }

    /// Gets the stored owner of a visit.
    ///
    /// Used by the ownership guard before every mutation; only the owning user id
    /// is read.
    ///
    /// # Arguments
    /// - `id` - ID of the visit to check
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - The owning user's id
    /// - `Ok(None)` - No visit exists with the given ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_owner(&self, id: i32) -> Result<Option<i32>, DbErr> {
        let entity = entity::prelude::Visit::find_by_id(id).one(self.db).await?;

        Ok(entity.map(|visit| visit.user_id))
    }

    /// Creates a new visit.
    ///
    /// # Arguments
    /// - `params` - Validated create parameters
    ///
    /// # Returns
    /// - `Ok(Visit)` - The created visit with generated ID
    /// - `Err(DbErr)` - Database error during insert operation
    pub async fn create(&self, params: CreateVisitParams) -> Result<Visit, DbErr> {
        let entity = entity::visit::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            restaurant_id: ActiveValue::Set(params.restaurant_id),
            date: ActiveValue::Set(params.date),
            time: ActiveValue::Set(params.time),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Visit::from_entity(entity))
    }

    /// Updates a visit's restaurant, date, and time.
    ///
    /// The owner is never changed by an update.
    ///
    /// # Arguments
    /// - `params` - Validated update parameters containing the visit id
    ///
    /// # Returns
    /// - `Ok(Visit)` - The updated visit
    /// - `Err(DbErr::RecordNotFound)` - No visit exists with the specified ID
    /// - `Err(DbErr)` - Other database error during update operation
    pub async fn update(&self, params: UpdateVisitParams) -> Result<Visit, DbErr> {
        let visit = entity::prelude::Visit::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Visit with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::visit::ActiveModel = visit.into();
        active_model.restaurant_id = ActiveValue::Set(params.restaurant_id);
        active_model.date = ActiveValue::Set(params.date);
        active_model.time = ActiveValue::Set(params.time);

        let entity = active_model.update(self.db).await?;

        Ok(Visit::from_entity(entity))
    }

    /// Deletes a visit.
    ///
    /// Associated orders are removed by the CASCADE foreign key constraint.
    ///
    /// # Arguments
    /// - `id` - ID of the visit to delete
    ///
    /// # Returns
    /// - `Ok(())` - Visit deleted successfully (or didn't exist)
    /// - `Err(DbErr)` - Database error during delete operation
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Visit::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}
