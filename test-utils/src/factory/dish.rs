//! Dish factory for creating test dish entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test dishes with customizable fields.
///
/// Dishes belong to a restaurant, so the factory takes the parent restaurant id.
pub struct DishFactory<'a> {
    db: &'a DatabaseConnection,
    restaurant_id: i32,
    name: String,
}

impl<'a> DishFactory<'a> {
    /// Creates a new DishFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Dish {id}"` where id is auto-incremented
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `restaurant_id` - ID of the restaurant the dish belongs to
    ///
    /// # Returns
    /// - `DishFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, restaurant_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            restaurant_id,
            name: format!("Dish {}", id),
        }
    }

    /// Sets the name for the dish.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Inserts the dish into the database.
    ///
    /// # Returns
    /// - `Ok(entity::dish::Model)` - The created dish entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::dish::Model, DbErr> {
        entity::dish::ActiveModel {
            restaurant_id: ActiveValue::Set(self.restaurant_id),
            name: ActiveValue::Set(self.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a dish with default values for the given restaurant.
///
/// # Arguments
/// - `db` - Database connection
/// - `restaurant_id` - ID of the restaurant the dish belongs to
///
/// # Returns
/// - `Ok(entity::dish::Model)` - The created dish entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_dish(
    db: &DatabaseConnection,
    restaurant_id: i32,
) -> Result<entity::dish::Model, DbErr> {
    DishFactory::new(db, restaurant_id).build().await
}
