//! Restaurant factory for creating test restaurant entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test restaurants with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::restaurant::RestaurantFactory;
///
/// let restaurant = RestaurantFactory::new(&db)
///     .name("Milano Pizza")
///     .build()
///     .await?;
/// ```
pub struct RestaurantFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    address: String,
}

impl<'a> RestaurantFactory<'a> {
    /// Creates a new RestaurantFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Restaurant {id}"` where id is auto-incremented
    /// - address: `"{id} Main Street"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `RestaurantFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Restaurant {}", id),
            address: format!("{} Main Street", id),
        }
    }

    /// Sets the name for the restaurant.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the address for the restaurant.
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Inserts the restaurant into the database.
    ///
    /// # Returns
    /// - `Ok(entity::restaurant::Model)` - The created restaurant entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::restaurant::Model, DbErr> {
        entity::restaurant::ActiveModel {
            name: ActiveValue::Set(self.name),
            address: ActiveValue::Set(self.address),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a restaurant with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::restaurant::Model)` - The created restaurant entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_restaurant(
    db: &DatabaseConnection,
) -> Result<entity::restaurant::Model, DbErr> {
    RestaurantFactory::new(db).build().await
}
