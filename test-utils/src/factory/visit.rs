//! Visit factory for creating test visit entities.

use chrono::{NaiveDate, NaiveTime};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test visits with customizable fields.
///
/// Visits belong to a user and a restaurant, so the factory takes both parent ids.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::visit::VisitFactory;
///
/// let visit = VisitFactory::new(&db, user.id, restaurant.id)
///     .date(NaiveDate::from_ymd_opt(2026, 3, 14).unwrap())
///     .build()
///     .await?;
/// ```
pub struct VisitFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    restaurant_id: i32,
    date: NaiveDate,
    time: NaiveTime,
}

impl<'a> VisitFactory<'a> {
    /// Creates a new VisitFactory with default values.
    ///
    /// Defaults:
    /// - date: `2026-01-15`
    /// - time: `19:30:00`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - ID of the user who made the visit
    /// - `restaurant_id` - ID of the visited restaurant
    ///
    /// # Returns
    /// - `VisitFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, user_id: i32, restaurant_id: i32) -> Self {
        Self {
            db,
            user_id,
            restaurant_id,
            date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            time: NaiveTime::from_hms_opt(19, 30, 0).unwrap(),
        }
    }

    /// Sets the visit date.
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Sets the visit time.
    pub fn time(mut self, time: NaiveTime) -> Self {
        self.time = time;
        self
    }

    /// Inserts the visit into the database.
    ///
    /// # Returns
    /// - `Ok(entity::visit::Model)` - The created visit entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::visit::Model, DbErr> {
        entity::visit::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            restaurant_id: ActiveValue::Set(self.restaurant_id),
            date: ActiveValue::Set(self.date),
            time: ActiveValue::Set(self.time),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a visit with default values for the given user and restaurant.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - ID of the user who made the visit
/// - `restaurant_id` - ID of the visited restaurant
///
/// # Returns
/// - `Ok(entity::visit::Model)` - The created visit entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_visit(
    db: &DatabaseConnection,
    user_id: i32,
    restaurant_id: i32,
) -> Result<entity::visit::Model, DbErr> {
    VisitFactory::new(db, user_id, restaurant_id).build().await
}
