//! Order factory for creating test order entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test orders with customizable fields.
///
/// Orders belong to a visit and a dish, so the factory takes both parent ids.
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    visit_id: i32,
    dish_id: i32,
    rating: Option<f64>,
    review_text: Option<String>,
}

impl<'a> OrderFactory<'a> {
    /// Creates a new OrderFactory with default values.
    ///
    /// Defaults:
    /// - rating: `Some(4.0)`
    /// - review_text: `Some("Review {id}")` where id is auto-incremented
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `visit_id` - ID of the visit the order belongs to
    /// - `dish_id` - ID of the ordered dish
    ///
    /// # Returns
    /// - `OrderFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, visit_id: i32, dish_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            visit_id,
            dish_id,
            rating: Some(4.0),
            review_text: Some(format!("Review {}", id)),
        }
    }

    /// Sets the rating for the order.
    pub fn rating(mut self, rating: Option<f64>) -> Self {
        self.rating = rating;
        self
    }

    /// Sets the review text for the order.
    pub fn review_text(mut self, review_text: Option<String>) -> Self {
        self.review_text = review_text;
        self
    }

    /// Inserts the order into the database.
    ///
    /// # Returns
    /// - `Ok(entity::order::Model)` - The created order entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::order::Model, DbErr> {
        entity::order::ActiveModel {
            visit_id: ActiveValue::Set(self.visit_id),
            dish_id: ActiveValue::Set(self.dish_id),
            rating: ActiveValue::Set(self.rating),
            review_text: ActiveValue::Set(self.review_text),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an order with default values for the given visit and dish.
///
/// # Arguments
/// - `db` - Database connection
/// - `visit_id` - ID of the visit the order belongs to
/// - `dish_id` - ID of the ordered dish
///
/// # Returns
/// - `Ok(entity::order::Model)` - The created order entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_order(
    db: &DatabaseConnection,
    visit_id: i32,
    dish_id: i32,
) -> Result<entity::order::Model, DbErr> {
    OrderFactory::new(db, visit_id, dish_id).build().await
}
