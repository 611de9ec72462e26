use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::order::{CreateOrderParams, Order};

/// Repository providing database operations for orders recorded during visits.
pub struct OrderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all orders recorded for a visit.
    ///
    /// # Arguments
    /// - `visit_id` - ID of the visit to fetch orders for
    ///
    /// # Returns
    /// - `Ok(Vec<Order>)` - Orders for the visit, oldest first
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_visit_id(&self, visit_id: i32) -> Result<Vec<Order>, DbErr> {
        let entities = entity::prelude::Order::find()
            .filter(entity::order::Column::VisitId.eq(visit_id))
            .order_by_asc(entity::order::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Order::from_entity).collect())
    }

    /// Creates a new order against a visit.
    ///
    /// # Arguments
    /// - `params` - Validated create parameters
    ///
    /// # Returns
    /// - `Ok(Order)` - The created order with generated ID
    /// - `Err(DbErr)` - Database error during insert operation
    pub async fn create(&self, params: CreateOrderParams) -> Result<Order, DbErr> {
        let entity = entity::order::ActiveModel {
            visit_id: ActiveValue::Set(params.visit_id),
            dish_id: ActiveValue::Set(params.dish_id),
            rating: ActiveValue::Set(params.rating),
            review_text: ActiveValue::Set(params.review_text),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Order::from_entity(entity))
    }
}
