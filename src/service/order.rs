use sea_orm::DatabaseConnection;

use crate::{
    data::{order::OrderRepository, visit::VisitRepository},
    error::AppError,
    model::order::{CreateOrderParams, Order},
};

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all orders recorded for a visit.
    ///
    /// The visit must exist; listing orders of an unknown visit id is a not-found,
    /// not an empty list.
    pub async fn get_for_visit(&self, visit_id: i32) -> Result<Vec<Order>, AppError> {
        let visit_repo = VisitRepository::new(self.db);

        if visit_repo.get_by_id(visit_id).await?.is_none() {
            return Err(AppError::NotFound("Visit not found".to_string()));
        }

        let repo = OrderRepository::new(self.db);

        Ok(repo.get_by_visit_id(visit_id).await?)
    }

    /// Records an order against a visit.
    pub async fn create(&self, params: CreateOrderParams) -> Result<Order, AppError> {
        let repo = OrderRepository::new(self.db);

        Ok(repo.create(params).await?)
    }
}
