use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;

/// A dish ordered during a visit, with optional rating and review.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    pub visit_id: i32,
    pub dish_id: i32,
    pub rating: Option<f64>,
    pub review_text: Option<String>,
}

impl Order {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::order::Model) -> Self {
        Self {
            id: entity.id,
            visit_id: entity.visit_id,
            dish_id: entity.dish_id,
            rating: entity.rating,
            review_text: entity.review_text,
        }
    }

    pub fn into_dto(self) -> OrderDto {
        OrderDto {
            id: self.id,
            visit_id: self.visit_id,
            dish_id: self.dish_id,
            rating: self.rating,
            review_text: self.review_text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderDto {
    pub id: i32,
    pub visit_id: i32,
    pub dish_id: i32,
    pub rating: Option<f64>,
    pub review_text: Option<String>,
}

/// Request body for recording an order against a visit.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateOrderDto {
    pub dish_id: Option<i32>,
    pub rating: Option<f64>,
    pub review_text: Option<String>,
}

/// Validated parameters for creating an order.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateOrderParams {
    pub visit_id: i32,
    pub dish_id: i32,
    pub rating: Option<f64>,
    pub review_text: Option<String>,
}

impl CreateOrderParams {
    /// Validates a create request body into typed parameters.
    ///
    /// # Arguments
    /// - `visit_id` - Visit ID from the request path
    /// - `dto` - Create request body
    ///
    /// # Returns
    /// - `Ok(CreateOrderParams)` - Required fields present
    /// - `Err(AppError::BadRequest)` - Missing dish id
    pub fn from_dto(visit_id: i32, dto: CreateOrderDto) -> Result<Self, AppError> {
        let dish_id = dto
            .dish_id
            .ok_or_else(|| AppError::BadRequest("dish_id is required".to_string()))?;

        Ok(Self {
            visit_id,
            dish_id,
            rating: dto.rating,
            review_text: dto.review_text,
        })
    }
}
