use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Restaurant domain model.
///
/// Restaurants are immutable from this system's perspective; they are only looked up
/// by substring match on name.
#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    pub id: i32,
    pub name: String,
    pub address: String,
}

impl Restaurant {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::restaurant::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            address: entity.address,
        }
    }

    pub fn into_dto(self) -> RestaurantDto {
        RestaurantDto {
            id: self.id,
            name: self.name,
            address: self.address,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RestaurantDto {
    pub id: i32,
    pub name: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RestaurantListDto {
    pub restaurants: Vec<RestaurantDto>,
}
