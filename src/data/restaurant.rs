use sea_orm::{
    sea_query::{Expr, Func},
    DatabaseConnection, DbErr, EntityTrait, ExprTrait, QueryFilter, QueryOrder,
};

use crate::model::restaurant::Restaurant;

/// Repository providing database operations for restaurant lookup.
pub struct RestaurantRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RestaurantRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Searches restaurants by case-insensitive substring match on name.
    ///
    /// Lowercases both sides of the comparison so matching does not depend on the
    /// backend's LIKE collation. Results are ordered alphabetically by name.
    ///
    /// # Arguments
    /// - `pattern` - Substring to match; an empty pattern is a caller error and is
    ///   rejected before reaching this method
    ///
    /// # Returns
    /// - `Ok(Vec<Restaurant>)` - Restaurants whose name contains the pattern
    /// - `Err(DbErr)` - Database error during query
    pub async fn search(&self, pattern: &str) -> Result<Vec<Restaurant>, DbErr> {
        let needle = format!("%{}%", pattern.to_lowercase());

        let name_lower = Func::lower(Expr::col(entity::restaurant::Column::Name));

        let entities = entity::prelude::Restaurant::find()
            .filter(Expr::expr(name_lower).like(needle))
            .order_by_asc(entity::restaurant::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Restaurant::from_entity).collect())
    }
}
