use sea_orm::DatabaseConnection;

use crate::{data::restaurant::RestaurantRepository, error::AppError, model::restaurant::Restaurant};

pub struct RestaurantService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RestaurantService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Searches restaurants by case-insensitive substring match on name.
    ///
    /// An empty or whitespace-only search term is a caller error, not a query.
    pub async fn search(&self, term: &str) -> Result<Vec<Restaurant>, AppError> {
        if term.trim().is_empty() {
            return Err(AppError::BadRequest("search_term is required".to_string()));
        }

        let repo = RestaurantRepository::new(self.db);

        Ok(repo.search(term).await?)
    }
}
