use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    data::visit::VisitRepository,
    error::AppError,
    model::visit::{CreateVisitParams, UpdateVisitParams, Visit},
};

pub struct VisitService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VisitService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a visit by ID.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Visit>, AppError> {
        let repo = VisitRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    /// Creates a new visit; the supplied user becomes the owner.
    pub async fn create(&self, params: CreateVisitParams) -> Result<Visit, AppError> {
        let repo = VisitRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Updates a visit's restaurant, date, and time.
    ///
    /// The ownership check has already run in the controller; a row that vanished
    /// between the check and the write still surfaces as not-found rather than a
    /// generic database error.
    pub async fn update(&self, params: UpdateVisitParams) -> Result<Visit, AppError> {
        let repo = VisitRepository::new(self.db);

        match repo.update(params).await {
            Ok(visit) => Ok(visit),
            Err(DbErr::RecordNotFound(_)) => Err(AppError::NotFound("Visit not found".to_string())),
            Err(err) => Err(err.into()),
        }
    }

    /// Deletes a visit.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = VisitRepository::new(self.db);

        repo.delete(id).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use test_utils::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn update_of_missing_visit_returns_not_found() {
        let test = TestBuilder::new().with_visit_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let service = VisitService::new(db);
        let err = service
            .update(UpdateVisitParams {
                id: 9999,
                restaurant_id: 1,
                date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
                time: NaiveTime::from_hms_opt(18, 45, 0).unwrap(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn deleted_visit_is_unreachable_via_read() {
        let test = TestBuilder::new().with_visit_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (_user, _restaurant, visit) =
            factory::helpers::create_visit_with_dependencies(db).await.unwrap();

        let service = VisitService::new(db);
        service.delete(visit.id).await.unwrap();

        assert!(service.get_by_id(visit.id).await.unwrap().is_none());
    }
}
