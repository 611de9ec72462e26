use super::*;

/// Tests deleting a visit.
///
/// Verifies the visit is unreachable via read afterwards.
///
/// Expected: Ok(()), then get_by_id returns None
#[tokio::test]
async fn deletes_visit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_visit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _restaurant, visit) = factory::helpers::create_visit_with_dependencies(db).await?;

    let repo = VisitRepository::new(db);
    repo.delete(visit.id).await?;

    assert!(repo.get_by_id(visit.id).await?.is_none());

    Ok(())
}

/// Tests deleting a nonexistent visit.
///
/// Expected: Ok(()), no error for a missing row
#[tokio::test]
async fn delete_of_missing_visit_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_visit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VisitRepository::new(db);
    repo.delete(99999).await?;

    Ok(())
}
