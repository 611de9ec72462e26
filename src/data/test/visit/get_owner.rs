use super::*;

/// Tests fetching the stored owner of a visit.
///
/// Expected: Ok(Some(user_id)) matching the creating user
#[tokio::test]
async fn returns_stored_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_visit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _restaurant, visit) = factory::helpers::create_visit_with_dependencies(db).await?;

    let repo = VisitRepository::new(db);
    let owner = repo.get_owner(visit.id).await?;

    assert_eq!(owner, Some(user.id));

    Ok(())
}

/// Tests fetching the owner of a nonexistent visit.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_visit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_visit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VisitRepository::new(db);
    let owner = repo.get_owner(99999).await?;

    assert!(owner.is_none());

    Ok(())
}
