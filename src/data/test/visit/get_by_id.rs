use super::*;

/// Tests getting a visit by ID.
///
/// Expected: Ok(Some(Visit)) with the stored fields
#[tokio::test]
async fn gets_visit_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_visit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, restaurant, visit) = factory::helpers::create_visit_with_dependencies(db).await?;

    let repo = VisitRepository::new(db);
    let result = repo.get_by_id(visit.id).await?;

    assert!(result.is_some());
    let found = result.unwrap();
    assert_eq!(found.id, visit.id);
    assert_eq!(found.user_id, user.id);
    assert_eq!(found.restaurant_id, restaurant.id);

    Ok(())
}

/// Tests getting a nonexistent visit by ID.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_visit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_visit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VisitRepository::new(db);
    let result = repo.get_by_id(99999).await?;

    assert!(result.is_none());

    Ok(())
}
