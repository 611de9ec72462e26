use super::*;

/// Tests the guard with the visit's actual owner.
///
/// Expected: Ok(())
#[tokio::test]
async fn passes_for_matching_owner() {
    let test = TestBuilder::new().with_visit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _restaurant, visit) = factory::helpers::create_visit_with_dependencies(db)
        .await
        .unwrap();

    let guard = OwnerGuard::new(db);
    let result = guard.require(visit.id, user.id).await;

    assert!(result.is_ok());
}

/// Tests the guard with a user id that is not the stored owner.
///
/// Expected: Err(AppError::AuthErr(VisitNotOwned))
#[tokio::test]
async fn rejects_mismatched_owner() {
    let test = TestBuilder::new().with_visit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _restaurant, visit) = factory::helpers::create_visit_with_dependencies(db)
        .await
        .unwrap();
    let intruder = factory::user::create_user(db).await.unwrap();
    assert_ne!(intruder.id, user.id);

    let guard = OwnerGuard::new(db);
    let err = guard.require(visit.id, intruder.id).await.unwrap_err();

    assert!(matches!(
        err,
        AppError::AuthErr(AuthError::VisitNotOwned { .. })
    ));
}

/// Tests the guard against a visit id with no matching row.
///
/// The missing row is reported before any ownership comparison.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn returns_not_found_for_missing_visit() {
    let test = TestBuilder::new().with_visit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await.unwrap();

    let guard = OwnerGuard::new(db);
    let err = guard.require(99999, user.id).await.unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
}

/// Tests that a rejected ownership check leaves the visit untouched.
///
/// Expected: the stored visit still has its original fields
#[tokio::test]
async fn rejection_leaves_visit_unchanged() {
    let test = TestBuilder::new().with_visit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _restaurant, visit) = factory::helpers::create_visit_with_dependencies(db)
        .await
        .unwrap();
    let intruder = factory::user::create_user(db).await.unwrap();

    let guard = OwnerGuard::new(db);
    let _ = guard.require(visit.id, intruder.id).await.unwrap_err();

    let stored = VisitRepository::new(db)
        .get_by_id(visit.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.user_id, visit.user_id);
    assert_eq!(stored.date, visit.date);
    assert_eq!(stored.time, visit.time);
}
