use super::*;

/// Tests updating a visit's restaurant, date, and time.
///
/// Verifies the new values are stored and the owner is untouched.
///
/// Expected: Ok(Visit) with updated fields
#[tokio::test]
async fn updates_visit_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_visit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _restaurant, visit) = factory::helpers::create_visit_with_dependencies(db).await?;
    let other_restaurant = factory::restaurant::create_restaurant(db).await?;

    let repo = VisitRepository::new(db);
    let updated = repo
        .update(UpdateVisitParams {
            id: visit.id,
            restaurant_id: other_restaurant.id,
            date: NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
            time: NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
        })
        .await?;

    assert_eq!(updated.id, visit.id);
    assert_eq!(updated.user_id, user.id);
    assert_eq!(updated.restaurant_id, other_restaurant.id);
    assert_eq!(updated.date, NaiveDate::from_ymd_opt(2026, 5, 1).unwrap());
    assert_eq!(updated.time, NaiveTime::from_hms_opt(13, 0, 0).unwrap());

    Ok(())
}

/// Tests updating a nonexistent visit.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn returns_record_not_found_for_missing_visit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_visit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VisitRepository::new(db);
    let result = repo
        .update(UpdateVisitParams {
            id: 99999,
            restaurant_id: 1,
            date: NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
            time: NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}

/// Tests that updating one visit leaves other visits unchanged.
///
/// Expected: Ok, sibling visit keeps its original fields
#[tokio::test]
async fn does_not_touch_other_visits() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_visit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, restaurant, visit) = factory::helpers::create_visit_with_dependencies(db).await?;
    let sibling = factory::visit::create_visit(db, user.id, restaurant.id).await?;

    let repo = VisitRepository::new(db);
    repo.update(UpdateVisitParams {
        id: visit.id,
        restaurant_id: restaurant.id,
        date: NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
        time: NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
    })
    .await?;

    let unchanged = repo.get_by_id(sibling.id).await?.unwrap();
    assert_eq!(unchanged.date, sibling.date);
    assert_eq!(unchanged.time, sibling.time);

    Ok(())
}
