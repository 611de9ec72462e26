use super::*;

/// Tests creating a visit with explicit fields.
///
/// Verifies that the repository stores the owner, restaurant, date, and time
/// as given and that the row is readable afterwards.
///
/// Expected: Ok(Visit) with the stored fields
#[tokio::test]
async fn creates_visit_with_given_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_visit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let restaurant = factory::restaurant::create_restaurant(db).await?;

    let repo = VisitRepository::new(db);
    let visit = repo
        .create(CreateVisitParams {
            user_id: user.id,
            restaurant_id: restaurant.id,
            date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            time: NaiveTime::from_hms_opt(18, 45, 0).unwrap(),
        })
        .await?;

    assert_eq!(visit.user_id, user.id);
    assert_eq!(visit.restaurant_id, restaurant.id);
    assert_eq!(visit.date, NaiveDate::from_ymd_opt(2026, 3, 14).unwrap());
    assert_eq!(visit.time, NaiveTime::from_hms_opt(18, 45, 0).unwrap());

    let stored = repo.get_by_id(visit.id).await?;
    assert_eq!(stored, Some(visit));

    Ok(())
}
