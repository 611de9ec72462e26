use super::*;

/// Tests creating an order with a rating and review.
///
/// Expected: Ok(Order) with the stored fields
#[tokio::test]
async fn creates_order_with_rating_and_review() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_visit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, restaurant, visit) = factory::helpers::create_visit_with_dependencies(db).await?;
    let dish = factory::dish::create_dish(db, restaurant.id).await?;

    let repo = OrderRepository::new(db);
    let order = repo
        .create(CreateOrderParams {
            visit_id: visit.id,
            dish_id: dish.id,
            rating: Some(4.5),
            review_text: Some("Delicious dish!".to_string()),
        })
        .await?;

    assert_eq!(order.visit_id, visit.id);
    assert_eq!(order.dish_id, dish.id);
    assert_eq!(order.rating, Some(4.5));
    assert_eq!(order.review_text.as_deref(), Some("Delicious dish!"));

    Ok(())
}

/// Tests creating an order without the optional rating and review.
///
/// Expected: Ok(Order) with both optionals unset
#[tokio::test]
async fn creates_order_without_optional_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_visit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, restaurant, visit) = factory::helpers::create_visit_with_dependencies(db).await?;
    let dish = factory::dish::create_dish(db, restaurant.id).await?;

    let repo = OrderRepository::new(db);
    let order = repo
        .create(CreateOrderParams {
            visit_id: visit.id,
            dish_id: dish.id,
            rating: None,
            review_text: None,
        })
        .await?;

    assert!(order.rating.is_none());
    assert!(order.review_text.is_none());

    Ok(())
}
