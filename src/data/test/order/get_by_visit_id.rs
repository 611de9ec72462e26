use super::*;

/// Tests fetching orders scoped to one visit.
///
/// Creates orders on two visits and verifies only the requested visit's
/// orders come back.
///
/// Expected: Ok with exactly the visit's own orders
#[tokio::test]
async fn returns_only_orders_for_the_visit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_visit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, restaurant, visit) = factory::helpers::create_visit_with_dependencies(db).await?;
    let dish = factory::dish::create_dish(db, restaurant.id).await?;
    let order = factory::order::create_order(db, visit.id, dish.id).await?;

    // A second visit with its own order
    let other_visit = factory::visit::create_visit(db, user.id, restaurant.id).await?;
    factory::order::create_order(db, other_visit.id, dish.id).await?;

    let repo = OrderRepository::new(db);
    let orders = repo.get_by_visit_id(visit.id).await?;

    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, order.id);
    assert_eq!(orders[0].visit_id, visit.id);

    Ok(())
}

/// Tests fetching orders for a visit that has none.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_for_visit_without_orders() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_visit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _restaurant, visit) = factory::helpers::create_visit_with_dependencies(db).await?;

    let repo = OrderRepository::new(db);
    let orders = repo.get_by_visit_id(visit.id).await?;

    assert!(orders.is_empty());

    Ok(())
}
