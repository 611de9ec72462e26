use super::*;

/// Tests searching with a lowercase term against a mixed-case name.
///
/// Verifies that the repository matches substrings case-insensitively in
/// both directions.
///
/// Expected: Ok with the matching restaurant
#[tokio::test]
async fn matches_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_visit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::restaurant::RestaurantFactory::new(db)
        .name("Milano Pizza")
        .build()
        .await?;

    let repo = RestaurantRepository::new(db);

    let found = repo.search("milano").await?;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Milano Pizza");

    let found = repo.search("MILANO").await?;
    assert_eq!(found.len(), 1);

    Ok(())
}

/// Tests that the search matches anywhere inside the name.
///
/// Expected: Ok with the matching restaurant
#[tokio::test]
async fn matches_substring_in_middle_of_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_visit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::restaurant::RestaurantFactory::new(db)
        .name("Casa della Pasta")
        .build()
        .await?;

    let repo = RestaurantRepository::new(db);
    let found = repo.search("della").await?;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Casa della Pasta");

    Ok(())
}

/// Tests that non-matching restaurants are excluded.
///
/// Expected: Ok with only the matching restaurant
#[tokio::test]
async fn excludes_non_matching_restaurants() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_visit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::restaurant::RestaurantFactory::new(db)
        .name("Milano Pizza")
        .build()
        .await?;
    factory::restaurant::RestaurantFactory::new(db)
        .name("Sushi Corner")
        .build()
        .await?;

    let repo = RestaurantRepository::new(db);
    let found = repo.search("pizza").await?;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Milano Pizza");

    Ok(())
}

/// Tests that results come back ordered by name.
///
/// Expected: Ok with restaurants in alphabetical order
#[tokio::test]
async fn orders_results_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_visit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::restaurant::RestaurantFactory::new(db)
        .name("Pizza Via")
        .build()
        .await?;
    factory::restaurant::RestaurantFactory::new(db)
        .name("Milano Pizza")
        .build()
        .await?;

    let repo = RestaurantRepository::new(db);
    let found = repo.search("pizza").await?;

    assert_eq!(found.len(), 2);
    assert_eq!(found[0].name, "Milano Pizza");
    assert_eq!(found[1].name, "Pizza Via");

    Ok(())
}

/// Tests searching when nothing matches.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_when_no_match() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_visit_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::restaurant::create_restaurant(db).await?;

    let repo = RestaurantRepository::new(db);
    let found = repo.search("zzzzzz").await?;

    assert!(found.is_empty());

    Ok(())
}
