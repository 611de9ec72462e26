//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a visit with all dependencies.
///
/// This is a convenience method that creates:
/// 1. User (as visit owner)
/// 2. Restaurant
/// 3. Visit
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, restaurant, visit))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_visit_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::restaurant::Model,
        entity::visit::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let restaurant = crate::factory::restaurant::create_restaurant(db).await?;
    let visit = crate::factory::visit::create_visit(db, user.id, restaurant.id).await?;

    Ok((user, restaurant, visit))
}

/// Creates an order with all dependencies.
///
/// Builds the full chain: user, restaurant, dish, visit, then an order tying the
/// dish to the visit. Useful when a test only cares about order rows existing.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, restaurant, dish, visit, order))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_order_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::restaurant::Model,
        entity::dish::Model,
        entity::visit::Model,
        entity::order::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let restaurant = crate::factory::restaurant::create_restaurant(db).await?;
    let dish = crate::factory::dish::create_dish(db, restaurant.id).await?;
    let visit = crate::factory::visit::create_visit(db, user.id, restaurant.id).await?;
    let order = crate::factory::order::create_order(db, visit.id, dish.id).await?;

    Ok((user, restaurant, dish, visit, order))
}
